use fbtest_format::{PaletteRegion, ScreenFormat};

use crate::{FramebufferDevice, Result};

/// An in-memory display: a zeroed surface of the right size plus a record
/// of every palette region installed on it. The test double for the whole
/// stack, and a convenient scratch target anywhere real hardware is not
/// wanted.
#[derive(Debug)]
pub struct MemFramebuffer {
    format: ScreenFormat,
    buf: Vec<u8>,
    installed: Vec<PaletteRegion>,
}

impl MemFramebuffer {
    pub fn new(format: ScreenFormat) -> Result<Self> {
        format.validate()?;
        let len = format.surface_len();
        Ok(Self {
            format,
            buf: vec![0; len],
            installed: Vec::new(),
        })
    }

    /// Read-only view of the whole surface.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Palette regions installed so far, in call order.
    pub fn installed_palettes(&self) -> &[PaletteRegion] {
        &self.installed
    }
}

impl FramebufferDevice for MemFramebuffer {
    fn format(&self) -> &ScreenFormat {
        &self.format
    }

    fn surface_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    fn install_palette(&mut self, region: &PaletteRegion) -> Result<()> {
        self.installed.push(region.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbtest_format::{palette, ChannelField};

    fn indexed_format() -> ScreenFormat {
        ScreenFormat {
            width: 16,
            height: 8,
            virtual_width: 16,
            virtual_height: 8,
            bits_per_pixel: 8,
            red: ChannelField::new(0, 5),
            green: ChannelField::new(0, 6),
            blue: ChannelField::new(0, 5),
            indexed: true,
        }
    }

    #[test]
    fn surface_is_zeroed_and_sized_by_the_format() {
        let mut fb = MemFramebuffer::new(indexed_format()).unwrap();
        assert_eq!(fb.bytes().len(), 16 * 8);
        assert!(fb.bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.surface_mut().len(), 16 * 8);
    }

    #[test]
    fn installs_are_recorded_in_order() {
        let format = indexed_format();
        let mut fb = MemFramebuffer::new(format.clone()).unwrap();
        fb.install_palette(&palette::color_ramp(&format)).unwrap();
        fb.install_palette(&palette::gray_ramp(&format)).unwrap();
        fb.install_palette(&palette::markers(None)).unwrap();
        let starts: Vec<u32> = fb.installed_palettes().iter().map(|r| r.start).collect();
        assert_eq!(starts, [100, 200, 210]);
    }

    #[test]
    fn invalid_format_is_rejected() {
        let mut format = indexed_format();
        format.bits_per_pixel = 12;
        assert!(MemFramebuffer::new(format).is_err());
    }
}
