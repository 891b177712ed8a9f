use fbtest_format::{FormatError, Result, ScreenFormat};

use crate::Surface;

/// The diagonal shade's color walk: one channel at a time climbs from 1 to
/// its maximum representable level, then hands off to the next in
/// red→green→blue order; after blue tops out the state returns to black
/// and the cycle restarts.
///
/// Exactly one channel is nonzero at any time (or none, in the black
/// state), so the walk visits `(2^R-1) + (2^G-1) + (2^B-1)` distinct
/// nonzero states per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelCycle {
    r: u8,
    g: u8,
    b: u8,
}

impl ChannelCycle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Advances one step. Red is the active channel unless it is zero
    /// while another channel is lit; the active channel increments, or
    /// wraps and lights the next one.
    pub fn step(&mut self, format: &ScreenFormat) {
        if self.r == 0 && (self.g != 0 || self.b != 0) {
            if self.g != 0 {
                if u32::from(self.g) == format.green.max_level() {
                    self.g = 0;
                    self.b = 1;
                } else {
                    self.g += 1;
                }
            } else if u32::from(self.b) == format.blue.max_level() {
                // Blue topping out closes the cycle: back to black, and
                // red restarts on the next step.
                self.b = 0;
            } else {
                self.b += 1;
            }
        } else if u32::from(self.r) == format.red.max_level() {
            self.r = 0;
            self.g = 1;
        } else {
            self.r += 1;
        }
    }
}

/// Diagonal shading: every column climbs the channel cycle row by row, and
/// each column's starting color is one step further along than its left
/// neighbour's, shifting the ramp diagonally. True-color containers only.
pub fn dshade(surface: &mut Surface<'_>) -> Result<()> {
    let format = surface.format().clone();
    match format.bits_per_pixel {
        16 | 24 | 32 => {}
        8 => {
            return Err(FormatError::Unimplemented(
                "diagonal shade on an 8 bpp display",
            ))
        }
        other => return Err(FormatError::UnsupportedDepth(other)),
    }

    let mut column_start = ChannelCycle::new();
    for x in 0..format.width {
        let mut cur = column_start;
        for y in 0..format.height {
            let (r, g, b) = cur.rgb();
            surface.set_level(x, y, r, g, b)?;
            cur.step(&format);
        }
        column_start.step(&format);
    }
    Ok(())
}
