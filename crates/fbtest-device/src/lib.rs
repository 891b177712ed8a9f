//! The display-device capability: who owns the pixels.
//!
//! Everything above this crate draws into a plain byte region through a
//! [`ScreenFormat`]; this crate supplies that region. The production
//! implementation maps a Linux framebuffer device; [`MemFramebuffer`] backs
//! every test (and any other caller) without hardware.

mod error;
#[cfg(target_os = "linux")]
mod linux;
mod mem;
#[cfg(target_os = "linux")]
mod sys;

pub use error::{DeviceError, Result};
#[cfg(target_os = "linux")]
pub use linux::LinuxFramebuffer;
pub use mem::MemFramebuffer;

use fbtest_format::{PaletteRegion, ScreenFormat};

/// A display whose pixel memory the tool can draw into.
///
/// The handle and the mapping live for one command invocation; there is
/// exactly one writer and no synchronization.
pub trait FramebufferDevice {
    /// Geometry and pixel layout, read once when the device was opened.
    fn format(&self) -> &ScreenFormat;

    /// The pixel region: `stride_bytes() * virtual_height` bytes.
    fn surface_mut(&mut self) -> &mut [u8];

    /// Installs one color-map region. Callers treat failures as
    /// non-fatal: the install is fire-and-forget against the hardware.
    fn install_palette(&mut self, region: &PaletteRegion) -> Result<()>;
}
