use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors raised while modeling or driving a device-reported pixel format.
///
/// Every variant describes a configuration the tool cannot model at all;
/// callers treat them as fatal for the enclosing command.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unsupported depth: {0} bits per pixel (expected 8, 16, 24 or 32)")]
    UnsupportedDepth(u32),

    #[error("palette mode not supported with {0} bits per pixel")]
    PaletteDepth(u32),

    #[error("most-significant-bit-first channel fields are not supported")]
    MsbRight,

    #[error("channel field is {length} bits wide (expected 1..=8)")]
    ChannelTooWide { length: u32 },

    #[error("channel field at bit {offset} with length {length} does not fit in {depth} bits per pixel")]
    ChannelOutOfRange { offset: u32, length: u32, depth: u32 },

    #[error("channel fields overlap")]
    ChannelOverlap,

    #[error("surface buffer is {len} bytes, need {need}")]
    BufferTooSmall { len: usize, need: usize },

    #[error("pixel ({x}, {y}) is outside the visible {width}x{height} area")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("{0} is not implemented for this pixel format")]
    Unimplemented(&'static str),
}
