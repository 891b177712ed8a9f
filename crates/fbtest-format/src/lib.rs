#![forbid(unsafe_code)]

//! Runtime-described pixel formats for raw framebuffer displays.
//!
//! A framebuffer driver reports its pixel layout as per-channel bitfields
//! (offset + length inside an 8/16/24/32-bit container) rather than as one
//! of a fixed set of named formats. This crate models that description and
//! provides the pure bit-manipulation on top of it: packing RGB triples
//! into raw pixels, unpacking them for export, and computing the color
//! lookup table content for indexed displays. No device I/O lives here.

mod codec;
mod error;
mod format;
pub mod palette;

pub use codec::{
    encode_index, encode_level, encode_ramp, normalize_channel, read_raw, write_raw,
};
pub use error::{FormatError, Result};
pub use format::{ChannelField, ScreenFormat};
pub use palette::PaletteRegion;
