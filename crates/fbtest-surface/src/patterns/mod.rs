//! Test-pattern rasterizers.
//!
//! Every generator walks the surface through the pixel codec and keeps no
//! state beyond its own loop variables; a format it cannot drive is a hard
//! error, never a silently different picture.

mod bars;
mod cross;
mod dshade;

pub use bars::{bars, cross_cell, BarsOptions};
pub use cross::cross;
pub use dshade::{dshade, ChannelCycle};
