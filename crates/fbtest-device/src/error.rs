use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeviceError>;

/// Errors from the device layer. Open/geometry/map failures end the
/// enclosing command with the underlying OS error text; palette installs
/// are the one case callers log and carry on from.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("cannot open display device {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("display device cannot report its geometry: {0}")]
    Geometry(io::Error),

    #[error("cannot map display memory: {0}")]
    Map(io::Error),

    #[error("cannot install color map: {0}")]
    PaletteInstall(io::Error),

    #[error(transparent)]
    Format(#[from] fbtest_format::FormatError),
}
