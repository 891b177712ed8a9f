//! Exporting the surface as a binary PPM (`P6`) stream.

use std::io::{self, Write};

use fbtest_format::{normalize_channel, FormatError, Result};

use crate::Surface;

/// Decodes every visible pixel into 8-bit RGB and serializes the result as
/// a binary PPM: the 3-line ASCII header, then R,G,B bytes in row-major
/// order.
pub fn grab(surface: &Surface<'_>) -> Result<Vec<u8>> {
    let format = surface.format();
    if format.indexed {
        return Err(FormatError::Unimplemented("grabbing an indexed display"));
    }

    let width = format.width;
    let height = format.height;
    let mut out = Vec::with_capacity(32 + (width * height * 3) as usize);
    out.extend_from_slice(format!("P6\n{width} {height}\n255\n").as_bytes());

    for y in 0..height {
        for x in 0..width {
            let raw = surface.read_raw(x, y)?;
            out.push(normalize_channel(raw, &format.red)?);
            out.push(normalize_channel(raw, &format.green)?);
            out.push(normalize_channel(raw, &format.blue)?);
        }
    }
    Ok(out)
}

/// Writes the whole buffer or fails.
///
/// Short writes retry with the remainder; a zero-length write is an error
/// rather than a spin, since a truncated image is worse than no image.
pub fn write_full<W: Write>(writer: &mut W, mut buf: &[u8]) -> io::Result<()> {
    while !buf.is_empty() {
        match writer.write(buf) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "destination accepted zero bytes",
                ))
            }
            Ok(n) => buf = &buf[n..],
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    writer.flush()
}
