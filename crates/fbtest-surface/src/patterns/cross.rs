use fbtest_format::{FormatError, Result};

use crate::Surface;

const SEED_TOP: u32 = 0x00FF_00FF;
const SEED_BOTTOM: u32 = 0xFF00_FF00;

/// Two mirrored scan lines bounce between the top and bottom edges while
/// sweeping left to right. Pixels alternate between the line's seed color
/// and its 1-bit rotation with x parity; every bounce rotates the seed of
/// the line that hit the edge by a whole byte. True-color containers only.
pub fn cross(surface: &mut Surface<'_>) -> Result<()> {
    let format = surface.format().clone();
    if format.indexed || format.bits_per_pixel == 8 {
        return Err(FormatError::Unimplemented(
            "the bouncing scan-line pattern on an 8 bpp display",
        ));
    }

    let height = format.height;
    let mut top_seed = SEED_TOP;
    let mut bottom_seed = SEED_BOTTOM;
    let mut y: u32 = 0;
    let mut down = true;

    for x in 0..format.width {
        let top = if x % 2 == 0 {
            top_seed
        } else {
            top_seed.rotate_left(1)
        };
        let bottom = if x % 2 == 0 {
            bottom_seed
        } else {
            bottom_seed.rotate_left(1)
        };
        surface.set_raw(x, y, top)?;
        surface.set_raw(x, height - 1 - y, bottom)?;

        if down {
            if y + 1 >= height {
                down = false;
                top_seed = top_seed.rotate_left(8);
            } else {
                y += 1;
            }
        } else if y == 0 {
            down = true;
            bottom_seed = bottom_seed.rotate_left(8);
        } else {
            y -= 1;
        }
    }
    Ok(())
}
