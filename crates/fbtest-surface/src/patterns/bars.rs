use fbtest_format::{palette, Result};

use crate::Surface;

/// Knobs for the bars test card.
#[derive(Debug, Clone, Copy)]
pub struct BarsOptions {
    /// Half-size of the centered crosshair cell, true-color only.
    pub cross_half_size: u32,
}

impl Default for BarsOptions {
    fn default() -> Self {
        Self {
            cross_half_size: 32,
        }
    }
}

/// Draws the default test card: ramp bars with edge and corner markers,
/// plus the centered crosshair cell on true-color displays.
pub fn bars(surface: &mut Surface<'_>, opts: BarsOptions) -> Result<()> {
    if surface.format().indexed {
        bars_indexed(surface)
    } else {
        bars_rgb(surface, opts)
    }
}

/// Indexed test card: the left half of each row shows the color ramp, the
/// right half the gray ramp, both advancing with the row; L-shaped
/// alternating markers finish the four corners.
fn bars_indexed(surface: &mut Surface<'_>) -> Result<()> {
    let format = surface.format().clone();
    let ramp_len = palette::color_ramp_len(&format) as u32;
    let gray_len = palette::gray_ramp_len(&format) as u32;
    let (width, height) = (format.width, format.height);

    for y in 0..height {
        let left = (palette::COLOR_RAMP_START + y * ramp_len / height) as u8;
        let right = (palette::GRAY_RAMP_START + y * gray_len / height) as u8;
        for x in 0..width {
            let index = if x < width / 2 { left } else { right };
            surface.set_index(x, y, index)?;
        }
    }

    let depth = 8u32.min(width).min(height);
    for i in 0..depth {
        let index = if i % 2 == 1 {
            palette::MARKER_BLACK
        } else {
            palette::MARKER_WHITE
        };
        surface.set_index(i, 0, index)?;
        surface.set_index(0, i, index)?;
        surface.set_index(width - 1 - i, 0, index)?;
        surface.set_index(width - 1, i, index)?;
        surface.set_index(i, height - 1, index)?;
        surface.set_index(0, height - 1 - i, index)?;
        surface.set_index(width - 1 - i, height - 1, index)?;
        surface.set_index(width - 1, height - 1 - i, index)?;
    }
    Ok(())
}

/// True-color test card. Each row picks its color from a four-segment
/// ramp (red, green, blue, end) indexed by `y`; the left half shows the
/// ramp color, the right half a gray staircase that finishes white. The
/// first/last rows and the four rows inside them carry end markers, a row
/// that enters a new ramp segment starts with two mid-gray pixels, and a
/// crosshair cell overlays the center.
fn bars_rgb(surface: &mut Surface<'_>, opts: BarsOptions) -> Result<()> {
    let format = surface.format().clone();
    let (width, height) = (format.width, format.height);
    let r_len = format.red.length;
    let g_len = format.green.length;
    let b_len = format.blue.length;
    let pos = [0, r_len + 1, r_len + g_len + 2, r_len + g_len + b_len + 3];
    let min_len = format.min_channel_length() + 1;
    let center_x = width / 2;
    let center_y = height / 2;
    let half = opts.cross_half_size;

    let mut old_pos: Option<u32> = None;
    for y in 0..height {
        let cur_pos = y * pos[3] / height;
        let ramp_r = if cur_pos < pos[1] { cur_pos + 1 } else { 0 };
        let ramp_g = if (pos[1]..pos[2]).contains(&cur_pos) {
            cur_pos - pos[1] + 1
        } else {
            0
        };
        let ramp_b = if (pos[2]..pos[3]).contains(&cur_pos) {
            cur_pos - pos[2] + 1
        } else {
            0
        };
        let (ramp_r, ramp_g, ramp_b) = (ramp_r as u8, ramp_g as u8, ramp_b as u8);
        let grey = (min_len + 1) * y / height + 1;

        let mut x = 0;
        let mut max_x = width;
        if y == 0 || y + 1 == height {
            for (i, v) in [255u8, 0, 255, 0, 255].into_iter().enumerate() {
                if (i as u32) < width {
                    surface.set_ramp(i as u32, y, v, v, v)?;
                }
            }
            x = 5u32.min(width);
            max_x = width.saturating_sub(5);
        } else if y < 5 || y + 5 >= height {
            let v = end_marker_shade(y, height);
            surface.set_ramp(0, y, v, v, v)?;
            x = 1;
            max_x = width.saturating_sub(1);
        } else if old_pos != Some(cur_pos) && pos.contains(&cur_pos) {
            surface.set_ramp(0, y, 127, 127, 127)?;
            surface.set_ramp(1, y, 127, 127, 127)?;
            x = 2;
        }

        while x < max_x {
            let dx = x as i32 - center_x as i32;
            let dy = y as i32 - center_y as i32;
            if dx.unsigned_abs() < half && dy.unsigned_abs() < half {
                let v = if cross_cell(dx, dy, half as i32) { 255 } else { 0 };
                surface.set_ramp(x, y, v, v, v)?;
            } else if x < center_x {
                surface.set_ramp(x, y, ramp_r, ramp_g, ramp_b)?;
            } else if grey > min_len {
                surface.set_ramp(x, y, 255, 255, 255)?;
            } else {
                surface.set_ramp(
                    x,
                    y,
                    (grey + r_len - min_len) as u8,
                    (grey + g_len - min_len) as u8,
                    (grey + b_len - min_len) as u8,
                )?;
            }
            x += 1;
        }

        if y == 0 || y + 1 == height {
            for (i, v) in [255u8, 0, 255, 0, 255].into_iter().enumerate() {
                let px = max_x + i as u32;
                if px < width {
                    surface.set_ramp(px, y, v, v, v)?;
                }
            }
        } else if y < 5 || y + 5 >= height {
            let v = end_marker_shade(y, height);
            surface.set_ramp(width - 1, y, v, v, v)?;
        }

        if old_pos != Some(cur_pos) {
            let probe_left = if width > 10 { surface.read_raw(10, y)? } else { 0 };
            let probe_right = if center_x + 10 < width {
                surface.read_raw(center_x + 10, y)?
            } else {
                0
            };
            tracing::debug!(
                "bars: y={} ramp=({},{},{}) grey={} segment={}/{} probes=[{:#010x}, {:#010x}]",
                y,
                ramp_r,
                ramp_g,
                ramp_b,
                grey,
                cur_pos,
                pos[3],
                probe_left,
                probe_right,
            );
            old_pos = Some(cur_pos);
        }
    }
    Ok(())
}

/// Shade of the 1-pixel end markers on the four rows inside each border:
/// black/white alternating, phase-mirrored across the vertical center.
fn end_marker_shade(y: u32, height: u32) -> u8 {
    let odd_top = y < height / 2 && y % 2 == 1;
    let odd_bottom = y > height / 2 && (height - y - 1) % 2 == 1;
    if odd_top || odd_bottom {
        0
    } else {
        255
    }
}

/// The crosshair cell predicate for a point relative to the cell center:
/// white on the two diagonals and on the four border lines 5 pixels in
/// from each edge, black elsewhere; the upper half (`dy < 0` in screen
/// coordinates) is polarity-inverted.
pub fn cross_cell(dx: i32, dy: i32, half: i32) -> bool {
    let border = half - 5;
    let on_lines = dx == dy
        || dx == -dy
        || dx == border
        || dx == -border
        || dy == border
        || dy == -border;
    if dy < 0 {
        !on_lines
    } else {
        on_lines
    }
}
