//! Escape-time render kernel.
//!
//! Walks the pixel buffer row-major: full groups of [`LANE_WIDTH`] pixels go
//! through the lane-parallel evaluator, the trailing remainder of each row
//! through the scalar path. Both paths derive each pixel's plane point from
//! the same [`Viewport::point_at`] expression and apply the same `f32`
//! recurrence, so their iteration counts are identical by construction.

mod lanes;
mod scalar;

pub use lanes::{LANE_WIDTH, LaneBatch};
pub use scalar::escape_time;

use crate::core::data::colour::Palette;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

/// Repaints the whole buffer for the given viewport.
///
/// The iteration limit and colour mode travel inside `palette`, which the
/// caller refreshes from the navigation state before each frame. Performs no
/// I/O and cannot fail; degenerate buffers and viewports are unrepresentable
/// (rejected by their constructors).
pub fn render(buffer: &mut PixelBuffer, viewport: &Viewport, palette: &Palette) {
    let width = buffer.width();
    let height = buffer.height();
    let limit = palette.limit();

    for row in 0..height {
        let mut col = 0;

        while col + LANE_WIDTH as u32 <= width {
            let points = std::array::from_fn(|lane| {
                let (x, y) = viewport.point_at(col + lane as u32, row, width, height);
                (x as f32, y as f32)
            });

            let counts = LaneBatch::run(points, limit);
            for (lane, &count) in counts.iter().enumerate() {
                buffer.put_pixel(col + lane as u32, row, palette.colour_for(count));
            }

            col += LANE_WIDTH as u32;
        }

        while col < width {
            let (x, y) = viewport.point_at(col, row, width, height);
            let count = escape_time(x as f32, y as f32, limit);
            buffer.put_pixel(col, row, palette.colour_for(count));
            col += 1;
        }
    }
}
