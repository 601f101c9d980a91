/// Escape-time iteration for a single point, `z_0 = c`.
///
/// Returns the first `n < limit` at which `|z_n|^2 > 4`, or `limit` when the
/// orbit never escapes. The recurrence runs in `f32` even though viewport
/// coordinates are `f64`; the precision loss bounds usable zoom depth.
///
/// The expressions here must stay in lockstep with [`super::LaneBatch`]: both
/// paths evaluate `x^2`, `y^2`, the `> 4.0` escape test, `x^2 - y^2 + cx` and
/// `2xy + cy` in the same order, so a pixel gets the same count whichever
/// path it lands on.
#[must_use]
pub fn escape_time(cx: f32, cy: f32, limit: u32) -> u32 {
    let mut x = cx;
    let mut y = cy;
    let mut n = 0;

    while n < limit {
        let x2 = x * x;
        let y2 = y * y;
        if x2 + y2 > 4.0 {
            return n;
        }
        let next_x = x2 - y2 + cx;
        y = 2.0 * x * y + cy;
        x = next_x;
        n += 1;
    }

    limit
}
