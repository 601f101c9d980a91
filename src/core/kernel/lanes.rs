//! Lane-parallel escape-time evaluator.
//!
//! Eight independent points advance in lockstep through the quadratic
//! recurrence. Lanes are plain fixed-size arrays with branch-free per-lane
//! masking, which the compiler can vectorise; the algorithmic contract (one
//! masked step at a time, early exit once every lane has escaped) does not
//! depend on any particular instruction set.

pub const LANE_WIDTH: usize = 8;

const ALL_ONES: u32 = u32::MAX;

/// One batch of `LANE_WIDTH` contiguous pixels being iterated together.
///
/// Each lane carries its own `(x, y)` orbit state and seed point. When a
/// lane escapes, its iteration count is frozen by OR-ing under a bitmask and
/// its orbit state is zeroed through the same mask, so the lane keeps
/// participating in whole-batch arithmetic without contributing further.
#[derive(Debug, Clone)]
pub struct LaneBatch {
    x: [f32; LANE_WIDTH],
    y: [f32; LANE_WIDTH],
    cx: [f32; LANE_WIDTH],
    cy: [f32; LANE_WIDTH],
    // all-ones while the lane is iterating, zero once escaped
    live: [u32; LANE_WIDTH],
    escaped_at: [u32; LANE_WIDTH],
}

impl LaneBatch {
    #[must_use]
    pub fn seed(points: [(f32, f32); LANE_WIDTH]) -> Self {
        let cx = points.map(|(x, _)| x);
        let cy = points.map(|(_, y)| y);

        Self {
            x: cx,
            y: cy,
            cx,
            cy,
            live: [ALL_ONES; LANE_WIDTH],
            escaped_at: [0; LANE_WIDTH],
        }
    }

    /// Advances every live lane by one recurrence step.
    ///
    /// `n` is the iteration index being tested: a lane whose `|z_n|^2`
    /// exceeds 4 records `n` and retires. Returns true while any lane is
    /// still live; a caller may stop early on false, and must get the same
    /// counts as one that keeps calling to the limit.
    pub fn advance(&mut self, n: u32) -> bool {
        let mut any_live = 0;

        for lane in 0..LANE_WIDTH {
            let x2 = self.x[lane] * self.x[lane];
            let y2 = self.y[lane] * self.y[lane];

            let outside = ((x2 + y2 > 4.0) as u32).wrapping_neg();
            let escaping = outside & self.live[lane];
            self.escaped_at[lane] |= n & escaping;
            self.live[lane] &= !escaping;

            let next_x = x2 - y2 + self.cx[lane];
            let next_y = 2.0 * self.x[lane] * self.y[lane] + self.cy[lane];
            self.x[lane] = f32::from_bits(next_x.to_bits() & self.live[lane]);
            self.y[lane] = f32::from_bits(next_y.to_bits() & self.live[lane]);

            any_live |= self.live[lane];
        }

        any_live != 0
    }

    /// Final per-lane counts; lanes that never escaped report `limit`.
    #[must_use]
    pub fn resolve(&self, limit: u32) -> [u32; LANE_WIDTH] {
        std::array::from_fn(|lane| {
            if self.live[lane] != 0 {
                limit
            } else {
                self.escaped_at[lane]
            }
        })
    }

    /// Runs a seeded batch to completion against `limit`.
    #[must_use]
    pub fn run(points: [(f32, f32); LANE_WIDTH], limit: u32) -> [u32; LANE_WIDTH] {
        let mut batch = Self::seed(points);
        for n in 0..limit {
            if !batch.advance(n) {
                break;
            }
        }
        batch.resolve(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::scalar::escape_time;

    fn spread_points() -> [(f32, f32); LANE_WIDTH] {
        [
            (-2.0, 1.0),  // escapes at 0
            (-0.5, 0.0),  // main cardioid, never escapes
            (0.3, 0.5),   // exterior, escapes after a few steps
            (0.0, 0.0),   // origin, never escapes
            (1.0, 1.0),   // escapes quickly
            (-1.0, 0.0),  // period-2 bulb, never escapes
            (0.25, 0.0),  // cardioid cusp, slow interior point
            (2.5, 2.5),   // far exterior
        ]
    }

    #[test]
    fn test_matches_scalar_for_mixed_batch() {
        let points = spread_points();
        let limit = 200;

        let counts = LaneBatch::run(points, limit);

        for (lane, &(cx, cy)) in points.iter().enumerate() {
            assert_eq!(
                counts[lane],
                escape_time(cx, cy, limit),
                "lane {lane} diverged from the scalar path"
            );
        }
    }

    #[test]
    fn test_early_exit_matches_full_depth_loop() {
        let points = spread_points();
        let limit = 300;

        // all-exterior batch so every lane retires well before the limit
        let exterior = points.map(|(x, y)| (x + 2.0, y + 2.0));

        let early = LaneBatch::run(exterior, limit);

        let mut full = LaneBatch::seed(exterior);
        for n in 0..limit {
            full.advance(n); // ignore the early-exit signal
        }

        assert_eq!(early, full.resolve(limit));
    }

    #[test]
    fn test_origin_lane_survives_other_escapes() {
        // Every other lane escapes fast; the origin must still report the
        // limit even though its orbit state is indistinguishable from a
        // retired lane's zeroed state.
        let mut points = [(3.0, 3.0); LANE_WIDTH];
        points[5] = (0.0, 0.0);

        let counts = LaneBatch::run(points, 100);

        assert_eq!(counts[5], 100);
        for lane in (0..LANE_WIDTH).filter(|&l| l != 5) {
            assert_eq!(counts[lane], 0);
        }
    }

    #[test]
    fn test_escaped_lane_state_is_zeroed() {
        let mut batch = LaneBatch::seed([(3.0, 3.0); LANE_WIDTH]);

        let any_live = batch.advance(0);

        assert!(!any_live);
        assert_eq!(batch.x, [0.0; LANE_WIDTH]);
        assert_eq!(batch.y, [0.0; LANE_WIDTH]);
    }

    #[test]
    fn test_counts_bounded_by_limit() {
        for limit in [2, 17, 500] {
            let counts = LaneBatch::run(spread_points(), limit);
            assert!(counts.iter().all(|&c| c <= limit));
        }
    }

    #[test]
    fn test_interior_batch_runs_to_limit_without_nan() {
        let interior = [(-0.5, 0.0); LANE_WIDTH];
        let mut batch = LaneBatch::seed(interior);

        for n in 0..2000 {
            assert!(batch.advance(n));
            assert!(batch.x.iter().all(|v| v.is_finite()));
            assert!(batch.y.iter().all(|v| v.is_finite()));
        }

        assert_eq!(batch.resolve(2000), [2000; LANE_WIDTH]);
    }
}
