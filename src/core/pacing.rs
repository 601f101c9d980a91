//! Fixed-budget frame pacer.

use std::thread;
use std::time::{Duration, Instant};

/// Throttles the main loop to a target rate and reports per-frame elapsed
/// time in seconds.
///
/// This is deliberately not a drift-compensating scheduler: each call only
/// compares against the immediately preceding one. `last_time` is stamped at
/// call entry even on the sleeping branch, so a throttled frame does not push
/// the next frame's deadline back by its own sleep.
#[derive(Debug)]
pub struct FramePacer {
    frame_delta: f32,
    last_time: Instant,
}

impl FramePacer {
    /// A `target_fps` of 0 disables throttling entirely.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let frame_delta = if target_fps == 0 {
            0.0
        } else {
            1.0 / target_fps as f32
        };

        Self {
            frame_delta,
            last_time: Instant::now(),
        }
    }

    /// Returns the frame's delta time, sleeping off any unspent budget.
    ///
    /// When the elapsed time since the previous call is under the frame
    /// budget, the thread blocks for the remainder and the budget itself is
    /// reported; otherwise the true elapsed time is reported without
    /// blocking.
    pub fn next_frame(&mut self) -> f32 {
        let entered = Instant::now();
        let elapsed = entered.duration_since(self.last_time).as_secs_f32();
        self.last_time = entered;

        if elapsed < self.frame_delta {
            thread::sleep(Duration::from_secs_f32(self.frame_delta - elapsed));
            self.frame_delta
        } else {
            elapsed
        }
    }
}
