//! Navigation and quality state, advanced once per frame.
//!
//! There is no state machine here: held inputs become continuous updates
//! scaled by the frame's elapsed time. Zoom rescales the viewport extent and
//! the pan speed together, re-anchoring the position so the visible centre
//! stays put and perceived pan speed stays constant relative to the view.

use crate::core::data::viewport::{Viewport, ViewportError};

pub const MIN_ITERS: f32 = 2.0;
pub const MAX_ITERS: f32 = 2000.0;

/// Viewport shrink factor per zoom-in application.
const ZOOM_STEP: f64 = 0.9;
/// Iteration-limit change per second of held key.
const ITERS_PER_SECOND: f32 = 50.0;

/// Named input actions held during one frame.
///
/// The mapping from raw device events to these fields lives entirely outside
/// the core (see the gui module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub pan_up: bool,
    pub pan_down: bool,
    pub pan_left: bool,
    pub pan_right: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub iters_up: bool,
    pub iters_down: bool,
    pub quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    /// Plane coordinate of the viewport's top-left anchor.
    pub pos_x: f64,
    pub pos_y: f64,
    /// Viewport extent in plane units; always positive.
    pub width: f64,
    pub height: f64,
    /// Pan speed in plane units per second.
    pub speed_x: f64,
    pub speed_y: f64,
    /// Escape-time depth cap; clamped to `[MIN_ITERS, MAX_ITERS]`.
    pub iteration_limit: f32,
    pub running: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            pos_x: -2.0,
            pos_y: 1.0,
            width: 3.0,
            height: 2.0,
            speed_x: 1.0,
            speed_y: 1.0,
            iteration_limit: 100.0,
            running: true,
        }
    }
}

impl NavigationState {
    /// Applies one frame's worth of input-driven deltas.
    pub fn advance(&mut self, input: &InputSnapshot, dt: f64) {
        if input.pan_up {
            self.pos_y += self.speed_y * dt;
        }
        if input.pan_down {
            self.pos_y -= self.speed_y * dt;
        }
        if input.pan_left {
            self.pos_x -= self.speed_x * dt;
        }
        if input.pan_right {
            self.pos_x += self.speed_x * dt;
        }

        if input.zoom_in {
            self.zoom_in();
        }
        if input.zoom_out {
            self.zoom_out();
        }

        if input.iters_up {
            self.iteration_limit += ITERS_PER_SECOND * dt as f32;
        }
        if input.iters_down {
            self.iteration_limit -= ITERS_PER_SECOND * dt as f32;
        }
        self.iteration_limit = self.iteration_limit.clamp(MIN_ITERS, MAX_ITERS);

        if input.quit {
            self.running = false;
        }
    }

    /// Shrinks the view by 10%, keeping the centre fixed and slowing panning
    /// to match the smaller visible extent.
    pub fn zoom_in(&mut self) {
        self.pos_x += self.width * 0.05;
        self.pos_y -= self.height * 0.05;
        self.width *= ZOOM_STEP;
        self.height *= ZOOM_STEP;
        self.speed_x *= ZOOM_STEP;
        self.speed_y *= ZOOM_STEP;
    }

    /// Exact algebraic inverse of [`zoom_in`](Self::zoom_in).
    pub fn zoom_out(&mut self) {
        self.pos_x -= self.width * (0.05 / ZOOM_STEP);
        self.pos_y += self.height * (0.05 / ZOOM_STEP);
        self.width /= ZOOM_STEP;
        self.height /= ZOOM_STEP;
        self.speed_x /= ZOOM_STEP;
        self.speed_y /= ZOOM_STEP;
    }

    /// Derives this frame's viewport; `y` descends with screen rows.
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(
            self.pos_x,
            self.pos_y,
            self.pos_x + self.width,
            self.pos_y - self.height,
        )
    }

    /// Iteration limit clamped and truncated for the kernel.
    #[must_use]
    pub fn clamped_iteration_limit(&self) -> u32 {
        self.iteration_limit.clamp(MIN_ITERS, MAX_ITERS) as u32
    }
}
