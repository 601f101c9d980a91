//! Interactive real-time Mandelbrot viewer.
//!
//! The core is a batched escape-time kernel driven by a viewport/navigation
//! model and a fixed-budget frame pacer; the optional `gui` feature adds the
//! winit/pixels glue that turns it into a windowed application.

mod core;
#[cfg(feature = "gui")]
mod input;

pub use crate::core::config::ViewerConfig;
pub use crate::core::data::colour::{Palette, PaletteMode, pack_bgrx};
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::kernel::{LANE_WIDTH, LaneBatch, escape_time, render};
pub use crate::core::navigation::{InputSnapshot, MAX_ITERS, MIN_ITERS, NavigationState};
pub use crate::core::pacing::FramePacer;

#[cfg(feature = "gui")]
pub use input::gui::run_viewer;
