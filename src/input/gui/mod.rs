//! Windowed viewer built on winit and pixels.

mod app;
mod keymap;
mod present;

pub use app::run_viewer;
