pub mod config;
pub mod data;
pub mod kernel;
pub mod navigation;
pub mod pacing;
