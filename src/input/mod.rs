//! Input adapters for the viewer.
//!
//! Everything here is glue between the windowing collaborator and the core:
//! raw device events become named actions, resize notifications become
//! framebuffer reallocations.

#[cfg(feature = "gui")]
pub mod gui;
