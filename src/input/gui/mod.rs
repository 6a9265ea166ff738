//! Overlay window: a transparent, borderless, always-on-top surface that
//! covers the primary monitor and ignores pointer input.
//!
//! winit owns the window and event loop, pixels draws the composed frame
//! and egui draws the optional status panel on top.

pub mod app;
pub mod commands;
pub mod errors;
pub mod window;
