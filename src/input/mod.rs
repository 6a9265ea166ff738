//! Input adapters for the overlay.
//!
//! The network listener turns coordinate messages into marker moves; the
//! GUI side owns the window and its event loop.

#[cfg(feature = "gui")]
pub mod gui;
pub mod network;
