pub mod events;
pub mod overlay_app;
pub mod ports;
