pub mod file;
pub mod hud;
#[cfg(feature = "gui")]
pub mod pixels;
