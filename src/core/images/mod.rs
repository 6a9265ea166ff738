pub mod colour_mode;
pub mod errors;
pub mod loader;
pub mod slot;
