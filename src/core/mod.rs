pub mod actions;
pub mod data;
pub mod images;
pub mod marker;
