pub mod blend;
pub mod compose_frame;
