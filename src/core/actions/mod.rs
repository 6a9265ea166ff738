pub mod compose_frame;
