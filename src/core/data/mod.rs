pub mod bounds_policy;
pub mod frame_buffer;
pub mod normalized_position;
pub mod point;
pub mod screen_size;
