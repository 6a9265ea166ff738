use crate::core::data::normalized_position::NormalizedPosition;
use crate::core::data::point::Point;

/// An accepted marker move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerMove {
    pub normalized: NormalizedPosition,
    pub position: Point,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkerEvent {
    Moved(MarkerMove),
    Rejected(String),
}
