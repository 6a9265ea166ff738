use crate::controllers::marker::errors::MarkerError;
use crate::controllers::marker::events::MarkerMove;
use crate::core::data::normalized_position::NormalizedPosition;

/// What the network listener needs from whoever owns the marker.
pub trait MarkerSink: Send + Sync {
    fn move_to(&self, position: NormalizedPosition) -> Result<MarkerMove, MarkerError>;

    /// Reports a message that could not be turned into a position.
    fn reject(&self, message: &str);
}
