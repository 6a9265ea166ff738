use serde::Deserialize;

use crate::core::data::normalized_position::NormalizedPosition;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
#[error("position ({x}, {y}) is outside the normalized range [0, 1]")]
pub struct OutOfBounds {
    pub x: f64,
    pub y: f64,
}

/// What to do with normalized coordinates outside `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Clamp each axis into `[0, 1]`.
    #[default]
    Clamp,
    /// Refuse the position and leave the marker where it is.
    Reject,
    /// Scale as given, allowing off-screen placement.
    Allow,
}

impl BoundsPolicy {
    pub fn apply(self, position: NormalizedPosition) -> Result<NormalizedPosition, OutOfBounds> {
        match self {
            Self::Clamp => Ok(NormalizedPosition::new(
                position.x.clamp(0.0, 1.0),
                position.y.clamp(0.0, 1.0),
            )),
            Self::Reject if !position.is_within_unit_square() => Err(OutOfBounds {
                x: position.x,
                y: position.y,
            }),
            Self::Reject | Self::Allow => Ok(position),
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Reject => "reject",
            Self::Allow => "allow",
        }
    }
}
