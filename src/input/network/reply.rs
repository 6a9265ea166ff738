use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::controllers::marker::ports::MarkerSink;
use crate::core::data::normalized_position::NormalizedPosition;
use crate::input::network::payload::{PayloadError, parse_payload_bytes};

/// Outcome of one listener message, shared by the HTTP and raw TCP variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Updated(NormalizedPosition),
    Failed(String),
}

impl Reply {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Updated(position) => format!("Position updated {}, {}", position.x, position.y),
            Self::Failed(message) => format!("Error: {message}"),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// Records a failure with the sink and builds the error reply.
    pub fn failed(sink: &dyn MarkerSink, message: impl Into<String>) -> Self {
        let message = message.into();
        sink.reject(&message);
        Self::Failed(message)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = if self.is_success() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };

        (status, self.text()).into_response()
    }
}

/// Parses one raw message and moves the marker when it is valid.
pub fn process_payload(sink: &dyn MarkerSink, raw: &[u8]) -> Reply {
    process_position(sink, parse_payload_bytes(raw))
}

/// Moves the marker to an already parsed position, or reports the parse error.
pub fn process_position(
    sink: &dyn MarkerSink,
    parsed: Result<NormalizedPosition, PayloadError>,
) -> Reply {
    let position = match parsed {
        Ok(position) => position,
        Err(err) => return Reply::failed(sink, err.to_string()),
    };

    match sink.move_to(position) {
        Ok(_) => Reply::Updated(position),
        Err(err) => Reply::Failed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::marker::{MarkerError, MarkerMove};
    use crate::core::data::bounds_policy::OutOfBounds;
    use crate::core::data::point::Point;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        moves: Mutex<Vec<NormalizedPosition>>,
        rejections: Mutex<Vec<String>>,
        refuse_moves: bool,
    }

    impl MarkerSink for RecordingSink {
        fn move_to(&self, position: NormalizedPosition) -> Result<MarkerMove, MarkerError> {
            if self.refuse_moves {
                return Err(MarkerError::OutOfBounds(OutOfBounds {
                    x: position.x,
                    y: position.y,
                }));
            }

            self.moves.lock().unwrap().push(position);
            Ok(MarkerMove {
                normalized: position,
                position: Point::default(),
                generation: 1,
            })
        }

        fn reject(&self, message: &str) {
            self.rejections.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_confirmation_text_echoes_normalized_values() {
        let reply = Reply::Updated(NormalizedPosition::new(0.5, 0.25));

        assert_eq!(reply.text(), "Position updated 0.5, 0.25");
    }

    #[test]
    fn test_confirmation_text_for_whole_numbers() {
        let reply = Reply::Updated(NormalizedPosition::new(1.0, 0.0));

        assert_eq!(reply.text(), "Position updated 1, 0");
    }

    #[test]
    fn test_error_text_has_prefix() {
        assert_eq!(Reply::Failed("empty payload".into()).text(), "Error: empty payload");
    }

    #[test]
    fn test_process_valid_payload_moves_marker() {
        let sink = RecordingSink::default();

        let reply = process_payload(&sink, b"x=0.5&y=0.5");

        assert_eq!(reply, Reply::Updated(NormalizedPosition::new(0.5, 0.5)));
        assert_eq!(*sink.moves.lock().unwrap(), vec![NormalizedPosition::new(0.5, 0.5)]);
    }

    #[test]
    fn test_process_invalid_payload_rejects_without_moving() {
        let sink = RecordingSink::default();

        let reply = process_payload(&sink, b"x=abc&y=0.5");

        assert!(!reply.is_success());
        assert!(sink.moves.lock().unwrap().is_empty());
        assert_eq!(sink.rejections.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_process_refused_move_is_failure() {
        let sink = RecordingSink {
            refuse_moves: true,
            ..RecordingSink::default()
        };

        let reply = process_payload(&sink, b"x=2&y=0.5");

        assert_eq!(
            reply.text(),
            "Error: position (2, 0.5) is outside the normalized range [0, 1]"
        );
    }
}
