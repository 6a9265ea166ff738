//! Network input: receives normalized coordinates and forwards them to a
//! [`MarkerSink`](crate::controllers::marker::MarkerSink).
//!
//! Two wire variants exist: plain HTTP (`GET /?x=..&y=..`) and raw TCP
//! (`x=..&y=..`, one message per connection). Both share payload parsing
//! and reply text.

pub mod errors;
pub mod http;
pub mod payload;
pub mod reply;
mod runtime;
pub mod tcp;

pub use errors::ListenerError;
pub use payload::{PayloadError, parse_pairs, parse_payload};
pub use reply::{Reply, process_payload, process_position};
pub use runtime::{ListenerHandle, ListenerProtocol, ListenerSettings};
