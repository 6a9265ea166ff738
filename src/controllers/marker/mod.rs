//! Marker controller: turns normalized positions into screen pixels.
//!
//! The network listener talks to the controller through [`MarkerSink`]; the
//! controller records the result in the shared marker state and forwards an
//! event to the presentation layer through [`MarkerPresenterPort`].

mod controller;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::MarkerController;
pub use errors::MarkerError;
pub use events::{MarkerEvent, MarkerMove};
pub use ports::{MarkerPresenterPort, MarkerSink};
