mod controller;
pub mod errors;
pub mod ports;

pub use controller::{SnapshotController, SnapshotRequest};
pub use errors::SnapshotError;
