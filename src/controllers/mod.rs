pub mod marker;
pub mod snapshot;
