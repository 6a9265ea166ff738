pub mod presenter;
pub mod sink;

pub use presenter::MarkerPresenterPort;
pub use sink::MarkerSink;
