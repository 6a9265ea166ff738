/// Custom user events for the overlay event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A marker event is waiting in the presenter adapter.
    ///
    /// The loop still has to ask the presenter whether anything changed
    /// before requesting a redraw.
    Wake,
}
