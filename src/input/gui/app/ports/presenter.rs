use std::sync::Arc;

use egui::Context as EguiContext;

use crate::controllers::marker::ports::MarkerPresenterPort;
use crate::core::images::slot::ImageSlots;
use crate::core::marker::state::MarkerState;
use crate::presenters::hud::state::HudState;

/// Everything a presenter needs to draw the overlay.
pub struct OverlayScene {
    pub slots: ImageSlots,
    pub marker_state: Arc<MarkerState>,
    pub hud: HudState,
}

pub trait GuiPresenterPort {
    /// Adapter handed to the marker controller on the listener thread.
    fn share_adapter(&self) -> Arc<dyn MarkerPresenterPort>;

    /// Drains pending marker events and recomposes the frame when the
    /// marker moved. Returns whether a redraw is needed.
    fn sync(&mut self) -> bool;

    fn hud(&self) -> &HudState;
    fn hud_mut(&mut self) -> &mut HudState;

    fn render(&mut self, egui: Option<(egui::FullOutput, &EguiContext)>) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}
