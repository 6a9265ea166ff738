use winit::{event_loop::EventLoopProxy, window::Window};

use crate::input::gui::app::{
    events::GuiEvent,
    ports::presenter::{GuiPresenterPort, OverlayScene},
};
use crate::input::gui::errors::OverlayError;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        scene: OverlayScene,
    ) -> Result<T, OverlayError>;
}
