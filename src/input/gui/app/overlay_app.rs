use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::input::gui::app::events::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub struct OverlayApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    hud_enabled: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> OverlayApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        hud_enabled: bool,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            hud_enabled,
            egui_ctx,
            egui_state,
        }
    }

    /// Pulls marker updates into the frame. Returns whether to redraw.
    pub fn sync(&mut self) -> bool {
        self.presenter.sync()
    }

    pub fn render(&mut self, egui_output: Option<egui::FullOutput>) -> Result<(), pixels::Error> {
        match egui_output {
            Some(output) => self.presenter.render(Some((output, &self.egui_ctx))),
            None => self.presenter.render(None),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    /// Runs the status panel when it is enabled.
    pub fn update_ui(&mut self, window: &Window) -> Option<egui::FullOutput> {
        if !self.hud_enabled {
            return None;
        }

        let raw_input = self.egui_state.take_egui_input(window);
        let lines = self.presenter.hud().lines();
        let (width, height) = (self.width, self.height);

        Some(self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Gaze Overlay")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .collapsible(false)
                .show(ctx, |ui| {
                    for line in &lines {
                        ui.label(line.as_str());
                    }
                    ui.separator();
                    ui.label(format!("Surface: {width}x{height}"));
                });
        }))
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        if !self.hud_enabled {
            return false;
        }

        self.egui_state.on_window_event(window, event).repaint
    }
}
