use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{error, info, warn};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};

use crate::config::OverlayConfig;
use crate::controllers::marker::MarkerController;
use crate::core::data::screen_size::ScreenSize;
use crate::core::marker::state::MarkerState;
use crate::input::gui::app::{
    events::GuiEvent,
    overlay_app::OverlayApp,
    ports::presenter::{GuiPresenterPort, OverlayScene},
};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::OverlayError;
use crate::input::gui::window::{build_overlay_window, overlay_monitor};
use crate::input::network::ListenerHandle;
use crate::presenters::hud::state::HudState;

pub struct RunOverlayCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunOverlayCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the overlay and blocks until the window closes.
    pub fn execute(&self, config: &OverlayConfig) -> Result<(), OverlayError> {
        let listener_settings = config.listener.settings()?;
        let loader = config.images.loader()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let monitor = overlay_monitor(&event_loop)?;
        let window = build_overlay_window(&event_loop, &monitor, &config.window)?;
        let size = window.inner_size();
        let screen = ScreenSize::new(size.width, size.height)?;

        let slots = loader.load_all();
        if slots.is_empty() {
            warn!(directory = %loader.directory().display(), "no images loaded, overlay will be empty");
        }

        let marker_state = Arc::new(MarkerState::new(screen.centre()));
        let hud = HudState::new(None, slots.skipped().to_vec());

        let mut presenter: P = self.presenter_factory.build(
            window,
            event_loop_proxy,
            OverlayScene {
                slots,
                marker_state: Arc::clone(&marker_state),
                hud,
            },
        )?;

        let controller = Arc::new(MarkerController::new(
            screen,
            config.marker.bounds,
            marker_state,
            presenter.share_adapter(),
        ));

        let mut listener = ListenerHandle::spawn(listener_settings, controller)?;
        presenter.hud_mut().listener = Some(format!(
            "{} {}",
            listener.protocol().display_name(),
            listener.local_addr()
        ));

        info!(
            screen = %screen,
            bounds = config.marker.bounds.display_name(),
            listener = %listener.local_addr(),
            hud = config.hud.enabled,
            "overlay running"
        );

        let mut app = OverlayApp::new(window, &event_loop, presenter, config.hud.enabled);
        let mut redraw_pending = true;

        event_loop.run(|event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    if app.sync() {
                        redraw_pending = true;
                    }
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    if app.handle_window_event(window, event) {
                        redraw_pending = true;
                    }

                    match event {
                        WindowEvent::CloseRequested => {
                            listener.shutdown();
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;
                            app.sync();

                            let egui_output = app.update_ui(window);

                            if let Some(output) = &egui_output {
                                app.egui_state
                                    .handle_platform_output(window, output.platform_output.clone());

                                if output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    redraw_pending = true;
                                }
                            }

                            if let Err(err) = app.render(egui_output) {
                                error!(error = %err, "render failed");
                                listener.shutdown();
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                Event::LoopExiting => {
                    listener.shutdown();
                }
                _ => {}
            }
        })?;

        info!("overlay closed");

        Ok(())
    }
}
