use std::sync::Arc;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu};
use tracing::{debug, error};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgba_premultiplied;
use crate::controllers::marker::ports::MarkerPresenterPort;
use crate::core::actions::compose_frame::compose_frame::compose_frame_into;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::screen_size::ScreenSize;
use crate::core::images::slot::ImageSlots;
use crate::core::marker::state::MarkerState;
use crate::input::gui::app::events::GuiEvent;
use crate::input::gui::app::ports::presenter::{GuiPresenterPort, OverlayScene};
use crate::input::gui::errors::OverlayError;
use crate::presenters::hud::state::HudState;
use crate::presenters::pixels::adapter::PixelsAdapter;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    slots: ImageSlots,
    marker_state: Arc<MarkerState>,
    frame: FrameBuffer,
    presented_generation: Option<u64>,
    hud: HudState,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        scene: OverlayScene,
    ) -> Result<Self, OverlayError> {
        let size = window.inner_size();
        let screen = ScreenSize::new(size.width, size.height)?;
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        // Straight copy of premultiplied texels over a fully transparent clear.
        let pixels = PixelsBuilder::new(size.width, size.height, surface_texture)
            .clear_color(wgpu::Color::TRANSPARENT)
            .blend_state(wgpu::BlendState::REPLACE)
            .build()?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            slots: scene.slots,
            marker_state: scene.marker_state,
            frame: FrameBuffer::new(screen),
            presented_generation: None,
            hud: scene.hud,
            width: size.width,
            height: size.height,
        })
    }

    fn redraw_frame(&mut self) {
        let snapshot = self.marker_state.snapshot();

        compose_frame_into(&mut self.frame, &self.slots, snapshot.position);
        copy_rgba_premultiplied(self.frame.buffer(), self.pixels.frame_mut());

        debug!(
            generation = snapshot.generation,
            position = %snapshot.position,
            "overlay frame recomposed"
        );

        self.presented_generation = Some(snapshot.generation);
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn MarkerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn MarkerPresenterPort>
    }

    fn sync(&mut self) -> bool {
        let events = self.adapter.take_events();
        for event in &events {
            self.hud.apply(event);
        }

        if self.width == 0 || self.height == 0 {
            return false;
        }

        if self.presented_generation != Some(self.marker_state.generation()) {
            self.redraw_frame();
            return true;
        }

        !events.is_empty()
    }

    fn hud(&self) -> &HudState {
        &self.hud
    }

    fn hud_mut(&mut self) -> &mut HudState {
        &mut self.hud
    }

    fn render(&mut self, egui: Option<(egui::FullOutput, &EguiContext)>) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let Some((egui_output, egui_ctx)) = egui else {
            return self.pixels.render();
        };

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("hud"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        let Ok(screen) = ScreenSize::new(width, height) else {
            return;
        };

        if let Err(err) = self.pixels.resize_surface(width, height) {
            error!(error = %err, "failed to resize surface");
            return;
        }

        if let Err(err) = self.pixels.resize_buffer(width, height) {
            error!(error = %err, "failed to resize buffer");
            return;
        }

        self.frame = FrameBuffer::new(screen);
        self.presented_generation = None;
    }
}
