use tracing::{info, warn};
use winit::event_loop::EventLoop;
use winit::monitor::MonitorHandle;
use winit::window::{Window, WindowBuilder, WindowLevel};

use crate::config::schema::WindowConfig;
use crate::input::gui::app::events::GuiEvent;
use crate::input::gui::errors::OverlayError;

/// The monitor the overlay covers: the primary one, or the first one the
/// platform reports when it has no notion of a primary monitor (Wayland).
pub fn overlay_monitor(event_loop: &EventLoop<GuiEvent>) -> Result<MonitorHandle, OverlayError> {
    event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .ok_or(OverlayError::NoDisplay)
}

/// Builds the overlay window on `monitor` and leaks it so the drawing
/// surface can borrow it for the rest of the program.
pub fn build_overlay_window(
    event_loop: &EventLoop<GuiEvent>,
    monitor: &MonitorHandle,
    config: &WindowConfig,
) -> Result<&'static Window, OverlayError> {
    let level = if config.always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };

    let builder = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_transparent(true)
        .with_decorations(false)
        .with_resizable(false)
        .with_window_level(level)
        .with_position(monitor.position())
        .with_inner_size(monitor.size());

    let builder = apply_platform_flags(builder, config);

    let window: &'static Window = Box::leak(Box::new(builder.build(event_loop)?));

    if config.click_through {
        if let Err(err) = window.set_cursor_hittest(false) {
            warn!(error = %err, "click-through not supported, overlay will capture the pointer");
        }
    }

    let size = window.inner_size();
    info!(
        width = size.width,
        height = size.height,
        monitor = monitor.name().as_deref().unwrap_or("unknown"),
        "overlay window created"
    );

    Ok(window)
}

#[cfg(target_os = "linux")]
fn apply_platform_flags(builder: WindowBuilder, config: &WindowConfig) -> WindowBuilder {
    use winit::platform::x11::WindowBuilderExtX11;

    builder
        .with_override_redirect(config.bypass_window_manager)
        .with_x11_window_type(x11_window_types(config))
}

/// X11 has no skip-taskbar builder flag; taskbars leave utility windows out.
/// Override-redirect windows never reach the window manager, so they keep
/// the normal type.
#[cfg(target_os = "linux")]
fn x11_window_types(config: &WindowConfig) -> Vec<winit::platform::x11::XWindowType> {
    use winit::platform::x11::XWindowType;

    if config.skip_taskbar && !config.bypass_window_manager {
        vec![XWindowType::Utility]
    } else {
        vec![XWindowType::Normal]
    }
}

#[cfg(target_os = "windows")]
fn apply_platform_flags(builder: WindowBuilder, config: &WindowConfig) -> WindowBuilder {
    use winit::platform::windows::WindowBuilderExtWindows;

    builder.with_skip_taskbar(config.skip_taskbar)
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn apply_platform_flags(builder: WindowBuilder, _config: &WindowConfig) -> WindowBuilder {
    builder
}
