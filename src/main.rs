use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use gaze_overlay::core::data::normalized_position::NormalizedPosition;
use gaze_overlay::core::data::screen_size::ScreenSize;
use gaze_overlay::{PngFilePresenter, SnapshotController, SnapshotRequest};

/// Renders the overlay layout to a PNG without opening a window.
#[derive(Parser, Debug)]
#[command(name = "gaze-snapshot", version, about)]
struct Args {
    /// Config file path override.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    log_level: Option<String>,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Normalized marker x.
    #[arg(long, default_value_t = 0.5)]
    x: f64,

    /// Normalized marker y.
    #[arg(long, default_value_t = 0.5)]
    y: f64,

    /// Output PNG path.
    #[arg(long, default_value = "output/overlay.png")]
    out: PathBuf,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = gaze_overlay::load_config(args.config.as_deref())?;
    let size = ScreenSize::new(args.width, args.height)?;

    let slots = config.images.loader()?.load_all();
    if slots.is_empty() {
        warn!("no images loaded, snapshot will be fully transparent");
    }

    let mut controller = SnapshotController::new(PngFilePresenter::new());
    let marker = controller.generate(
        &slots,
        SnapshotRequest {
            size,
            marker: NormalizedPosition::new(args.x, args.y),
            bounds: config.marker.bounds,
        },
    )?;
    controller.write(&args.out)?;

    info!(marker = %marker, path = %args.out.display(), "done");

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    gaze_overlay::init_logging(args.log_level.as_deref());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "snapshot failed");
            ExitCode::FAILURE
        }
    }
}
