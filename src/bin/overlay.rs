use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use gaze_overlay::{PixelsPresenterFactory, RunOverlayCommand};

/// Transparent always-on-top overlay with a network-driven gaze marker.
#[derive(Parser, Debug)]
#[command(name = "gaze-overlay", version, about)]
struct Args {
    /// Config file path override.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    gaze_overlay::init_logging(args.log_level.as_deref());

    let config = match gaze_overlay::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load config");
            return ExitCode::FAILURE;
        }
    };

    let command = RunOverlayCommand::new(PixelsPresenterFactory::new());

    match command.execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "overlay failed");
            ExitCode::FAILURE
        }
    }
}
