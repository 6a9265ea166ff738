use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

pub const DEFAULT_DIRECTIVE: &str = "gaze_overlay=info";

/// Installs the global `fmt` subscriber.
///
/// `log_level` may be a bare level (`debug`), applied to this crate, or a
/// full directive (`gaze_overlay::input=trace`). `RUST_LOG` is honoured too.
pub fn init_logging(log_level: Option<&str>) {
    let (filter, rejected) = build_filter(&build_directive(log_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    if let Some(directive) = rejected {
        warn!(
            directive = %directive,
            fallback = DEFAULT_DIRECTIVE,
            "ignoring invalid log level"
        );
    }
}

/// `RUST_LOG` plus the requested directive. An unparsable directive is
/// replaced by the default one and handed back for reporting.
fn build_filter(requested: &str) -> (EnvFilter, Option<String>) {
    let filter = EnvFilter::from_default_env();

    match requested.parse::<Directive>() {
        Ok(directive) => (filter.add_directive(directive), None),
        Err(_) => {
            let filter = match DEFAULT_DIRECTIVE.parse::<Directive>() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            };
            (filter, Some(requested.to_string()))
        }
    }
}

fn build_directive(log_level: Option<&str>) -> String {
    match log_level.map(str::trim) {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) if !level.is_empty() => format!("gaze_overlay={level}"),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}
