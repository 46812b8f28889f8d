use chrono::Duration;

/// Initialize logging
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

/// Format duration for display
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();

    if secs < 60 {
        format!("{}{}s", sign, secs)
    } else if secs < 3600 {
        format!("{}{}m", sign, secs / 60)
    } else if secs < 86400 || secs % 86400 != 0 {
        format!("{}{}h", sign, secs / 3600)
    } else {
        format!("{}{}d", sign, secs / 86400)
    }
}
