use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for a host application.
///
/// With `TRELLIS_DEBUG_LOG` set, verbose output is appended to that file
/// (honoring `RUST_LOG` for filtering); otherwise only warnings reach
/// stderr. Safe to call more than once; later calls are ignored.
pub fn init() {
    if let Ok(log_path) = std::env::var("TRELLIS_DEBUG_LOG") {
        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            let _ = tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                )
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .try_init();
            return;
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}
