use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, writing to stdout.
///
/// `RUST_LOG` takes precedence; otherwise logs at `info`, with this crate at `debug`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,url_guardian=debug,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
