// Subscriber setup for the binary: RUST_LOG when set, otherwise the engine at info
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "ppp_engine=info";

/// Filter from a `RUST_LOG`-style value; unset or unparsable values fall back to the default.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr so command output stays clean on stdout
    tracing_subscriber::registry()
        .with(env_filter(rust_log.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
