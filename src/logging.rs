use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Sets up logging for the paint console.
///
/// Events go to stderr because stdout carries prompts and replies. The filter
/// comes from `RUST_LOG`, else from `log_filter` in `config.toml` (passed in as
/// `default_filter`); at the shipped `warn` level only failed saves and input
/// errors show up, `debug` adds one line per add/remove.
pub fn init_logging(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
