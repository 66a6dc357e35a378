//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Stderr keeps stdout
/// free for anything the operator pipes.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
