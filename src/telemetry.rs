//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `log_level` is parsed as `EnvFilter` directives (e.g. `info` or
/// `qr_batch=debug,tower_http=info`); invalid directives fall back to `info`.
/// `log_format` selects human-readable (`text`) or JSON (`json`) output.
pub fn init(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
