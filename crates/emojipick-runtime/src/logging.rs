#![forbid(unsafe_code)]

//! JSON log output for hosts without their own subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "EMOJIPICK_LOG";

/// Install a global JSON subscriber filtered by `EMOJIPICK_LOG`
/// (default `info`).
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_json_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
}
