//! Tracing initialization for Vignette binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable, defaulting to `info`
/// level output. Safe to call once per process; returns an error if a
/// subscriber has already been installed.
///
/// # Errors
///
/// Returns an error if subscriber initialization fails.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()?;

    Ok(())
}
