//! Stream builder entry point.
//!
//! Runs a single build and exits, or with `BUILD_INTERVAL_SECS` set, keeps
//! building one snapshot after another with a fixed pause in between.
//!
//! A failed single build exits non-zero and leaves the previously
//! persisted stream document in place.

use lexicon_builder::{BuilderConfig, StreamBuilder};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or, in single-run mode,
/// if the build fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("lexicon-builder starting");

    let config = BuilderConfig::from_env()?;
    info!(
        state_url = config.state_url,
        data_dir = %config.data_dir.display(),
        fetch_timeout_ms = config.fetch_timeout.as_millis(),
        build_interval_secs = config.build_interval.map(|d| d.as_secs()),
        "configuration loaded"
    );

    let builder = StreamBuilder::from_config(&config)?;

    let Some(interval) = config.build_interval else {
        if let Err(e) = builder.build().await {
            error!(error = %e, "build failed");
            return Err(e.into());
        }
        return Ok(());
    };

    info!(interval_secs = interval.as_secs(), "entering build loop");
    loop {
        if let Err(e) = builder.build().await {
            error!(error = %e, "build failed, keeping previous stream document");
        }
        tokio::time::sleep(interval).await;
    }
}
