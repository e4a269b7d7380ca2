//! Query API entry point.

use std::sync::Arc;

use lexicon_observer::{start_server, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails to
/// bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("lexicon-observer starting");

    let config = ServerConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        data_dir = %config.data_dir.display(),
        static_dir = %config.static_dir.display(),
        "configuration loaded"
    );

    let state = Arc::new(AppState::from_data_dir(&config.data_dir, config.static_dir.clone()));
    start_server(&config, state).await?;

    Ok(())
}
