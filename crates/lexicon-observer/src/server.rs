//! Observer HTTP server lifecycle management.
//!
//! Provides [`ServerConfig`], loaded from the environment, and
//! [`start_server`], which binds to a TCP port and serves until `Ctrl-C`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the observer server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Directory holding `stream.json`.
    pub data_dir: PathBuf,
    /// Directory of pre-built dashboard assets.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `LEXICON_OBSERVER_HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- listening port (default 8080)
    /// - `LEXICON_DATA_DIR` -- directory holding `stream.json` (default `data`)
    /// - `LEXICON_STATIC_DIR` -- dashboard asset directory (default `public`)
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ServerError::Config(format!("invalid PORT {raw:?}: {e}")))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("LEXICON_OBSERVER_HOST").unwrap_or(defaults.host),
            port,
            data_dir: lookup("LEXICON_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            static_dir: lookup("LEXICON_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
        })
    }
}

/// Start the observer HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until `Ctrl-C` is received.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Observer server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("Observer server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// Errors that can occur when starting or running the observer server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn port_and_dirs_from_environment() {
        let config = ServerConfig::from_lookup(|name| match name {
            "PORT" => Some(String::from("9090")),
            "LEXICON_STATIC_DIR" => Some(String::from("/srv/lexicon")),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.static_dir, PathBuf::from("/srv/lexicon"));
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = ServerConfig::from_lookup(|name| (name == "PORT").then(|| String::from("http")));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}
