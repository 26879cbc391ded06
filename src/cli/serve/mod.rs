//! Serve command - runs the HTTP API

use std::net::SocketAddr;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::{create_router, RouterOptions};
use crate::config::{AppConfig, ServerConfig};
use crate::infrastructure::logging;

/// Overrides for the configured listen address
#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Run the API server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = apply_overrides(AppConfig::load().unwrap_or_default(), args);
    logging::init_logging(&config.logging);

    info!(
        env = %config.env,
        host = %config.server.host,
        port = config.server.port,
        log_level = %config.logging.level,
        "starting up"
    );

    let state = crate::create_app_state();
    let users = state.user_service.count().await?;
    info!(users, "user store ready");

    let app = create_router(
        state,
        RouterOptions {
            request_log: config.request_log,
        },
    );

    let listener = bind_listener(&config.server).await?;
    info!("Starting API server on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("API server shutdown complete");

    Ok(())
}

fn apply_overrides(mut config: AppConfig, args: ServeArgs) -> AppConfig {
    if let Some(host) = args.host {
        config.server.host = host;
    }

    if let Some(port) = args.port {
        config.server.port = port;
    }

    config
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Bind the listen socket; `host` may be an IP literal or a resolvable name
async fn bind_listener(server: &ServerConfig) -> anyhow::Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", server.host, server.port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let config = apply_overrides(
            AppConfig::default(),
            ServeArgs {
                host: Some("127.0.0.1".to_string()),
                port: None,
            },
        );

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
    }

    #[tokio::test]
    async fn test_bind_listener_accepts_names_and_literals() {
        for host in ["127.0.0.1", "localhost"] {
            let server = ServerConfig {
                host: host.to_string(),
                port: 0,
            };

            let listener = bind_listener(&server).await.unwrap();
            assert!(listener.local_addr().unwrap().ip().is_loopback());
        }
    }

    #[tokio::test]
    async fn test_bind_listener_reports_bad_host() {
        let server = ServerConfig {
            host: "no such host".to_string(),
            port: 0,
        };

        let err = bind_listener(&server).await.unwrap_err();
        assert!(err.to_string().contains("no such host"));
    }
}
