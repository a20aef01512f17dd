//! waypoint-api - HTTP store for events, members and travel state
//!
//! Resolves its root folder (CLI, environment, config file, default), opens
//! `waypoint.db` inside it and serves the JSON API. `--no-db` starts the
//! service without a relational store.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waypoint_api::{build_router, db, AppState};
use waypoint_common::config::{self, TomlConfig};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "waypoint-api")]
#[command(about = "Remote store for the waypoint travel tracker")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides the configured bind address port)
    #[arg(short, long, env = "WAYPOINT_API_PORT")]
    port: Option<u16>,

    /// Root folder holding waypoint.db
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Start without a relational store
    #[arg(long)]
    no_db: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let toml_config = TomlConfig::load_or_default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("waypoint_api={},tower_http=info", toml_config.log_level()).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting waypoint-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let state = if args.no_db {
        warn!("Running without a database: member routes will answer 503");
        AppState::unconfigured()
    } else {
        let root_folder = config::resolve_root_folder(args.root_folder.as_deref(), &toml_config);
        let db_path = config::database_path(&root_folder);
        info!("Database path: {}", db_path.display());

        match db::init_database(&db_path).await {
            Ok(pool) => {
                info!("Connected to database");
                AppState::new(pool)
            }
            Err(e) => {
                error!("Failed to open database: {:#}", e);
                return Err(e);
            }
        }
    };

    let app = build_router(state);

    let bind_addr = match args.port {
        Some(port) => format!("127.0.0.1:{}", port),
        None => toml_config.bind_addr(),
    };
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("waypoint-api listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
