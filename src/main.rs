//! The issue tracker's backend web server.

use issue_tracker::{api, config::Config, db, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// The log filter used when `RUST_LOG` isn't set.
const DEFAULT_LOG_FILTER: &str = "issue_tracker=info,tower_http=info";

/// # Errors
///
/// See implementation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");

    let db_pool = db::initialize(&config).await?;

    tracing::info!("Listening to {}...", config.address);

    let listener = TcpListener::bind(config.address).await?;

    tracing::info!("Ready!");

    let app = api::router(AppState {
        db_pool: db_pool.clone(),
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pool...");

    db_pool.close().await;

    Ok(())
}

/// Waits for a Ctrl+C or (on Unix) SIGTERM signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        () = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
