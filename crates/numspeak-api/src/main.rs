//! Numspeak API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use numspeak_api::config::ServerConfig;
use numspeak_api::routes;
use numspeak_api::state::AppState;
use numspeak_arithmetic::domain::history::InMemoryHistory;
use numspeak_core::clock::SystemClock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting numspeak API server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    // Build application state.
    let history = Arc::new(InMemoryHistory::new(config.history_capacity));
    let app_state = AppState::new(Arc::new(SystemClock), history);

    // Build router.
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    tracing::info!(
        history_capacity = config.history_capacity.get(),
        "Listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutting down gracefully"),
            Err(e) => {
                tracing::error!("failed to listen for shutdown signal: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    Ok(())
}
