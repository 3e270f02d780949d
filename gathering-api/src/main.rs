//! # Gathering API Server
//!
//! Serves the community events listing: browse events, filter them by
//! category, submit new ones, and create or look up users.
//!
//! All records live in memory. Restarting the server discards everything
//! except the three fixture events seeded at startup.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p gathering-api
//! ```

use gathering_api::{
    app::{build_router, AppState},
    config::Config,
};
use gathering_shared::store::MemStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gathering_api=debug,gathering_shared=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Gathering API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    let address = config.bind_address();

    let store = MemStorage::new();
    tracing::info!(events = store.event_count(), "Record store seeded");

    let app = build_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
