pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

use std::net::SocketAddr;

pub use api::create_router;
pub use config::{default_data_path, Config, Environment};
pub use error::{AppError, AppResult};
pub use services::{HttpClientService, SettingsService};
pub use state::AppState;

pub async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Ensure data directory exists
    std::fs::create_dir_all(&config.data_path).map_err(|e| {
        format!(
            "Failed to create data directory '{}': {} (check directory permissions)",
            config.data_path.display(),
            e
        )
    })?;

    let settings = SettingsService::new(&config).await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, settings)?;

    tracing::info!(
        "Card lookup chain ready ({} stages, {} name corrections)",
        state.lookup.stages().len(),
        state.lookup.corrections().len()
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
