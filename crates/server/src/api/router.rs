use axum::{routing::get, Router};

use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Card lookup endpoints
        .route("/api/cards/lookup", get(handlers::lookup_card))
        .route("/api/cards/market", get(handlers::market_card))
        .route("/api/corrections", get(handlers::get_corrections))
        // Status
        .route("/api/health", get(handlers::health))
        .with_state(state)
}
