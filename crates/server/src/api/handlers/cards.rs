use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use lookup::LookupResponse;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::CardQuery;

/// Look up a card across the provider chain
///
/// GET /api/cards/lookup?name=...
pub async fn lookup_card(
    State(state): State<AppState>,
    Query(query): Query<CardQuery>,
) -> AppResult<Json<LookupResponse>> {
    let term = query
        .term()
        .ok_or_else(|| AppError::bad_request("Card name is required"))?;

    let response = state.lookup.lookup(term).await?;
    if response.is_degraded() {
        tracing::warn!("Serving mock data for '{}'", term);
    }
    Ok(Json(response))
}

/// Marketplace price search, degrading to mock data on failure
///
/// GET /api/cards/market?name=...
pub async fn market_card(
    State(state): State<AppState>,
    Query(query): Query<CardQuery>,
) -> AppResult<Json<LookupResponse>> {
    let term = query
        .term()
        .ok_or_else(|| AppError::bad_request("Card name is required"))?;

    Ok(Json(state.market.lookup(term).await?))
}

/// Active name corrections (alias → canonical)
///
/// GET /api/corrections
pub async fn get_corrections(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(
        state
            .corrections
            .entries()
            .into_iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect(),
    )
}
