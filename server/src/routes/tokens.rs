//! Watchlist and token search routes.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use research::tokens::TokenQuery;

use super::upstream_failure;
use crate::state::AppState;

/// `GET /api/watchlists`
pub async fn list_watchlists(State(state): State<AppState>) -> Response {
    match state.upstream.list_watchlists().await {
        Ok(listing) => Json(listing).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "watchlist listing failed");
            upstream_failure(&e)
        }
    }
}

/// `POST /api/tokens/search`: the upstream reply is passed through as-is.
pub async fn search_token(State(state): State<AppState>, Json(query): Json<TokenQuery>) -> Response {
    match state.upstream.search_token(&query).await {
        Ok(reply) => Json(reply).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, token = %query.token_name, "token search failed");
            upstream_failure(&e)
        }
    }
}
