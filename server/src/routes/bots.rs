//! Bot listing and mutation routes.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use research::bots::{BotListing, IntervalChange, StatusChange};

use super::upstream_failure;
use crate::state::AppState;

/// `GET /api/bots`: merged listing from both upstreams.
pub async fn list_bots(State(state): State<AppState>) -> Json<BotListing> {
    Json(state.upstream.list_bots().await)
}

/// `POST /api/bots/{id}/status`: flip a bot between active and inactive.
pub async fn change_status(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
    Json(change): Json<StatusChange>,
) -> Response {
    match state.upstream.change_bot_status(&bot_id, &change).await {
        Ok(reply) => Json(reply).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, %bot_id, "bot status change failed");
            upstream_failure(&e)
        }
    }
}

/// `POST /api/bots/{id}/interval`: set a bot's run interval in hours.
pub async fn change_interval(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
    Json(change): Json<IntervalChange>,
) -> Response {
    match state.upstream.change_bot_interval(&bot_id, &change).await {
        Ok(reply) => Json(reply).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, %bot_id, "bot interval change failed");
            upstream_failure(&e)
        }
    }
}
