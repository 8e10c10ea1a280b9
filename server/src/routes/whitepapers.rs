//! Whitepaper summary routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use super::upstream_failure;
use crate::state::AppState;

/// `GET /api/whitepapers`
pub async fn list_whitepapers(State(state): State<AppState>) -> Response {
    match state.upstream.list_whitepapers().await {
        Ok(listing) => Json(listing).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "whitepaper listing failed");
            upstream_failure(&e)
        }
    }
}

/// `DELETE /api/whitepapers/{id}`
pub async fn delete_whitepaper(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.upstream.delete_whitepaper(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, %id, "whitepaper delete failed");
            upstream_failure(&e)
        }
    }
}
