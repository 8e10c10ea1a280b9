//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the same-origin `/api/*` surface the dashboard views
//! call and stitches it with Leptos SSR rendering under a single Axum router.
//! Each `/api/*` handler performs exactly one upstream operation.

pub mod bots;
pub mod tokens;
pub mod whitepapers;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use research::wire::ErrorBody;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::upstream::UpstreamError;

/// `/api/*` routes backed by the upstream adapter.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/bots", get(bots::list_bots))
        .route("/api/bots/{id}/status", post(bots::change_status))
        .route("/api/bots/{id}/interval", post(bots::change_interval))
        .route("/api/whitepapers", get(whitepapers::list_whitepapers))
        .route("/api/whitepapers/{id}", delete(whitepapers::delete_whitepaper))
        .route("/api/watchlists", get(tokens::list_watchlists))
        .route("/api/tokens/search", post(tokens::search_token))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// `502` with the upstream error text, for the view to show.
pub(crate) fn upstream_failure(err: &UpstreamError) -> Response {
    (StatusCode::BAD_GATEWAY, Json(ErrorBody::new(err.to_string()))).into_response()
}

/// API routes + Leptos SSR pages + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
