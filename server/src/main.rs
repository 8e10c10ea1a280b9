mod config;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let upstream = upstream::HttpUpstream::new(&config).expect("upstream client init failed");
    tracing::info!(
        api_url = %config.api_url,
        bot_service_url = %config.bot_service_url,
        overrides = config.routing.by_name.len(),
        "upstreams configured"
    );

    let state = state::AppState::new(Arc::new(upstream));
    let app = routes::app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "research dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
