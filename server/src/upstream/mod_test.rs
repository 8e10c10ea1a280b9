use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json};
use axum::routing::{delete, get, post};
use research::bots::{BotRouting, FUNDAMENTAL_ANALYSIS};
use serde_json::json;

use super::*;

type RequestLog = Arc<Mutex<Vec<String>>>;

// =============================================================================
// MOCK UPSTREAMS
// =============================================================================

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn bots_router(names: &'static [&'static str]) -> Router {
    Router::new().route(
        "/bots",
        get(move || async move {
            let bots: Vec<Value> = names
                .iter()
                .enumerate()
                .map(|(i, name)| json!({ "id": i + 1, "name": name, "interval": 4, "status": i % 2 == 0 }))
                .collect();
            Json(json!({ "bots": bots }))
        }),
    )
}

async fn record_ok(State(log): State<RequestLog>, uri: Uri) -> Json<Value> {
    log.lock().unwrap().push(uri.to_string());
    Json(json!({ "success": true, "response": "done" }))
}

fn action_router(log: RequestLog) -> Router {
    Router::new()
        .route("/activate/nv_bot", post(record_ok))
        .route("/update_interval", post(record_ok))
        .route("/multi-bot", post(record_ok))
        .route("/multi-bot/edit-interval", post(record_ok))
        .with_state(log)
}

fn client(api_url: String, bot_service_url: String) -> HttpUpstream {
    let config = DashboardConfig {
        api_url,
        bot_service_url,
        port: 0,
        routing: BotRouting::default(),
        connect_timeout_secs: 2,
    };
    HttpUpstream::new(&config).unwrap()
}

fn names(listing: &BotListing) -> Vec<&str> {
    listing.bots.iter().map(|b| b.name.as_str()).collect()
}

// =============================================================================
// BOT LISTING
// =============================================================================

#[tokio::test]
async fn list_bots_concatenates_api_then_bot_service() {
    let api = serve(bots_router(&["fundamental analysis"])).await;
    let svc = serve(bots_router(&["news", "whales"])).await;
    let listing = client(api, svc).list_bots().await;
    assert_eq!(names(&listing), vec!["fundamental analysis", "news", "whales"]);
}

#[tokio::test]
async fn list_bots_tolerates_unreachable_source() {
    let api = unreachable_base().await;
    let svc = serve(bots_router(&["news"])).await;
    let listing = client(api, svc).list_bots().await;
    assert_eq!(names(&listing), vec!["news"]);
}

#[tokio::test]
async fn list_bots_tolerates_error_status() {
    let api = serve(bots_router(&["fundamental analysis"])).await;
    let svc = serve(Router::new().route("/bots", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))).await;
    let listing = client(api, svc).list_bots().await;
    assert_eq!(names(&listing), vec!["fundamental analysis"]);
}

#[tokio::test]
async fn list_bots_with_both_sources_down_is_empty() {
    let listing = client(unreachable_base().await, unreachable_base().await).list_bots().await;
    assert!(listing.bots.is_empty());
}

// =============================================================================
// BOT ACTIONS
// =============================================================================

#[tokio::test]
async fn status_change_routes_by_name_and_negates_status() {
    let api_log = RequestLog::default();
    let svc_log = RequestLog::default();
    let upstream = client(serve(action_router(api_log.clone())).await, serve(action_router(svc_log.clone())).await);

    let reply = upstream
        .change_bot_status("3", &StatusChange { name: FUNDAMENTAL_ANALYSIS.to_owned(), status: true })
        .await
        .unwrap();
    assert!(reply.success);
    upstream
        .change_bot_status("9", &StatusChange { name: "news".to_owned(), status: false })
        .await
        .unwrap();

    assert_eq!(*api_log.lock().unwrap(), vec!["/multi-bot?command=deactivate&bot_id=3"]);
    assert_eq!(*svc_log.lock().unwrap(), vec!["/activate/nv_bot?command=activate&bot_id=9"]);
}

#[tokio::test]
async fn interval_change_forwards_raw_interval() {
    let api_log = RequestLog::default();
    let svc_log = RequestLog::default();
    let upstream = client(serve(action_router(api_log.clone())).await, serve(action_router(svc_log.clone())).await);

    upstream
        .change_bot_interval("3", &IntervalChange { name: FUNDAMENTAL_ANALYSIS.to_owned(), interval: String::new() })
        .await
        .unwrap();
    upstream
        .change_bot_interval("9", &IntervalChange { name: "news".to_owned(), interval: "12".to_owned() })
        .await
        .unwrap();

    assert_eq!(*api_log.lock().unwrap(), vec!["/multi-bot/edit-interval?bot_id=3&interval="]);
    assert_eq!(*svc_log.lock().unwrap(), vec!["/update_interval?bot_id=9&new_interval=12"]);
}

#[tokio::test]
async fn error_status_with_envelope_is_an_unsuccessful_reply() {
    let svc = serve(Router::new().route(
        "/update_interval",
        post(|| async {
            (StatusCode::BAD_REQUEST, Json(json!({ "success": false, "response": "Interval must be positive" })))
                .into_response()
        }),
    ))
    .await;
    let reply = client(unreachable_base().await, svc)
        .change_bot_interval("1", &IntervalChange { name: "news".to_owned(), interval: "-1".to_owned() })
        .await
        .unwrap();
    assert!(!reply.success);
    assert_eq!(reply.response, "Interval must be positive");
}

#[tokio::test]
async fn error_status_without_envelope_is_an_error() {
    let svc = serve(Router::new().route("/activate/nv_bot", post(|| async { StatusCode::BAD_GATEWAY }))).await;
    let err = client(unreachable_base().await, svc)
        .change_bot_status("1", &StatusChange { name: "news".to_owned(), status: true })
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Status { status: 502, .. }));
    assert_eq!(err.to_string(), "request failed with status code 502");
}

#[tokio::test]
async fn unreachable_bot_service_is_a_transport_error() {
    let err = client(unreachable_base().await, unreachable_base().await)
        .change_bot_status("1", &StatusChange { name: "news".to_owned(), status: true })
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

// =============================================================================
// WHITEPAPERS, WATCHLISTS, SEARCH
// =============================================================================

#[tokio::test]
async fn whitepaper_listing_and_delete() {
    let log = RequestLog::default();
    let api = serve(
        Router::new()
            .route(
                "/get_whitepapers",
                get(|| async {
                    Json(json!({ "whitepapers": [
                        { "id": 1, "label": "BTC", "perplexity_summary": "General Summary", "created_at": "2024-03-05T14:30:00Z" }
                    ] }))
                }),
            )
            .route(
                "/delete_whitepaper_analysis",
                delete(|State(log): State<RequestLog>, uri: Uri| async move {
                    log.lock().unwrap().push(uri.to_string());
                    StatusCode::OK
                }),
            )
            .with_state(log.clone()),
    )
    .await;
    let upstream = client(api, unreachable_base().await);

    let listing = upstream.list_whitepapers().await.unwrap();
    assert_eq!(listing.whitepapers[0].label, "BTC");

    upstream.delete_whitepaper("1").await.unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["/delete_whitepaper_analysis?id=1"]);
}

#[tokio::test]
async fn whitepaper_listing_surfaces_decode_errors() {
    let api = serve(Router::new().route("/get_whitepapers", get(|| async { "<html>" }))).await;
    let err = client(api, unreachable_base().await).list_whitepapers().await.unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[tokio::test]
async fn watchlists_are_read_from_the_api() {
    let api = serve(Router::new().route(
        "/watchlists/nontokens",
        get(|| async { Json(json!({ "watchlists": [{ "id": 2, "name": "defi" }] })) }),
    ))
    .await;
    let listing = client(api, unreachable_base().await).list_watchlists().await.unwrap();
    assert_eq!(listing.watchlists[0].name, "defi");
}

#[tokio::test]
async fn search_posts_query_and_passes_reply_through() {
    let api = serve(Router::new().route(
        "/search/token",
        post(|Json(body): Json<Value>| async move {
            (StatusCode::NOT_FOUND, Json(json!({ "success": false, "response": "Token not found", "echo": body })))
        }),
    ))
    .await;
    let query = TokenQuery { token_name: "nothing".to_owned(), token_symbol: "NIL".to_owned(), watchlist: String::new() };
    let reply = client(api, unreachable_base().await).search_token(&query).await.unwrap();
    assert_eq!(reply["response"], "Token not found");
    assert_eq!(reply["echo"], json!({ "token_name": "nothing", "token_symbol": "NIL", "watchlist": "" }));
}
