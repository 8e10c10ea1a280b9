//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. A non-OK reply carrying the
//! server's `{error}` body yields that text; otherwise the status code is
//! reported. Views decide how an error is shown; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use research::bots::Bot;
#[cfg(feature = "hydrate")]
use research::bots::{BotListing, IntervalChange, StatusChange};
use research::tokens::{TokenQuery, Watchlist};
#[cfg(feature = "hydrate")]
use research::tokens::WatchlistListing;
use research::whitepapers::WhitepaperRecord;
#[cfg(feature = "hydrate")]
use research::whitepapers::WhitepaperListing;
use research::wire::ActionReply;
#[cfg(feature = "hydrate")]
use research::wire::ErrorBody;

#[cfg(any(test, feature = "hydrate"))]
fn bot_status_endpoint(bot_id: &str) -> String {
    format!("/api/bots/{bot_id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn bot_interval_endpoint(bot_id: &str) -> String {
    format!("/api/bots/{bot_id}/interval")
}

#[cfg(any(test, feature = "hydrate"))]
fn whitepaper_endpoint(whitepaper_id: &str) -> String {
    format!("/api/whitepapers/{whitepaper_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, error: Option<String>) -> String {
    match error {
        Some(text) if !text.is_empty() => text,
        _ => format!("request failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn read_failure(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let error = resp.json::<ErrorBody>().await.ok().map(|body| body.error);
    failure_message(status, error)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_failure(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_failure(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the merged bot listing from `/api/bots`.
///
/// # Errors
///
/// Returns an error string if the request fails or the reply cannot be decoded.
pub async fn fetch_bots() -> Result<Vec<Bot>, String> {
    #[cfg(feature = "hydrate")]
    {
        let listing: BotListing = get_json("/api/bots").await?;
        Ok(listing.bots)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Flip `bot` between active and inactive via `POST /api/bots/{id}/status`.
///
/// The server picks `activate`/`deactivate` from the bot's current status.
///
/// # Errors
///
/// Returns an error string when no upstream reply came back.
pub async fn change_bot_status(bot: &Bot) -> Result<ActionReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let change = StatusChange { name: bot.name.clone(), status: bot.status };
        post_json(&bot_status_endpoint(&bot.id), &change).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bot;
        Err("not available on server".to_owned())
    }
}

/// Set `bot`'s interval via `POST /api/bots/{id}/interval`.
///
/// `interval` is forwarded exactly as typed.
///
/// # Errors
///
/// Returns an error string when no upstream reply came back.
pub async fn change_bot_interval(bot: &Bot, interval: &str) -> Result<ActionReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let change = IntervalChange { name: bot.name.clone(), interval: interval.to_owned() };
        post_json(&bot_interval_endpoint(&bot.id), &change).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bot, interval);
        Err("not available on server".to_owned())
    }
}

/// Fetch every whitepaper summary from `/api/whitepapers`.
///
/// # Errors
///
/// Returns an error string if the request fails or the reply cannot be decoded.
pub async fn fetch_whitepapers() -> Result<Vec<WhitepaperRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let listing: WhitepaperListing = get_json("/api/whitepapers").await?;
        Ok(listing.whitepapers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Delete one whitepaper summary via `DELETE /api/whitepapers/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server reports an error.
pub async fn delete_whitepaper(whitepaper_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&whitepaper_endpoint(whitepaper_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = whitepaper_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the watchlists offered in the search form.
///
/// # Errors
///
/// Returns an error string if the request fails or the reply cannot be decoded.
pub async fn fetch_watchlists() -> Result<Vec<Watchlist>, String> {
    #[cfg(feature = "hydrate")]
    {
        let listing: WatchlistListing = get_json("/api/watchlists").await?;
        Ok(listing.watchlists)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a token search and return the raw reply for classification.
///
/// # Errors
///
/// Returns an error string when the server could not reach the upstream.
pub async fn search_token(query: &TokenQuery) -> Result<serde_json::Value, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/tokens/search", query).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}
