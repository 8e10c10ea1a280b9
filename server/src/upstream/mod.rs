//! Upstream adapter for the application API and the bot service.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`UpstreamApi`] trait so routes can be exercised
//! against an in-memory double. [`HttpUpstream`] is the reqwest-backed
//! implementation: one shared client, two configured base URLs, and the
//! routing table that picks which base owns a bot's mutations.
//!
//! FAILURE POLICY
//! ==============
//! No retries and no request timeout beyond the transport's own; only a
//! connect timeout is set. The bot listing joins both upstreams with
//! settle-all semantics: a failing source is logged and skipped.

pub mod types;

use std::time::Duration;

use research::bots::{Bot, BotCommand, BotListing, BotRouting, Endpoint, IntervalChange, StatusChange, Upstream};
use research::tokens::{TokenQuery, WatchlistListing};
use research::whitepapers::WhitepaperListing;
use research::wire::{ActionReply, settle_all};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::DashboardConfig;
pub use types::UpstreamError;

/// Every upstream operation the dashboard performs.
#[async_trait::async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Bots from both upstreams, application API first. Never fails; an
    /// unreachable source contributes nothing.
    async fn list_bots(&self) -> BotListing;

    /// Flip a bot's status on whichever upstream the routing table selects.
    ///
    /// # Errors
    ///
    /// Returns an error when no usable reply was received.
    async fn change_bot_status(&self, bot_id: &str, change: &StatusChange) -> Result<ActionReply, UpstreamError>;

    /// Set a bot's run interval on whichever upstream the routing table selects.
    ///
    /// # Errors
    ///
    /// Returns an error when no usable reply was received.
    async fn change_bot_interval(&self, bot_id: &str, change: &IntervalChange) -> Result<ActionReply, UpstreamError>;

    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or bad body.
    async fn list_whitepapers(&self) -> Result<WhitepaperListing, UpstreamError>;

    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    async fn delete_whitepaper(&self, id: &str) -> Result<(), UpstreamError>;

    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or bad body.
    async fn list_watchlists(&self) -> Result<WatchlistListing, UpstreamError>;

    /// Raw search reply; classification happens in the view.
    ///
    /// # Errors
    ///
    /// Returns an error when no JSON reply was received.
    async fn search_token(&self, query: &TokenQuery) -> Result<Value, UpstreamError>;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

pub struct HttpUpstream {
    http: reqwest::Client,
    api_url: String,
    bot_service_url: String,
    routing: BotRouting,
}

impl HttpUpstream {
    /// Build the client from parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &DashboardConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            bot_service_url: config.bot_service_url.clone(),
            routing: config.routing.clone(),
        })
    }

    fn url(&self, upstream: Upstream, path: &str) -> String {
        let base = match upstream {
            Upstream::Api => &self.api_url,
            Upstream::BotService => &self.bot_service_url,
        };
        format!("{base}{path}")
    }

    async fn fetch_bots(&self, upstream: Upstream) -> Result<Vec<Bot>, UpstreamError> {
        let listing: BotListing = self.get_json(&self.url(upstream, "/bots")).await?;
        Ok(listing.bots)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        decode_success(response).await
    }

    /// POST a bot mutation and normalize the reply.
    ///
    /// Non-success statuses still count as a reply when the body carries the
    /// `{success, response}` envelope; the reply is then marked unsuccessful.
    async fn post_action(&self, endpoint: Endpoint) -> Result<ActionReply, UpstreamError> {
        let url = self.url(endpoint.upstream, endpoint.path);
        let response = self
            .http
            .post(&url)
            .query(&endpoint.query)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        let parsed = serde_json::from_str::<ActionReply>(&body);
        if status.is_success() {
            return parsed.map_err(|e| UpstreamError::Decode(e.to_string()));
        }
        match parsed {
            Ok(reply) => Ok(ActionReply { success: false, response: reply.response }),
            Err(_) => Err(UpstreamError::Status { status: status.as_u16(), body }),
        }
    }
}

async fn decode_success<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UpstreamError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| UpstreamError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(UpstreamError::Status { status: status.as_u16(), body });
    }
    serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl UpstreamApi for HttpUpstream {
    async fn list_bots(&self) -> BotListing {
        let (api, bot_service) = tokio::join!(self.fetch_bots(Upstream::Api), self.fetch_bots(Upstream::BotService));
        let (bots, failures) = settle_all([api, bot_service]);
        for e in &failures {
            tracing::warn!(error = %e, "bot listing source failed");
        }
        BotListing { bots }
    }

    async fn change_bot_status(&self, bot_id: &str, change: &StatusChange) -> Result<ActionReply, UpstreamError> {
        let route = self.routing.route_for(&change.name);
        let command = BotCommand::toggling(change.status);
        tracing::info!(bot_id, %route, command = command.as_str(), "changing bot status");
        self.post_action(route.status_endpoint(command, bot_id)).await
    }

    async fn change_bot_interval(&self, bot_id: &str, change: &IntervalChange) -> Result<ActionReply, UpstreamError> {
        let route = self.routing.route_for(&change.name);
        tracing::info!(bot_id, %route, interval = %change.interval, "changing bot interval");
        self.post_action(route.interval_endpoint(bot_id, &change.interval)).await
    }

    async fn list_whitepapers(&self) -> Result<WhitepaperListing, UpstreamError> {
        self.get_json(&self.url(Upstream::Api, "/get_whitepapers")).await
    }

    async fn delete_whitepaper(&self, id: &str) -> Result<(), UpstreamError> {
        let response = self
            .http
            .delete(self.url(Upstream::Api, "/delete_whitepaper_analysis"))
            .query(&[("id", id)])
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status: status.as_u16(), body });
        }
        Ok(())
    }

    async fn list_watchlists(&self) -> Result<WatchlistListing, UpstreamError> {
        self.get_json(&self.url(Upstream::Api, "/watchlists/nontokens")).await
    }

    async fn search_token(&self, query: &TokenQuery) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .post(self.url(Upstream::Api, "/search/token"))
            .json(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        // Error statuses still carry the `{success, response}` body the view branches on.
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
