//! Bot records and the routing table that picks which upstream owns a bot's
//! status and interval endpoints.
//!
//! DESIGN
//! ======
//! Upstream topology lives in [`BotRouting`], a name-keyed table injected by
//! configuration. Views and handlers never compare bot names themselves.

#[cfg(test)]
#[path = "bots_test.rs"]
mod bots_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wire::{lenient_flag, lenient_hours, lenient_id, message_text};

/// Bot name that the default table sends to the multi-bot route.
pub const FUNDAMENTAL_ANALYSIS: &str = "fundamental analysis";

// =============================================================================
// BOT RECORD
// =============================================================================

/// A scheduled background job as reported by one of the upstreams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "message_text")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Run interval in hours.
    #[serde(default, deserialize_with = "lenient_hours")]
    pub interval: Option<i64>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub status: bool,
    #[serde(default)]
    pub next_run_time: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Bot {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.status { "Active" } else { "Inactive" }
    }

    /// Label of the menu action that flips the current status.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.status { "Deactivate" } else { "Activate" }
    }

    /// Schedule timestamps as the upstream sent them, skipping absent ones.
    #[must_use]
    pub fn schedule_lines(&self) -> Vec<(&'static str, String)> {
        [("Next run", &self.next_run_time), ("Updated", &self.updated_at)]
            .into_iter()
            .filter_map(|(label, raw)| raw.as_ref().filter(|t| !t.is_empty()).map(|t| (label, t.clone())))
            .collect()
    }

    #[must_use]
    pub fn interval_text(&self) -> String {
        match self.interval {
            Some(hours) => format!("Runs every {hours} hours"),
            None => "Runs every N/A hours".to_owned(),
        }
    }
}

/// `{bots: [...]}` listing returned by both upstreams.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BotListing {
    #[serde(default)]
    pub bots: Vec<Bot>,
}

/// Body of `POST /api/bots/{id}/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub name: String,
    /// Current status; the command sent upstream is its negation.
    pub status: bool,
}

/// Body of `POST /api/bots/{id}/interval`.
///
/// The interval is carried as entered; empty or non-numeric text is sent
/// upstream unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalChange {
    pub name: String,
    pub interval: String,
}

// =============================================================================
// COMMANDS AND ROUTES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Activate,
    Deactivate,
}

impl BotCommand {
    /// Command that flips a bot whose current status is `active`.
    #[must_use]
    pub fn toggling(active: bool) -> Self {
        if active { Self::Deactivate } else { Self::Activate }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        }
    }
}

/// Which configured base URL an endpoint hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upstream {
    /// Primary application API.
    Api,
    /// Secondary bot scheduling service.
    BotService,
}

/// Endpoint family that owns a bot's mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BotRoute {
    /// `{botSvc}/activate/nv_bot` and `{botSvc}/update_interval`.
    BotService,
    /// `{api}/multi-bot` and `{api}/multi-bot/edit-interval`.
    MultiBot,
}

impl BotRoute {
    #[must_use]
    pub fn upstream(self) -> Upstream {
        match self {
            Self::BotService => Upstream::BotService,
            Self::MultiBot => Upstream::Api,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BotService => "bot-service",
            Self::MultiBot => "multi-bot",
        }
    }
}

impl fmt::Display for BotRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("unknown bot route '{0}' (expected 'bot-service' or 'multi-bot')")]
    UnknownRoute(String),
    #[error("malformed routing entry '{0}' (expected 'name=route')")]
    MalformedEntry(String),
}

impl FromStr for BotRoute {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bot-service" => Ok(Self::BotService),
            "multi-bot" => Ok(Self::MultiBot),
            other => Err(RoutingError::UnknownRoute(other.to_owned())),
        }
    }
}

/// A fully resolved upstream call: base selector, path and query pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub upstream: Upstream,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
}

impl BotRoute {
    /// Endpoint that applies `command` to `bot_id`.
    #[must_use]
    pub fn status_endpoint(self, command: BotCommand, bot_id: &str) -> Endpoint {
        let path = match self {
            Self::BotService => "/activate/nv_bot",
            Self::MultiBot => "/multi-bot",
        };
        Endpoint {
            upstream: self.upstream(),
            path,
            query: vec![("command", command.as_str().to_owned()), ("bot_id", bot_id.to_owned())],
        }
    }

    /// Endpoint that sets `bot_id`'s interval to `interval` (sent verbatim).
    #[must_use]
    pub fn interval_endpoint(self, bot_id: &str, interval: &str) -> Endpoint {
        let (path, interval_key) = match self {
            Self::BotService => ("/update_interval", "new_interval"),
            Self::MultiBot => ("/multi-bot/edit-interval", "interval"),
        };
        Endpoint {
            upstream: self.upstream(),
            path,
            query: vec![("bot_id", bot_id.to_owned()), (interval_key, interval.to_owned())],
        }
    }
}

// =============================================================================
// ROUTING TABLE
// =============================================================================

/// Name-keyed routing table for bot mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotRouting {
    pub default: BotRoute,
    pub by_name: BTreeMap<String, BotRoute>,
}

impl Default for BotRouting {
    fn default() -> Self {
        let mut by_name = BTreeMap::new();
        by_name.insert(FUNDAMENTAL_ANALYSIS.to_owned(), BotRoute::MultiBot);
        Self { default: BotRoute::BotService, by_name }
    }
}

impl BotRouting {
    #[must_use]
    pub fn route_for(&self, bot_name: &str) -> BotRoute {
        self.by_name.get(bot_name).copied().unwrap_or(self.default)
    }

    /// Build a table from `name=route` entries separated by `;`, layered on
    /// top of the default table.
    ///
    /// # Errors
    ///
    /// Returns an error for entries without `=` or with an unknown route.
    pub fn with_overrides(raw: &str) -> Result<Self, RoutingError> {
        let mut table = Self::default();
        for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, route) = entry
                .split_once('=')
                .ok_or_else(|| RoutingError::MalformedEntry(entry.to_owned()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(RoutingError::MalformedEntry(entry.to_owned()));
            }
            table.by_name.insert(name.to_owned(), route.parse()?);
        }
        Ok(table)
    }
}
