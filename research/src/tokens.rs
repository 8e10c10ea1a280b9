//! Token search: request payload, reply classification and the flat
//! read-only projection of the multi-provider token report.
//!
//! DISPLAY RULE
//! ============
//! Every remote field renders only when its owning provider reply reports
//! `success: true` AND the field is present and truthy; otherwise the cell
//! shows [`NOT_AVAILABLE`]. Truthiness follows the upstream's JavaScript
//! convention, so `0`, `false` and `""` also render as `N/A`.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::format::format_number;
use crate::wire::{lenient_id, value_text};

/// Sentinel shown for unavailable fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Reply text the search endpoint uses for unknown tokens.
pub const TOKEN_NOT_FOUND: &str = "Token not found";

// =============================================================================
// WATCHLISTS AND QUERY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistListing {
    #[serde(default)]
    pub watchlists: Vec<Watchlist>,
}

/// Search request body. `watchlist` is empty when none is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenQuery {
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
    #[serde(default)]
    pub watchlist: String,
}

impl TokenQuery {
    /// A search needs at least a token name.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.token_name.is_empty()
    }
}

// =============================================================================
// REPORT PAYLOAD
// =============================================================================

/// One provider's reply inside the token report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub success: Value,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProviderResponse {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.success == Value::Bool(true)
    }

    /// The field value when the display rule allows showing it.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        if !self.succeeded() {
            return None;
        }
        self.fields.get(key).filter(|v| is_truthy(v))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDataPayload {
    #[serde(default, deserialize_with = "lenient_provider")]
    pub coingecko_response: ProviderResponse,
    #[serde(default, deserialize_with = "lenient_provider")]
    pub coinmarketcap_response: ProviderResponse,
    #[serde(default, deserialize_with = "lenient_provider")]
    pub defillama_chains_response: ProviderResponse,
    #[serde(default, deserialize_with = "lenient_provider")]
    pub staking_reward_response: ProviderResponse,
    #[serde(default, deserialize_with = "lenient_provider")]
    pub analysis_1: ProviderResponse,
    #[serde(default, deserialize_with = "lenient_provider")]
    pub analysis_2: ProviderResponse,
    /// Per-chain security scans. Anything other than an array is ignored.
    #[serde(default)]
    pub dextool: Value,
}

/// Decode a provider reply; `null` or any non-object counts as a provider
/// that did not succeed.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn lenient_provider<'de, D>(deserializer: D) -> Result<ProviderResponse, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(fields) => {
            Ok(serde_json::from_value(Value::Object(fields)).unwrap_or_default())
        }
        _ => Ok(ProviderResponse::default()),
    }
}

/// The `response` member of a successful search reply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenReport {
    #[serde(default)]
    pub response: TokenDataPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("search reply has no report")]
    Missing,
    #[error("malformed token report: {0}")]
    Malformed(String),
}

/// Three-way result of a token search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(Box<TokenReport>),
    NotFound,
    /// Upstream said no for another reason; carries the message to alert.
    Failed(String),
}

/// Classify a raw search reply by its shape.
#[must_use]
pub fn classify_search_reply(reply: &Value) -> SearchOutcome {
    if reply.get("success").is_some_and(is_truthy) {
        return match parse_report(reply) {
            Ok(report) => SearchOutcome::Found(Box::new(report)),
            Err(e) => SearchOutcome::Failed(e.to_string()),
        };
    }
    match reply.get("response") {
        Some(Value::String(s)) if s == TOKEN_NOT_FOUND => SearchOutcome::NotFound,
        Some(other) => SearchOutcome::Failed(value_text(other)),
        None => SearchOutcome::Failed(String::new()),
    }
}

fn parse_report(reply: &Value) -> Result<TokenReport, ReportError> {
    let body = reply.get("response").ok_or(ReportError::Missing)?;
    serde_json::from_value(body.clone()).map_err(|e| ReportError::Malformed(e.to_string()))
}

// =============================================================================
// VALUE DISPLAY
// =============================================================================

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text for a raw value: arrays and objects are flattened into `, `-joined
/// lists.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}: {}", display_value(v)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), |f| format!("{f}"))
}

/// Thousands-grouped text for numeric values, plain text for the rest.
#[must_use]
pub fn grouped_value(value: &Value) -> String {
    let numeric = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    numeric.map_or_else(|| display_value(value), format_number)
}

// =============================================================================
// DETAIL PROJECTION
// =============================================================================

/// Which provider reply a detail row reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Coingecko,
    Coinmarketcap,
    DefillamaChains,
    StakingReward,
    Analysis1,
    Analysis2,
}

impl TokenDataPayload {
    #[must_use]
    pub fn provider(&self, provider: Provider) -> &ProviderResponse {
        match provider {
            Provider::Coingecko => &self.coingecko_response,
            Provider::Coinmarketcap => &self.coinmarketcap_response,
            Provider::DefillamaChains => &self.defillama_chains_response,
            Provider::StakingReward => &self.staking_reward_response,
            Provider::Analysis1 => &self.analysis_1,
            Provider::Analysis2 => &self.analysis_2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFormat {
    Text,
    /// `$` prefix, grouped digits.
    Currency,
    /// `%` suffix, value as sent.
    Percent,
    /// Grouped digits.
    Grouped,
    Link,
    Image,
}

/// How the view should present a rendered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Link,
    Image,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub provider: Provider,
    pub key: &'static str,
    pub format: FieldFormat,
}

const fn field(label: &'static str, provider: Provider, key: &'static str, format: FieldFormat) -> DetailField {
    DetailField { label, provider, key, format }
}

/// Rows of the token detail view, in display order.
pub const DETAIL_FIELDS: &[DetailField] = &[
    field("Logo", Provider::Coingecko, "logo", FieldFormat::Image),
    field("ID", Provider::Coingecko, "id", FieldFormat::Text),
    field("Token symbol", Provider::Coingecko, "symbol", FieldFormat::Text),
    field("Analysis 1", Provider::Analysis1, "response", FieldFormat::Text),
    field("Analysis 2", Provider::Analysis2, "response", FieldFormat::Text),
    field("ATH", Provider::Coingecko, "ath", FieldFormat::Currency),
    field("ATH percentage change", Provider::Coingecko, "ath_change_percentage", FieldFormat::Percent),
    field("categories", Provider::Coingecko, "categories", FieldFormat::Text),
    field("chains", Provider::Coingecko, "chains", FieldFormat::Text),
    field("circulating supply", Provider::Coingecko, "circulating_supply", FieldFormat::Grouped),
    field("coingecko link", Provider::Coingecko, "coingecko_link", FieldFormat::Link),
    field("contracts", Provider::Coingecko, "contracts", FieldFormat::Text),
    field("current price", Provider::Coingecko, "current_price", FieldFormat::Currency),
    field("fully diluted valuation", Provider::Coingecko, "fully_diluted_valuation", FieldFormat::Grouped),
    field("market cap usd", Provider::Coingecko, "market_cap_usd", FieldFormat::Grouped),
    field("max supply", Provider::Coingecko, "max_supply", FieldFormat::Text),
    field(
        "percentage circulating supply",
        Provider::Coingecko,
        "percentage_circulating_supply",
        FieldFormat::Percent,
    ),
    field("price a year ago", Provider::Coingecko, "price_a_year_ago", FieldFormat::Currency),
    field(
        "price change percentage (1y)",
        Provider::Coingecko,
        "price_change_percentage_1y",
        FieldFormat::Percent,
    ),
    field("supply_model", Provider::Coingecko, "supply_model", FieldFormat::Text),
    field("total supply", Provider::Coingecko, "total_supply", FieldFormat::Grouped),
    field("total volume", Provider::Coingecko, "total_volume", FieldFormat::Grouped),
    field("website", Provider::Coingecko, "website", FieldFormat::Link),
    field("whitepaper", Provider::Coinmarketcap, "whitepaper", FieldFormat::Link),
    field("TVL", Provider::DefillamaChains, "tvl", FieldFormat::Grouped),
    field("annualized revenue fee", Provider::StakingReward, "annualized_revenue_fee", FieldFormat::Grouped),
    field("inflation rate", Provider::StakingReward, "inflation_rate", FieldFormat::Grouped),
    field("reward rate", Provider::StakingReward, "reward_rate", FieldFormat::Grouped),
];

/// Labels summarized in the post-search dialog.
pub const HEADLINE_LABELS: [&str; 3] = ["ID", "Token symbol", "current price"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    pub kind: CellKind,
}

impl DetailRow {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.value != NOT_AVAILABLE
    }
}

/// Apply the display rule and the field's format to one provider field.
#[must_use]
pub fn render_field(reply: &ProviderResponse, key: &str, format: FieldFormat) -> String {
    let Some(value) = reply.field(key) else {
        return NOT_AVAILABLE.to_owned();
    };
    match format {
        FieldFormat::Text | FieldFormat::Link | FieldFormat::Image => display_value(value),
        FieldFormat::Currency => format!("${}", grouped_value(value)),
        FieldFormat::Percent => format!("{}%", display_value(value)),
        FieldFormat::Grouped => grouped_value(value),
    }
}

fn detail_row(payload: &TokenDataPayload, f: &DetailField) -> DetailRow {
    let kind = match f.format {
        FieldFormat::Link => CellKind::Link,
        FieldFormat::Image => CellKind::Image,
        _ => CellKind::Text,
    };
    DetailRow { label: f.label, value: render_field(payload.provider(f.provider), f.key, f.format), kind }
}

#[must_use]
pub fn detail_rows(payload: &TokenDataPayload) -> Vec<DetailRow> {
    DETAIL_FIELDS.iter().map(|f| detail_row(payload, f)).collect()
}

#[must_use]
pub fn headline_rows(payload: &TokenDataPayload) -> Vec<DetailRow> {
    DETAIL_FIELDS
        .iter()
        .filter(|f| HEADLINE_LABELS.contains(&f.label))
        .map(|f| detail_row(payload, f))
        .collect()
}

// =============================================================================
// SECURITY SCANS
// =============================================================================

/// Display labels for machine keys in dextool scan entries.
pub const DEXTOOL_LABELS: [(&str, &str); 10] = [
    ("buyTax", "Buy Tax"),
    ("sellTax", "Sell tax"),
    ("chain_id", "Chain ID"),
    ("chain_name", "chain name"),
    ("isBlacklisted", "Blacklisted"),
    ("isContractRenounced", "contract renounced"),
    ("isPotentiallyScam", "Scam risk"),
    ("isProxy", "Proxy Contract"),
    ("isHoneypot", "HoneyPot"),
    ("isMintable", "Mintable"),
];

/// Display label for a scan key; unknown keys pass through unchanged.
#[must_use]
pub fn dextool_label(key: &str) -> &str {
    DEXTOOL_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, label)| *label)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanEntry {
    pub label: String,
    pub value: String,
}

/// One chain's security scan, entries in the order the upstream sent them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanCard {
    pub entries: Vec<ScanEntry>,
}

#[must_use]
pub fn dextool_cards(payload: &TokenDataPayload) -> Vec<ScanCard> {
    let Value::Array(scans) = &payload.dextool else {
        return Vec::new();
    };
    scans
        .iter()
        .filter_map(Value::as_object)
        .map(|scan| ScanCard {
            entries: scan
                .iter()
                .map(|(key, value)| ScanEntry {
                    label: dextool_label(key).to_owned(),
                    value: if is_truthy(value) { display_value(value) } else { NOT_AVAILABLE.to_owned() },
                })
                .collect(),
        })
        .collect()
}
