use std::collections::HashMap;

use research::bots::{BotRoute, FUNDAMENTAL_ANALYSIS};

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[
        ("API_URL", "https://api.example.com/"),
        ("BOT_SERVICE_URL", "https://bots.example.com"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_url, "https://api.example.com");
    assert_eq!(cfg.bot_service_url, "https://bots.example.com");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
    assert_eq!(cfg.routing.route_for(FUNDAMENTAL_ANALYSIS), BotRoute::MultiBot);
}

#[test]
fn from_lookup_reads_optional_values() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[
        ("API_URL", "http://localhost:8000"),
        ("BOT_SERVICE_URL", "http://localhost:8001"),
        ("PORT", "8080"),
        ("UPSTREAM_CONNECT_TIMEOUT_SECS", "3"),
        ("BOT_ROUTES", "whale watcher=multi-bot"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.connect_timeout_secs, 3);
    assert_eq!(cfg.routing.route_for("whale watcher"), BotRoute::MultiBot);
}

#[test]
fn from_lookup_requires_both_bases() {
    let err = DashboardConfig::from_lookup(lookup_from(&[("API_URL", "http://a")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "BOT_SERVICE_URL" }));

    let err = DashboardConfig::from_lookup(lookup_from(&[("API_URL", " / "), ("BOT_SERVICE_URL", "http://b")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "API_URL" }));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = DashboardConfig::from_lookup(lookup_from(&[
        ("API_URL", "http://a"),
        ("BOT_SERVICE_URL", "http://b"),
        ("PORT", "eighty"),
    ]))
    .unwrap_err();
    assert_eq!(err.to_string(), "invalid value for PORT: 'eighty'");
}

#[test]
fn from_lookup_rejects_bad_routes() {
    let err = DashboardConfig::from_lookup(lookup_from(&[
        ("API_URL", "http://a"),
        ("BOT_SERVICE_URL", "http://b"),
        ("BOT_ROUTES", "news=elsewhere"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Routing(_)));
}
