use super::*;

#[test]
fn bot_endpoints_format_expected_paths() {
    assert_eq!(bot_status_endpoint("7"), "/api/bots/7/status");
    assert_eq!(bot_interval_endpoint("7"), "/api/bots/7/interval");
}

#[test]
fn whitepaper_endpoint_formats_expected_path() {
    assert_eq!(whitepaper_endpoint("42"), "/api/whitepapers/42");
}

#[test]
fn failure_message_prefers_server_error_text() {
    assert_eq!(
        failure_message(502, Some("error sending request".to_owned())),
        "error sending request"
    );
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(500, None), "request failed: 500");
    assert_eq!(failure_message(404, Some(String::new())), "request failed: 404");
}

