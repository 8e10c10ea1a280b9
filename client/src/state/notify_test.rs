use super::*;

fn reply(success: bool, response: &str) -> ActionReply {
    ActionReply {
        success,
        response: response.to_owned(),
    }
}

// =============================================================
// Notification slot
// =============================================================

#[test]
fn push_assigns_increasing_sequence_numbers() {
    let mut state = NotifyState::default();
    let first = state.push(Notice { message: "a".to_owned(), severity: Severity::Success });
    let second = state.push(Notice { message: "b".to_owned(), severity: Severity::Error });
    assert!(second > first);
    let current = state.current.expect("notification");
    assert_eq!(current.seq, second);
    assert_eq!(current.message, "b");
}

#[test]
fn dismiss_with_stale_sequence_keeps_newer_notification() {
    let mut state = NotifyState::default();
    let old = state.push(Notice { message: "old".to_owned(), severity: Severity::Success });
    state.push(Notice { message: "new".to_owned(), severity: Severity::Success });
    state.dismiss(old);
    assert_eq!(state.current.map(|n| n.message), Some("new".to_owned()));
}

#[test]
fn dismiss_with_current_sequence_clears() {
    let mut state = NotifyState::default();
    let seq = state.push(Notice { message: "done".to_owned(), severity: Severity::Success });
    state.dismiss(seq);
    assert!(state.current.is_none());
}

#[test]
fn severity_maps_success_flag_and_css() {
    assert_eq!(Severity::from_success(true), Severity::Success);
    assert_eq!(Severity::from_success(false), Severity::Error);
    assert_eq!(Severity::Error.css_class(), "snackbar--error");
}

// =============================================================
// Bot action message rules
// =============================================================

#[test]
fn status_notice_uses_upstream_message_and_flag() {
    let notice = status_change_notice(&Ok(reply(false, "bot already running")));
    assert_eq!(notice.message, "bot already running");
    assert_eq!(notice.severity, Severity::Error);

    let notice = status_change_notice(&Ok(reply(true, "Bot activated")));
    assert_eq!(notice.severity, Severity::Success);
}

#[test]
fn status_notice_transport_failure_is_fixed_text() {
    let notice = status_change_notice(&Err("error sending request".to_owned()));
    assert_eq!(notice.message, STATUS_CHANGE_FAILED);
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn interval_notice_transport_failure_shows_raw_error() {
    let notice = interval_change_notice(&Err("error sending request".to_owned()));
    assert_eq!(notice.message, "error sending request");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn interval_refresh_only_on_success() {
    assert!(interval_change_refreshes(&Ok(reply(true, "updated"))));
    assert!(!interval_change_refreshes(&Ok(reply(false, "invalid interval"))));
    assert!(!interval_change_refreshes(&Err("boom".to_owned())));
}
