use super::*;

#[test]
fn action_reply_parses_string_message() {
    let reply: ActionReply = serde_json::from_str(r#"{"success":true,"response":"Bot activated"}"#).unwrap();
    assert!(reply.success);
    assert_eq!(reply.response, "Bot activated");
}

#[test]
fn action_reply_stringifies_structured_message() {
    let reply: ActionReply = serde_json::from_str(r#"{"success":false,"response":{"detail":"bad"}}"#).unwrap();
    assert!(!reply.success);
    assert_eq!(reply.response, r#"{"detail":"bad"}"#);
}

#[test]
fn action_reply_defaults_missing_fields() {
    let reply: ActionReply = serde_json::from_str("{}").unwrap();
    assert_eq!(reply, ActionReply::default());
}

#[test]
fn lenient_id_accepts_numbers_and_strings() {
    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_id")]
        id: String,
    }
    let numeric: Row = serde_json::from_str(r#"{"id":42}"#).unwrap();
    let text: Row = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
    assert_eq!(numeric.id, "42");
    assert_eq!(text.id, "abc");
    assert!(serde_json::from_str::<Row>(r#"{"id":true}"#).is_err());
}

#[test]
fn lenient_flag_treats_null_and_non_bools_as_false() {
    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_flag")]
        on: bool,
    }
    assert!(serde_json::from_str::<Row>(r#"{"on":true}"#).unwrap().on);
    assert!(!serde_json::from_str::<Row>(r#"{"on":null}"#).unwrap().on);
    assert!(!serde_json::from_str::<Row>(r#"{"on":"yes"}"#).unwrap().on);
}

#[test]
fn lenient_hours_accepts_numbers_and_numeric_text() {
    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_hours")]
        hours: Option<i64>,
    }
    let hours = |raw: &str| serde_json::from_str::<Row>(raw).unwrap().hours;
    assert_eq!(hours(r#"{"hours":24}"#), Some(24));
    assert_eq!(hours(r#"{"hours":"24"}"#), Some(24));
    assert_eq!(hours(r#"{"hours":6.0}"#), Some(6));
    assert_eq!(hours(r#"{"hours":" 12.0 "}"#), Some(12));
    assert_eq!(hours(r#"{"hours":"abc"}"#), None);
    assert_eq!(hours(r#"{"hours":null}"#), None);
}

#[test]
fn settle_all_concatenates_successes_in_order() {
    let outcomes: Vec<Result<Vec<u8>, &str>> = vec![Ok(vec![1, 2]), Ok(vec![3])];
    let (items, failures) = settle_all(outcomes);
    assert_eq!(items, vec![1, 2, 3]);
    assert!(failures.is_empty());
}

#[test]
fn settle_all_keeps_partial_success() {
    let outcomes: Vec<Result<Vec<u8>, &str>> = vec![Err("down"), Ok(vec![7, 8])];
    let (items, failures) = settle_all(outcomes);
    assert_eq!(items, vec![7, 8]);
    assert_eq!(failures, vec!["down"]);
}

#[test]
fn settle_all_with_every_source_down_is_empty() {
    let outcomes: Vec<Result<Vec<u8>, &str>> = vec![Err("a"), Err("b")];
    let (items, failures) = settle_all(outcomes);
    assert!(items.is_empty());
    assert_eq!(failures.len(), 2);
}
