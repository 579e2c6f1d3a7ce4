use crate::models::{HistoryMessage, HistoryResponse};

fn message(json: serde_json::Value) -> HistoryMessage {
    serde_json::from_value(json).expect("valid message json")
}

#[test]
fn test_timestamp_parses_seconds_and_fraction() {
    let msg = message(serde_json::json!({
        "user": "U123",
        "ts": "1712345678.000200",
        "text": "hi"
    }));

    let ts = msg.timestamp().unwrap();
    assert_eq!(ts.timestamp(), 1712345678);
}

#[test]
fn test_timestamp_rejects_garbage() {
    let msg = message(serde_json::json!({ "ts": "not-a-number" }));
    assert!(msg.timestamp().is_none());
}

#[test]
fn test_is_user_message_filters_bots_and_subtypes() {
    let user = message(serde_json::json!({ "user": "U1", "ts": "1.0" }));
    assert!(user.is_user_message());

    let bot = message(serde_json::json!({ "user": "U1", "ts": "1.0", "bot_id": "B1" }));
    assert!(!bot.is_user_message());

    let join = message(serde_json::json!({
        "user": "U1", "ts": "1.0", "subtype": "channel_join"
    }));
    assert!(!join.is_user_message());

    let system = message(serde_json::json!({ "ts": "1.0" }));
    assert!(!system.is_user_message());
}

#[test]
fn test_history_response_error_shape() {
    let parsed: HistoryResponse =
        serde_json::from_str(r#"{"ok": false, "error": "channel_not_found"}"#).unwrap();

    assert!(!parsed.ok);
    assert_eq!(parsed.error.as_deref(), Some("channel_not_found"));
    assert!(parsed.messages.is_empty());
}
