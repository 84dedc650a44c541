use super::*;

// =============================================================
// Individual shapes
// =============================================================

#[test]
fn extracts_reply_field() {
    let body = serde_json::json!({"reply": "Hello!"});
    assert_eq!(extract_reply(&body).as_deref(), Some("Hello!"));
}

#[test]
fn extracts_response_field() {
    let body = serde_json::json!({"response": "Hello!"});
    assert_eq!(extract_reply(&body).as_deref(), Some("Hello!"));
}

#[test]
fn extracts_output_field() {
    let body = serde_json::json!({"output": "Hello!"});
    assert_eq!(extract_reply(&body).as_deref(), Some("Hello!"));
}

#[test]
fn extracts_list_wrapped_output() {
    let body = serde_json::json!([{"output": "Hi there"}]);
    assert_eq!(extract_reply(&body).as_deref(), Some("Hi there"));
}

// =============================================================
// Precedence and rejection
// =============================================================

#[test]
fn reply_takes_precedence_over_response_and_output() {
    let body = serde_json::json!({
        "reply": "first",
        "response": "second",
        "output": "third"
    });
    assert_eq!(extract_reply(&body).as_deref(), Some("first"));
}

#[test]
fn response_takes_precedence_over_output() {
    let body = serde_json::json!({"response": "second", "output": "third"});
    assert_eq!(extract_reply(&body).as_deref(), Some("second"));
}

#[test]
fn rejects_unrecognized_shapes() {
    assert!(extract_reply(&serde_json::json!({})).is_none());
    assert!(extract_reply(&serde_json::json!({"message": "nope"})).is_none());
    assert!(extract_reply(&serde_json::json!("just a string")).is_none());
    assert!(extract_reply(&serde_json::json!([])).is_none());
    assert!(extract_reply(&serde_json::json!([{"reply": "wrapped wrong"}])).is_none());
}

#[test]
fn rejects_non_string_and_blank_replies() {
    assert!(extract_reply(&serde_json::json!({"reply": 42})).is_none());
    assert!(extract_reply(&serde_json::json!({"reply": "   "})).is_none());
    assert!(extract_reply(&serde_json::json!({"output": null})).is_none());
}
