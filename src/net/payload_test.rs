use super::*;

fn webhook(protocol: PayloadProtocol) -> WebhookConfig {
    WebhookConfig {
        url: "https://example.test/hook".to_owned(),
        route: "general".to_owned(),
        protocol,
    }
}

// =============================================================
// Simple protocol
// =============================================================

#[test]
fn simple_payload_wire_shape() {
    let payload = OutboundPayload::build(&webhook(PayloadProtocol::Simple), None, "Hi")
        .expect("payload");

    let encoded = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(
        encoded,
        serde_json::json!({
            "route": "general",
            "message": "Hi"
        })
    );
}

#[test]
fn simple_payload_ignores_session() {
    let session = SessionId::generate();
    let payload = OutboundPayload::build(&webhook(PayloadProtocol::Simple), Some(&session), "Hi")
        .expect("payload");

    let encoded = serde_json::to_value(&payload).expect("serialize");
    assert!(encoded.get("sessionId").is_none());
}

// =============================================================
// Session protocol
// =============================================================

#[test]
fn session_payload_wire_shape() {
    let session = SessionId::generate();
    let payload = OutboundPayload::build(&webhook(PayloadProtocol::Session), Some(&session), "Hi")
        .expect("payload");

    let encoded = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(
        encoded,
        serde_json::json!({
            "action": "sendMessage",
            "sessionId": session.as_str(),
            "route": "general",
            "chatInput": "Hi",
            "metadata": { "userId": "" }
        })
    );
}

#[test]
fn session_payload_requires_session_id() {
    let result = OutboundPayload::build(&webhook(PayloadProtocol::Session), None, "Hi");
    assert!(matches!(result, Err(SendError::MissingSession)));
}
