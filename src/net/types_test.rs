use super::*;
use serde_json::json;

// =============================================================
// ChatRole serialization
// =============================================================

#[test]
fn chat_role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ChatRole::User).unwrap(), json!("user"));
    assert_eq!(serde_json::to_value(ChatRole::Assistant).unwrap(), json!("assistant"));
}

#[test]
fn chat_role_deserializes_lowercase() {
    let role: ChatRole = serde_json::from_value(json!("assistant")).unwrap();
    assert_eq!(role, ChatRole::Assistant);
}

// =============================================================
// ChatRequest shape
// =============================================================

#[test]
fn chat_request_serializes_expected_fields() {
    let request = ChatRequest {
        message: "hello".to_owned(),
        conversation_history: vec![ChatTurn {
            role: ChatRole::User,
            content: "earlier".to_owned(),
        }],
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "message": "hello",
            "conversation_history": [{ "role": "user", "content": "earlier" }],
        })
    );
}

#[test]
fn chat_request_history_may_be_empty() {
    let request = ChatRequest {
        message: "first".to_owned(),
        conversation_history: Vec::new(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["conversation_history"], json!([]));
}

// =============================================================
// ChatResponse parsing
// =============================================================

#[test]
fn chat_response_parses_sources_when_present() {
    let body = json!({ "response": "A", "sources": ["S1", "S2"] });
    let parsed: ChatResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.response, "A");
    assert_eq!(parsed.sources, Some(vec!["S1".to_owned(), "S2".to_owned()]));
}

#[test]
fn chat_response_defaults_sources_to_none_when_absent() {
    let body = json!({ "response": "A" });
    let parsed: ChatResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.sources, None);
}
