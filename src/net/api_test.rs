use super::*;

#[test]
fn chat_endpoint_appends_chat_path() {
    assert_eq!(chat_endpoint("http://localhost:8000"), "http://localhost:8000/chat");
}

#[test]
fn chat_endpoint_with_empty_base_is_relative() {
    assert_eq!(chat_endpoint(""), "/chat");
}

#[test]
fn chat_request_failed_message_formats_status() {
    assert_eq!(chat_request_failed_message(500), "chat request failed: 500");
    assert_eq!(chat_request_failed_message(404), "chat request failed: 404");
}
