//! REST helper for the remote answering service.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the chat endpoint is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx statuses collapse into one error string;
//! the caller logs it and falls back to the fixed apology reply, so no
//! status-specific handling exists here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatResponse, ChatTurn};
#[cfg(feature = "hydrate")]
use super::types::ChatRequest;

/// Base URL of the answering service, inlined at build time.
///
/// When unset the endpoint degrades to the same-origin relative path.
#[cfg(feature = "hydrate")]
const API_URL: Option<&str> = option_env!("CHAT_API_URL");

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint(base: &str) -> String {
    format!("{base}/chat")
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

/// Send the submitted message plus prior turns to `POST {API_URL}/chat`.
///
/// `history` must exclude `message` itself — the service receives the new
/// message and the context separately.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or an
/// unparseable response body.
pub async fn post_chat(message: &str, history: &[ChatTurn]) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest {
            message: message.to_owned(),
            conversation_history: history.to_vec(),
        };
        let url = chat_endpoint(API_URL.unwrap_or_default());
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(chat_request_failed_message(resp.status()));
        }
        resp.json::<ChatResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, history);
        Err("not available on server".to_owned())
    }
}
