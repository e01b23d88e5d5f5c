//! Response payloads returned by the chat service.
//!
//! Pure data; unknown fields from the service are ignored so the
//! client tolerates additive server changes.

use serde::Deserialize;

/// Body of a successful login.
///
/// `access_token` arrives as a plain string here because it is wire
/// data; wrap it in [`common::AccessToken`] before storing it.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    String::from("bearer")
}

/// Body of a successful `send_message`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// One prior exchange in the chat history.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
