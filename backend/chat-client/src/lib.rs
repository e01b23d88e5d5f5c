//! Authenticated HTTP client for the chat service.
//!
//! One component with three facets, composed in the request pipeline:
//! the transport client (base URL, default headers, request
//! transmission), the credential interceptor (attaches
//! `Authorization: Bearer <token>` when a token is stored), and the
//! operation facade (`authenticate`, `send_message`,
//! `get_chat_history`).
//!
//! The client performs no retries, no response caching, and no
//! automatic re-authentication; errors pass through to the caller
//! unmodified so it can branch on 401 vs 5xx vs unreachable.

pub mod error;
pub mod interceptor;
pub mod logger;
pub mod token_store;

mod chat_client;
#[cfg(test)]
mod tests;

pub use chat_client::ChatApiClient;
pub use chat_client::models::{ChatMessage, ChatReply, SessionInfo};

pub const CHAT_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const CHAT_SERVER_PORT: u16 = 8000;
pub const CHAT_API_PREFIX: &str = "/api/v1/";
pub const CHAT_SERVER_BASE_URL: &str = const_format::concatcp!(
    "http://",
    CHAT_SERVER_HOSTNAME,
    ":",
    CHAT_SERVER_PORT,
    CHAT_API_PREFIX
);
