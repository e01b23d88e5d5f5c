//! Support types for the chat API client.
//!
//! This crate contains pure data types with no business logic:
//! error-location tracking, HTTP status categorization, and the
//! redacted bearer-token wrapper. The `chat-client` crate builds its
//! request pipeline on top of these.

pub mod access_token;
pub mod error;
pub mod http_status;

#[cfg(test)]
mod tests;

pub use access_token::AccessToken;
pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
