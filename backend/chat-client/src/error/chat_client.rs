use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Errors surfaced by [`crate::ChatApiClient`] operations.
///
/// The variants are distinguishable by kind so callers can branch:
/// `Transport` means the request never completed (DNS, connection
/// refused, timeout), `Status` means the remote answered with a
/// non-success code, `Json` means the success body did not decode,
/// and `Configuration` is raised at construction time only.
#[derive(Debug, ThisError)]
pub enum ChatClientError {
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    /// Non-success response; the raw error body passes through unchanged.
    #[error("Status Error: HTTP {status} - {body} {location}")]
    Status {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Configuration Error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl ChatClientError {
    /// The HTTP status code, when the remote produced one.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ChatClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ChatClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ChatClientError::Configuration {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ChatClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ChatClientError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ChatClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ChatClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
