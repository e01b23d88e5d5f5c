// Unit tests for the error umbrella.

use crate::error::{ChatClientError, ClientError, TokenStoreError};

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that module errors convert into ClientError
/// and keep their message through the transparent wrapper.
///
/// **WHY THIS MATTERS**: Applications that do not care which module
/// failed hold a single `ClientError`; if the transparent forwarding
/// breaks, their logs show a wrapper name instead of the diagnostic.
///
/// **BUG THIS CATCHES**: Would catch replacing
/// `#[error(transparent)]` with a formatted variant that hides the
/// source message.
#[test]
fn given_module_errors_when_wrapped_then_display_is_transparent() {
    // GIVEN: Errors from two different modules
    let client_err = ChatClientError::Transport {
        message: String::from("connection refused"),
        location: ErrorLocation::from(Location::caller()),
    };
    let store_err = TokenStoreError::Poisoned {
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Converting through From
    let wrapped_client: ClientError = client_err.into();
    let wrapped_store: ClientError = store_err.into();

    // THEN: Display forwards to the inner error
    assert!(wrapped_client.to_string().contains("connection refused"));
    assert!(wrapped_store.to_string().contains("Poisoned"));
}

/// **VALUE**: Verifies that the status accessor only answers for
/// status errors.
///
/// **WHY THIS MATTERS**: Callers branch with
/// `err.status().is_some_and(|s| s.is_auth_failure())`; a Transport
/// error reporting a status would trigger spurious re-login flows.
///
/// **BUG THIS CATCHES**: Would catch `status()` fabricating a code
/// for non-status variants.
#[test]
fn given_transport_error_when_status_queried_then_none() {
    let err = ChatClientError::Transport {
        message: String::from("dns failure"),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(err.status().is_none());
}
