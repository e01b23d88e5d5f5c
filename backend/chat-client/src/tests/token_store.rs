// Unit tests for both TokenStore implementations.

use crate::error::token_store::TokenStoreError;
use crate::token_store::{FileTokenStore, InMemoryTokenStore, TokenStore};

use common::AccessToken;

// ----------------------------------------------------------------------------
// InMemoryTokenStore
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the set/get/remove lifecycle of the in-memory store.
///
/// **WHY THIS MATTERS**: This store backs most tests and short-lived
/// callers; if its lifecycle is wrong, the Authorization header
/// toggles incorrectly everywhere downstream.
///
/// **BUG THIS CATCHES**: Would catch `set` appending instead of
/// replacing, or `remove` leaving a stale token behind.
#[test]
fn given_memory_store_when_set_get_remove_cycled_then_state_tracks_calls() {
    // GIVEN: An empty store
    let store = InMemoryTokenStore::new();
    assert!(store.get().unwrap().is_none(), "fresh store must be empty");

    // WHEN: Setting a token
    store.set(AccessToken::new(String::from("first"))).unwrap();

    // THEN: It reads back
    assert_eq!(store.get().unwrap().unwrap().as_str(), "first");

    // WHEN: Replacing it
    store.set(AccessToken::new(String::from("second"))).unwrap();

    // THEN: Only the replacement is visible
    assert_eq!(store.get().unwrap().unwrap().as_str(), "second");

    // WHEN: Removing
    store.remove().unwrap();

    // THEN: Empty again, and removing twice is fine
    assert!(store.get().unwrap().is_none());
    assert!(store.remove().is_ok());
}

// ----------------------------------------------------------------------------
// FileTokenStore
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies that a store over a directory with no token
/// file reads as "no credential" rather than erroring.
///
/// **WHY THIS MATTERS**: First launch on a fresh machine has no token
/// file. If that read errored, the fail-open path would log a warning
/// on every single request of a brand-new install.
///
/// **BUG THIS CATCHES**: Would catch treating ENOENT as a read error.
#[test]
fn given_missing_token_file_when_get_called_then_returns_none() {
    // GIVEN: An empty directory
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at_dir(dir.path());

    // WHEN / THEN: Reading is Ok(None), not an error
    assert!(store.get().unwrap().is_none());
}

/// **VALUE**: Verifies the persisted round trip, including that the
/// file lands under the fixed key name.
///
/// **WHY THIS MATTERS**: The file is the process-external credential
/// store; a different key name or a non-JSON layout would strand
/// previously saved logins after an upgrade.
///
/// **BUG THIS CATCHES**: Would catch a rename of the `access_token`
/// key or a switch to writing the bare string.
#[test]
fn given_file_store_when_token_set_then_get_round_trips() {
    // GIVEN: A store in a sandbox directory
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at_dir(dir.path());

    // WHEN: Persisting a token
    store.set(AccessToken::new(String::from("tok-abc"))).unwrap();

    // THEN: It reads back
    assert_eq!(store.get().unwrap().unwrap().as_str(), "tok-abc");

    // AND: The on-disk form is JSON under the fixed key
    let contents = std::fs::read_to_string(dir.path().join("token.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["access_token"], "tok-abc");
}

/// **VALUE**: Verifies that `remove` deletes the file and is idempotent.
///
/// **WHY THIS MATTERS**: Logout must actually destroy the persisted
/// credential; a remove that only blanks memory leaves the token
/// readable on disk. Idempotence matters because logout paths race
/// (UI button + session-expiry handler).
///
/// **BUG THIS CATCHES**: Would catch `remove` erroring on an
/// already-removed token.
#[test]
fn given_file_store_when_remove_called_then_file_is_gone_and_repeat_is_ok() {
    // GIVEN: A store with a persisted token
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::at_dir(dir.path());
    store.set(AccessToken::new(String::from("tok"))).unwrap();

    // WHEN: Removing
    store.remove().unwrap();

    // THEN: File gone, reads as None, second remove still Ok
    assert!(!dir.path().join("token.json").exists());
    assert!(store.get().unwrap().is_none());
    assert!(store.remove().is_ok());
}

/// **VALUE**: Verifies that corrupt persisted state surfaces as a
/// Parse error instead of a panic or a silent None.
///
/// **WHY THIS MATTERS**: The file can be corrupted by a crashed
/// editor, disk issues, or a future format change. The client's
/// request path degrades fail-open on this error, but the error
/// itself must be reportable so the application can tell the user why
/// they were logged out.
///
/// **BUG THIS CATCHES**: Would catch `get` unwrapping the JSON parse.
#[test]
fn given_corrupt_token_file_when_get_called_then_parse_error() {
    // GIVEN: Garbage where the token file should be
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("token.json"), "][ not json").unwrap();
    let store = FileTokenStore::at_dir(dir.path());

    // WHEN / THEN: A Parse error, not a panic
    assert!(matches!(
        store.get(),
        Err(TokenStoreError::Parse { .. })
    ));
}

/// **VALUE**: Verifies that valid JSON missing the fixed key is
/// rejected rather than read as "no credential".
///
/// **WHY THIS MATTERS**: A present-but-wrong file means something
/// else wrote to our path; reading it as None would silently log the
/// user out and then overwrite the foreign file on next login.
///
/// **BUG THIS CATCHES**: Would catch mapping a missing key to
/// `Ok(None)`.
#[test]
fn given_token_file_without_key_when_get_called_then_parse_error() {
    // GIVEN: Valid JSON with the wrong shape
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("token.json"), r#"{"foo": 1}"#).unwrap();
    let store = FileTokenStore::at_dir(dir.path());

    // WHEN / THEN: Parse error naming the problem
    let err = store.get().unwrap_err();
    assert!(matches!(err, TokenStoreError::Parse { .. }));
    assert!(err.to_string().contains("access_token"));
}
