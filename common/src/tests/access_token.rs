// Unit tests for AccessToken redaction guarantees

use crate::AccessToken;

/// **VALUE**: Verifies that `Debug` output never contains the token value.
///
/// **WHY THIS MATTERS**: Tokens routinely end up in logs through
/// `{:?}` formatting of surrounding structs. If the Debug impl leaks
/// the value, every debug log line becomes a credential disclosure.
///
/// **BUG THIS CATCHES**: Would catch if someone replaces the manual
/// Debug impl with `#[derive(Debug)]`, which would print the inner
/// string verbatim.
#[test]
fn given_token_when_debug_formatted_then_value_is_redacted() {
    // GIVEN: A token with a recognizable value
    let token = AccessToken::new(String::from("super-secret-value"));

    // WHEN: Formatting with Debug
    let output = format!("{:?}", token);

    // THEN: The value must not appear, the redaction marker must
    assert!(!output.contains("super-secret-value"), "Debug leaked token value");
    assert!(output.contains("REDACTED"), "Debug should carry redaction marker");
}

/// **VALUE**: Verifies that `Display` output never contains the token value.
///
/// **WHY THIS MATTERS**: `Display` is what `{}` formatting and
/// `to_string()` use; both are common in error messages shown to users.
///
/// **BUG THIS CATCHES**: Would catch a Display impl that forwards to
/// the inner string.
#[test]
fn given_token_when_display_formatted_then_value_is_redacted() {
    // GIVEN: A token
    let token = AccessToken::new(String::from("super-secret-value"));

    // WHEN: Formatting with Display
    let output = token.to_string();

    // THEN: Redacted
    assert!(!output.contains("super-secret-value"), "Display leaked token value");
}

/// **VALUE**: Verifies that serializing an AccessToken fails.
///
/// **WHY THIS MATTERS**: Serialization is the easiest accidental leak
/// path: a config or state struct containing a token gets serialized
/// to disk or over IPC and the credential goes with it. Refusing to
/// serialize forces call sites to opt in via `as_str()`.
///
/// **BUG THIS CATCHES**: Would catch if someone swaps the refusing
/// Serialize impl for `#[derive(Serialize)]`.
#[test]
fn given_token_when_serialized_then_returns_error() {
    // GIVEN: A token
    let token = AccessToken::new(String::from("tok"));

    // WHEN: Serializing to JSON
    let result = serde_json::to_string(&token);

    // THEN: Must fail
    assert!(result.is_err(), "AccessToken serialization must be refused");
}

/// **VALUE**: Verifies that `as_str()` still exposes the real value.
///
/// **WHY THIS MATTERS**: The redaction wrapper is useless if the one
/// sanctioned accessor returns something other than the token the
/// remote service issued; every request would then be rejected.
///
/// **BUG THIS CATCHES**: Would catch an over-eager redaction that
/// mangles the stored value itself.
#[test]
fn given_token_when_as_str_called_then_returns_original_value() {
    // GIVEN: A token
    let token = AccessToken::new(String::from("tok-123"));

    // WHEN / THEN: The sanctioned accessor returns the value
    assert_eq!(token.as_str(), "tok-123");
    assert_eq!(token.len(), 7);
    assert!(!token.is_empty());
}
