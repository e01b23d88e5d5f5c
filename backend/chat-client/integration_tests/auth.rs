use crate::helpers::client_against;

use chat_client::error::ChatClientError;

use serde_json::json;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for authenticate()
// These exercise the wire format against a stub remote
// ============================================================================

/// **VALUE**: Verifies that login credentials go over the wire
/// form-encoded, not as JSON.
///
/// **WHY THIS MATTERS**: The login endpoint is an OAuth2 password
/// form; a JSON body is silently ignored by such endpoints and every
/// login fails with a validation error that looks like a server bug.
/// This is the one deliberate content-type asymmetry in the client.
///
/// **BUG THIS CATCHES**: Would catch someone "unifying" authenticate
/// onto the JSON path used by the other operations.
#[tokio::test]
async fn given_credentials_when_authenticate_called_then_body_is_form_encoded() {
    // GIVEN: A stub that only matches the exact form encoding
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .and(body_string("username=alice&password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Authenticating
    let session = client
        .authenticate("alice", "secret")
        .await
        .expect("authenticate should succeed");

    // THEN: The stub matched (expect(1) verifies on drop) and the
    // session decoded
    assert_eq!(session.access_token, "tok-1");
    assert_eq!(session.token_type, "bearer");
}

/// **VALUE**: Verifies the content type actually sent for login.
///
/// **WHY THIS MATTERS**: The client's default header is
/// `application/json`; the form body must override it per request,
/// not append a second content type.
///
/// **BUG THIS CATCHES**: Would catch the default header leaking
/// through onto the login request.
#[tokio::test]
async fn given_authenticate_called_then_content_type_is_form_urlencoded() {
    // GIVEN: A permissive login stub
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok" })),
        )
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Authenticating
    client
        .authenticate("alice", "secret")
        .await
        .expect("authenticate should succeed");

    // THEN: The recorded request carries the form content type
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .expect("content type should be present")
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("application/x-www-form-urlencoded"),
        "login must be form encoded, got {content_type}"
    );
}

/// **VALUE**: Verifies that a response without `token_type` still
/// decodes, defaulting to "bearer".
///
/// **WHY THIS MATTERS**: The field is boilerplate on the server side
/// and some deployments omit it; the session is still perfectly
/// usable without it.
///
/// **BUG THIS CATCHES**: Would catch making `token_type` a required
/// field.
#[tokio::test]
async fn given_response_without_token_type_when_authenticate_then_defaults_to_bearer() {
    // GIVEN: A stub that returns only the token
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok-2" })),
        )
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Authenticating
    let session = client
        .authenticate("alice", "secret")
        .await
        .expect("authenticate should succeed");

    // THEN: Default applied
    assert_eq!(session.token_type, "bearer");
}

/// **VALUE**: Verifies that rejected credentials surface as a 401
/// status error with the remote's body intact.
///
/// **WHY THIS MATTERS**: The calling application branches on this to
/// show "wrong password" instead of a generic failure; the body
/// passes through unchanged because translating it is explicitly not
/// this client's job.
///
/// **BUG THIS CATCHES**: Would catch mapping auth rejections into the
/// transport variant or swallowing the error body.
#[tokio::test]
async fn given_invalid_credentials_when_authenticate_then_401_status_error() {
    // GIVEN: A stub that rejects the login
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Incorrect username or password"
        })))
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Authenticating with bad credentials
    let err = client
        .authenticate("alice", "wrong")
        .await
        .expect_err("authenticate should fail");

    // THEN: A status error carrying 401 and the raw body
    match err {
        ChatClientError::Status { status, body, .. } => {
            assert_eq!(status.0, 401);
            assert!(status.is_auth_failure());
            assert!(body.contains("Incorrect username or password"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
