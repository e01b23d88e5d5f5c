use crate::helpers::client_against;

use chat_client::error::ChatClientError;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Error taxonomy tests: Transport vs Status vs Json must stay
// distinguishable so callers can branch on them
// ============================================================================

/// **VALUE**: Verifies that a responding-but-rejecting remote yields
/// a Status error, never a Transport error.
///
/// **WHY THIS MATTERS**: The caller's recovery differs completely:
/// 401 means "re-authenticate", Transport means "check the network".
/// Conflating them sends users to the wrong fix.
///
/// **BUG THIS CATCHES**: Would catch error mapping that funnels all
/// reqwest-level failures into one variant.
#[tokio::test]
async fn given_401_response_when_send_message_then_status_error_not_transport() {
    // GIVEN: A stub that 401s everything
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Not authenticated"
        })))
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Sending a message
    let err = client
        .send_message("hi")
        .await
        .expect_err("send_message should fail");

    // THEN: Status { 401 }, and branchable via status()
    assert!(matches!(err, ChatClientError::Status { .. }));
    let status = err.status().expect("status should be present");
    assert_eq!(status.0, 401);
    assert!(status.is_auth_failure());
}

/// **VALUE**: Verifies that an unreachable remote yields a Transport
/// error, never a Status error.
///
/// **WHY THIS MATTERS**: The mirror case of the 401 test: connection
/// refused has no HTTP status, and fabricating one would mislead the
/// caller's branching.
///
/// **BUG THIS CATCHES**: Would catch error mapping that invents a
/// status (e.g. 503) for connection failures.
#[tokio::test]
async fn given_unreachable_remote_when_call_made_then_transport_error() {
    // GIVEN: A port with no listener (bind to grab a free port, then
    // release it so connecting gets refused)
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let (client, _store) = client_against(&format!("http://127.0.0.1:{port}"));

    // WHEN: Calling the dead address
    let err = client
        .get_chat_history()
        .await
        .expect_err("call should fail");

    // THEN: Transport, with no status attached
    assert!(matches!(err, ChatClientError::Transport { .. }));
    assert!(err.status().is_none());
}

/// **VALUE**: Verifies that server error bodies pass through unchanged.
///
/// **WHY THIS MATTERS**: The propagation policy is no translation, no
/// suppression: whatever diagnostic the server produced is exactly
/// what the operator sees. A "helpful" rewrite here destroys the only
/// clue to a production incident.
///
/// **BUG THIS CATCHES**: Would catch discarding or reformatting the
/// error body.
#[tokio::test]
async fn given_500_with_body_when_call_made_then_body_passes_through() {
    // GIVEN: A stub that fails with a distinctive body
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/chat/history"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database exploded"))
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Fetching history
    let err = client
        .get_chat_history()
        .await
        .expect_err("call should fail");

    // THEN: The body is carried verbatim and the code categorizes as 5xx
    match err {
        ChatClientError::Status { status, body, .. } => {
            assert_eq!(status.0, 500);
            assert!(status.is_server_error());
            assert_eq!(body, "database exploded");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that a successful status with an undecodable
/// body yields a Json error.
///
/// **WHY THIS MATTERS**: A proxy returning an HTML error page with
/// status 200 is a classic deployment failure; reporting it as a
/// decode problem (rather than transport or status) points at the
/// right layer.
///
/// **BUG THIS CATCHES**: Would catch decode failures being folded
/// into the Transport variant.
#[tokio::test]
async fn given_200_with_non_json_body_when_call_made_then_json_error() {
    // GIVEN: A stub that 200s with garbage
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Sending a message
    let err = client
        .send_message("hi")
        .await
        .expect_err("decode should fail");

    // THEN: Json variant
    assert!(matches!(err, ChatClientError::Json { .. }));
}
