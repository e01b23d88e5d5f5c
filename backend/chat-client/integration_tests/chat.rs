use crate::helpers::client_against;

use common::AccessToken;

use chat_client::token_store::TokenStore;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for send_message() and get_chat_history(),
// including the credential attachment properties
// ============================================================================

/// **VALUE**: Verifies the exact JSON body of send_message.
///
/// **WHY THIS MATTERS**: The chat endpoint deserializes `{"message"}`
/// strictly; a renamed field or a stringified payload turns every
/// message into a 422.
///
/// **BUG THIS CATCHES**: Would catch changing the body shape or
/// double-encoding the JSON.
#[tokio::test]
async fn given_message_when_send_message_called_then_json_body_is_transmitted() {
    // GIVEN: A stub matching the exact JSON body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .and(body_json(json!({ "message": "hi" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "hello there" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Sending a message
    let reply = client
        .send_message("hi")
        .await
        .expect("send_message should succeed");

    // THEN: The reply decoded from the stub
    assert_eq!(reply.response, "hello there");
}

/// **VALUE**: Verifies that history is fetched with GET, carries no
/// body, and preserves server order.
///
/// **WHY THIS MATTERS**: Some proxies reject GETs with bodies, and
/// the client promises to impose no reordering of the conversation.
///
/// **BUG THIS CATCHES**: Would catch switching the method, attaching
/// a spurious body, or sorting the results client side.
#[tokio::test]
async fn given_history_endpoint_when_get_chat_history_called_then_get_with_no_body() {
    // GIVEN: A stub returning two exchanges in a known order
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/chat/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "role": "user", "content": "hi" },
            { "role": "assistant", "content": "hello there", "created_at": "2026-01-01T00:00:00Z" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Fetching history
    let history = client
        .get_chat_history()
        .await
        .expect("get_chat_history should succeed");

    // THEN: Server order preserved, optional field tolerated
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, "user");
    assert_eq!(history[0].content, "hi");
    assert!(history[0].created_at.is_none());
    assert_eq!(history[1].role, "assistant");

    // AND: The transmitted request had no body
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty(), "GET must carry no body");
}

/// **VALUE**: Verifies that a stored token reaches the wire as
/// exactly `Bearer <token>` on every operation.
///
/// **WHY THIS MATTERS**: This is the central contract of the client:
/// call sites never touch auth, yet every request they make is
/// authenticated. The stub only matches the exact header, so a
/// malformed value fails the mock expectation.
///
/// **BUG THIS CATCHES**: Would catch the interceptor being dropped
/// from any single operation's request path.
#[tokio::test]
async fn given_stored_token_when_operations_called_then_bearer_header_on_every_request() {
    // GIVEN: A token in the store and stubs that require the header
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/chat/history"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let (client, store) = client_against(&server.uri());
    store
        .set(AccessToken::new(String::from("tok-123")))
        .unwrap();

    // WHEN: Calling both authenticated operations
    client.send_message("hi").await.expect("send should succeed");
    client
        .get_chat_history()
        .await
        .expect("history should succeed");

    // THEN: expect(1) on each header-matching stub verifies on drop
}

/// **VALUE**: Verifies that with no stored token the header is
/// entirely absent.
///
/// **WHY THIS MATTERS**: Sending `Authorization: Bearer` with an
/// empty or placeholder value is not the same as sending nothing;
/// strict servers reject the former as malformed instead of treating
/// the request as anonymous.
///
/// **BUG THIS CATCHES**: Would catch an interceptor that always
/// inserts the header.
#[tokio::test]
async fn given_no_token_when_operation_called_then_no_authorization_header() {
    // GIVEN: An empty store and a permissive stub
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/chat/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let (client, _store) = client_against(&server.uri());

    // WHEN: Calling without a token
    client
        .get_chat_history()
        .await
        .expect("history should succeed");

    // THEN: The recorded request has no Authorization header
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "unauthenticated request must omit the header"
    );
}

/// **VALUE**: Verifies that setting then removing the token toggles
/// the header on exactly the expected calls.
///
/// **WHY THIS MATTERS**: Login followed by logout is the normal
/// session lifecycle. A token cached anywhere outside the store would
/// keep authenticating requests after logout — a real credential
/// leak, not a cosmetic bug.
///
/// **BUG THIS CATCHES**: Would catch the client caching the token at
/// construction instead of reading the store per request.
#[tokio::test]
async fn given_token_set_then_removed_when_calls_made_then_header_toggles() {
    // GIVEN: A permissive chat stub and a store handle
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
        .mount(&server)
        .await;
    let (client, store) = client_against(&server.uri());

    // WHEN: One call with the token, one after removing it
    store.set(AccessToken::new(String::from("tok-9"))).unwrap();
    client.send_message("first").await.expect("first call");
    store.remove().unwrap();
    client.send_message("second").await.expect("second call");

    // THEN: Header present on exactly the first request
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer tok-9"
    );
    assert!(!requests[1].headers.contains_key("authorization"));
}
