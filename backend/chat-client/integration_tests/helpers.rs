use chat_client::ChatApiClient;
use chat_client::token_store::InMemoryTokenStore;

use std::sync::Arc;

/// Build a client pointed at a stub server, plus a handle to its
/// token store so tests can toggle the credential between calls.
pub fn client_against(server_uri: &str) -> (ChatApiClient, Arc<InMemoryTokenStore>) {
    let store = Arc::new(InMemoryTokenStore::new());
    let base_url = format!("{server_uri}/api/v1/");
    let client = ChatApiClient::new(&base_url, store.clone()).expect("client should build");
    (client, store)
}
