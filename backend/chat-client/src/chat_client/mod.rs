use crate::error::chat_client::ChatClientError;
use crate::interceptor::attach_authorization;
use crate::token_store::TokenStore;

use common::{AccessToken, ErrorLocation, HttpStatusCode};

use crate::chat_client::models::{ChatMessage, ChatReply, SessionInfo};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

pub mod models;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

const LOGIN_ENDPOINT: &str = "login";
const CHAT_ENDPOINT: &str = "chat";
const CHAT_HISTORY_ENDPOINT: &str = "chat/history";

/// HTTP client for the chat service.
///
/// Holds the base URL, the underlying transport, and the injected
/// token store; each operation is an independent async call with no
/// state shared between calls beyond the stored credential, which the
/// client only reads.
#[derive(Clone)]
pub struct ChatApiClient {
    base_url: Url,
    client: Client,
    token_store: Arc<dyn TokenStore>,
}

impl ChatApiClient {
    /// Build a client against `base_url_str` with the given token store.
    ///
    /// # Errors
    /// Returns [`ChatClientError::Configuration`] for a malformed base
    /// URL or a transport that fails to build; nothing configuration
    /// related is deferred to request time.
    pub fn new(
        base_url_str: &str,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self, ChatClientError> {
        // Url::join drops the last path segment of a base without a
        // trailing slash, which would silently lose the API prefix.
        let base_url = if base_url_str.ends_with('/') {
            Url::parse(base_url_str)?
        } else {
            Url::parse(&format!("{base_url_str}/"))?
        };

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ChatClientError::Configuration {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            base_url,
            client,
            token_store,
        })
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url, ChatClientError> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Current credential, read fail-open: a store read failure is
    /// logged and treated as "no credential" so it can never block the
    /// request pipeline. An unauthenticated request is still rejected
    /// by the remote, which is where authentication is enforced.
    fn current_token(&self) -> Option<AccessToken> {
        match self.token_store.get() {
            Ok(token) => token,
            Err(e) => {
                warn!("Token store read failed, sending request unauthenticated: {e}");
                None
            }
        }
    }

    pub(crate) fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        attach_authorization(request, self.current_token().as_ref())
    }

    async fn read_success_body(response: Response) -> Result<String, ChatClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ChatClientError::Status {
                status: HttpStatusCode::from(status.as_u16()),
                body: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(response.text().await?)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ChatClientError> {
        let body = Self::read_success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Exchange `username`/`password` for session info.
    ///
    /// The login endpoint takes an OAuth2 password form, so the body
    /// is form encoded rather than JSON; `form()` overrides the
    /// client's default JSON content type for this call only.
    ///
    /// The returned token is NOT persisted here. Whether and where to
    /// store it is the caller's decision:
    ///
    /// ```no_run
    /// # async fn doc_test() -> Result<(), Box<dyn std::error::Error>> {
    /// use chat_client::token_store::{InMemoryTokenStore, TokenStore};
    /// use chat_client::{CHAT_SERVER_BASE_URL, ChatApiClient};
    /// use common::AccessToken;
    /// use std::sync::Arc;
    ///
    /// let store = Arc::new(InMemoryTokenStore::new());
    /// let client = ChatApiClient::new(CHAT_SERVER_BASE_URL, store.clone())?;
    ///
    /// let session = client.authenticate("alice", "secret").await?;
    /// store.set(AccessToken::new(session.access_token))?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// A 401/403 [`ChatClientError::Status`] means the credentials
    /// were rejected.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionInfo, ChatClientError> {
        let url = self.endpoint_url(LOGIN_ENDPOINT)?;
        debug!("POST {url}");

        let response = self
            .prepare_request(self.client.post(url))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Send one chat message and return the service's reply.
    ///
    /// # Errors
    /// A 401 [`ChatClientError::Status`] here means the stored token
    /// is missing or expired; no re-authentication is attempted.
    pub async fn send_message(&self, message: &str) -> Result<ChatReply, ChatClientError> {
        let url = self.endpoint_url(CHAT_ENDPOINT)?;
        debug!("POST {url}");

        let body = serde_json::json!({ "message": message });

        let response = self
            .prepare_request(self.client.post(url))
            .json(&body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch prior exchanges, in whatever order the service returns
    /// them. No pagination and no reordering on this side.
    pub async fn get_chat_history(&self) -> Result<Vec<ChatMessage>, ChatClientError> {
        let url = self.endpoint_url(CHAT_HISTORY_ENDPOINT)?;
        debug!("GET {url}");

        let response = self.prepare_request(self.client.get(url)).send().await?;

        Self::decode(response).await
    }
}
