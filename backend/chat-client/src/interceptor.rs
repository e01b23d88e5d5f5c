//! Credential attachment for outgoing requests.
//!
//! Modeled as a pure function over the request builder rather than a
//! hidden pre-request callback, so the authorization contract can be
//! tested without a transport. [`crate::ChatApiClient`] composes it
//! visibly in its request-building path.

use common::AccessToken;

use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;

/// Attach `Authorization: Bearer <token>` when a token is present.
///
/// With `None` the builder passes through untouched; an
/// unauthenticated request is still a valid request, and rejecting it
/// is the remote service's job.
pub fn attach_authorization(request: RequestBuilder, token: Option<&AccessToken>) -> RequestBuilder {
    match token {
        Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token.as_str())),
        None => request,
    }
}
