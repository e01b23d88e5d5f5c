//! Credential store abstraction.
//!
//! The client reads the current token through this trait on every
//! outgoing request; it never writes. Persisting the token returned
//! by `authenticate` is the calling application's decision, which
//! keeps the facade free of storage side effects.

pub mod file;
pub mod memory;

pub use file::FileTokenStore;
pub use memory::InMemoryTokenStore;

use crate::error::token_store::TokenStoreError;

use common::AccessToken;

/// Fixed key under which the single credential is stored.
pub const TOKEN_KEY: &str = "access_token";

/// Get/set/remove contract for the single process-wide credential.
///
/// Implementations must be synchronous and must not perform network
/// I/O; `get` runs on the request path of every call the client makes.
/// At most one token is held at a time: `set` replaces, `remove`
/// deletes, nothing mutates in place.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Result<Option<AccessToken>, TokenStoreError>;

    fn set(&self, token: AccessToken) -> Result<(), TokenStoreError>;

    fn remove(&self) -> Result<(), TokenStoreError>;
}
