use super::TokenStore;
use crate::error::token_store::TokenStoreError;

use common::{AccessToken, ErrorLocation};

use std::panic::Location;
use std::sync::{Mutex, MutexGuard};

/// Process-local token store backed by a mutex.
///
/// Suitable for tests and short-lived callers that re-authenticate on
/// every start. Nothing survives the process.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<AccessToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<AccessToken>>, TokenStoreError> {
        self.token.lock().map_err(|_| TokenStoreError::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self) -> Result<Option<AccessToken>, TokenStoreError> {
        Ok(self.lock()?.clone())
    }

    fn set(&self, token: AccessToken) -> Result<(), TokenStoreError> {
        *self.lock()? = Some(token);
        Ok(())
    }

    fn remove(&self) -> Result<(), TokenStoreError> {
        *self.lock()? = None;
        Ok(())
    }
}
