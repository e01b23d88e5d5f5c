//! File-backed token persistence.
//!
//! The durable analogue of a browser profile store: one JSON file,
//! `{"access_token": "..."}`, in a per-user data directory.
//!
//! Data directory lookup order:
//! 1. CHAT_CLIENT_DATA_DIR environment variable (explicit override)
//! 2. Platform data directory via the `dirs` crate

use super::{TOKEN_KEY, TokenStore};
use crate::error::token_store::TokenStoreError;

use common::{AccessToken, ErrorLocation};

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;

const TOKEN_FILE_NAME: &str = "token.json";
const DATA_DIR_ENV_VAR: &str = "CHAT_CLIENT_DATA_DIR";
const DATA_DIR_NAME: &str = "chat-client";

/// Token store persisted to `token.json` in a data directory.
///
/// Reads are plain synchronous file reads; writes go through a temp
/// file plus rename so a crash never leaves a half-written token.
pub struct FileTokenStore {
    token_path: PathBuf,
}

impl FileTokenStore {
    /// Open the store in the default data directory.
    ///
    /// # Errors
    /// Returns [`TokenStoreError::DataDirNotFound`] when neither the
    /// environment override nor a platform data directory is available.
    pub fn open_default() -> Result<Self, TokenStoreError> {
        if let Ok(custom_dir) = env::var(DATA_DIR_ENV_VAR) {
            info!("Using {DATA_DIR_ENV_VAR} override: {custom_dir}");
            return Ok(Self::at_dir(Path::new(&custom_dir)));
        }

        let data_dir = dirs::data_local_dir().ok_or(TokenStoreError::DataDirNotFound {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let store_dir = data_dir.join(DATA_DIR_NAME);
        debug!("Platform token store dir: {}", store_dir.display());

        Ok(Self::at_dir(&store_dir))
    }

    /// Open the store in an explicit directory.
    pub fn at_dir(dir: &Path) -> Self {
        Self {
            token_path: dir.join(TOKEN_FILE_NAME),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<AccessToken>, TokenStoreError> {
        if !self.token_path.exists() {
            return Ok(None);
        }

        let contents =
            std::fs::read_to_string(&self.token_path).map_err(|e| TokenStoreError::Read {
                location: ErrorLocation::from(Location::caller()),
                path: self.token_path.clone(),
                source: e,
            })?;

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| TokenStoreError::Parse {
                location: ErrorLocation::from(Location::caller()),
                path: self.token_path.clone(),
                reason: e.to_string(),
            })?;

        match value.get(TOKEN_KEY).and_then(Value::as_str) {
            Some(token) => Ok(Some(AccessToken::new(token.to_string()))),
            None => Err(TokenStoreError::Parse {
                location: ErrorLocation::from(Location::caller()),
                path: self.token_path.clone(),
                reason: format!("missing '{TOKEN_KEY}' field"),
            }),
        }
    }

    fn set(&self, token: AccessToken) -> Result<(), TokenStoreError> {
        if let Some(dir) = self.token_path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| TokenStoreError::Write {
                location: ErrorLocation::from(Location::caller()),
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let mut object = serde_json::Map::new();
        object.insert(
            TOKEN_KEY.to_string(),
            Value::String(token.as_str().to_string()),
        );
        let json = Value::Object(object).to_string();

        let temp_path = self.token_path.with_extension("json.tmp");

        // Write to temp file
        std::fs::write(&temp_path, json).map_err(|e| TokenStoreError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &self.token_path).map_err(|e| TokenStoreError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: self.token_path.clone(),
            source: e,
        })?;

        info!("Token saved to {}", self.token_path.display());
        Ok(())
    }

    fn remove(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.token_path) {
            Ok(()) => {
                info!("Token removed from {}", self.token_path.display());
                Ok(())
            }
            // Already logged out; removal is idempotent
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::Remove {
                location: ErrorLocation::from(Location::caller()),
                path: self.token_path.clone(),
                source: e,
            }),
        }
    }
}
