pub mod chat_client;
pub mod logger;
pub mod token_store;

pub use chat_client::ChatClientError;
pub use logger::LoggerError;
pub use token_store::TokenStoreError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    ChatClient(#[from] chat_client::ChatClientError),

    #[error(transparent)]
    TokenStore(#[from] token_store::TokenStoreError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
