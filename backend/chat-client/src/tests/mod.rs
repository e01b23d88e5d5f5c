mod error;
mod token_store;
