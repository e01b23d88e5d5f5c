mod helpers;

mod auth;
mod chat;
mod error;
