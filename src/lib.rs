//! Knopka - Telegram bot for navigating a hierarchical button menu
//!
//! The menu lives in an external admin backend behind a REST API; the bot
//! reads it, renders inline keyboards, and carries its whole navigation
//! state inside the keyboards' callback tokens, so every press is handled
//! statelessly.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors and logging
//! - `buttons`: menu tree model, serializer, token codec and traversal
//! - `api`: HTTP client for the admin backend
//! - `telegram`: bot integration and handlers

pub mod api;
pub mod buttons;
pub mod cli;
pub mod core;
pub mod telegram;

// Re-export commonly used types for convenience
pub use api::ApiClient;
pub use buttons::{resolve_token, ButtonNode, ButtonStore, FlatButton, Resolution};
pub use core::{AppError, AppResult};
pub use telegram::{schema, HandlerDeps};
