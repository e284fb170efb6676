//! Telegram bot integration and handlers

pub mod bot;
pub mod menu;
pub mod schema;
pub mod types;

use teloxide::types::InlineKeyboardButton;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use menu::handle_interaction;
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError, Interaction};

/// Shorthand for an inline keyboard button with callback data.
pub(crate) fn cb(text: impl Into<String>, data: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text.into(), data.into())
}
