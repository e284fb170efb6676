//! Handler types and dependencies

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Message;

use crate::buttons::ButtonStore;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers.
///
/// Built once at startup and cloned into every handler closure; there is
/// no process-wide state anywhere else.
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: Arc<dyn ButtonStore>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(store: Arc<dyn ButtonStore>) -> Self {
        Self { store }
    }
}

/// One incoming user interaction, reduced to the two shapes the bot
/// reacts to. Dispatch is by pattern matching on the variant.
pub enum Interaction {
    /// A command message (`/start`).
    Command(Message),
    /// An inline-keyboard press carrying a callback token.
    ButtonPress(CallbackQuery),
}

impl Interaction {
    /// Chat to answer into; `None` for detached callback queries.
    pub fn chat_id(&self) -> Option<ChatId> {
        match self {
            Interaction::Command(msg) => Some(msg.chat.id),
            Interaction::ButtonPress(q) => q.message.as_ref().map(|m| m.chat().id),
        }
    }

    /// Callback token of the press; commands carry none and always show
    /// the root menu.
    pub fn token(&self) -> Option<&str> {
        match self {
            Interaction::Command(_) => None,
            Interaction::ButtonPress(q) => q.data.as_deref(),
        }
    }
}
