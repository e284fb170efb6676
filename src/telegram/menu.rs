//! Menu rendering: resolves callback tokens into screens and sends them.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

use crate::buttons::path;
use crate::buttons::{resolve_token, ButtonNode, Resolution, TraverseError};

use super::cb;
use super::types::{HandlerDeps, Interaction};

/// Menu prompt shown above every selectable listing.
pub const CHOOSE_BUTTON: &str = "Выберите кнопку:";
/// Shown when a path segment resolves to no button.
pub const BUTTON_NOT_FOUND: &str = "Кнопка не найдена.";
/// Shown for a terminal button with no description and no children.
pub const NO_DESCRIPTION: &str = "Описание отсутствует.";
/// Shown when the backend listing cannot be fetched.
pub const FETCH_FAILED: &str = "Не удалось получить список кнопок.";
/// Label of the persistent back button.
pub const BACK_LABEL: &str = "НАЗАД";

/// Handles one interaction end to end: decode, walk, render.
///
/// Every failure is converted into a single user-facing message right
/// here; nothing propagates, nothing is retried, and the next interaction
/// starts a fresh fetch-and-walk cycle from its own token.
pub async fn handle_interaction(bot: &Bot, interaction: Interaction, deps: &HandlerDeps) -> ResponseResult<()> {
    if let Interaction::ButtonPress(q) = &interaction {
        // Stop the client-side spinner before any rendering.
        let _ = bot.answer_callback_query(q.id.clone()).await;
    }

    let Some(chat_id) = interaction.chat_id() else {
        log::warn!("Interaction without an originating chat, ignoring");
        return Ok(());
    };

    let token = match interaction.token() {
        Some(data) => data.to_string(),
        None => path::root_token(),
    };

    match resolve_token(deps.store.as_ref(), &token).await {
        Ok(Resolution::Root(listing)) => {
            // Back presses restart from the bare prefix, whatever the old
            // token said.
            send_menu(bot, chat_id, &path::root_token(), &listing).await?;
        }
        Ok(Resolution::Node { terminal, children }) => {
            send_node(bot, chat_id, &token, &terminal, &children).await?;
        }
        Err(TraverseError::NodeNotFound) => {
            bot.send_message(chat_id, BUTTON_NOT_FOUND).await?;
        }
        Err(TraverseError::DepthExceeded) => {
            // No token minted by this bot gets this long.
            log::warn!("Callback token exceeds the depth cap: {}", token);
            bot.send_message(chat_id, BUTTON_NOT_FOUND).await?;
        }
        Err(TraverseError::Fetch(e)) => {
            log::error!("Failed to fetch the button listing: {}", e);
            bot.send_message(chat_id, FETCH_FAILED).await?;
        }
    }

    Ok(())
}

/// What a terminal screen should contain.
#[derive(Debug, PartialEq, Eq)]
enum NodeScreen<'a> {
    DescriptionOnly(&'a str),
    DescriptionWithMenu(&'a str),
    MenuOnly,
    NoDescription,
}

fn classify_node<'a>(terminal: &'a ButtonNode, children: &[ButtonNode]) -> NodeScreen<'a> {
    match (terminal.description_text(), children.is_empty()) {
        (Some(text), true) => NodeScreen::DescriptionOnly(text),
        (Some(text), false) => NodeScreen::DescriptionWithMenu(text),
        (None, false) => NodeScreen::MenuOnly,
        (None, true) => NodeScreen::NoDescription,
    }
}

/// Sends a terminal node according to its contents: description and/or a
/// child menu, or the no-description fallback, never an empty screen.
async fn send_node(
    bot: &Bot,
    chat_id: ChatId,
    token: &str,
    terminal: &ButtonNode,
    children: &[ButtonNode],
) -> ResponseResult<()> {
    match classify_node(terminal, children) {
        NodeScreen::DescriptionOnly(text) => {
            // Dead end: keep the back button reachable from the
            // description itself.
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(back_keyboard())
                .await?;
        }
        NodeScreen::DescriptionWithMenu(text) => {
            bot.send_message(chat_id, text).parse_mode(ParseMode::Markdown).await?;
            send_menu(bot, chat_id, token, children).await?;
        }
        NodeScreen::MenuOnly => {
            send_menu(bot, chat_id, token, children).await?;
        }
        NodeScreen::NoDescription => {
            bot.send_message(chat_id, NO_DESCRIPTION)
                .reply_markup(back_keyboard())
                .await?;
        }
    }
    Ok(())
}

/// Sends a selectable listing with the persistent back button appended.
async fn send_menu(bot: &Bot, chat_id: ChatId, token: &str, buttons: &[ButtonNode]) -> ResponseResult<()> {
    bot.send_message(chat_id, CHOOSE_BUTTON)
        .reply_markup(menu_keyboard(token, buttons))
        .await?;
    Ok(())
}

/// One row per entry in store order, back row last; each entry's callback
/// data is the current token with that entry's id appended.
fn menu_keyboard(token: &str, buttons: &[ButtonNode]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = buttons
        .iter()
        .map(|button| vec![cb(button.title.clone(), path::encode(token, button.id))])
        .collect();
    rows.push(vec![back_button()]);
    InlineKeyboardMarkup::new(rows)
}

fn back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![back_button()]])
}

fn back_button() -> InlineKeyboardButton {
    cb(BACK_LABEL, path::back_token())
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn node(id: i64, title: &str, description: Option<&str>, buttons: Vec<ButtonNode>) -> ButtonNode {
        ButtonNode {
            id,
            title: title.to_string(),
            description: description.map(str::to_string),
            buttons,
        }
    }

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("expected callback button, got {:?}", other),
        }
    }

    #[test]
    fn keyboard_mints_tokens_by_appending_ids() {
        let buttons = vec![node(1, "A", None, Vec::new()), node(2, "B", None, Vec::new())];
        let keyboard = menu_keyboard("btn", &buttons);

        assert_eq!(keyboard.inline_keyboard.len(), 3);
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), "btn:1");
        assert_eq!(callback_data(&keyboard.inline_keyboard[1][0]), "btn:2");
    }

    #[test]
    fn keyboard_appends_back_last() {
        let buttons = vec![node(1, "A", None, Vec::new())];
        let keyboard = menu_keyboard("btn:1", &buttons);

        let last_row = keyboard.inline_keyboard.last().unwrap();
        assert_eq!(last_row[0].text, BACK_LABEL);
        assert_eq!(callback_data(&last_row[0]), "btn:back");
    }

    #[test]
    fn nested_tokens_extend_the_existing_path() {
        let buttons = vec![node(7, "Deep", None, Vec::new())];
        let keyboard = menu_keyboard("btn:1:5", &buttons);
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), "btn:1:5:7");
    }

    #[test]
    fn empty_listing_still_renders_the_back_row() {
        let keyboard = menu_keyboard("btn", &[]);
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), "btn:back");
    }

    #[test]
    fn classification_covers_the_four_terminal_shapes() {
        let child = node(9, "C", None, Vec::new());

        let with_both = node(1, "A", Some("text"), Vec::new());
        assert_eq!(
            classify_node(&with_both, std::slice::from_ref(&child)),
            NodeScreen::DescriptionWithMenu("text")
        );

        let description_only = node(1, "A", Some("text"), Vec::new());
        assert_eq!(classify_node(&description_only, &[]), NodeScreen::DescriptionOnly("text"));

        let menu_only = node(1, "A", None, Vec::new());
        assert_eq!(
            classify_node(&menu_only, std::slice::from_ref(&child)),
            NodeScreen::MenuOnly
        );

        let bare = node(1, "A", None, Vec::new());
        assert_eq!(classify_node(&bare, &[]), NodeScreen::NoDescription);
    }

    #[test]
    fn empty_string_description_is_no_description() {
        let empty = node(1, "A", Some(""), Vec::new());
        assert_eq!(classify_node(&empty, &[]), NodeScreen::NoDescription);
    }
}
