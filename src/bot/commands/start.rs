use teloxide::prelude::*;

use crate::bot::keyboards::menu_keyboard;
use crate::bot::state::{HandlerResult, OrderDialogue, OrderState};
use crate::order::{menu::menu_text, OrderDraft};

pub const WELCOME_TEXT: &str = "🍽️ Welcome to our food bot!\n\nCommands:\n/start - Show menu\n/support - Contact support\n/cancel - Cancel order (contact support)";

/// Starts a fresh order, discarding any draft in progress.
pub async fn handle_start(bot: Bot, msg: Message, dialogue: OrderDialogue) -> HandlerResult {
    bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
    bot.send_message(msg.chat.id, menu_text()).await?;
    bot.send_message(msg.chat.id, "Select an item to add to your cart:")
        .reply_markup(menu_keyboard(false))
        .await?;

    dialogue
        .update(OrderState::ChoosingItem {
            draft: OrderDraft::default(),
        })
        .await?;
    Ok(())
}
