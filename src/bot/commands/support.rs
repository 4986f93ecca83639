use teloxide::prelude::*;

use crate::bot::state::{HandlerResult, OrderDialogue};

pub fn support_text(contact: &str) -> String {
    format!("📞 Contact support: {contact}\nUse /start to place a new order.")
}

pub async fn handle_support(bot: Bot, msg: Message, contact: &str) -> HandlerResult {
    bot.send_message(msg.chat.id, support_text(contact)).await?;
    Ok(())
}

/// Placed orders can only be cancelled through support; this just abandons
/// the conversation.
pub async fn handle_cancel(bot: Bot, msg: Message, dialogue: OrderDialogue) -> HandlerResult {
    dialogue.exit().await?;
    bot.send_message(msg.chat.id, "❌ To cancel an order, please contact /support.").await?;
    Ok(())
}
