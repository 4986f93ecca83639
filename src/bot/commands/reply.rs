use teloxide::prelude::*;

use crate::bot::context::AppContext;
use crate::bot::state::HandlerResult;

pub const USAGE: &str = "⚠️ Usage: /reply <user_id|username> <message>";

/// Splits `/reply` arguments into target and message text.
pub fn parse_reply_args(args: &str) -> Option<(String, String)> {
    let (target, message) = args.trim().split_once(char::is_whitespace)?;
    let message = message.trim();
    if target.is_empty() || message.is_empty() {
        return None;
    }
    Some((target.to_string(), message.to_string()))
}

pub async fn handle_reply(bot: Bot, msg: Message, args: String, ctx: &AppContext) -> HandlerResult {
    let sender = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    if !ctx.is_admin(sender) {
        tracing::warn!("Unauthorized /reply attempt by user {}", sender);
        bot.send_message(msg.chat.id, "❌ You are not authorized to use this command.").await?;
        return Ok(());
    }

    let Some((target, text)) = parse_reply_args(&args) else {
        bot.send_message(msg.chat.id, USAGE).await?;
        return Ok(());
    };

    let Some(user_id) = ctx.sessions.resolve(&target) else {
        let name = target.trim_start_matches('@');
        bot.send_message(msg.chat.id, format!("❌ User @{name} not found in sessions.")).await?;
        return Ok(());
    };

    match ctx.notifier.relay_support_reply(user_id, &text).await {
        Ok(()) => {
            tracing::info!("Support reply relayed to user {}", user_id);
            bot.send_message(msg.chat.id, "✅ Message sent successfully!").await?;
        }
        Err(e) => {
            tracing::error!("Failed to relay support reply to {}: {}", user_id, e);
            bot.send_message(msg.chat.id, format!("⚠️ Error: {e}")).await?;
        }
    }
    Ok(())
}
