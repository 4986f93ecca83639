use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{reply, start, support, Command};
use crate::bot::context::AppContext;
use crate::bot::handlers::{display_name, track_user};
use crate::bot::state::{HandlerResult, OrderDialogue};
use crate::utils::logging::log_command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: OrderDialogue,
    ctx: AppContext,
) -> HandlerResult {
    track_user(&ctx, msg.from(), msg.text().unwrap_or_default());

    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let name = display_name(msg.from());

    match cmd {
        Command::Help => {
            log_command("help", &name, user_id, msg.chat.id.0);
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            log_command("start", &name, user_id, msg.chat.id.0);
            start::handle_start(bot, msg, dialogue).await?;
        }
        Command::Support => {
            log_command("support", &name, user_id, msg.chat.id.0);
            support::handle_support(bot, msg, &ctx.support_contact).await?;
        }
        Command::Cancel => {
            log_command("cancel", &name, user_id, msg.chat.id.0);
            support::handle_cancel(bot, msg, dialogue).await?;
        }
        Command::Reply(args) => {
            log_command("reply", &name, user_id, msg.chat.id.0);
            reply::handle_reply(bot, msg, args, &ctx).await?;
        }
    }
    Ok(())
}
