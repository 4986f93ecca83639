use teloxide::prelude::*;

use crate::bot::state::HandlerResult;
use crate::utils::feedback::OrderFeedback;

const GREETINGS: &[&str] = &["ok", "thanks", "thank you", "hello", "hi"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoReply {
    UnknownCommand(String),
    Greeting,
    NotUnderstood,
}

/// Classifies text received while no order is in progress.
pub fn classify(text: &str) -> AutoReply {
    let text = text.trim();
    if text.starts_with('/') {
        let command = text.split_whitespace().next().unwrap_or(text);
        return AutoReply::UnknownCommand(command.to_string());
    }

    let lowered = text.to_lowercase();
    if GREETINGS.contains(&lowered.as_str()) {
        AutoReply::Greeting
    } else {
        AutoReply::NotUnderstood
    }
}

pub async fn handle_general_message(bot: Bot, msg: Message) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match classify(text) {
        AutoReply::UnknownCommand(command) => {
            let feedback = OrderFeedback::new(bot, msg.chat.id);
            feedback
                .validation_error(
                    &format!("Unknown command: {command}"),
                    "Use /start to place an order, /support for help or /help to list commands.",
                )
                .await?;
        }
        AutoReply::Greeting => {
            bot.send_message(msg.chat.id, "😊 You're welcome! Use /start to place a new order.")
                .await?;
        }
        AutoReply::NotUnderstood => {
            bot.send_message(
                msg.chat.id,
                "🤔 I didn't understand. Use /start to place an order or /support for help.",
            )
            .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("Thank you"), AutoReply::Greeting);
        assert_eq!(classify(" hi "), AutoReply::Greeting);
        assert_eq!(classify("/menu please"), AutoReply::UnknownCommand("/menu".to_string()));
        assert_eq!(classify("where is my food"), AutoReply::NotUnderstood);
    }
}
