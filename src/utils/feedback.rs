use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode};
use crate::utils::markdown::escape_markdown;

/// Tone of a message sent back to the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
    Processing,
}

impl FeedbackType {
    pub fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
            FeedbackType::Processing => "⏳",
        }
    }
}

/// Renders a feedback line as MarkdownV2 text.
pub fn format_feedback(feedback_type: FeedbackType, message: &str) -> String {
    format!("{} {}", feedback_type.emoji(), escape_markdown(message))
}

/// Renders a validation failure together with a hint for the customer.
pub fn format_validation_error(error: &str, suggestion: &str) -> String {
    format!(
        "{} {}\n\n💡 *Suggestion:* {}",
        FeedbackType::Error.emoji(),
        escape_markdown(error),
        escape_markdown(suggestion)
    )
}

/// Sends consistently formatted replies to one chat
#[derive(Clone)]
pub struct OrderFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl OrderFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, format_feedback(feedback_type, message))
            .parse_mode(ParseMode::MarkdownV2)
            .await
    }

    pub async fn update_message(
        &self,
        message_id: MessageId,
        feedback_type: FeedbackType,
        message: &str,
    ) -> ResponseResult<Message> {
        self.bot
            .edit_message_text(self.chat_id, message_id, format_feedback(feedback_type, message))
            .parse_mode(ParseMode::MarkdownV2)
            .await
    }

    /// Rejected input plus what the customer should type instead
    pub async fn validation_error(&self, error: &str, suggestion: &str) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, format_validation_error(error, suggestion))
            .parse_mode(ParseMode::MarkdownV2)
            .await
    }
}

/// Single status message edited in place while an order is being placed
pub struct ProgressTracker {
    feedback: OrderFeedback,
    message_id: Option<MessageId>,
    total_steps: u32,
    current_step: u32,
}

impl ProgressTracker {
    pub fn new(feedback: OrderFeedback, total_steps: u32) -> Self {
        Self {
            feedback,
            message_id: None,
            total_steps,
            current_step: 0,
        }
    }

    pub async fn start(&mut self, initial_message: &str) -> ResponseResult<()> {
        let progress_message = format!("{} (1/{})", initial_message, self.total_steps);
        let message = self.feedback.send(FeedbackType::Processing, &progress_message).await?;
        self.message_id = Some(message.id);
        self.current_step = 1;
        Ok(())
    }

    /// Edits after [`start`](Self::start) are cosmetic: a failed edit is
    /// logged and never interrupts the caller.
    pub async fn next_step(&mut self, step_message: &str) {
        if let Some(message_id) = self.message_id {
            self.current_step += 1;
            let progress_message = format!("{} ({}/{})", step_message, self.current_step, self.total_steps);
            self.edit(message_id, FeedbackType::Processing, &progress_message).await;
        }
    }

    pub async fn complete(&mut self, completion_message: &str) {
        if let Some(message_id) = self.message_id {
            self.edit(message_id, FeedbackType::Success, completion_message).await;
        }
    }

    pub async fn error(&mut self, error_message: &str) {
        if let Some(message_id) = self.message_id {
            self.edit(message_id, FeedbackType::Error, error_message).await;
        }
    }

    async fn edit(&self, message_id: MessageId, feedback_type: FeedbackType, text: &str) {
        if let Err(e) = self.feedback.update_message(message_id, feedback_type, text).await {
            tracing::warn!("Progress update failed for chat {}: {}", self.feedback.chat_id, e);
        }
    }
}
