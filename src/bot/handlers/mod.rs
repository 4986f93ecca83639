pub mod callback;
pub mod conversation;
pub mod general_message;
pub mod message;

use teloxide::{
    dispatching::{dialogue, UpdateHandler},
    prelude::*,
    types::User,
};

use crate::bot::commands::Command;
use crate::bot::context::AppContext;
use crate::bot::state::{OrderDialogue, OrderState, OrderStorage};

pub struct BotHandler {
    pub ctx: AppContext,
}

impl BotHandler {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Commands first so `/start` and `/cancel` work from any step; plain
    /// text and button presses are routed by the chat's dialogue state.
    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let ctx_command = self.ctx.clone();
        let ctx_message = self.ctx.clone();
        let ctx_callback = self.ctx.clone();

        dialogue::enter::<Update, OrderStorage, OrderState, _>()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command, dialogue: OrderDialogue| {
                        let ctx = ctx_command.clone();
                        async move { message::command_handler(bot, msg, cmd, dialogue, ctx).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(
                move |bot: Bot, msg: Message, dialogue: OrderDialogue, state: OrderState| {
                    let ctx = ctx_message.clone();
                    async move { conversation::message_handler(bot, msg, dialogue, state, ctx).await }
                },
            ))
            .branch(Update::filter_callback_query().endpoint(
                move |bot: Bot, q: CallbackQuery, dialogue: OrderDialogue, state: OrderState| {
                    let ctx = ctx_callback.clone();
                    async move { callback::callback_handler(bot, q, dialogue, state, ctx).await }
                },
            ))
    }
}

/// Records the sender so the admin can reply to them later.
pub(crate) fn track_user(ctx: &AppContext, user: Option<&User>, last_message: &str) {
    if let Some(user) = user {
        ctx.sessions
            .track(user.id.0 as i64, user.username.as_deref(), last_message);
    }
}

/// Display name used in logs and order records.
pub(crate) fn display_name(user: Option<&User>) -> String {
    match user {
        Some(u) => u.username.clone().unwrap_or_else(|| u.id.0.to_string()),
        None => "unknown".to_string(),
    }
}
