use teloxide::prelude::*;
use teloxide::types::InlineKeyboardMarkup;

use crate::bot::context::AppContext;
use crate::bot::handlers::conversation::NOTE_PROMPT;
use crate::bot::handlers::{display_name, track_user};
use crate::bot::keyboards::{menu_keyboard, slot_keyboard, CallbackAction};
use crate::bot::scheduling::{
    check_offered_slot, decide_order_now, hours_notice, offer_slots, NowDecision, ScheduleOffer,
    TimeEntry,
};
use crate::bot::state::{HandlerResult, OrderDialogue, OrderState};
use crate::order::{menu::find_item, DeliveryMode};
use crate::utils::logging::log_order_step;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    dialogue: OrderDialogue,
    state: OrderState,
    ctx: AppContext,
) -> HandlerResult {
    let data = q.data.clone().unwrap_or_default();
    track_user(&ctx, Some(&q.from), &data);

    let user_id = q.from.id.0 as i64;
    let name = display_name(Some(&q.from));
    tracing::info!(
        "Callback received: '{}' from user {} ({}) at step {}",
        data, name, user_id, state.step_name()
    );

    let Some(action) = CallbackAction::parse(&data) else {
        bot.answer_callback_query(q.id).text("Invalid callback data").await?;
        return Ok(());
    };
    bot.answer_callback_query(q.id).await?;

    let Some(message) = q.message else {
        return Ok(());
    };
    let chat_id = message.chat.id;

    let edit = |text: String, keyboard: Option<InlineKeyboardMarkup>| {
        let bot = bot.clone();
        let message_id = message.id;
        async move {
            let request = bot.edit_message_text(chat_id, message_id, text);
            match keyboard {
                Some(keyboard) => request.reply_markup(keyboard).await,
                None => request.await,
            }
        }
    };

    match (state, action) {
        (OrderState::ChoosingItem { draft }, CallbackAction::Done) => {
            if draft.cart.is_empty() {
                edit(
                    "⚠️ Your cart is empty! Add at least one item first.".to_string(),
                    Some(menu_keyboard(false)),
                )
                .await?;
                return Ok(());
            }
            log_order_step("cart_done", &name, user_id, Some(format!("total ₹{}", draft.cart.total()).as_str()));
            edit("📱 Enter your mobile number for delivery:".to_string(), None).await?;
            dialogue.update(OrderState::EnterMobile { draft }).await?;
        }
        (OrderState::ChoosingItem { draft }, CallbackAction::Item(index)) => match find_item(index) {
            Some(item) => {
                edit(format!("📦 Enter quantity for {}:", item.name), None).await?;
                dialogue
                    .update(OrderState::EnterQuantity { draft, item_index: index })
                    .await?;
            }
            None => {
                edit(
                    "⚠️ That item is not on the menu. Select another item:".to_string(),
                    Some(menu_keyboard(!draft.cart.is_empty())),
                )
                .await?;
            }
        },
        (OrderState::OrderType { mut draft }, CallbackAction::OrderNow) => {
            match decide_order_now(ctx.now()) {
                NowDecision::Accept { delivery_time } => {
                    draft.mode = DeliveryMode::Now;
                    draft.delivery_time = delivery_time;
                    edit(NOTE_PROMPT.to_string(), None).await?;
                    dialogue.update(OrderState::EnterNote { draft }).await?;
                }
                NowDecision::Closed => {
                    log_order_step("order_now_closed", &name, user_id, None);
                    edit(
                        format!("⚠️ Orders can only be placed during delivery hours ({}).", hours_notice()),
                        None,
                    )
                    .await?;
                    dialogue.exit().await?;
                }
            }
        }
        (OrderState::OrderType { draft }, CallbackAction::Schedule) => match offer_slots(ctx.now()) {
            ScheduleOffer::Slots(slots) => {
                edit(
                    "🕒 Pick a delivery time for today, or type one as HH:MM:".to_string(),
                    Some(slot_keyboard(&slots)),
                )
                .await?;
                dialogue.update(OrderState::EnterTime { draft }).await?;
            }
            ScheduleOffer::NoSlotsToday => {
                log_order_step("no_slots_today", &name, user_id, None);
                edit(
                    format!(
                        "⚠️ No delivery slots available today. We deliver {}. Use /start to order another day.",
                        hours_notice()
                    ),
                    None,
                )
                .await?;
                dialogue.exit().await?;
            }
        },
        (OrderState::EnterTime { mut draft }, CallbackAction::Slot(value)) => {
            match check_offered_slot(&value, ctx.now()) {
                TimeEntry::Accepted(time) => {
                    draft.mode = DeliveryMode::Scheduled;
                    draft.delivery_time = time;
                    edit(format!("🕒 Delivery at {}.\n\n{}", draft.delivery_time, NOTE_PROMPT), None).await?;
                    dialogue.update(OrderState::EnterNote { draft }).await?;
                }
                TimeEntry::InvalidFormat | TimeEntry::OutsideWindow => {
                    bot.send_message(chat_id, "⚠️ That slot is no longer available. Pick another time.")
                        .await?;
                }
            }
        }
        (state, action) => {
            tracing::debug!("Ignoring stale button {:?} at step {}", action, state.step_name());
            bot.send_message(chat_id, "⌛ This button has expired. Use /start to place a new order.")
                .await?;
        }
    }

    Ok(())
}
