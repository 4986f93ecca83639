use teloxide::prelude::*;

use crate::bot::context::AppContext;
use crate::bot::handlers::{display_name, general_message, track_user};
use crate::bot::keyboards::{menu_keyboard, order_type_keyboard};
use crate::bot::scheduling::{check_requested_time, hours_notice, TimeEntry};
use crate::bot::state::{HandlerResult, OrderDialogue, OrderState};
use crate::database::models::Order;
use crate::order::{menu::find_item, DeliveryMode, OrderDraft};
use crate::utils::feedback::{OrderFeedback, ProgressTracker};
use crate::utils::logging::{
    log_database_error, log_database_operation, log_order_placed, log_order_step,
    log_validation_error,
};
use crate::utils::validation::{
    is_confirmation, normalize_note, parse_quantity, validate_address, validate_mobile,
};

pub const NOTE_PROMPT: &str = "Optional: Add a note for your order (like spice level) or type 'skip':";

/// Who is talking, resolved once per update.
struct Customer {
    user_id: i64,
    name: String,
}

/// Routes free text according to the chat's current step.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    dialogue: OrderDialogue,
    state: OrderState,
    ctx: AppContext,
) -> HandlerResult {
    let text = msg.text().map(str::to_string);
    track_user(&ctx, msg.from(), text.as_deref().unwrap_or_default());

    if matches!(state, OrderState::Idle) {
        return general_message::handle_general_message(bot, msg).await;
    }

    let Some(text) = text else {
        bot.send_message(msg.chat.id, "⚠️ Please reply with a text message.").await?;
        return Ok(());
    };

    let customer = Customer {
        user_id: msg.from().map(|u| u.id.0 as i64).unwrap_or(0),
        name: display_name(msg.from()),
    };
    log_order_step(state.step_name(), &customer.name, customer.user_id, Some(text.as_str()));

    let chat_id = msg.chat.id;
    let feedback = OrderFeedback::new(bot.clone(), chat_id);

    match state {
        OrderState::EnterQuantity { mut draft, item_index } => {
            let Some(item) = find_item(item_index) else {
                bot.send_message(chat_id, "⚠️ That item is not on the menu. Select another item:")
                    .reply_markup(menu_keyboard(!draft.cart.is_empty()))
                    .await?;
                dialogue.update(OrderState::ChoosingItem { draft }).await?;
                return Ok(());
            };

            match parse_quantity(&text) {
                Ok(quantity) => {
                    draft.cart.add(item, quantity);
                    bot.send_message(chat_id, "✅ Item added! Select another item or Done:")
                        .reply_markup(menu_keyboard(true))
                        .await?;
                    dialogue.update(OrderState::ChoosingItem { draft }).await?;
                }
                Err(e) => {
                    log_validation_error("quantity", &text, &e.to_string(), &customer.name, customer.user_id);
                    feedback
                        .validation_error(&e.to_string(), "Enter a valid number for quantity, e.g. 2.")
                        .await?;
                }
            }
        }
        OrderState::EnterMobile { mut draft } => match validate_mobile(&text) {
            Ok(mobile) => {
                draft.mobile = mobile;
                bot.send_message(chat_id, "🏠 Enter your delivery address:").await?;
                dialogue.update(OrderState::EnterAddress { draft }).await?;
            }
            Err(e) => {
                log_validation_error("mobile", &text, &e.to_string(), &customer.name, customer.user_id);
                feedback
                    .validation_error(&e.to_string(), "Enter a valid mobile number, e.g. 9876543210.")
                    .await?;
            }
        },
        OrderState::EnterAddress { mut draft } => match validate_address(&text) {
            Ok(address) => {
                draft.address = address;
                bot.send_message(chat_id, "Place order now or schedule delivery?")
                    .reply_markup(order_type_keyboard())
                    .await?;
                dialogue.update(OrderState::OrderType { draft }).await?;
            }
            Err(e) => {
                log_validation_error("address", &text, &e.to_string(), &customer.name, customer.user_id);
                feedback
                    .validation_error(&e.to_string(), "Send the full delivery address in one message.")
                    .await?;
            }
        },
        OrderState::EnterTime { mut draft } => match check_requested_time(&text, ctx.now()) {
            TimeEntry::Accepted(time) => {
                draft.mode = DeliveryMode::Scheduled;
                draft.delivery_time = time;
                bot.send_message(chat_id, NOTE_PROMPT).await?;
                dialogue.update(OrderState::EnterNote { draft }).await?;
            }
            TimeEntry::InvalidFormat => {
                log_validation_error("delivery_time", &text, "invalid format", &customer.name, customer.user_id);
                feedback
                    .validation_error("Invalid time format!", "Use HH:MM, e.g. 19:30.")
                    .await?;
            }
            TimeEntry::OutsideWindow => {
                log_validation_error("delivery_time", &text, "outside window", &customer.name, customer.user_id);
                bot.send_message(
                    chat_id,
                    format!("⚠️ Delivery time must be within allowed hours ({}).", hours_notice()),
                )
                .await?;
            }
        },
        OrderState::EnterNote { mut draft } => match normalize_note(&text) {
            Ok(note) => {
                draft.note = note;
                bot.send_message(chat_id, format!("{}\nConfirm order? (yes/no)", draft.summary()))
                    .await?;
                dialogue.update(OrderState::Confirm { draft }).await?;
            }
            Err(e) => {
                log_validation_error("note", &text, &e.to_string(), &customer.name, customer.user_id);
                feedback
                    .validation_error(&e.to_string(), "Keep the note short, or type 'skip'.")
                    .await?;
            }
        },
        OrderState::Confirm { draft } => {
            if is_confirmation(&text) {
                place_order(bot, chat_id, dialogue, draft, &customer, &ctx).await?;
            } else {
                dialogue.exit().await?;
                bot.send_message(chat_id, "❌ Order canceled. For cancellation, contact /support.")
                    .await?;
            }
        }
        OrderState::ChoosingItem { .. } | OrderState::OrderType { .. } => {
            bot.send_message(chat_id, "👆 Please use the buttons above to continue.").await?;
        }
        OrderState::Idle => {}
    }

    Ok(())
}

async fn place_order(
    bot: Bot,
    chat_id: ChatId,
    dialogue: OrderDialogue,
    draft: OrderDraft,
    customer: &Customer,
    ctx: &AppContext,
) -> HandlerResult {
    let mut progress = ProgressTracker::new(OrderFeedback::new(bot, chat_id), 3);
    progress.start("Placing your order...").await?;

    log_database_operation("INSERT", "orders", Some(format!("user {}", customer.user_id).as_str()));
    let saved = Order::create(&ctx.db.pool, customer.user_id, &customer.name, &draft).await;

    // Out of Confirm before anything else can fail: a repeated "yes" must not store it twice.
    dialogue.exit().await?;

    let order = match saved {
        Ok(order) => order,
        Err(e) => {
            log_database_error("INSERT", "orders", &e.to_string());
            progress
                .error("Failed to place order. Please try again with /start or contact /support.")
                .await;
            return Ok(());
        }
    };

    progress.next_step("Order saved, notifying the kitchen...").await;

    let items = match order.items(&ctx.db.pool).await {
        Ok(items) => items,
        Err(e) => {
            log_database_error("SELECT", "order_items", &e.to_string());
            Vec::new()
        }
    };

    if let Err(e) = ctx.notifier.notify_new_order(&order, &items).await {
        tracing::warn!("Order {} saved but admin notification failed: {}", order.id, e);
    }

    log_order_placed(&order.id, &customer.name, customer.user_id, order.total_price, &order.delivery_time);
    progress.complete("Order placed successfully! 🎉").await;
    Ok(())
}
