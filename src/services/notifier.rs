use teloxide::prelude::*;

use crate::database::models::{Order, OrderItem};

/// `@name` for real usernames; users without one are recorded under their
/// numeric id, which is not a valid mention.
fn mention(username: &str) -> String {
    if !username.is_empty() && username.chars().all(|c| c.is_ascii_digit()) {
        format!("user {username}")
    } else {
        format!("@{username}")
    }
}

/// Plain-text notice for the admin chat, rendered from the stored order.
pub fn format_admin_notice(order: &Order, items: &[OrderItem]) -> String {
    let note = if order.note.is_empty() { "None" } else { order.note.as_str() };

    let mut lines: Vec<String> = items
        .iter()
        .map(|i| format!("{} x {} (₹{})", i.item_name, i.quantity, i.price))
        .collect();
    if order.delivery_charge > 0 {
        lines.push(format!("🚚 Delivery charge: ₹{}", order.delivery_charge));
    }

    format!(
        "🛎 New Order from {}:\n📱 {}\n🏠 {}\n🕒 Delivery Time: {}\n📝 Note: {}\n\n{}\n💰 Total: ₹{}\n🆔 {}",
        mention(&order.username),
        order.mobile,
        order.address,
        order.delivery_time,
        note,
        lines.join("\n"),
        order.total_price,
        order.id
    )
}

#[derive(Clone)]
pub struct AdminNotifier {
    bot: Bot,
    admin_chat: ChatId,
}

impl AdminNotifier {
    pub fn new(bot: Bot, admin_chat_id: i64) -> Self {
        Self {
            bot,
            admin_chat: ChatId(admin_chat_id),
        }
    }

    pub async fn notify_new_order(&self, order: &Order, items: &[OrderItem]) -> ResponseResult<()> {
        self.bot
            .send_message(self.admin_chat, format_admin_notice(order, items))
            .await?;
        tracing::info!("Admin notified about order {}", order.id);
        Ok(())
    }

    /// Relays a support message from the admin to a customer.
    pub async fn relay_support_reply(&self, user_id: i64, text: &str) -> ResponseResult<()> {
        self.bot
            .send_message(ChatId(user_id), format!("💬 Support: {text}"))
            .await?;
        Ok(())
    }
}
