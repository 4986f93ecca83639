use super::cart::Cart;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliveryMode {
    #[default]
    Now,
    Scheduled,
}

/// Everything collected from the customer so far. Fields are filled in the
/// order the conversation asks for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub cart: Cart,
    pub mobile: String,
    pub address: String,
    pub mode: DeliveryMode,
    /// `HH:MM`, today.
    pub delivery_time: String,
    pub note: String,
}

impl OrderDraft {
    pub fn summary(&self) -> String {
        let note = if self.note.is_empty() { "-" } else { self.note.as_str() };
        format!(
            "🧾 Order Summary:\n{}\n🕒 Delivery Time: {}\n📝 Note: {}\n💰 Total: ₹{}",
            self.cart.itemised(),
            self.delivery_time,
            note,
            self.cart.total()
        )
    }
}
