use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::order::OrderDraft;

/// Where a chat currently is in the ordering conversation. Each step carries
/// the draft collected so far.
#[derive(Debug, Clone, Default)]
pub enum OrderState {
    #[default]
    Idle,
    ChoosingItem { draft: OrderDraft },
    EnterQuantity { draft: OrderDraft, item_index: usize },
    EnterMobile { draft: OrderDraft },
    EnterAddress { draft: OrderDraft },
    OrderType { draft: OrderDraft },
    EnterTime { draft: OrderDraft },
    EnterNote { draft: OrderDraft },
    Confirm { draft: OrderDraft },
}

impl OrderState {
    pub fn step_name(&self) -> &'static str {
        match self {
            OrderState::Idle => "idle",
            OrderState::ChoosingItem { .. } => "choosing_item",
            OrderState::EnterQuantity { .. } => "enter_quantity",
            OrderState::EnterMobile { .. } => "enter_mobile",
            OrderState::EnterAddress { .. } => "enter_address",
            OrderState::OrderType { .. } => "order_type",
            OrderState::EnterTime { .. } => "enter_time",
            OrderState::EnterNote { .. } => "enter_note",
            OrderState::Confirm { .. } => "confirm",
        }
    }
}

pub type OrderStorage = InMemStorage<OrderState>;
pub type OrderDialogue = Dialogue<OrderState, OrderStorage>;
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
