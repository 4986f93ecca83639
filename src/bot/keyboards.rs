use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::delivery::Slot;
use crate::order::MENU;

const SLOTS_PER_ROW: usize = 3;

/// Decoded inline button payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    Item(usize),
    Done,
    OrderNow,
    Schedule,
    Slot(String),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<Self> {
        let (kind, value) = data.split_once(':')?;
        match (kind, value) {
            ("item", "done") => Some(CallbackAction::Done),
            ("item", index) => index.parse().ok().map(CallbackAction::Item),
            ("type", "now") => Some(CallbackAction::OrderNow),
            ("type", "schedule") => Some(CallbackAction::Schedule),
            ("slot", time) if !time.is_empty() => Some(CallbackAction::Slot(time.to_string())),
            _ => None,
        }
    }

    pub fn data(&self) -> String {
        match self {
            CallbackAction::Item(index) => format!("item:{index}"),
            CallbackAction::Done => "item:done".to_string(),
            CallbackAction::OrderNow => "type:now".to_string(),
            CallbackAction::Schedule => "type:schedule".to_string(),
            CallbackAction::Slot(time) => format!("slot:{time}"),
        }
    }
}

/// One row per menu item; the Done row appears once the cart has something in it.
pub fn menu_keyboard(with_done: bool) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = MENU
        .iter()
        .enumerate()
        .map(|(i, item)| {
            vec![InlineKeyboardButton::callback(
                format!("{} - ₹{}", item.name, item.price),
                CallbackAction::Item(i).data(),
            )]
        })
        .collect();

    if with_done {
        rows.push(vec![InlineKeyboardButton::callback("✅ Done", CallbackAction::Done.data())]);
    }

    InlineKeyboardMarkup::new(rows)
}

pub fn order_type_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("🚀 Place Now", CallbackAction::OrderNow.data())],
        vec![InlineKeyboardButton::callback("📅 Schedule Delivery", CallbackAction::Schedule.data())],
    ])
}

pub fn slot_keyboard(slots: &[Slot]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = slots
        .chunks(SLOTS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|slot| {
                    InlineKeyboardButton::callback(
                        slot.label.clone(),
                        CallbackAction::Slot(slot.value.clone()).data(),
                    )
                })
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}
