//! Delivery window rules.
//!
//! Decides whether an order may be placed at a given moment and lists the
//! quarter-hour delivery slots that remain for today. Everything in here is a
//! pure function of its arguments; callers pass in "now" explicitly.

pub mod slots;
pub mod window;

pub use slots::{enumerate_slots, round_up_to_quarter, Slot, Slots, SLOT_INTERVAL_MINUTES};
pub use window::{is_within_window, DeliveryWindow, TimeOfDay, WeekdayClass};

use thiserror::Error;

/// Errors produced while evaluating delivery times.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The time-of-day was not two colon-separated integers in range.
    #[error("invalid time format '{0}', expected HH:MM")]
    InvalidTimeFormat(String),
}
