//! Delivery-time decisions made during the conversation, expressed as plain
//! values so the handlers only have to render them.

use chrono::NaiveDateTime;

use crate::delivery::{
    enumerate_slots, is_within_window, DeliveryError, DeliveryWindow, Slot, TimeOfDay,
};
use crate::utils::datetime::format_clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NowDecision {
    Accept { delivery_time: String },
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOffer {
    Slots(Vec<Slot>),
    NoSlotsToday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntry {
    /// Normalised `HH:MM`.
    Accepted(String),
    InvalidFormat,
    OutsideWindow,
}

pub fn decide_order_now(now: NaiveDateTime) -> NowDecision {
    match is_within_window(None, now) {
        Ok(true) => NowDecision::Accept {
            delivery_time: format_clock(&now),
        },
        _ => NowDecision::Closed,
    }
}

pub fn offer_slots(now: NaiveDateTime) -> ScheduleOffer {
    let slots: Vec<Slot> = enumerate_slots(now).collect();
    if slots.is_empty() {
        ScheduleOffer::NoSlotsToday
    } else {
        ScheduleOffer::Slots(slots)
    }
}

/// Validates a time typed (or picked) by the customer against today's window.
pub fn check_requested_time(input: &str, now: NaiveDateTime) -> TimeEntry {
    let time: TimeOfDay = match input.parse() {
        Ok(time) => time,
        Err(DeliveryError::InvalidTimeFormat(_)) => return TimeEntry::InvalidFormat,
    };

    match is_within_window(Some(input), now) {
        Ok(true) => TimeEntry::Accepted(time.to_string()),
        Ok(false) => TimeEntry::OutsideWindow,
        Err(DeliveryError::InvalidTimeFormat(_)) => TimeEntry::InvalidFormat,
    }
}

/// A slot button is only honoured while that slot is still on offer; a
/// keyboard left open past a slot must not book it.
pub fn check_offered_slot(value: &str, now: NaiveDateTime) -> TimeEntry {
    if enumerate_slots(now).any(|slot| slot.value == value) {
        TimeEntry::Accepted(value.to_string())
    } else {
        TimeEntry::OutsideWindow
    }
}

pub fn hours_notice() -> String {
    format!(
        "weekdays {}, weekends {}",
        DeliveryWindow::WEEKDAY.describe(),
        DeliveryWindow::WEEKEND.describe()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn monday_at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_order_now_inside_window() {
        assert_eq!(
            decide_order_now(monday_at(19, 5)),
            NowDecision::Accept { delivery_time: "19:05".to_string() }
        );
    }

    #[test]
    fn test_order_now_closed() {
        assert_eq!(decide_order_now(monday_at(17, 0)), NowDecision::Closed);
        assert_eq!(decide_order_now(monday_at(23, 1)), NowDecision::Closed);
    }

    #[test]
    fn test_offer_slots() {
        match offer_slots(monday_at(22, 40)) {
            ScheduleOffer::Slots(slots) => {
                let values: Vec<&str> = slots.iter().map(|s| s.value.as_str()).collect();
                assert_eq!(values, vec!["22:45", "23:00"]);
            }
            ScheduleOffer::NoSlotsToday => panic!("expected slots"),
        }
        assert_eq!(offer_slots(monday_at(23, 5)), ScheduleOffer::NoSlotsToday);
    }

    #[test]
    fn test_check_requested_time() {
        let now = monday_at(12, 0);
        assert_eq!(check_requested_time("19:30", now), TimeEntry::Accepted("19:30".to_string()));
        assert_eq!(check_requested_time("9:5", monday_at(8, 0)), TimeEntry::OutsideWindow);
        assert_eq!(check_requested_time("23:00", now), TimeEntry::Accepted("23:00".to_string()));
        assert_eq!(check_requested_time("23:01", now), TimeEntry::OutsideWindow);
        assert_eq!(check_requested_time("9", now), TimeEntry::InvalidFormat);
        assert_eq!(check_requested_time("25:99", now), TimeEntry::InvalidFormat);
    }

    #[test]
    fn test_stale_slot_button_is_rejected() {
        let offered = match offer_slots(monday_at(19, 5)) {
            ScheduleOffer::Slots(slots) => slots,
            ScheduleOffer::NoSlotsToday => panic!("expected slots"),
        };
        assert_eq!(offered[0].value, "19:15");

        assert_eq!(
            check_offered_slot("19:15", monday_at(19, 10)),
            TimeEntry::Accepted("19:15".to_string())
        );
        assert_eq!(check_offered_slot("19:15", monday_at(22, 0)), TimeEntry::OutsideWindow);
        assert_eq!(
            check_offered_slot("22:00", monday_at(22, 0)),
            TimeEntry::Accepted("22:00".to_string())
        );
    }

    #[test]
    fn test_slot_button_outside_offer_is_rejected() {
        assert_eq!(check_offered_slot("23:15", monday_at(12, 0)), TimeEntry::OutsideWindow);
        assert_eq!(check_offered_slot("19:07", monday_at(12, 0)), TimeEntry::OutsideWindow);
        assert_eq!(check_offered_slot("23:00", monday_at(23, 5)), TimeEntry::OutsideWindow);
    }

    #[test]
    fn test_hours_notice() {
        assert_eq!(hours_notice(), "weekdays 7 PM - 11 PM, weekends 4 PM - 11 PM");
    }
}
