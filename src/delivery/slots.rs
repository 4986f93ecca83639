use std::iter::FusedIterator;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use super::window::DeliveryWindow;

pub const SLOT_INTERVAL_MINUTES: u32 = 15;

/// A selectable delivery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Zero-padded 24h time, e.g. `19:00`. Used as the stored delivery time.
    pub value: String,
    /// 12h display text without a leading zero, e.g. `7:00 PM`.
    pub label: String,
}

impl Slot {
    fn at(instant: NaiveDateTime) -> Self {
        Self {
            value: instant.format("%H:%M").to_string(),
            label: instant.format("%-I:%M %p").to_string(),
        }
    }
}

/// Remaining delivery slots for one day, produced lazily in ascending order.
#[derive(Debug, Clone)]
pub struct Slots {
    next: NaiveDateTime,
    last: NaiveDateTime,
}

impl Iterator for Slots {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        if self.next > self.last {
            return None;
        }
        let slot = Slot::at(self.next);
        self.next += interval();
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.last {
            0
        } else {
            let minutes = (self.last - self.next).num_minutes();
            (minutes / i64::from(SLOT_INTERVAL_MINUTES)) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Slots {}

impl FusedIterator for Slots {}

/// Rounds up to the next quarter hour, dropping seconds. A time already on a
/// quarter-hour boundary is kept; `:46`-`:59` rolls into the next hour.
pub fn round_up_to_quarter(moment: NaiveDateTime) -> NaiveDateTime {
    let minutes_into_day = moment.hour() * 60 + moment.minute();
    let truncated =
        moment.date().and_time(NaiveTime::MIN) + Duration::minutes(i64::from(minutes_into_day));

    match moment.minute() % SLOT_INTERVAL_MINUTES {
        0 => truncated,
        rem => truncated + Duration::minutes(i64::from(SLOT_INTERVAL_MINUTES - rem)),
    }
}

/// Lists today's remaining delivery slots as seen from `reference`.
///
/// Starts at the later of the window opening and `reference` rounded up to
/// the next quarter hour, and ends at closing time inclusive. The iterator is
/// empty when nothing is left today; slots never spill into tomorrow.
pub fn enumerate_slots(reference: NaiveDateTime) -> Slots {
    let date = reference.date();
    let window = DeliveryWindow::for_date(date);

    let first = round_up_to_quarter(reference).max(window.opens_at(date));

    Slots {
        next: first,
        last: window.closes_at(date),
    }
}

fn interval() -> Duration {
    Duration::minutes(i64::from(SLOT_INTERVAL_MINUTES))
}
