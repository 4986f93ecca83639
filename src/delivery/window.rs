use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::DeliveryError;

/// Classification of a calendar date for window selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayClass {
    Weekday,
    Weekend,
}

impl WeekdayClass {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => WeekdayClass::Weekend,
            _ => WeekdayClass::Weekday,
        }
    }
}

/// Hour range (24h local time, inclusive on both ends) during which orders
/// are accepted and delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl DeliveryWindow {
    pub const WEEKDAY: DeliveryWindow = DeliveryWindow { start_hour: 19, end_hour: 23 };
    pub const WEEKEND: DeliveryWindow = DeliveryWindow { start_hour: 16, end_hour: 23 };

    pub fn for_class(class: WeekdayClass) -> Self {
        match class {
            WeekdayClass::Weekday => Self::WEEKDAY,
            WeekdayClass::Weekend => Self::WEEKEND,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_class(WeekdayClass::of(date))
    }

    pub fn opens_at(&self, date: NaiveDate) -> NaiveDateTime {
        start_of_day(date) + Duration::hours(i64::from(self.start_hour))
    }

    pub fn closes_at(&self, date: NaiveDate) -> NaiveDateTime {
        start_of_day(date) + Duration::hours(i64::from(self.end_hour))
    }

    /// Both bounds are inclusive: an instant exactly at closing time is
    /// still inside the window.
    pub fn contains(&self, date: NaiveDate, instant: NaiveDateTime) -> bool {
        self.opens_at(date) <= instant && instant <= self.closes_at(date)
    }

    /// Human readable range, e.g. `7 PM - 11 PM`.
    pub fn describe(&self) -> String {
        format!("{} - {}", twelve_hour(self.start_hour), twelve_hour(self.end_hour))
    }
}

/// A wall-clock time entered by a customer, interpreted as occurring today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Returns `None` when hour or minute is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        start_of_day(date) + Duration::minutes(i64::from(self.hour * 60 + self.minute))
    }
}

impl FromStr for TimeOfDay {
    type Err = DeliveryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || DeliveryError::InvalidTimeFormat(input.to_string());

        let (hour, minute) = input.trim().split_once(':').ok_or_else(invalid)?;
        let hour = parse_component(hour).ok_or_else(invalid)?;
        let minute = parse_component(minute).ok_or_else(invalid)?;

        TimeOfDay::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Checks whether `time_of_day` (or the time carried by `reference` when none
/// is given) falls inside today's delivery window.
///
/// The window is chosen from `reference`'s calendar date. A time-of-day that
/// does not parse, or is out of range, yields
/// [`DeliveryError::InvalidTimeFormat`].
pub fn is_within_window(
    time_of_day: Option<&str>,
    reference: NaiveDateTime,
) -> Result<bool, DeliveryError> {
    let date = reference.date();
    let window = DeliveryWindow::for_date(date);

    let candidate = match time_of_day {
        Some(raw) => raw.parse::<TimeOfDay>()?.on(date),
        None => reference,
    };

    Ok(window.contains(date, candidate))
}

fn parse_component(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > 2 || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn twelve_hour(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display} {suffix}")
}
