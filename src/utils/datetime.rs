use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Wall-clock "now" in the business timezone. The delivery window rules
/// work on naive local times.
pub fn local_now(tz: Tz) -> NaiveDateTime {
    to_local(Utc::now(), tz)
}

pub fn to_local(instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    instant.with_timezone(&tz).naive_local()
}

pub fn format_clock(moment: &NaiveDateTime) -> String {
    moment.format("%H:%M").to_string()
}
