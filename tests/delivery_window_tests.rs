use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use food_order_bot::delivery::{
    enumerate_slots, is_within_window, DeliveryError, DeliveryWindow, Slot, WeekdayClass,
};

/// Monday 2024-01-15 through Sunday 2024-01-21.
fn week() -> Vec<NaiveDate> {
    (15..=21)
        .map(|d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
        .collect()
}

fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).unwrap()
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

#[cfg(test)]
mod window_tests {
    use super::*;

    #[test]
    fn test_week_fixture_covers_every_day() {
        let days: Vec<Weekday> = week().iter().map(|d| d.weekday()).collect();
        assert_eq!(days.first(), Some(&Weekday::Mon));
        assert_eq!(days.last(), Some(&Weekday::Sun));
    }

    #[test]
    fn test_weekday_hours() {
        for date in week().into_iter().filter(|d| WeekdayClass::of(*d) == WeekdayClass::Weekday) {
            for hour in 0..24 {
                let time = format!("{hour:02}:00");
                let expected = (19..=23).contains(&hour);
                assert_eq!(
                    is_within_window(Some(&time), at(date, 12, 0)),
                    Ok(expected),
                    "{} at {}",
                    date,
                    time
                );
            }
        }
    }

    #[test]
    fn test_weekend_hours() {
        for date in week().into_iter().filter(|d| WeekdayClass::of(*d) == WeekdayClass::Weekend) {
            for hour in 0..24 {
                let time = format!("{hour:02}:00");
                let expected = (16..=23).contains(&hour);
                assert_eq!(
                    is_within_window(Some(&time), at(date, 12, 0)),
                    Ok(expected),
                    "{} at {}",
                    date,
                    time
                );
            }
        }
    }

    #[test]
    fn test_closing_boundary_on_every_day() {
        for date in week() {
            assert_eq!(is_within_window(Some("23:00"), at(date, 12, 0)), Ok(true));
            assert_eq!(is_within_window(Some("23:01"), at(date, 12, 0)), Ok(false));
        }
    }

    #[test]
    fn test_opening_boundary() {
        assert_eq!(is_within_window(Some("19:00"), at(monday(), 12, 0)), Ok(true));
        assert_eq!(is_within_window(Some("18:59"), at(monday(), 12, 0)), Ok(false));

        let saturday = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(is_within_window(Some("16:00"), at(saturday, 12, 0)), Ok(true));
        assert_eq!(is_within_window(Some("15:59"), at(saturday, 12, 0)), Ok(false));
    }

    #[test]
    fn test_current_time_is_used_when_no_time_given() {
        assert_eq!(is_within_window(None, at(monday(), 23, 0)), Ok(true));
        assert_eq!(is_within_window(None, at(monday(), 23, 1)), Ok(false));
        assert_eq!(is_within_window(None, at(monday(), 16, 30)), Ok(false));

        let sunday = NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
        assert_eq!(is_within_window(None, at(sunday, 16, 30)), Ok(true));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        for input in ["9", "25:99", "19-30", "seven", "19:3a", "  "] {
            assert_eq!(
                is_within_window(Some(input), at(monday(), 20, 0)),
                Err(DeliveryError::InvalidTimeFormat(input.to_string()))
            );
        }
    }

    #[test]
    fn test_window_selection() {
        assert_eq!(DeliveryWindow::for_date(monday()), DeliveryWindow::WEEKDAY);
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
        assert_eq!(DeliveryWindow::for_date(sunday), DeliveryWindow::WEEKEND);
    }
}

#[cfg(test)]
mod slot_tests {
    use super::*;

    fn values(slots: &[Slot]) -> Vec<&str> {
        slots.iter().map(|s| s.value.as_str()).collect()
    }

    #[test]
    fn test_before_window_starts_at_opening() {
        let slots: Vec<Slot> = enumerate_slots(at(monday(), 18, 50)).collect();
        assert_eq!(slots.first().map(|s| s.value.as_str()), Some("19:00"));
        assert_eq!(slots.first().map(|s| s.label.as_str()), Some("7:00 PM"));

        let slots: Vec<Slot> = enumerate_slots(at(monday(), 9, 0)).collect();
        assert_eq!(slots.first().map(|s| s.value.as_str()), Some("19:00"));
        assert_eq!(slots.len(), 17);
    }

    #[test]
    fn test_inside_window_starts_at_next_quarter() {
        let slots: Vec<Slot> = enumerate_slots(at(monday(), 20, 7)).collect();

        assert_eq!(slots.first().map(|s| s.value.as_str()), Some("20:15"));
        assert_eq!(slots.last().map(|s| s.value.as_str()), Some("23:00"));
        assert_eq!(slots.last().map(|s| s.label.as_str()), Some("11:00 PM"));

        let parsed: Vec<NaiveDateTime> = slots
            .iter()
            .map(|s| {
                NaiveDateTime::parse_from_str(&format!("2024-01-15 {}", s.value), "%Y-%m-%d %H:%M")
                    .unwrap()
            })
            .collect();
        for pair in parsed.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::minutes(15));
        }
    }

    #[test]
    fn test_formatting_of_every_slot() {
        let slots: Vec<Slot> = enumerate_slots(at(monday(), 20, 7)).collect();
        assert_eq!(
            values(&slots),
            vec![
                "20:15", "20:30", "20:45", "21:00", "21:15", "21:30", "21:45", "22:00", "22:15",
                "22:30", "22:45", "23:00"
            ]
        );
        assert_eq!(slots[0].label, "8:15 PM");
        assert_eq!(slots[3].label, "9:00 PM");
        for slot in &slots {
            assert_eq!(slot.value.len(), 5);
            assert!(!slot.label.starts_with('0'));
            assert!(slot.label.ends_with(" PM"));
        }
    }

    #[test]
    fn test_weekend_window_opens_earlier() {
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let slots: Vec<Slot> = enumerate_slots(at(saturday, 15, 1)).collect();
        assert_eq!(slots.first().map(|s| s.value.as_str()), Some("16:00"));
        assert_eq!(slots.first().map(|s| s.label.as_str()), Some("4:00 PM"));
        assert_eq!(slots.len(), 29);
    }

    #[test]
    fn test_exact_quarter_is_offered() {
        let slots: Vec<Slot> = enumerate_slots(at(monday(), 21, 30)).collect();
        assert_eq!(slots.first().map(|s| s.value.as_str()), Some("21:30"));
    }

    #[test]
    fn test_closing_time_is_last_slot() {
        let slots: Vec<Slot> = enumerate_slots(at(monday(), 22, 46)).collect();
        assert_eq!(values(&slots), vec!["23:00"]);

        let slots: Vec<Slot> = enumerate_slots(at(monday(), 23, 0)).collect();
        assert_eq!(values(&slots), vec!["23:00"]);
    }

    #[test]
    fn test_nothing_left_after_closing() {
        for date in week() {
            assert_eq!(enumerate_slots(at(date, 23, 5)).count(), 0);
            assert_eq!(enumerate_slots(at(date, 23, 50)).count(), 0);
        }
    }

    #[test]
    fn test_repeat_calls_agree() {
        let now = at(monday(), 19, 52);
        let first: Vec<Slot> = enumerate_slots(now).collect();
        let second: Vec<Slot> = enumerate_slots(now).collect();
        assert_eq!(first, second);

        assert_eq!(
            is_within_window(Some("20:00"), now),
            is_within_window(Some("20:00"), now)
        );
    }
}
