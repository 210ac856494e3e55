//! Date helpers shared by the booking and schedule pages.
//!
//! Every function takes `today` explicitly; views read the local clock once per
//! render pass and pass it down.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use iced_aw::date_picker::Date;

/// Calendar-day key used for per-day matching. Two timestamps fall on the same
/// day exactly when their keys are equal.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

pub fn is_tomorrow(date: NaiveDate, today: NaiveDate) -> bool {
    today.succ_opt() == Some(date)
}

/// `Today`, `Tomorrow`, or `Dec 15, 2024`.
pub fn display_label(date: NaiveDate, today: NaiveDate) -> String {
    if is_today(date, today) {
        "Today".to_string()
    } else if is_tomorrow(date, today) {
        "Tomorrow".to_string()
    } else {
        short_date(date)
    }
}

pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `December 15th, 2024`
pub fn long_date(date: NaiveDate) -> String {
    format!("{} {}{}, {}", date.format("%B"), date.day(), ordinal_suffix(date.day()), date.year())
}

pub fn clock_time(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub fn from_picker(date: Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year, date.month, date.day)
}

pub fn to_picker(date: NaiveDate) -> Date {
    Date::from_ymd(date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn labels_today_and_tomorrow() {
        let today = ymd(2024, 12, 15);
        assert_eq!(display_label(ymd(2024, 12, 15), today), "Today");
        assert_eq!(display_label(ymd(2024, 12, 16), today), "Tomorrow");
        assert_eq!(display_label(ymd(2024, 12, 18), today), "Dec 18, 2024");
        assert_eq!(display_label(ymd(2024, 12, 14), today), "Dec 14, 2024");
    }

    #[test]
    fn tomorrow_crosses_year_boundary() {
        assert!(is_tomorrow(ymd(2025, 1, 1), ymd(2024, 12, 31)));
        assert!(!is_tomorrow(ymd(2024, 12, 31), ymd(2024, 12, 31)));
    }

    #[test]
    fn long_date_uses_ordinals() {
        assert_eq!(long_date(ymd(2024, 12, 1)), "December 1st, 2024");
        assert_eq!(long_date(ymd(2024, 12, 2)), "December 2nd, 2024");
        assert_eq!(long_date(ymd(2024, 12, 13)), "December 13th, 2024");
        assert_eq!(long_date(ymd(2024, 12, 23)), "December 23rd, 2024");
    }

    #[test]
    fn clock_time_is_twelve_hour() {
        let at = ymd(2024, 12, 16).and_hms_opt(14, 30, 0).expect("valid time");
        assert_eq!(clock_time(at), "2:30 PM");
        let morning = ymd(2024, 12, 15).and_hms_opt(10, 0, 0).expect("valid time");
        assert_eq!(clock_time(morning), "10:00 AM");
    }

    #[test]
    fn picker_dates_convert_both_ways() {
        let date = ymd(2024, 2, 29);
        assert_eq!(from_picker(to_picker(date)), Some(date));
        assert_eq!(day_key(date), "2024-02-29");
    }
}
