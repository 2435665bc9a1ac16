//! Bookable date and time derivation.
//!
//! The salon takes appointments on the next [`MAX_BOOKABLE_DATES`] open days
//! within a rolling [`SCAN_WINDOW_DAYS`]-day window, closed on Sundays. The
//! date set is derived from an injected [`Clock`] and recomputed on every
//! call; callers must not assume it is stable across a day boundary.

use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

/// At most this many dates are offered to the customer.
pub const MAX_BOOKABLE_DATES: usize = 21;

/// Days scanned forward from tomorrow before giving up.
pub const SCAN_WINDOW_DAYS: i64 = 30;

/// The weekday the salon is closed, in chrono terms.
pub const CLOSED_WEEKDAY: chrono::Weekday = chrono::Weekday::Sun;

/// The fixed walk-in slots offered on every open day.
pub const AVAILABLE_TIMES: [&str; 7] = [
    "10:00", "11:30", "13:00", "14:30", "16:00", "17:30", "19:00",
];

const WEEKDAY_NAMES: [&str; 7] = ["週日", "週一", "週二", "週三", "週四", "週五", "週六"];

/// Source of "today". Injected so date derivation is deterministic in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date from the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// The next bookable dates as ISO `YYYY-MM-DD` strings, starting tomorrow,
/// Sundays skipped, strictly increasing.
pub fn available_dates(clock: &impl Clock) -> Vec<String> {
    let today = clock.today();
    let mut dates = Vec::new();

    for offset in 1..=SCAN_WINDOW_DAYS {
        let date = today + Duration::days(offset);
        if date.weekday() != CLOSED_WEEKDAY {
            dates.push(date.format("%Y-%m-%d").to_string());
        }
        if dates.len() >= MAX_BOOKABLE_DATES {
            break;
        }
    }

    dates
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("unrecognized calendar date: {0}")]
    InvalidDate(String),
}

/// A calendar date rendered for the date grid: `"M.DD"` plus the localized
/// short weekday name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDate {
    pub display_date: String,
    pub weekday: String,
}

pub fn format_date(date: &str) -> Result<FormattedDate, ScheduleError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(date.to_string()))?;

    Ok(FormattedDate {
        display_date: format!("{}.{:02}", parsed.month(), parsed.day()),
        weekday: WEEKDAY_NAMES[parsed.weekday().num_days_from_sunday() as usize].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn clock(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn dates_start_no_earlier_than_tomorrow() {
        // 2025-01-01 is a Wednesday.
        let dates = available_dates(&clock(2025, 1, 1));

        assert_eq!(dates.first().map(String::as_str), Some("2025-01-02"));
    }

    #[test]
    fn sundays_are_never_offered() {
        let dates = available_dates(&clock(2025, 1, 1));

        for date in &dates {
            let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
            assert_ne!(parsed.weekday(), CLOSED_WEEKDAY, "offered {}", date);
        }
    }

    #[test]
    fn at_most_twenty_one_dates_are_offered() {
        let dates = available_dates(&clock(2025, 1, 1));

        assert_eq!(dates.len(), MAX_BOOKABLE_DATES);
    }

    #[test]
    fn dates_are_strictly_increasing() {
        let dates = available_dates(&clock(2025, 6, 15));

        for window in dates.windows(2) {
            assert!(window[0] < window[1], "{} !< {}", window[0], window[1]);
        }
    }

    #[test]
    fn saturday_start_skips_the_immediate_sunday() {
        // 2025-01-04 is a Saturday, so tomorrow is a closed day.
        let dates = available_dates(&clock(2025, 1, 4));

        assert_eq!(dates.first().map(String::as_str), Some("2025-01-06"));
    }

    #[test]
    fn derivation_is_deterministic_for_a_fixed_clock() {
        let first = available_dates(&clock(2025, 3, 10));
        let second = available_dates(&clock(2025, 3, 10));

        assert_eq!(first, second);
    }

    #[test]
    fn format_date_pads_day_but_not_month() {
        let formatted = format_date("2025-01-02").unwrap();

        assert_eq!(formatted.display_date, "1.02");
        assert_eq!(formatted.weekday, "週四");
    }

    #[test]
    fn format_date_handles_sunday_weekday_name() {
        let formatted = format_date("2025-01-05").unwrap();

        assert_eq!(formatted.weekday, "週日");
    }

    #[test]
    fn format_date_rejects_garbage() {
        assert_eq!(
            format_date("not-a-date"),
            Err(ScheduleError::InvalidDate("not-a-date".to_string()))
        );
    }

    #[test]
    fn seven_times_are_offered_each_day() {
        assert_eq!(AVAILABLE_TIMES.len(), 7);
        assert_eq!(AVAILABLE_TIMES[0], "10:00");
        assert_eq!(AVAILABLE_TIMES[6], "19:00");
    }
}
