// src/calendar.rs
//! Weekend-skipping trading calendar
//!
//! Only Saturdays and Sundays are excluded; exchange holidays are not
//! modelled. Every function here is pure in its date argument.

use chrono::{Datelike, NaiveDate, Weekday};

/// Check if a date is a weekend.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_trading_day(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// First trading day strictly after `from`.
///
/// Steps one calendar day at a time until it lands on a weekday. At the end
/// of chrono's representable range the last reachable date is returned.
pub fn advance_one_trading_day(from: NaiveDate) -> NaiveDate {
    let mut date = from;
    while let Some(next) = date.succ_opt() {
        date = next;
        if is_trading_day(date) {
            break;
        }
    }
    date
}

/// Lazy sequence of trading days strictly after `start`.
pub fn trading_days(start: NaiveDate) -> TradingDays {
    TradingDays { cursor: start }
}

/// Iterator returned by [`trading_days`]
#[derive(Debug, Clone)]
pub struct TradingDays {
    cursor: NaiveDate,
}

impl Iterator for TradingDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let next = advance_one_trading_day(self.cursor);
        if next == self.cursor {
            return None;
        }
        self.cursor = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_advances_one_day() {
        // 2024-06-11 is a Tuesday
        assert_eq!(advance_one_trading_day(ymd(2024, 6, 11)), ymd(2024, 6, 12));
    }

    #[test]
    fn test_friday_skips_to_monday() {
        assert_eq!(advance_one_trading_day(ymd(2024, 6, 14)), ymd(2024, 6, 17));
    }

    #[test]
    fn test_weekend_start_lands_on_monday() {
        assert_eq!(advance_one_trading_day(ymd(2024, 6, 15)), ymd(2024, 6, 17));
        assert_eq!(advance_one_trading_day(ymd(2024, 6, 16)), ymd(2024, 6, 17));
    }

    #[test]
    fn test_month_and_year_rollover() {
        // 2024-12-31 is a Tuesday, 2025-01-03 a Friday
        assert_eq!(advance_one_trading_day(ymd(2024, 12, 31)), ymd(2025, 1, 1));
        assert_eq!(advance_one_trading_day(ymd(2025, 1, 3)), ymd(2025, 1, 6));
    }

    #[test]
    fn test_trading_days_iterator() {
        let days: Vec<NaiveDate> = trading_days(ymd(2024, 6, 13)).take(4).collect();
        assert_eq!(
            days,
            vec![ymd(2024, 6, 14), ymd(2024, 6, 17), ymd(2024, 6, 18), ymd(2024, 6, 19)]
        );
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(ymd(2024, 6, 15)));
        assert!(is_weekend(ymd(2024, 6, 16)));
        assert!(!is_weekend(ymd(2024, 6, 17)));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = NaiveDate> {
            (1900i32..2200i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    NaiveDate::from_ymd_opt(year, month, day)
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_advance_is_next_weekday(start in date_strategy()) {
                let next = advance_one_trading_day(start);
                prop_assert!(next > start);
                prop_assert!(is_trading_day(next));
                prop_assert!((next - start).num_days() <= 3);
            }
        }
    }
}
