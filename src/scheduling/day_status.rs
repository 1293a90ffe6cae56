//! Day-status classification.
//!
//! This module determines whether a calendar day can hold hearings. It is
//! used by the allocator to skip non-business days and by presentation
//! code to explain why a day shows no assignments.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::CalendarPolicy;

/// The scheduling status of a calendar day.
///
/// # Example
///
/// ```
/// use hearing_engine::scheduling::DayStatus;
///
/// let status = DayStatus::Holiday;
/// assert_eq!(status.to_string(), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A working day on which hearings are held.
    Business,
    /// Saturday or Sunday.
    Weekend,
    /// A date on the configured exclusion calendar.
    Holiday,
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Business => write!(f, "Business"),
            DayStatus::Weekend => write!(f, "Weekend"),
            DayStatus::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Classifies a date under the given calendar policy.
///
/// A configured holiday takes precedence over the weekend rule, so a
/// holiday that falls on a Saturday still classifies as
/// [`DayStatus::Holiday`].
///
/// # Example
///
/// ```
/// use hearing_engine::config::CalendarPolicy;
/// use hearing_engine::scheduling::{DayStatus, classify_day};
/// use chrono::NaiveDate;
/// use std::collections::BTreeSet;
///
/// let policy = CalendarPolicy::new(
///     vec!["08:00".to_string()],
///     1,
///     BTreeSet::from([NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()]),
/// ).unwrap();
///
/// // 2025-05-01 is a Thursday, but it is on the exclusion calendar.
/// let labour_day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// assert_eq!(classify_day(labour_day, &policy), DayStatus::Holiday);
///
/// // 2025-05-02 is an ordinary Friday.
/// let friday = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
/// assert_eq!(classify_day(friday, &policy), DayStatus::Business);
/// ```
pub fn classify_day(date: NaiveDate, policy: &CalendarPolicy) -> DayStatus {
    if policy.is_excluded(date) {
        return DayStatus::Holiday;
    }
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayStatus::Weekend,
        _ => DayStatus::Business,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn policy_with_holidays(holidays: &[&str]) -> CalendarPolicy {
        let excluded: BTreeSet<NaiveDate> = holidays.iter().map(|d| make_date(d)).collect();
        CalendarPolicy::new(vec!["08:00".to_string()], 1, excluded).unwrap()
    }

    #[test]
    fn test_monday_is_business() {
        // 2026-01-12 is a Monday
        let policy = policy_with_holidays(&[]);
        assert_eq!(classify_day(make_date("2026-01-12"), &policy), DayStatus::Business);
    }

    #[test]
    fn test_friday_is_business() {
        // 2026-01-16 is a Friday
        let policy = policy_with_holidays(&[]);
        assert_eq!(classify_day(make_date("2026-01-16"), &policy), DayStatus::Business);
    }

    #[test]
    fn test_saturday_is_weekend() {
        // 2026-01-17 is a Saturday
        let policy = policy_with_holidays(&[]);
        assert_eq!(classify_day(make_date("2026-01-17"), &policy), DayStatus::Weekend);
    }

    #[test]
    fn test_sunday_is_weekend() {
        // 2026-01-18 is a Sunday
        let policy = policy_with_holidays(&[]);
        assert_eq!(classify_day(make_date("2026-01-18"), &policy), DayStatus::Weekend);
    }

    #[test]
    fn test_holiday_weekday_is_holiday() {
        // 2026-01-12 is a Monday, excluded by configuration
        let policy = policy_with_holidays(&["2026-01-12"]);
        assert_eq!(classify_day(make_date("2026-01-12"), &policy), DayStatus::Holiday);
    }

    #[test]
    fn test_holiday_takes_precedence_over_weekend() {
        // 2026-01-17 is a Saturday that is also on the exclusion calendar
        let policy = policy_with_holidays(&["2026-01-17"]);
        assert_eq!(classify_day(make_date("2026-01-17"), &policy), DayStatus::Holiday);
    }

    #[test]
    fn test_day_status_display() {
        assert_eq!(format!("{}", DayStatus::Business), "Business");
        assert_eq!(format!("{}", DayStatus::Weekend), "Weekend");
        assert_eq!(format!("{}", DayStatus::Holiday), "Holiday");
    }

    #[test]
    fn test_day_status_serialization() {
        let json = serde_json::to_string(&DayStatus::Holiday).unwrap();
        assert_eq!(json, "\"holiday\"");

        let deserialized: DayStatus = serde_json::from_str("\"business\"").unwrap();
        assert_eq!(deserialized, DayStatus::Business);
    }
}
