//! Printable day-sheet rows.
//!
//! The office prints one hearing listing per day: a fixed grid with one row
//! per slot seat, showing the time label only on the first seat of each
//! slot and leaving free seats blank. This module produces that grid as
//! data; the actual HTML/print rendering stays with the presentation
//! layer.

use chrono::NaiveDate;

use crate::config::CalendarPolicy;
use crate::models::{HearingAssignment, Schedule};

/// One row of the printable day listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySheetRow<'a> {
    /// The time label of the slot this row belongs to.
    pub time_label: &'a str,
    /// Whether this row is the first seat of its slot. Renderers print the
    /// time label only on the first seat.
    pub first_of_slot: bool,
    /// The hearing occupying this seat, if any.
    pub assignment: Option<&'a HearingAssignment>,
}

/// Builds the printable grid for one day.
///
/// Always returns exactly `time_labels × capacity_per_slot` rows, in slot
/// order, so a half-empty day still prints a full grid with blank seats.
///
/// # Example
///
/// ```
/// use hearing_engine::config::CalendarPolicy;
/// use hearing_engine::export::day_sheet;
/// use hearing_engine::models::Schedule;
/// use chrono::NaiveDate;
/// use std::collections::BTreeSet;
///
/// let policy = CalendarPolicy::new(
///     vec!["08:00".to_string(), "09:00".to_string()],
///     2,
///     BTreeSet::new(),
/// ).unwrap();
///
/// let schedule = Schedule::new();
/// let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let rows = day_sheet(&schedule, date, &policy);
/// assert_eq!(rows.len(), 4);
/// assert!(rows.iter().all(|row| row.assignment.is_none()));
/// ```
pub fn day_sheet<'a>(
    schedule: &'a Schedule,
    date: NaiveDate,
    policy: &'a CalendarPolicy,
) -> Vec<DaySheetRow<'a>> {
    let daily = schedule.day(date);
    let mut rows = Vec::with_capacity(policy.daily_capacity());

    for time_label in policy.time_labels() {
        let seats: Vec<&HearingAssignment> = daily
            .iter()
            .filter(|a| a.time_label == *time_label)
            .collect();

        for seat in 0..policy.capacity_per_slot() as usize {
            rows.push(DaySheetRow {
                time_label,
                first_of_slot: seat == 0,
                assignment: seats.get(seat).copied(),
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_policy(labels: &[&str], capacity: u32) -> CalendarPolicy {
        CalendarPolicy::new(
            labels.iter().map(|s| s.to_string()).collect(),
            capacity,
            BTreeSet::new(),
        )
        .unwrap()
    }

    fn make_assignment(time_label: &str, complaint_id: &str) -> HearingAssignment {
        HearingAssignment {
            time_label: time_label.to_string(),
            complaint_id: complaint_id.to_string(),
            claimant: format!("Claimant {}", complaint_id),
            denounced_party: "Company".to_string(),
        }
    }

    #[test]
    fn test_empty_day_produces_blank_grid() {
        let policy = make_policy(&["08:00", "09:00"], 2);
        let schedule = Schedule::new();

        let rows = day_sheet(&schedule, make_date("2025-06-10"), &policy);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.assignment.is_none()));
    }

    #[test]
    fn test_partially_filled_day() {
        let policy = make_policy(&["08:00", "09:00"], 2);
        let mut schedule = Schedule::new();
        let date = make_date("2025-06-10");
        schedule.insert_day(
            date,
            vec![
                make_assignment("08:00", "C1"),
                make_assignment("08:00", "C2"),
                make_assignment("09:00", "C3"),
            ],
        );

        let rows = day_sheet(&schedule, date, &policy);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].assignment.unwrap().complaint_id, "C1");
        assert_eq!(rows[1].assignment.unwrap().complaint_id, "C2");
        assert_eq!(rows[2].assignment.unwrap().complaint_id, "C3");
        assert!(rows[3].assignment.is_none());
    }

    #[test]
    fn test_time_label_marked_on_first_seat_only() {
        let policy = make_policy(&["08:00"], 3);
        let schedule = Schedule::new();

        let rows = day_sheet(&schedule, make_date("2025-06-10"), &policy);
        assert!(rows[0].first_of_slot);
        assert!(!rows[1].first_of_slot);
        assert!(!rows[2].first_of_slot);
        assert!(rows.iter().all(|row| row.time_label == "08:00"));
    }

    #[test]
    fn test_rows_follow_slot_order() {
        let policy = make_policy(&["08:00", "09:00", "10:00"], 1);
        let mut schedule = Schedule::new();
        let date = make_date("2025-06-10");
        schedule.insert_day(
            date,
            vec![make_assignment("08:00", "C1"), make_assignment("09:00", "C2")],
        );

        let rows = day_sheet(&schedule, date, &policy);
        let labels: Vec<&str> = rows.iter().map(|row| row.time_label).collect();
        assert_eq!(labels, vec!["08:00", "09:00", "10:00"]);
    }
}
