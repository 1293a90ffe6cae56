//! Hearing schedule models.
//!
//! A [`Schedule`] maps calendar days to the hearings placed on them. It is
//! rebuilt from scratch on every allocation run and never mutated
//! incrementally, so a caller holding an old schedule simply swaps in the
//! most recently computed one.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single hearing placed in a (date, time label) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingAssignment {
    /// The time label of the slot (e.g., "08:00").
    pub time_label: String,
    /// The identifier of the complaint being heard.
    pub complaint_id: String,
    /// The claimant's full name.
    pub claimant: String,
    /// The denounced party's name.
    pub denounced_party: String,
}

/// Mapping from calendar day to the hearings assigned on that day.
///
/// Only days that received at least one assignment are present. Within a
/// day, assignments are grouped by time label in the policy's slot order,
/// with at most `capacity_per_slot` assignments per label. Keys iterate in
/// date order, which keeps serialization deterministic.
///
/// # Example
///
/// ```
/// use hearing_engine::models::{HearingAssignment, Schedule};
/// use chrono::NaiveDate;
///
/// let mut schedule = Schedule::new();
/// let day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// schedule.insert_day(day, vec![HearingAssignment {
///     time_label: "08:00".to_string(),
///     complaint_id: "C1".to_string(),
///     claimant: "María Pérez".to_string(),
///     denounced_party: "Telecom Personal".to_string(),
/// }]);
///
/// assert_eq!(schedule.day(day).len(), 1);
/// assert_eq!(schedule.total_assignments(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, Vec<HearingAssignment>>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the assignments for a day.
    ///
    /// Empty assignment lists are dropped; a day key is only present when
    /// it received at least one hearing.
    pub fn insert_day(&mut self, date: NaiveDate, assignments: Vec<HearingAssignment>) {
        if !assignments.is_empty() {
            self.days.insert(date, assignments);
        }
    }

    /// Returns the assignments for a day, empty if the day received none.
    pub fn day(&self, date: NaiveDate) -> &[HearingAssignment] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates the scheduled days in date order.
    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &[HearingAssignment])> {
        self.days.iter().map(|(date, slots)| (date, slots.as_slice()))
    }

    /// Returns the number of days that received at least one hearing.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Returns the total number of hearings across all days.
    pub fn total_assignments(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Returns `true` if no hearings were scheduled.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
