//! Configuration types for hearing scheduling.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`CalendarPolicy`] assembled from them.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::error::{EngineError, EngineResult};

/// Metadata about the office operating the hearing calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct OfficeMetadata {
    /// The human-readable name of the office.
    pub name: String,
    /// The jurisdiction code the calendar applies to (e.g., "AR-K").
    pub jurisdiction: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// A configured non-working day.
#[derive(Debug, Clone, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// Holiday calendar file structure (`holidays/<year>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendar {
    /// The holidays listed in this file.
    pub holidays: Vec<Holiday>,
}

/// Slot table file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct SlotTable {
    /// The daily time slots, in listing order.
    pub time_labels: Vec<String>,
    /// Hearings that can run in parallel within one slot.
    pub capacity_per_slot: u32,
}

/// The validated calendar policy driving slot allocation.
///
/// A policy combines the slot table with the holiday exclusion set and the
/// implicit weekend rule. Construction validates the configuration so the
/// allocator never has to deal with a zero-capacity or label-free
/// calendar (those would schedule nothing, silently, forever).
///
/// # Example
///
/// ```
/// use hearing_engine::config::CalendarPolicy;
/// use std::collections::BTreeSet;
///
/// let policy = CalendarPolicy::new(
///     vec!["08:00".to_string(), "09:00".to_string()],
///     2,
///     BTreeSet::new(),
/// ).unwrap();
/// assert_eq!(policy.daily_capacity(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPolicy {
    excluded_dates: BTreeSet<NaiveDate>,
    time_labels: Vec<String>,
    capacity_per_slot: u32,
}

impl CalendarPolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] if the slot table is empty,
    /// contains duplicate labels, or has a capacity below 1.
    pub fn new(
        time_labels: Vec<String>,
        capacity_per_slot: u32,
        excluded_dates: BTreeSet<NaiveDate>,
    ) -> EngineResult<Self> {
        if time_labels.is_empty() {
            return Err(EngineError::InvalidPolicy {
                field: "time_labels".to_string(),
                message: "at least one time slot is required".to_string(),
            });
        }

        let mut seen = BTreeSet::new();
        for label in &time_labels {
            if !seen.insert(label.as_str()) {
                return Err(EngineError::InvalidPolicy {
                    field: "time_labels".to_string(),
                    message: format!("duplicate time slot '{}'", label),
                });
            }
        }

        if capacity_per_slot == 0 {
            return Err(EngineError::InvalidPolicy {
                field: "capacity_per_slot".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            excluded_dates,
            time_labels,
            capacity_per_slot,
        })
    }

    /// Returns the daily time slots in allocation order.
    pub fn time_labels(&self) -> &[String] {
        &self.time_labels
    }

    /// Returns the number of hearings one slot can hold.
    pub fn capacity_per_slot(&self) -> u32 {
        self.capacity_per_slot
    }

    /// Returns the holiday exclusion set.
    pub fn excluded_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.excluded_dates
    }

    /// Returns `true` if the date is a configured holiday.
    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.excluded_dates.contains(&date)
    }

    /// Returns the number of hearings a full business day can hold.
    pub fn daily_capacity(&self) -> usize {
        self.time_labels.len() * self.capacity_per_slot as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_policy() {
        let policy =
            CalendarPolicy::new(labels(&["08:00", "09:00"]), 2, BTreeSet::new()).unwrap();
        assert_eq!(policy.time_labels().len(), 2);
        assert_eq!(policy.capacity_per_slot(), 2);
        assert_eq!(policy.daily_capacity(), 4);
    }

    #[test]
    fn test_empty_time_labels_rejected() {
        let result = CalendarPolicy::new(vec![], 2, BTreeSet::new());
        match result {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "time_labels");
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_duplicate_time_labels_rejected() {
        let result = CalendarPolicy::new(labels(&["08:00", "08:00"]), 2, BTreeSet::new());
        match result {
            Err(EngineError::InvalidPolicy { field, message }) => {
                assert_eq!(field, "time_labels");
                assert!(message.contains("08:00"));
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = CalendarPolicy::new(labels(&["08:00"]), 0, BTreeSet::new());
        match result {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "capacity_per_slot");
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_is_excluded() {
        let mut excluded = BTreeSet::new();
        excluded.insert(make_date("2025-05-01"));
        let policy = CalendarPolicy::new(labels(&["08:00"]), 1, excluded).unwrap();

        assert!(policy.is_excluded(make_date("2025-05-01")));
        assert!(!policy.is_excluded(make_date("2025-05-02")));
    }
}
