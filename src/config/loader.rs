//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the hearing
//! calendar configuration from YAML files.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CalendarPolicy, Holiday, HolidayCalendar, OfficeMetadata, SlotTable};

/// Loads and provides access to the hearing calendar configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hearings/
/// ├── office.yaml      # Office metadata
/// ├── policy.yaml      # Time slots and capacity
/// └── holidays/
///     └── 2025.yaml    # Holiday calendar for 2025
/// ```
///
/// Holiday files are per-year and merged into a single exclusion set, so
/// rolling the calendar over to a new year or jurisdiction is a
/// configuration change only.
///
/// # Example
///
/// ```no_run
/// use hearing_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/hearings").unwrap();
/// println!("Slots per day: {}", loader.policy().time_labels().len());
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    office: OfficeMetadata,
    policy: CalendarPolicy,
}

impl PolicyLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/hearings")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The assembled policy fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let office_path = path.join("office.yaml");
        let office = Self::load_yaml::<OfficeMetadata>(&office_path)?;

        let policy_path = path.join("policy.yaml");
        let slot_table = Self::load_yaml::<SlotTable>(&policy_path)?;

        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        let excluded_dates: BTreeSet<_> = holidays.iter().map(|h| h.date).collect();
        let policy = CalendarPolicy::new(
            slot_table.time_labels,
            slot_table.capacity_per_slot,
            excluded_dates,
        )?;

        Ok(Self { office, policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<HolidayCalendar>(&path)?;
                holidays.extend(calendar.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the office metadata.
    pub fn office(&self) -> &OfficeMetadata {
        &self.office
    }

    /// Returns the validated calendar policy.
    pub fn policy(&self) -> &CalendarPolicy {
        &self.policy
    }
}
