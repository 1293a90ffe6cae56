//! Configuration loading and management for the Hearing Scheduling Engine.
//!
//! This module provides functionality to load the office calendar policy
//! from YAML files: office metadata, the daily time-slot table, and the
//! holiday exclusion calendar.
//!
//! # Example
//!
//! ```no_run
//! use hearing_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/hearings").unwrap();
//! println!("Loaded policy for: {}", loader.office().name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{CalendarPolicy, Holiday, OfficeMetadata};
