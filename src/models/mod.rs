//! Core data models for the Hearing Scheduling Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod backlog;
mod complaint;
mod schedule;
mod stats;

pub use backlog::{Backlog, BacklogOrder};
pub use complaint::Complaint;
pub use schedule::{HearingAssignment, Schedule};
pub use stats::IntakeStats;
