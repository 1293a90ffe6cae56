//! Scheduling logic for the Hearing Scheduling Engine.
//!
//! This module contains the day-status classification used to find business
//! days, and the slot allocator that distributes the complaint backlog
//! across hearing slots.

mod allocator;
mod day_status;

pub use allocator::{MAX_LOOKAHEAD_DAYS, compute_schedule};
pub use day_status::{DayStatus, classify_day};
