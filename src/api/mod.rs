//! HTTP API module for the Hearing Scheduling Engine.
//!
//! This module provides the REST endpoints the administrative dashboard
//! calls to compute hearing schedules and classify calendar days.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComplaintRequest, ScheduleRequest};
pub use response::{ApiError, DayStatusResponse, ScheduleResponse};
pub use state::AppState;
