//! The hearing slot allocator.
//!
//! Given an oldest-first backlog and a calendar policy, the allocator walks
//! forward day by day and fills the available hearing slots in FIFO order.
//! It is a pure, stateless transformation: every run rebuilds the schedule
//! from scratch.

use chrono::{Duration, NaiveDate};

use crate::config::CalendarPolicy;
use crate::models::{Backlog, HearingAssignment, Schedule};

use super::{DayStatus, classify_day};

/// Maximum number of candidate days examined by a single allocation run.
///
/// Bounds the forward walk when the backlog outgrows the calendar's
/// capacity (or a dense holiday configuration starves it of business
/// days). Complaints that do not fit within this window are left
/// unscheduled.
pub const MAX_LOOKAHEAD_DAYS: u32 = 365;

/// Assigns each backlog complaint to the earliest available hearing slot.
///
/// Allocation begins on the day after `start_date`; the start date itself
/// never receives hearings. Each business day is filled time label by time
/// label, up to `capacity_per_slot` hearings per label, consuming the
/// backlog oldest-first. Weekend days and configured holidays are skipped
/// but still count toward [`MAX_LOOKAHEAD_DAYS`].
///
/// The result is deterministic for identical inputs. An empty backlog
/// yields an empty schedule. Complaints that do not fit within the
/// lookahead window are silently left unscheduled; callers that need to
/// surface the overflow can compare [`Schedule::total_assignments`] with
/// the backlog length.
///
/// # Example
///
/// ```
/// use hearing_engine::config::CalendarPolicy;
/// use hearing_engine::models::{Backlog, Complaint};
/// use hearing_engine::scheduling::compute_schedule;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use std::collections::BTreeSet;
///
/// let policy = CalendarPolicy::new(
///     vec!["08:00".to_string(), "09:00".to_string()],
///     2,
///     BTreeSet::new(),
/// ).unwrap();
///
/// let backlog = Backlog::oldest_first(vec![Complaint {
///     id: "C1".to_string(),
///     full_name: "María Pérez".to_string(),
///     email: "maria@example.com".to_string(),
///     denounced_company: "Telecom Personal".to_string(),
///     date: NaiveDateTime::parse_from_str("2025-06-02 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     pdf_url: None,
///     attachment_urls: vec![],
/// }]);
///
/// // 2026-01-12 is a Monday, so the hearing lands on Tuesday the 13th.
/// let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let schedule = compute_schedule(&backlog, &policy, start);
/// let tuesday = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// assert_eq!(schedule.day(tuesday)[0].complaint_id, "C1");
/// ```
pub fn compute_schedule(
    backlog: &Backlog,
    policy: &CalendarPolicy,
    start_date: NaiveDate,
) -> Schedule {
    let mut schedule = Schedule::new();
    let pending = backlog.complaints();
    let mut cursor = 0;

    // Same-day scheduling is excluded: start the walk on the next day.
    let mut calculation_date = start_date + Duration::days(1);
    let mut days_examined = 0u32;

    while cursor < pending.len() && days_examined < MAX_LOOKAHEAD_DAYS {
        if classify_day(calculation_date, policy) == DayStatus::Business {
            let mut daily_assignments = Vec::new();

            for time_label in policy.time_labels() {
                for _ in 0..policy.capacity_per_slot() {
                    let Some(complaint) = pending.get(cursor) else {
                        break;
                    };
                    daily_assignments.push(HearingAssignment {
                        time_label: time_label.clone(),
                        complaint_id: complaint.id.clone(),
                        claimant: complaint.full_name.clone(),
                        denounced_party: complaint.denounced_company.clone(),
                    });
                    cursor += 1;
                }
            }

            schedule.insert_day(calculation_date, daily_assignments);
        }

        calculation_date += Duration::days(1);
        days_examined += 1;
    }

    schedule
}
