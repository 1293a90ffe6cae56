//! Backlog model enforcing the processing-order contract.
//!
//! The intake backend returns complaints newest-first (index 0 is the most
//! recent submission), while the slot allocator must consume them
//! oldest-first so the longest-waiting claimant gets the earliest hearing.
//! Getting that reversal wrong silently scrambles every assignment, so the
//! ordering is carried in the type rather than left as a calling
//! convention.

use serde::{Deserialize, Serialize};

use super::Complaint;

/// The order in which a sequence of complaints is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogOrder {
    /// Index 0 is the most recently filed complaint (the backend's native order).
    NewestFirst,
    /// Index 0 is the oldest pending complaint (the allocator's processing order).
    OldestFirst,
}

/// The pending complaint queue, always held oldest-first.
///
/// Construct with [`Backlog::oldest_first`] when the caller has already
/// sorted the queue, or [`Backlog::newest_first`] to adopt the backend's
/// native order (the constructor reverses it).
///
/// # Example
///
/// ```
/// use hearing_engine::models::{Backlog, Complaint};
/// use chrono::NaiveDateTime;
///
/// let make = |id: &str, ts: &str| Complaint {
///     id: id.to_string(),
///     full_name: "Claimant".to_string(),
///     email: "claimant@example.com".to_string(),
///     denounced_company: "Company".to_string(),
///     date: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
///     pdf_url: None,
///     attachment_urls: vec![],
/// };
///
/// // Backend order: newest submission first.
/// let backlog = Backlog::newest_first(vec![
///     make("C2", "2025-06-02 09:00:00"),
///     make("C1", "2025-06-01 09:00:00"),
/// ]);
/// assert_eq!(backlog.complaints()[0].id, "C1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backlog {
    complaints: Vec<Complaint>,
}

impl Backlog {
    /// Wraps a queue that is already sorted oldest-first.
    pub fn oldest_first(complaints: Vec<Complaint>) -> Self {
        Self { complaints }
    }

    /// Adopts a newest-first queue, reversing it into processing order.
    pub fn newest_first(mut complaints: Vec<Complaint>) -> Self {
        complaints.reverse();
        Self { complaints }
    }

    /// Wraps a queue whose order is declared by `order`.
    pub fn with_order(complaints: Vec<Complaint>, order: BacklogOrder) -> Self {
        match order {
            BacklogOrder::NewestFirst => Self::newest_first(complaints),
            BacklogOrder::OldestFirst => Self::oldest_first(complaints),
        }
    }

    /// Returns the complaints in processing order (oldest first).
    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    /// Returns the number of pending complaints.
    pub fn len(&self) -> usize {
        self.complaints.len()
    }

    /// Returns `true` if there are no pending complaints.
    pub fn is_empty(&self) -> bool {
        self.complaints.is_empty()
    }
}
