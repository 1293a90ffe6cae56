//! Intake statistics shown on the administrative dashboard.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Complaint;

/// Headline counters over a set of complaints.
///
/// # Example
///
/// ```
/// use hearing_engine::models::IntakeStats;
///
/// let stats = IntakeStats::from_complaints(&[]);
/// assert_eq!(stats.total, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeStats {
    /// Total number of complaints on record.
    pub total: usize,
    /// Number of distinct claimant emails.
    pub unique_claimants: usize,
    /// Number of distinct denounced parties.
    pub unique_companies: usize,
}

impl IntakeStats {
    /// Computes the counters for a set of complaints.
    pub fn from_complaints(complaints: &[Complaint]) -> Self {
        let unique_claimants = complaints
            .iter()
            .map(|c| c.email.as_str())
            .collect::<HashSet<_>>()
            .len();
        let unique_companies = complaints
            .iter()
            .map(|c| c.denounced_company.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total: complaints.len(),
            unique_claimants,
            unique_companies,
        }
    }
}
