//! Request types for the Hearing Scheduling Engine API.
//!
//! This module defines the JSON request structures for the `/schedule`
//! endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Backlog, BacklogOrder, Complaint};

/// Request body for the `/schedule` endpoint.
///
/// The `order` field makes the backlog ordering contract explicit: the
/// intake backend serves complaints newest-first, and sending them without
/// declaring the order is exactly the kind of silent misordering the
/// engine refuses to guess about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The scheduling start date. Allocation begins the day after.
    pub start_date: NaiveDate,
    /// The order in which `complaints` is supplied.
    pub order: BacklogOrder,
    /// The pending complaints to schedule.
    pub complaints: Vec<ComplaintRequest>,
}

impl ScheduleRequest {
    /// Converts the request complaints into an oldest-first backlog.
    pub fn into_backlog(self) -> Backlog {
        let complaints = self.complaints.into_iter().map(Into::into).collect();
        Backlog::with_order(complaints, self.order)
    }
}

/// Complaint information in a schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRequest {
    /// Unique identifier assigned by the intake backend.
    pub id: String,
    /// The claimant's full name.
    pub full_name: String,
    /// The claimant's contact email.
    pub email: String,
    /// The name of the denounced party.
    pub denounced_company: String,
    /// When the complaint was filed.
    pub date: NaiveDateTime,
    /// Link to the generated complaint document, if one exists.
    #[serde(default)]
    pub pdf_url: Option<String>,
    /// Links to uploaded attachments.
    #[serde(default)]
    pub attachment_urls: Vec<String>,
}

impl From<ComplaintRequest> for Complaint {
    fn from(req: ComplaintRequest) -> Self {
        Complaint {
            id: req.id,
            full_name: req.full_name,
            email: req.email,
            denounced_company: req.denounced_company,
            date: req.date,
            pdf_url: req.pdf_url,
            attachment_urls: req.attachment_urls,
        }
    }
}
