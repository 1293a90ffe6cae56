//! Complaint model.
//!
//! Complaints are owned by the external intake backend; the engine only
//! reads them. A record is immutable once fetched.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A consumer complaint as returned by the intake backend.
///
/// # Example
///
/// ```
/// use hearing_engine::models::Complaint;
/// use chrono::NaiveDateTime;
///
/// let complaint = Complaint {
///     id: "Cat-Def-2025-0001".to_string(),
///     full_name: "María Pérez".to_string(),
///     email: "maria@example.com".to_string(),
///     denounced_company: "Telecom Personal".to_string(),
///     date: NaiveDateTime::parse_from_str("2025-06-02 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     pdf_url: None,
///     attachment_urls: vec![],
/// };
/// assert_eq!(complaint.id, "Cat-Def-2025-0001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    /// Unique identifier assigned by the intake backend (e.g., "Cat-Def-2025-0001").
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
