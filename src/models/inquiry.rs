use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Responded,
}

/// Buyer message about one property, addressed to its agent or owner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: String,
    pub property_id: String,
    pub buyer_id: String,
    pub recipient_id: String,
    pub message: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub response_message: String,
    /// Snapshot of the listing at the time the inquiry was sent
    pub property_title: String,
    pub property_price: u64,
}
