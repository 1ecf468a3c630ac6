use crate::auth::AuthService;
use crate::error::{AppError, Result};
use crate::models::{Inquiry, InquiryStatus, Property};
use crate::notice::Notice;
use crate::storage::{self, keys, KeyValueStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// What a buyer fills in when contacting a lister
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InquiryDraft {
    pub message: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

pub struct InquiryService {
    store: Arc<dyn KeyValueStore>,
    auth: Arc<AuthService>,
    delay: Duration,
}

impl InquiryService {
    pub fn new(store: Arc<dyn KeyValueStore>, auth: Arc<AuthService>, delay: Duration) -> Self {
        Self { store, auth, delay }
    }

    async fn load_all(&self) -> Result<Vec<Inquiry>> {
        storage::load_list(self.store.as_ref(), keys::INQUIRIES).await
    }

    async fn save_all(&self, inquiries: &[Inquiry]) -> Result<()> {
        storage::save(self.store.as_ref(), keys::INQUIRIES, inquiries).await
    }

    /// Send an inquiry about `property` to its agent, or its owner if unrepresented
    pub async fn submit(&self, property: &Property, draft: InquiryDraft) -> Result<(Inquiry, Notice)> {
        let user = self.auth.require_user().await?;
        let message = draft.message.trim();
        if message.is_empty() {
            return Err(AppError::RequiredFieldMissing { field: "message" });
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let inquiry = Inquiry {
            id: format!("inquiry-{}", Uuid::now_v7()),
            property_id: property.id.clone(),
            buyer_id: user.id,
            recipient_id: property.contact_id().to_string(),
            message: message.to_string(),
            contact_email: non_blank(draft.contact_email),
            contact_phone: non_blank(draft.contact_phone),
            status: InquiryStatus::Pending,
            created_at: Utc::now(),
            response_message: String::new(),
            property_title: property.title.clone(),
            property_price: property.price,
        };

        let mut all = self.load_all().await?;
        all.push(inquiry.clone());
        self.save_all(&all).await?;

        info!("Inquiry {} sent to {} about {}", inquiry.id, inquiry.recipient_id, property.id);
        Ok((
            inquiry,
            Notice::new("Inquiry Sent", "Your inquiry has been sent to the property owner."),
        ))
    }

    /// Inquiries a buyer has sent, oldest first
    pub async fn for_buyer(&self, buyer_id: &str) -> Result<Vec<Inquiry>> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|i| i.buyer_id == buyer_id)
            .collect())
    }

    /// Inquiries addressed to an owner or agent
    pub async fn for_recipient(&self, recipient_id: &str) -> Result<Vec<Inquiry>> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|i| i.recipient_id == recipient_id)
            .collect())
    }

    /// Every stored inquiry; admin only
    pub async fn all(&self) -> Result<Vec<Inquiry>> {
        self.auth.require_admin().await?;
        self.load_all().await
    }

    /// Record a reply and mark the inquiry responded
    pub async fn respond(&self, inquiry_id: &str, response: &str) -> Result<Notice> {
        let user = self.auth.require_user().await?;
        let response = response.trim();
        if response.is_empty() {
            return Err(AppError::RequiredFieldMissing { field: "response" });
        }

        let mut all = self.load_all().await?;
        let Some(inquiry) = all.iter_mut().find(|i| i.id == inquiry_id) else {
            warn!("Response to unknown inquiry {}", inquiry_id);
            return Err(AppError::NotFound {
                entity: "Inquiry",
                id: inquiry_id.to_string(),
            });
        };
        if inquiry.buyer_id == user.id {
            return Err(AppError::AccessDenied {
                reason: "You cannot respond to your own inquiry.".to_string(),
            });
        }

        inquiry.status = InquiryStatus::Responded;
        inquiry.response_message = response.to_string();
        self.save_all(&all).await?;

        info!("Inquiry {} answered by {}", inquiry_id, user.id);
        Ok(Notice::new("Response Sent", "Your response has been sent successfully."))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
