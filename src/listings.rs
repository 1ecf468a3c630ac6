//! Listing submission and moderation.
//!
//! Sellers and agents submit listings, which start pending and unapproved.
//! Admins approve or reject them; only approved listings reach the catalog.

use crate::auth::AuthService;
use crate::error::{AppError, Result};
use crate::models::{Property, PropertyStatus, PropertyType, Role, PLACEHOLDER_IMAGE};
use crate::search::catalog::mock_properties;
use crate::notice::Notice;
use crate::storage::{self, keys, KeyValueStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

pub const MAX_IMAGES: usize = 10;

/// Listing form as submitted by a seller or agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: Option<u64>,
    pub property_type: Option<PropertyType>,
    pub size_sqft: Option<u32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub amenities: Vec<String>,
    pub is_featured: bool,
    /// Names of the image files attached to the form
    pub images: Vec<String>,
}

pub struct ListingService {
    store: Arc<dyn KeyValueStore>,
    auth: Arc<AuthService>,
    delay: Duration,
}

impl ListingService {
    pub fn new(store: Arc<dyn KeyValueStore>, auth: Arc<AuthService>, delay: Duration) -> Self {
        Self { store, auth, delay }
    }

    async fn load_all(&self) -> Result<Vec<Property>> {
        storage::load_list(self.store.as_ref(), keys::USER_PROPERTIES).await
    }

    async fn save_all(&self, listings: &[Property]) -> Result<()> {
        storage::save(self.store.as_ref(), keys::USER_PROPERTIES, listings).await
    }

    pub async fn create(&self, draft: ListingDraft) -> Result<(Property, Notice)> {
        let profile = self.auth.require_profile().await?;
        if !crate::dashboard::can_list_properties(profile.role) {
            return Err(AppError::AccessDenied {
                reason: "Only sellers and agents can list properties.".to_string(),
            });
        }

        let title = required(&draft.title, "title")?;
        let price = draft
            .price
            .ok_or(AppError::RequiredFieldMissing { field: "price" })?;
        let property_type = draft
            .property_type
            .ok_or(AppError::RequiredFieldMissing { field: "property_type" })?;
        let address = required(&draft.address, "address")?;
        if draft.images.len() > MAX_IMAGES {
            return Err(AppError::TooManyImages { max: MAX_IMAGES });
        }

        let image_urls = self.upload_images(&draft.images).await;
        let property = Property {
            id: format!("listing-{}", Uuid::now_v7()),
            title,
            description: draft.description.trim().to_string(),
            property_type,
            address,
            city: draft.city.trim().to_string(),
            state: draft.state.trim().to_string(),
            zip_code: draft.zip_code.filter(|z| !z.trim().is_empty()),
            price,
            size_sqft: draft.size_sqft,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            status: PropertyStatus::Pending,
            image_urls,
            is_featured: draft.is_featured,
            is_approved: false,
            views_count: 0,
            agent_id: (profile.role == Role::Agent).then(|| profile.id.clone()),
            owner_id: profile.id,
            amenities: dedup_labels(draft.amenities),
            created_at: Utc::now(),
        };

        let mut all = self.load_all().await?;
        all.push(property.clone());
        self.save_all(&all).await?;

        info!("Listing {} submitted for review", property.id);
        Ok((
            property,
            Notice::new(
                "Property Listed Successfully",
                "Your property has been submitted for review.",
            ),
        ))
    }

    /// Stand-in for an upload: every file becomes the placeholder image
    async fn upload_images(&self, files: &[String]) -> Vec<String> {
        if files.is_empty() {
            return vec![PLACEHOLDER_IMAGE.to_string()];
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        debug!("Uploaded {} images", files.len());
        files.iter().map(|_| PLACEHOLDER_IMAGE.to_string()).collect()
    }

    pub async fn owned_by(&self, owner_id: &str) -> Result<Vec<Property>> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|p| p.owner_id == owner_id)
            .collect())
    }

    /// Built-in catalog followed by every submitted listing; admin only
    pub async fn all(&self) -> Result<Vec<Property>> {
        self.auth.require_admin().await?;
        let mut all = mock_properties();
        all.extend(self.load_all().await?);
        Ok(all)
    }

    /// Submitted listings still awaiting approval; admin only
    pub async fn pending_review(&self) -> Result<Vec<Property>> {
        self.auth.require_admin().await?;
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|p| !p.is_approved)
            .collect())
    }

    pub async fn set_approval(&self, property_id: &str, approve: bool) -> Result<Notice> {
        self.auth.require_admin().await?;

        let mut all = self.load_all().await?;
        let listing = all
            .iter_mut()
            .find(|p| p.id == property_id)
            .ok_or_else(|| not_found(property_id))?;
        listing.is_approved = approve;
        self.save_all(&all).await?;

        let (title, verb) = if approve {
            ("Property Approved", "approved")
        } else {
            ("Property Rejected", "rejected")
        };
        info!("Listing {} {}", property_id, verb);
        Ok(Notice::new(title, format!("Property has been {verb}.")))
    }

    /// Remove a listing; allowed for its owner and for admins
    pub async fn delete(&self, property_id: &str) -> Result<Notice> {
        let profile = self.auth.require_profile().await?;

        let mut all = self.load_all().await?;
        let pos = all
            .iter()
            .position(|p| p.id == property_id)
            .ok_or_else(|| not_found(property_id))?;
        if all[pos].owner_id != profile.id && profile.role != Role::Admin {
            return Err(AppError::AccessDenied {
                reason: "You can only delete your own listings.".to_string(),
            });
        }
        all.remove(pos);
        self.save_all(&all).await?;

        info!("Listing {} deleted by {}", property_id, profile.id);
        Ok(Notice::new(
            "Property Deleted",
            "Property has been deleted successfully.",
        ))
    }
}

/// Count one more view of `property_id`, returning the updated record
pub fn record_view<'a>(properties: &'a mut [Property], property_id: &str) -> Option<&'a Property> {
    let property = properties.iter_mut().find(|p| p.id == property_id)?;
    property.views_count = property.views_count.saturating_add(1);
    Some(property)
}

/// Featured listings in their original order
pub fn featured(properties: &[Property]) -> Vec<Property> {
    properties.iter().filter(|p| p.is_featured).cloned().collect()
}

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::RequiredFieldMissing { field })
    } else {
        Ok(trimmed.to_string())
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound {
        entity: "Property",
        id: id.to_string(),
    }
}

fn dedup_labels(labels: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.trim();
        if !label.is_empty() && !out.iter().any(|l| l == label) {
            out.push(label.to_string());
        }
    }
    out
}
