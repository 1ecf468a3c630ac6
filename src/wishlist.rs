//! Saved-property lists.
//!
//! Only property ids are persisted, one ordered set per user. Full records
//! are resolved against the catalog on demand, so a wishlist can never hold a
//! stale copy of a listing.

use crate::auth::AuthService;
use crate::error::Result;
use crate::models::Property;
use crate::notice::Notice;
use crate::search::PropertySource;
use crate::storage::{self, keys, KeyValueStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

type WishlistIndex = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    Removed,
}

impl WishlistChange {
    pub fn notice(&self) -> Notice {
        match self {
            WishlistChange::Added => {
                Notice::new("Added to wishlist", "Property saved to your wishlist.")
            }
            WishlistChange::Removed => {
                Notice::new("Removed from wishlist", "Property removed from your wishlist.")
            }
        }
    }
}

pub struct WishlistService {
    store: Arc<dyn KeyValueStore>,
    auth: Arc<AuthService>,
}

impl WishlistService {
    pub fn new(store: Arc<dyn KeyValueStore>, auth: Arc<AuthService>) -> Self {
        Self { store, auth }
    }

    async fn index(&self) -> Result<WishlistIndex> {
        Ok(storage::load(self.store.as_ref(), keys::WISHLIST)
            .await?
            .unwrap_or_default())
    }

    /// Saved ids for the signed-in user; empty when signed out
    pub async fn ids(&self) -> Result<Vec<String>> {
        let Some(user) = self.auth.current_user().await? else {
            return Ok(Vec::new());
        };
        Ok(self.index().await?.remove(&user.id).unwrap_or_default())
    }

    pub async fn contains(&self, property_id: &str) -> Result<bool> {
        Ok(self.ids().await?.iter().any(|id| id == property_id))
    }

    /// Save the property if absent, otherwise remove it
    pub async fn toggle(&self, property_id: &str) -> Result<WishlistChange> {
        let user = self.auth.require_user().await?;
        let mut index = self.index().await?;
        let ids = index.entry(user.id.clone()).or_default();

        let change = if let Some(pos) = ids.iter().position(|id| id == property_id) {
            ids.remove(pos);
            WishlistChange::Removed
        } else {
            ids.push(property_id.to_string());
            WishlistChange::Added
        };

        storage::save(self.store.as_ref(), keys::WISHLIST, &index).await?;
        info!("Wishlist {:?} property {} for {}", change, property_id, user.id);
        Ok(change)
    }

    /// Saved properties that still exist in `source`, in save order
    pub async fn properties(&self, source: &dyn PropertySource) -> Result<Vec<Property>> {
        let ids = self.ids().await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let all = source.fetch_all().await?;
        Ok(ids
            .iter()
            .filter_map(|id| all.iter().find(|p| &p.id == id).cloned())
            .collect())
    }
}
