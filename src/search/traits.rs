use crate::error::Result;
use crate::models::Property;
use crate::search::filter::filter;
use crate::search::types::FilterSpec;
use async_trait::async_trait;

/// Common trait for anything that can supply browsable listings
/// Lets the mock catalog be swapped for a real backend later
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Every publicly visible property
    async fn fetch_all(&self) -> Result<Vec<Property>>;

    /// Visible properties matching `spec`
    async fn search(&self, spec: &FilterSpec) -> Result<Vec<Property>> {
        let all = self.fetch_all().await?;
        Ok(filter(&all, spec))
    }

    /// Look up one visible property by id
    async fn find(&self, id: &str) -> Result<Option<Property>> {
        let all = self.fetch_all().await?;
        Ok(all.into_iter().find(|p| p.id == id))
    }

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
