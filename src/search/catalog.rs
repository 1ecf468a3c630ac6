use crate::error::Result;
use crate::models::{Property, PropertyStatus, PropertyType, PLACEHOLDER_IMAGE};
use crate::search::traits::PropertySource;
use crate::storage::{self, keys, KeyValueStore};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Built-in listings plus approved user submissions
pub struct MockCatalog {
    properties: Vec<Property>,
    delay: Duration,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl MockCatalog {
    /// Catalog over the built-in Dhaka listings
    pub fn new(delay: Duration) -> Self {
        Self::with_properties(mock_properties(), delay)
    }

    pub fn with_properties(properties: Vec<Property>, delay: Duration) -> Self {
        Self {
            properties,
            delay,
            store: None,
        }
    }

    /// Also surface approved listings persisted in `store`
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    async fn submitted_listings(&self) -> Result<Vec<Property>> {
        match &self.store {
            Some(store) => storage::load_list(store.as_ref(), keys::USER_PROPERTIES).await,
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl PropertySource for MockCatalog {
    async fn fetch_all(&self) -> Result<Vec<Property>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut all: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| p.is_approved)
            .cloned()
            .collect();

        let submitted = self.submitted_listings().await?;
        let before = all.len();
        all.extend(submitted.into_iter().filter(|p| p.is_approved));
        debug!(
            "Catalog holds {} built-in and {} submitted listings",
            before,
            all.len() - before
        );

        Ok(all)
    }

    fn source_name(&self) -> &'static str {
        "Mock catalog"
    }
}

fn listed_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in Dhaka listings shown before anyone submits their own
pub fn mock_properties() -> Vec<Property> {
    info!("📋 Loading built-in Dhaka listings");

    vec![
        Property {
            id: "1".to_string(),
            title: "Modern Downtown Apartment".to_string(),
            description: "Beautiful modern apartment in the heart of downtown with stunning city views.".to_string(),
            property_type: PropertyType::Apartment,
            address: "123 Main St".to_string(),
            city: "Dhaka".to_string(),
            state: "Dhaka".to_string(),
            zip_code: None,
            price: 250_000,
            size_sqft: Some(1200),
            bedrooms: Some(2),
            bathrooms: Some(2.0),
            status: PropertyStatus::Available,
            image_urls: vec![PLACEHOLDER_IMAGE.to_string()],
            is_featured: true,
            is_approved: true,
            views_count: 45,
            owner_id: "owner-1".to_string(),
            agent_id: None,
            amenities: labels(&["Pool", "Gym", "Parking"]),
            created_at: listed_on(2025, 1, 15),
        },
        Property {
            id: "2".to_string(),
            title: "Spacious Family House".to_string(),
            description: "Perfect family home with large backyard and modern amenities.".to_string(),
            property_type: PropertyType::House,
            address: "456 Oak Ave".to_string(),
            city: "Dhaka".to_string(),
            state: "Dhaka".to_string(),
            zip_code: None,
            price: 450_000,
            size_sqft: Some(2500),
            bedrooms: Some(4),
            bathrooms: Some(3.0),
            status: PropertyStatus::Available,
            image_urls: vec![PLACEHOLDER_IMAGE.to_string()],
            is_featured: false,
            is_approved: true,
            views_count: 32,
            owner_id: "owner-2".to_string(),
            agent_id: None,
            amenities: labels(&["Garden", "Garage", "Fireplace"]),
            created_at: listed_on(2025, 1, 10),
        },
        Property {
            id: "3".to_string(),
            title: "Luxury Condo with View".to_string(),
            description: "High-end condo with panoramic city views and premium finishes.".to_string(),
            property_type: PropertyType::Condo,
            address: "789 Sky Tower".to_string(),
            city: "Dhaka".to_string(),
            state: "Dhaka".to_string(),
            zip_code: None,
            price: 380_000,
            size_sqft: Some(1800),
            bedrooms: Some(3),
            bathrooms: Some(2.0),
            status: PropertyStatus::Available,
            image_urls: vec![PLACEHOLDER_IMAGE.to_string()],
            is_featured: true,
            is_approved: true,
            views_count: 67,
            owner_id: "owner-3".to_string(),
            agent_id: Some("agent-1".to_string()),
            amenities: labels(&["Concierge", "Rooftop", "Security"]),
            created_at: listed_on(2025, 1, 20),
        },
        Property {
            id: "4".to_string(),
            title: "Commercial Office Space".to_string(),
            description: "Open-plan office floor near the business district with backup power.".to_string(),
            property_type: PropertyType::Commercial,
            address: "12 Gulshan Avenue".to_string(),
            city: "Dhaka".to_string(),
            state: "Dhaka".to_string(),
            zip_code: Some("1212".to_string()),
            price: 650_000,
            size_sqft: Some(4200),
            bedrooms: None,
            bathrooms: Some(2.0),
            status: PropertyStatus::Available,
            image_urls: vec![],
            is_featured: false,
            is_approved: true,
            views_count: 18,
            owner_id: "owner-4".to_string(),
            agent_id: Some("agent-1".to_string()),
            amenities: labels(&["Elevator", "Generator", "Parking"]),
            created_at: listed_on(2025, 1, 5),
        },
        Property {
            id: "5".to_string(),
            title: "Townhouse Complex".to_string(),
            description: "Three-storey townhouse in a gated community with shared courtyard.".to_string(),
            property_type: PropertyType::Townhouse,
            address: "88 Lake Road".to_string(),
            city: "Dhaka".to_string(),
            state: "Dhaka".to_string(),
            zip_code: None,
            price: 320_000,
            size_sqft: Some(1600),
            bedrooms: Some(3),
            bathrooms: Some(2.5),
            status: PropertyStatus::Available,
            image_urls: vec![],
            is_featured: false,
            is_approved: true,
            views_count: 9,
            owner_id: "owner-5".to_string(),
            agent_id: None,
            amenities: labels(&["Courtyard", "Security"]),
            created_at: listed_on(2025, 1, 12),
        },
    ]
}
