use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image shown for listings that carry no photos
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Commercial,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Commercial,
        PropertyType::Land,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown property type: {s}"))
    }
}

/// Market status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    #[default]
    Pending,
    Sold,
    Rented,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    pub price: u64,
    pub size_sqft: Option<u32>,
    pub bedrooms: Option<u32>,
    /// Half steps allowed (2.5 = two full baths and a half bath)
    pub bathrooms: Option<f32>,
    pub status: PropertyStatus,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub views_count: u64,
    pub owner_id: String,
    pub agent_id: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// First image to show on a card, falling back to the placeholder
    pub fn cover_image(&self) -> &str {
        self.image_urls
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Who receives inquiries about this property
    pub fn contact_id(&self) -> &str {
        self.agent_id.as_deref().unwrap_or(&self.owner_id)
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a taka amount with lakh/crore digit grouping, e.g. `৳2,50,000`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    if digits.len() <= 3 {
        return format!("৳{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("৳{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prices_with_lakh_grouping() {
        assert_eq!(format_price(0), "৳0");
        assert_eq!(format_price(999), "৳999");
        assert_eq!(format_price(1_000), "৳1,000");
        assert_eq!(format_price(250_000), "৳2,50,000");
        assert_eq!(format_price(12_950_000), "৳1,29,50,000");
    }

    #[test]
    fn property_type_parses_exact_names_only() {
        assert_eq!("condo".parse::<PropertyType>(), Ok(PropertyType::Condo));
        assert!("Condo".parse::<PropertyType>().is_err());
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn enums_serialize_lowercase() {
        let json = serde_json::to_string(&PropertyStatus::Rented).unwrap();
        assert_eq!(json, "\"rented\"");
        let kind: PropertyType = serde_json::from_str("\"townhouse\"").unwrap();
        assert_eq!(kind, PropertyType::Townhouse);
    }
}
