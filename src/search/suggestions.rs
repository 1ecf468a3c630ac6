use crate::models::{Property, PropertyType};
use serde::{Deserialize, Serialize};

/// Shortest term that triggers suggestions
pub const MIN_TERM_LEN: usize = 2;
/// Most suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 8;

/// Compact projection of a property for a type-ahead dropdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub city: String,
    pub state: String,
    pub price: u64,
    pub property_type: PropertyType,
}

impl From<&Property> for Suggestion {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            city: property.city.clone(),
            state: property.state.clone(),
            price: property.price,
            property_type: property.property_type,
        }
    }
}

/// Type-ahead matches for `term` against title, city, state and type
pub fn suggest(properties: &[Property], term: &str) -> Vec<Suggestion> {
    let term = term.trim();
    if term.chars().count() < MIN_TERM_LEN {
        return Vec::new();
    }
    let needle = term.to_lowercase();

    properties
        .iter()
        .filter(|p| {
            [p.title.as_str(), p.city.as_str(), p.state.as_str(), p.property_type.as_str()]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .take(MAX_SUGGESTIONS)
        .map(Suggestion::from)
        .collect()
}
