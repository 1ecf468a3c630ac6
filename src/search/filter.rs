//! Conjunctive property filtering.
//!
//! Every active criterion must hold for a property to be kept. Input order is
//! preserved and the input slice is never modified.

use crate::models::Property;
use crate::search::types::FilterSpec;

/// Lowercased text criteria, computed once per query
struct TextNeedles {
    search: Option<String>,
    city: Option<String>,
}

impl TextNeedles {
    fn from_spec(spec: &FilterSpec) -> Self {
        Self {
            search: lowered_needle(&spec.search),
            city: lowered_needle(&spec.city),
        }
    }
}

/// Empty means unset; anything else is matched literally, padding included
fn lowered_needle(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_lowercase())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn matches_with(property: &Property, spec: &FilterSpec, needles: &TextNeedles) -> bool {
    if spec.min_price.is_some_and(|min| property.price < min) {
        return false;
    }
    if spec.max_price.is_some_and(|max| property.price > max) {
        return false;
    }
    if !spec.property_type.admits(Some(&property.property_type)) {
        return false;
    }
    if let Some(city) = &needles.city {
        if !contains_ci(&property.city, city) {
            return false;
        }
    }
    if !spec.bedrooms.admits(property.bedrooms.as_ref()) {
        return false;
    }
    if !spec.bathrooms.admits(property.bathrooms.as_ref()) {
        return false;
    }
    if let Some(term) = &needles.search {
        let hit = contains_ci(&property.title, term)
            || contains_ci(&property.description, term)
            || contains_ci(&property.address, term);
        if !hit {
            return false;
        }
    }
    true
}

/// Whether a single property satisfies every active criterion
pub fn matches(property: &Property, spec: &FilterSpec) -> bool {
    matches_with(property, spec, &TextNeedles::from_spec(spec))
}

/// Properties satisfying `spec`, in their original relative order
pub fn filter(properties: &[Property], spec: &FilterSpec) -> Vec<Property> {
    let needles = TextNeedles::from_spec(spec);
    properties
        .iter()
        .filter(|p| matches_with(p, spec, &needles))
        .cloned()
        .collect()
}
