use crate::models::PropertyType;
use serde::{Deserialize, Serialize};

/// A selector that is either unset ("any") or requires an exact value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Choice<T> {
    Any,
    Exact(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T: PartialEq> Choice<T> {
    /// `Any` admits everything; `Exact` admits only an equal, present value
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Choice::Any => true,
            Choice::Exact(wanted) => value == Some(wanted),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Choice::Any, Choice::Exact)
    }
}

/// Active search and filter criteria for one query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterSpec {
    /// Free-text term matched against title, description and address
    #[serde(default)]
    pub search: String,
    /// Inclusive lower price bound
    pub min_price: Option<u64>,
    /// Inclusive upper price bound
    pub max_price: Option<u64>,
    #[serde(default)]
    pub property_type: Choice<PropertyType>,
    /// Case-insensitive substring of the city
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub bedrooms: Choice<u32>,
    #[serde(default)]
    pub bathrooms: Choice<f32>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn min_price(mut self, price: u64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: u64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn property_type(mut self, kind: PropertyType) -> Self {
        self.property_type = Choice::Exact(kind);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn bedrooms(mut self, count: u32) -> Self {
        self.bedrooms = Choice::Exact(count);
        self
    }

    pub fn bathrooms(mut self, count: f32) -> Self {
        self.bathrooms = Choice::Exact(count);
        self
    }

    /// Reset every criterion
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no criterion would exclude anything
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.property_type.is_any()
            && self.city.is_empty()
            && self.bedrooms.is_any()
            && self.bathrooms.is_any()
    }
}
