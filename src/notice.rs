use serde::Serialize;
use std::fmt;

/// Confirmation shown to the user after a successful action
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
}

impl Notice {
    pub fn new(title: &'static str, description: impl Into<String>) -> Self {
        Self {
            title,
            description: description.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
