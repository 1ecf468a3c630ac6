use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a signed-in user is allowed to do
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Buyer,
    Seller,
    Agent,
    Admin,
}

impl Role {
    /// Demo accounts encode their role in the email address
    pub fn from_email(email: &str) -> Self {
        if email.contains("seller") {
            Role::Seller
        } else if email.contains("agent") {
            Role::Agent
        } else if email.contains("admin") {
            Role::Admin
        } else {
            Role::Buyer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserMetadata {
    pub full_name: Option<String>,
}

/// Authenticated account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: User,
    pub access_token: String,
}

/// Editable profile attached to a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_email_checks_seller_first() {
        assert_eq!(Role::from_email("seller@example.com"), Role::Seller);
        assert_eq!(Role::from_email("agent@example.com"), Role::Agent);
        assert_eq!(Role::from_email("admin@example.com"), Role::Admin);
        assert_eq!(Role::from_email("buyer@example.com"), Role::Buyer);
        assert_eq!(Role::from_email("someone@example.com"), Role::Buyer);
        assert_eq!(Role::from_email("seller.agent@example.com"), Role::Seller);
    }
}
