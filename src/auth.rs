//! Mock authentication.
//!
//! Any non-empty email/password pair is accepted. The signed-in user, the
//! session and an optional edited profile live in the key-value store so a
//! restarted process picks up where it left off.

use crate::error::{AppError, Result};
use crate::models::{Role, Session, User, UserMetadata, UserProfile};
use crate::notice::Notice;
use crate::storage::{self, keys, KeyValueStore};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

const DEFAULT_NAME: &str = "Demo User";

pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(Session, Notice)> {
        let session = self.start_session(email, password, None).await?;
        info!("Signed in {}", session.user.email);
        Ok((
            session,
            Notice::new("Welcome back!", "You have successfully signed in."),
        ))
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(Session, Notice)> {
        let name = Some(full_name.trim().to_string()).filter(|n| !n.is_empty());
        let session = self.start_session(email, password, name).await?;
        self.register(derived_profile(session.user.clone())).await?;
        info!("Created account for {}", session.user.email);
        Ok((
            session,
            Notice::new("Account created!", "Welcome to NestWise Homes!"),
        ))
    }

    pub async fn sign_out(&self) -> Result<Notice> {
        self.store.remove(keys::USER).await?;
        self.store.remove(keys::SESSION).await?;
        info!("Signed out");
        Ok(Notice::new(
            "Signed out",
            "You have been successfully signed out.",
        ))
    }

    /// The persisted session, if both the user and session keys are present
    pub async fn restore(&self) -> Result<Option<Session>> {
        let user: Option<User> = storage::load(self.store.as_ref(), keys::USER).await?;
        let session: Option<Session> = storage::load(self.store.as_ref(), keys::SESSION).await?;
        Ok(user.and(session))
    }

    pub async fn current_user(&self) -> Result<Option<User>> {
        Ok(self.restore().await?.map(|s| s.user))
    }

    pub async fn require_user(&self) -> Result<User> {
        self.current_user().await?.ok_or(AppError::NotAuthenticated)
    }

    /// Profile of the signed-in user. A saved profile wins; otherwise the
    /// role is inferred from the email address.
    pub async fn profile(&self) -> Result<Option<UserProfile>> {
        let Some(user) = self.current_user().await? else {
            return Ok(None);
        };

        let stored: Option<UserProfile> = storage::load(self.store.as_ref(), keys::PROFILE).await?;
        if let Some(profile) = stored.filter(|p| p.id == user.id) {
            return Ok(Some(profile));
        }

        debug!("No saved profile for {}, deriving one", user.id);
        Ok(Some(derived_profile(user)))
    }

    pub async fn require_profile(&self) -> Result<UserProfile> {
        self.profile().await?.ok_or(AppError::NotAuthenticated)
    }

    /// Profile of the signed-in user, provided they are an admin
    pub async fn require_admin(&self) -> Result<UserProfile> {
        let profile = self.require_profile().await?;
        if profile.role != Role::Admin {
            return Err(AppError::AccessDenied {
                reason: "Only admins can do this.".to_string(),
            });
        }
        Ok(profile)
    }

    /// Every known account: the demo users followed by signed-up ones. Admin only.
    pub async fn directory(&self) -> Result<Vec<UserProfile>> {
        self.require_admin().await?;

        let mut users = demo_users();
        let registered: Vec<UserProfile> =
            storage::load_list(self.store.as_ref(), keys::ACCOUNTS).await?;
        for account in registered {
            if !users.iter().any(|u| u.id == account.id) {
                users.push(account);
            }
        }
        Ok(users)
    }

    async fn register(&self, profile: UserProfile) -> Result<()> {
        let mut accounts: Vec<UserProfile> =
            storage::load_list(self.store.as_ref(), keys::ACCOUNTS).await?;
        match accounts.iter_mut().find(|a| a.id == profile.id) {
            Some(existing) => *existing = profile,
            None => accounts.push(profile),
        }
        storage::save(self.store.as_ref(), keys::ACCOUNTS, &accounts).await
    }

    pub async fn save_profile(&self, mut profile: UserProfile) -> Result<Notice> {
        let user = self.require_user().await?;
        if profile.full_name.trim().is_empty() {
            return Err(AppError::RequiredFieldMissing { field: "full_name" });
        }
        profile.id = user.id;
        profile.updated_at = Utc::now();
        storage::save(self.store.as_ref(), keys::PROFILE, &profile).await?;
        info!("Saved profile for {} as {}", profile.email, profile.role);
        Ok(Notice::new(
            "Profile updated",
            "Your profile has been successfully updated.",
        ))
    }

    async fn start_session(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<Session> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        let user = User {
            id: user_id_for(email),
            email: email.to_string(),
            user_metadata: UserMetadata {
                full_name: full_name.or_else(|| Some(DEFAULT_NAME.to_string())),
            },
        };
        let session = Session {
            user: user.clone(),
            access_token: Uuid::now_v7().to_string(),
        };

        storage::save(self.store.as_ref(), keys::USER, &user).await?;
        storage::save(self.store.as_ref(), keys::SESSION, &session).await?;
        Ok(session)
    }
}

/// Stable id so the same email owns the same listings across sessions
fn user_id_for(email: &str) -> String {
    format!("user-{}", email.to_lowercase())
}

fn derived_profile(user: User) -> UserProfile {
    let now = Utc::now();
    UserProfile {
        role: Role::from_email(&user.email),
        full_name: user
            .user_metadata
            .full_name
            .clone()
            .unwrap_or_else(|| DEFAULT_NAME.to_string()),
        id: user.id,
        email: user.email,
        bio: None,
        phone: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn demo_user(email: &str, full_name: &str, role: Role, joined_day: u32) -> UserProfile {
    let joined = Utc
        .with_ymd_and_hms(2025, 1, joined_day, 10, 0, 0)
        .single()
        .unwrap_or_default();
    UserProfile {
        id: user_id_for(email),
        email: email.to_string(),
        full_name: full_name.to_string(),
        role,
        bio: None,
        phone: None,
        is_active: true,
        created_at: joined,
        updated_at: joined,
    }
}

/// Accounts that exist before anyone signs up
fn demo_users() -> Vec<UserProfile> {
    vec![
        demo_user("seller@example.com", "Alice Seller", Role::Seller, 1),
        demo_user("buyer@example.com", "Bob Buyer", Role::Buyer, 2),
        demo_user("agent@example.com", "Charlie Agent", Role::Agent, 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn service() -> AuthService {
        AuthService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn rejects_blank_credentials() {
        let auth = service();
        assert!(matches!(
            auth.sign_in("", "secret").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.sign_in("buyer@example.com", "").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(auth.restore().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn session_survives_restore_and_clears_on_sign_out() {
        let auth = service();
        let (session, notice) = auth.sign_in("buyer@example.com", "pw").await.unwrap();
        assert_eq!(notice.title, "Welcome back!");
        assert_eq!(auth.restore().await.unwrap(), Some(session));

        auth.sign_out().await.unwrap();
        assert!(auth.restore().await.unwrap().is_none());
        assert!(matches!(
            auth.require_user().await,
            Err(AppError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn profile_role_comes_from_email_until_saved() {
        let auth = service();
        assert!(auth.profile().await.unwrap().is_none());

        auth.sign_up("agent@example.com", "pw", "Charlie Agent").await.unwrap();
        let mut profile = auth.require_profile().await.unwrap();
        assert_eq!(profile.role, Role::Agent);
        assert_eq!(profile.full_name, "Charlie Agent");

        profile.role = Role::Admin;
        auth.save_profile(profile).await.unwrap();
        assert_eq!(auth.require_profile().await.unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn saved_profile_of_another_user_is_ignored() {
        let auth = service();
        auth.sign_in("admin@example.com", "pw").await.unwrap();
        let mut profile = auth.require_profile().await.unwrap();
        profile.role = Role::Buyer;
        auth.save_profile(profile).await.unwrap();

        auth.sign_in("seller@example.com", "pw").await.unwrap();
        assert_eq!(auth.require_profile().await.unwrap().role, Role::Seller);
    }

    #[tokio::test]
    async fn directory_is_admin_only() {
        let auth = service();
        assert!(matches!(
            auth.directory().await,
            Err(AppError::NotAuthenticated)
        ));

        auth.sign_in("seller@example.com", "pw").await.unwrap();
        assert!(matches!(
            auth.directory().await,
            Err(AppError::AccessDenied { .. })
        ));
    }

    #[tokio::test]
    async fn directory_lists_demo_and_signed_up_accounts() {
        let auth = service();
        auth.sign_up("dana.buyer@example.com", "pw", "Dana").await.unwrap();
        auth.sign_up("seller@example.com", "pw", "Alice Again").await.unwrap();
        auth.sign_in("admin@example.com", "pw").await.unwrap();

        let users = auth.directory().await.unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.full_name.as_str()).collect();
        assert_eq!(names, vec!["Alice Seller", "Bob Buyer", "Charlie Agent", "Dana"]);
        assert_eq!(users[3].role, Role::Buyer);
        assert_eq!(users[2].role, Role::Agent);
    }

    #[tokio::test]
    async fn saving_a_profile_requires_a_name() {
        let auth = service();
        auth.sign_in("buyer@example.com", "pw").await.unwrap();
        let mut profile = auth.require_profile().await.unwrap();
        profile.full_name = "  ".to_string();
        assert!(matches!(
            auth.save_profile(profile).await,
            Err(AppError::RequiredFieldMissing { field: "full_name" })
        ));
    }
}
