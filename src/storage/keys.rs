//! Keys under which application state is persisted

pub const SESSION: &str = "mock_session";
pub const USER: &str = "mock_user";
pub const PROFILE: &str = "mock_user_profile";
pub const WISHLIST: &str = "mock_wishlist";
/// Reserved for property snapshots. Never written: the wishlist id set is the
/// only source of truth and snapshots are resolved from the catalog.
pub const WISHLIST_PROPERTIES: &str = "mock_wishlist_properties";
pub const INQUIRIES: &str = "mock_inquiries";
pub const USER_PROPERTIES: &str = "mock_user_properties";
/// Accounts created through sign-up, listed in the admin user directory
pub const ACCOUNTS: &str = "mock_accounts";
