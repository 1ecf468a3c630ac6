pub mod inquiry;
pub mod property;
pub mod user;

pub use inquiry::{Inquiry, InquiryStatus};
pub use property::{format_price, Property, PropertyStatus, PropertyType, PLACEHOLDER_IMAGE};
pub use user::{Role, Session, User, UserMetadata, UserProfile};
