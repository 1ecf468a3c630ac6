pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod inquiries;
pub mod listings;
pub mod models;
pub mod notice;
pub mod search;
pub mod storage;
pub mod wishlist;

pub use error::{AppError, Result};
