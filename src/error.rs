//! Error types for listing, auth and storage operations

use thiserror::Error;

/// Fallback text when a failure carries no usable message
pub const GENERIC_FAILURE: &str = "Something went wrong.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Please enter valid credentials.")]
    InvalidCredentials,

    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: &'static str },

    #[error("Access denied: {reason}")]
    AccessDenied { reason: String },

    #[error("Maximum {max} images allowed per property.")]
    TooManyImages { max: usize },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Text suitable for a user-facing notification
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotAuthenticated => "Please sign in to continue.".to_string(),
            AppError::RequiredFieldMissing { field } => {
                format!("Please fill in the required field: {field}.")
            }
            AppError::AccessDenied { reason } => reason.clone(),
            AppError::Storage(_) | AppError::Serialization(_) => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Best-effort message for a failed action
pub fn describe_failure(err: &anyhow::Error) -> String {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return app.user_message();
    }
    let text = err.to_string();
    if text.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_use_generic_message() {
        let err = AppError::Storage(std::io::Error::other("disk on fire"));
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn describe_failure_prefers_app_error_text() {
        let err = anyhow::Error::new(AppError::RequiredFieldMissing { field: "message" });
        assert_eq!(
            describe_failure(&err),
            "Please fill in the required field: message."
        );
    }

    #[test]
    fn describe_failure_falls_back_on_blank_messages() {
        let err = anyhow::anyhow!("  ");
        assert_eq!(describe_failure(&err), GENERIC_FAILURE);

        let err = anyhow::anyhow!("network unplugged");
        assert_eq!(describe_failure(&err), "network unplugged");
    }
}
