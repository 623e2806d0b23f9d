use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: &str, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum AccountError {
    /// A user with this email is already registered
    #[error("User with email {0} already exists")]
    AlreadyExists(String),

    /// No user for the given id or email
    #[error("{0} not found")]
    NotFound(String),

    /// Password did not match the stored hash
    #[error("Invalid password")]
    InvalidCredentials,

    /// Input failed a precondition
    #[error("Invalid input for field `{}`: {}", .0.field, .0.description)]
    ValidationError(FieldError),

    /// Missing or rejected bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Raw failure reported by the user store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Unexpected collaborator failure, original message preserved
    #[error("{0}")]
    Internal(String),
}

impl AccountError {
    /// Kinds raised to the caller as-is; everything else is wrapped as `Internal`.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            AccountError::AlreadyExists(_)
                | AccountError::NotFound(_)
                | AccountError::InvalidCredentials
                | AccountError::ValidationError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_field() {
        let err = AccountError::ValidationError(FieldError::new("age", "Invalid age", "Age must be between 0 and 150"));
        assert_eq!(
            err.to_string(),
            "Invalid input for field `age`: Age must be between 0 and 150"
        );
    }

    #[test]
    fn storage_and_internal_are_not_domain_errors() {
        assert!(!AccountError::Storage("disk".to_string()).is_domain());
        assert!(!AccountError::Internal("boom".to_string()).is_domain());
        assert!(AccountError::InvalidCredentials.is_domain());
    }
}
