//! Error types
//!
//! Defines domain-specific error types for the auth and storage modules.
//! Field validation failures are not errors; they are returned as data.

use std::fmt;

use crate::validation::FormErrors;

/// Message shown for any failed login, whichever field was wrong.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Secure storage errors
#[derive(Debug)]
pub enum StorageError {
    ReadFailed { key: String, reason: String },
    WriteFailed { key: String, reason: String },
    DeleteFailed { key: String, reason: String },
    Serialization(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed { key, reason } => {
                write!(f, "Failed to read '{}': {}", key, reason)
            }
            StorageError::WriteFailed { key, reason } => {
                write!(f, "Failed to write '{}': {}", key, reason)
            }
            StorageError::DeleteFailed { key, reason } => {
                write!(f, "Failed to delete '{}': {}", key, reason)
            }
            StorageError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error)
    }
}

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    /// No user matched the email/password pair.
    InvalidCredentials,
    /// Sign-up attempted with an email that is already registered.
    EmailTaken(String),
    /// Sign-up form did not pass field validation.
    Validation(FormErrors),
    Storage(StorageError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "{}", INVALID_CREDENTIALS_MESSAGE),
            AuthError::EmailTaken(_) => write!(
                f,
                "An account with this email already exists. Please login instead."
            ),
            AuthError::Validation(errors) => match errors.first_error() {
                Some(message) => write!(f, "Invalid sign-up form: {}", message),
                None => write!(f, "Invalid sign-up form"),
            },
            AuthError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for AuthError {
    fn from(error: StorageError) -> Self {
        AuthError::Storage(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_generic() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn storage_error_wraps_into_auth_error() {
        let err: AuthError = StorageError::WriteFailed {
            key: "auth_token".into(),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Storage error: Failed to write 'auth_token': disk full"
        );
    }
}
