//! Error handlers
//!
//! Logging and user-facing message mapping for auth errors.

use crate::error::types::AuthError;
use log::{error, warn};

/// Log an auth error at a level matching its severity
pub fn handle_error(err: &AuthError) {
    match err {
        AuthError::InvalidCredentials | AuthError::EmailTaken(_) | AuthError::Validation(_) => {
            warn!("Auth rejected: {}", err)
        }
        AuthError::Storage(_) => error!("Auth failure: {}", err),
    }
}

/// Text suitable for an alert dialog
pub fn user_message(err: &AuthError) -> String {
    match err {
        AuthError::Storage(_) => "Something went wrong. Please try again.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    #[test]
    fn storage_errors_get_a_generic_message() {
        let err = AuthError::Storage(StorageError::DeleteFailed {
            key: "user_data".into(),
            reason: "locked".into(),
        });
        assert_eq!(user_message(&err), "Something went wrong. Please try again.");
    }

    #[test]
    fn credential_errors_pass_through() {
        assert_eq!(
            user_message(&AuthError::InvalidCredentials),
            "Invalid email or password"
        );
    }
}
