//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

use serde::Serialize;

use super::credentials::User;

/// Result of a successful login or sign-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}
