//! Sign-up and login core
//!
//! Form validation, password strength scoring, and a mock authentication
//! backend that persists its session in a secure key-value store.

pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod users;
pub mod utils;
pub mod validation;

pub use auth::{Authenticator, Credentials, LoginResult, User, UserRecord};
pub use config::AuthConfig;
pub use error::{AuthError, StorageError};
pub use storage::{InMemorySecureStore, SecureStore};
pub use users::UserRegistry;
