//! Secure key-value store interface
//!
//! The platform keychain/keystore lives outside this crate; auth code only
//! talks to it through this trait.

use async_trait::async_trait;

use crate::error::StorageError;

/// Async string key-value store assumed to encrypt at rest.
#[async_trait]
pub trait SecureStore: Send + Sync {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// `Ok(None)` when the key has never been written or was deleted.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
