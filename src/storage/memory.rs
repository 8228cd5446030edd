//! In-memory secure store
//!
//! Process-local `SecureStore`, for tests and hosts without a keychain.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use super::secure_store::SecureStore;
use crate::error::StorageError;

#[derive(Debug, Default)]
pub struct InMemorySecureStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySecureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SecureStore for InMemorySecureStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!("secure store set: {}", key);
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        debug!("secure store delete: {}", key);
        self.entries.write().await.remove(key);
        Ok(())
    }
}
