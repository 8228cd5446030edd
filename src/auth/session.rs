//! Session persistence
//!
//! Token and user live in the secure store under the configured keys. Reads
//! fail open: any error is logged and reported as "not signed in". Writes and
//! deletes propagate their errors.

use log::{error, info};

use super::authenticator::Authenticator;
use super::credentials::User;
use crate::error::StorageError;

impl Authenticator {
    pub async fn store_token(&self, token: &str) -> Result<(), StorageError> {
        self.store
            .set(&self.config.token_key, token)
            .await
            .inspect_err(|e| error!("Error storing token: {}", e))
    }

    pub async fn get_token(&self) -> Option<String> {
        match self.store.get(&self.config.token_key).await {
            Ok(token) => token,
            Err(e) => {
                error!("Error getting token: {}", e);
                None
            }
        }
    }

    pub async fn store_user(&self, user: &User) -> Result<(), StorageError> {
        let json = serde_json::to_string(user)?;
        self.store
            .set(&self.config.user_key, &json)
            .await
            .inspect_err(|e| error!("Error storing user: {}", e))
    }

    pub async fn get_user(&self) -> Option<User> {
        let json = match self.store.get(&self.config.user_key).await {
            Ok(json) => json?,
            Err(e) => {
                error!("Error getting user: {}", e);
                return None;
            }
        };

        serde_json::from_str(&json)
            .inspect_err(|e| error!("Error getting user: {}", e))
            .ok()
    }

    /// Deletes the token, then the user entry.
    pub async fn remove_token(&self) -> Result<(), StorageError> {
        for key in [&self.config.token_key, &self.config.user_key] {
            if let Err(e) = self.store.delete(key).await {
                error!("Error removing token: {}", e);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Start-up check: the stored user, if a token is present.
    pub async fn restore_session(&self) -> Option<User> {
        self.get_token().await?;
        let user = self.get_user().await;
        if let Some(user) = &user {
            info!("Restored session for user {}", user.id);
        }
        user
    }

    pub async fn logout(&self) -> Result<(), StorageError> {
        self.remove_token().await?;
        info!("User logged out");
        Ok(())
    }
}
