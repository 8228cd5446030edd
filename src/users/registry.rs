//! User registry
//!
//! In-memory list of known accounts. Login reads it through a snapshot
//! supplier; sign-up appends to it. Nothing here is persisted.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::info;

use crate::auth::UserRecord;

/// Shared, cloneable handle to the account list
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<UserRecord>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<UserRecord>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, user: UserRecord) {
        info!("Registering user {}", user.id);
        self.write().push(user);
    }

    pub fn remove(&self, id: &str) -> Option<UserRecord> {
        let mut users = self.write();
        let index = users.iter().position(|u| u.id == id)?;
        Some(users.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<UserRecord> {
        self.read().iter().find(|u| u.id == id).cloned()
    }

    /// Replaces the record with the same id. Returns false if none exists.
    pub fn update(&self, user: UserRecord) -> bool {
        match self.write().iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user;
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let email = email.to_lowercase();
        self.read()
            .iter()
            .find(|u| u.email.to_lowercase() == email)
            .cloned()
    }

    pub fn email_exists(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Snapshot of the current list
    pub fn list(&self) -> Vec<UserRecord> {
        self.read().clone()
    }

    /// Zero-argument user source for [`Authenticator::login`](crate::auth::Authenticator::login)
    pub fn supplier(&self) -> impl Fn() -> Vec<UserRecord> + Send + Sync + use<> {
        let registry = self.clone();
        move || registry.list()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserRecord {
        UserRecord::new("1", "Alice@Example.com", "Password123!", "Alice A")
    }

    #[test]
    fn add_get_remove() {
        let registry = UserRegistry::new();
        registry.add(alice());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("1").map(|u| u.name), Some("Alice A".to_string()));
        assert!(registry.get("2").is_none());

        assert!(registry.remove("1").is_some());
        assert!(registry.remove("1").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn update_replaces_matching_id() {
        let registry = UserRegistry::with_users(vec![alice()]);
        let mut renamed = alice();
        renamed.name = "Alice B".into();
        assert!(registry.update(renamed));
        assert_eq!(registry.get("1").unwrap().name, "Alice B");

        assert!(!registry.update(UserRecord::new("9", "x@y.zz", "p", "X")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn email_lookup_ignores_case() {
        let registry = UserRegistry::with_users(vec![alice()]);
        assert!(registry.email_exists("alice@example.COM"));
        assert!(!registry.email_exists("bob@example.com"));
    }

    #[test]
    fn supplier_sees_later_additions() {
        let registry = UserRegistry::new();
        let supplier = registry.supplier();
        assert!(supplier().is_empty());
        registry.add(alice());
        assert_eq!(supplier().len(), 1);
        registry.clear();
        assert!(supplier().is_empty());
    }
}
