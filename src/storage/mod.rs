//! Secure storage
//!
//! Key-value persistence used for the auth token and the signed-in user.

pub mod memory;
pub mod secure_store;

pub use memory::InMemorySecureStore;
pub use secure_store::SecureStore;
