//! Error handling
//!
//! Defines error types and handling for auth and storage.

pub mod handlers;
pub mod types;

pub use types::*;
