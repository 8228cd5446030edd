//! Known accounts

pub mod registry;

pub use registry::UserRegistry;
