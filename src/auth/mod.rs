//! Authentication system
//!
//! Mock token issue, login and sign-up against an in-memory user source, and
//! session persistence in a secure store.

mod authenticator;
pub mod credentials;
pub mod results;
mod session;
pub mod token;

pub use authenticator::Authenticator;
pub use credentials::{Credentials, User, UserRecord};
pub use results::LoginResult;
pub use token::{generate_token, validate_token};
