//! Form validation
//!
//! Pure field validators, the password strength scorer, and whole-form
//! validation for sign-up.

pub mod fields;
pub mod form;
pub mod results;
pub mod strength;

pub use fields::{
    is_email_like, validate_confirm_password, validate_email, validate_first_name,
    validate_last_name, validate_password, validate_phone_number,
};
pub use form::{FormErrors, SignupForm};
pub use results::{PasswordStrength, Strength, ValidationResult};
pub use strength::password_strength;
