//! Sign-up form validation
//!
//! Runs every field validator, without stopping at the first invalid field,
//! so the form can show all messages at once.

use serde::{Deserialize, Serialize};

use super::fields::{
    validate_confirm_password, validate_email, validate_first_name, validate_last_name,
    validate_password, validate_phone_number,
};
use super::results::ValidationResult;

/// Raw sign-up form input
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// Dialing prefix from the country picker, e.g. `+1`
    #[serde(default)]
    pub country_code: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field error messages; an empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormErrors {
    fn fields(&self) -> [&str; 6] {
        [
            &self.email,
            &self.password,
            &self.confirm_password,
            &self.first_name,
            &self.last_name,
            &self.phone_number,
        ]
    }

    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|e| e.is_empty())
    }

    /// First message in form order (email, password, confirmation, names, phone)
    pub fn first_error(&self) -> Option<&str> {
        self.fields().into_iter().find(|e| !e.is_empty())
    }
}

fn message(result: ValidationResult) -> String {
    result.error().to_string()
}

impl SignupForm {
    pub fn validate(&self) -> FormErrors {
        FormErrors {
            email: message(validate_email(&self.email)),
            password: message(validate_password(&self.password)),
            confirm_password: message(validate_confirm_password(
                &self.password,
                &self.confirm_password,
            )),
            first_name: message(validate_first_name(&self.first_name)),
            last_name: message(validate_last_name(&self.last_name)),
            phone_number: message(validate_phone_number(&self.phone_number)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            email: "jane@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            phone_number: "(555) 010-9999".into(),
            country_code: Some("+1".into()),
            password: "Password123!".into(),
            confirm_password: "Password123!".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        let errors = filled().validate();
        assert!(errors.is_valid());
        assert_eq!(errors.first_error(), None);
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = SignupForm::default().validate();
        assert!(!errors.is_valid());
        assert_eq!(errors.email, "Email is required");
        assert_eq!(errors.password, "Password is required");
        assert_eq!(errors.confirm_password, "Please confirm your password");
        assert_eq!(errors.first_name, "First name is required");
        assert_eq!(errors.last_name, "Last name is required");
        assert_eq!(errors.phone_number, "Phone number is required");
        assert_eq!(errors.first_error(), Some("Email is required"));
    }

    #[test]
    fn single_bad_field() {
        let mut form = filled();
        form.confirm_password = "Password123?".into();
        let errors = form.validate();
        assert!(!errors.is_valid());
        assert_eq!(errors.first_error(), Some("Passwords do not match"));
        assert!(errors.email.is_empty());
    }

    #[test]
    fn deserializes_camel_case_input() {
        let form: SignupForm = serde_json::from_str(
            r#"{"email":"a@b.co","firstName":"Al","lastName":"Bo","phoneNumber":"1234",
                "password":"Password123!","confirmPassword":"Password123!"}"#,
        )
        .unwrap();
        assert_eq!(form.country_code, None);
        assert!(form.validate().is_valid());
    }
}
