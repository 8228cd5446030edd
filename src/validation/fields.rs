//! Field validators
//!
//! One validator per sign-up/login field. Rules are checked in order and the
//! first failing rule's message is returned.

use regex::Regex;
use std::sync::LazyLock;

use super::results::ValidationResult;

/// Whitespace as browsers and JS engines see it (`\s`, `String.trim`):
/// includes U+FEFF, excludes U+0085.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let ws = WHITESPACE_CLASS;
    Regex::new(&format!(r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$")).expect("email pattern is valid")
});

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let ws = WHITESPACE_CLASS;
    Regex::new(&format!(r"^[a-zA-Z{ws}\-']+$")).expect("name pattern is valid")
});

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 4;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Characters that count as "special" for passwords.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

pub(crate) fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trims the same characters the form layer trims.
pub(crate) fn trim_input(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Length in UTF-16 code units, the unit the form layer measures in.
pub(crate) fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

pub(crate) fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_special(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Plain pattern check without the "required" rule.
pub fn is_email_like(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(email: &str) -> ValidationResult {
    if trim_input(email).is_empty() {
        return ValidationResult::invalid("Email is required");
    }

    if !is_email_like(email) {
        return ValidationResult::invalid("Please enter a valid email address");
    }

    ValidationResult::valid()
}

pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::invalid("Password is required");
    }

    if input_length(password) < MIN_PASSWORD_LENGTH {
        return ValidationResult::invalid("Password must be at least 8 characters");
    }

    if !has_lowercase(password) {
        return ValidationResult::invalid("Password must contain at least one lowercase letter");
    }

    if !has_uppercase(password) {
        return ValidationResult::invalid("Password must contain at least one uppercase letter");
    }

    if !has_digit(password) {
        return ValidationResult::invalid("Password must contain at least one number");
    }

    if !has_special(password) {
        return ValidationResult::invalid("Password must contain at least one special character");
    }

    ValidationResult::valid()
}

/// Exact comparison, case and whitespace sensitive.
pub fn validate_confirm_password(password: &str, confirm_password: &str) -> ValidationResult {
    if confirm_password.is_empty() {
        return ValidationResult::invalid("Please confirm your password");
    }

    if password != confirm_password {
        return ValidationResult::invalid("Passwords do not match");
    }

    ValidationResult::valid()
}

fn validate_name(value: &str, label: &str) -> ValidationResult {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return ValidationResult::invalid(format!("{label} is required"));
    }

    if input_length(trimmed) < MIN_NAME_LENGTH {
        return ValidationResult::invalid(format!("{label} must be at least 2 characters"));
    }

    // Pattern runs on the untrimmed input; surrounding spaces are allowed anyway.
    if !NAME_PATTERN.is_match(value) {
        return ValidationResult::invalid(format!(
            "{label} can only contain letters, spaces, hyphens, and apostrophes"
        ));
    }

    ValidationResult::valid()
}

pub fn validate_first_name(first_name: &str) -> ValidationResult {
    validate_name(first_name, "First name")
}

pub fn validate_last_name(last_name: &str) -> ValidationResult {
    validate_name(last_name, "Last name")
}

/// Counts digits only, so formatting like `(123) 456-7890` is accepted.
pub fn validate_phone_number(phone_number: &str) -> ValidationResult {
    if trim_input(phone_number).is_empty() {
        return ValidationResult::invalid("Phone number is required");
    }

    let digits = phone_number.chars().filter(char::is_ascii_digit).count();

    if digits < MIN_PHONE_DIGITS {
        return ValidationResult::invalid("Phone number is too short");
    }

    if digits > MAX_PHONE_DIGITS {
        return ValidationResult::invalid("Phone number is too long");
    }

    ValidationResult::valid()
}
