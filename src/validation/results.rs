//! Validation result types
//!
//! Defines result structures returned by field validators and the strength scorer.

use serde::Serialize;
use std::fmt;

/// Outcome of validating a single form field.
///
/// `error` is empty exactly when `is_valid` is true; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    error: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: String::new(),
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: error.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Empty string when valid
    pub fn error(&self) -> &str {
        &self.error
    }
}

/// Coarse password strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// 0-2 weak, 3-4 medium, 5+ strong
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Medium,
            _ => Strength::Strong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "weak"),
            Strength::Medium => write!(f, "medium"),
            Strength::Strong => write!(f, "strong"),
        }
    }
}

/// Result of scoring a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub strength: Strength,
    pub score: u8,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        Self {
            strength: Strength::from_score(score),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_result_has_empty_error() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert_eq!(result.error(), "");
    }

    #[test]
    fn score_buckets() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Weak);
        assert_eq!(Strength::from_score(3), Strength::Medium);
        assert_eq!(Strength::from_score(4), Strength::Medium);
        assert_eq!(Strength::from_score(5), Strength::Strong);
        assert_eq!(Strength::from_score(6), Strength::Strong);
    }

    #[test]
    fn serializes_like_the_form_layer_expects() {
        let json = serde_json::to_value(ValidationResult::invalid("Email is required")).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["error"], "Email is required");

        let json = serde_json::to_value(PasswordStrength::from_score(4)).unwrap();
        assert_eq!(json["strength"], "medium");
        assert_eq!(json["score"], 4);
    }
}
