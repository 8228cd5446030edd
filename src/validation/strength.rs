//! Password strength scoring

use super::fields::{has_digit, has_lowercase, has_special, has_uppercase, input_length};
use super::results::PasswordStrength;

/// Scores a password 0..=6, one point per satisfied criterion.
///
/// Unlike [`validate_password`](super::validate_password) every criterion is
/// checked independently, so partial passwords still score.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::from_score(0);
    }

    let length = input_length(password);
    let criteria = [
        length >= 8,
        length >= 12,
        has_lowercase(password),
        has_uppercase(password),
        has_digit(password),
        has_special(password),
    ];

    let score = criteria.iter().filter(|met| **met).count() as u8;
    PasswordStrength::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Strength;

    #[test]
    fn empty_is_weak_zero() {
        assert_eq!(
            password_strength(""),
            PasswordStrength {
                strength: Strength::Weak,
                score: 0
            }
        );
    }

    #[test]
    fn full_password_is_strong() {
        let result = password_strength("Password123!");
        assert_eq!(result.strength, Strength::Strong);
        assert_eq!(result.score, 6);
    }

    #[test]
    fn missing_special_is_medium() {
        let result = password_strength("Password12");
        assert_eq!(result.strength, Strength::Medium);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn short_lowercase_is_weak() {
        let result = password_strength("abc");
        assert_eq!(result.strength, Strength::Weak);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn long_passphrase_without_variety() {
        // length >= 8, length >= 12, lowercase
        let result = password_strength("correcthorsebattery");
        assert_eq!(result.score, 3);
        assert_eq!(result.strength, Strength::Medium);
    }

    #[test]
    fn astral_characters_count_toward_length() {
        let result = password_strength("Aa1!😀😀");
        assert_eq!(result.score, 5);
        assert_eq!(result.strength, Strength::Strong);
    }

    #[test]
    fn short_but_varied_scores_classes_only() {
        let result = password_strength("aB3!");
        assert_eq!(result.score, 4);
        assert_eq!(result.strength, Strength::Medium);
    }
}
