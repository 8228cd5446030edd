//! Mock session tokens
//!
//! Tokens look like `<userId>.<epochMillis>.<base36>`. They carry no
//! signature; "valid" only means the shape has three dot-separated parts.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_FRAGMENT_LEN: usize = 6;

pub(crate) fn current_time_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

fn random_fragment() -> String {
    let mut rng = rand::thread_rng();
    (0..RANDOM_FRAGMENT_LEN)
        .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect()
}

/// Not suitable for real security use.
pub fn generate_token(user_id: &str) -> String {
    format!("{}.{}.{}", user_id, current_time_millis(), random_fragment())
}

/// Shape check only; segment contents are never inspected.
pub fn validate_token(token: Option<&str>) -> bool {
    match token {
        Some(token) if !token.is_empty() => token.split('.').count() == 3,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_with_user_id() {
        let token = generate_token("user123");
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "user123");
        assert_eq!(generate_token("user2").split('.').next(), Some("user2"));
    }

    #[test]
    fn token_embeds_current_timestamp() {
        let before = current_time_millis();
        let token = generate_token("user123");
        let after = current_time_millis();

        let timestamp: u128 = token.split('.').nth(1).unwrap().parse().unwrap();
        assert!(timestamp >= before);
        assert!(timestamp <= after);
    }

    #[test]
    fn random_fragment_is_base36() {
        let token = generate_token("u");
        let fragment = token.split('.').nth(2).unwrap();
        assert_eq!(fragment.len(), RANDOM_FRAGMENT_LEN);
        assert!(fragment.bytes().all(|b| BASE36_ALPHABET.contains(&b)));
    }

    #[test]
    fn tokens_for_same_user_differ() {
        assert_ne!(generate_token("user123"), generate_token("user123"));
    }

    #[test]
    fn shape_validation() {
        assert!(!validate_token(None));
        assert!(!validate_token(Some("")));
        assert!(!validate_token(Some("invalid-token")));
        assert!(!validate_token(Some("user123")));
        assert!(!validate_token(Some("user123.timestamp")));
        assert!(!validate_token(Some("a.b.c.d")));
        assert!(validate_token(Some("user123.1234567890.random")));
        assert!(validate_token(Some("..")));
        assert!(validate_token(Some(&generate_token("user123"))));
    }
}
