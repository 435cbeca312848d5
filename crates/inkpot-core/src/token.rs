//! Tamper-evident session tokens of the form `value|digest`.
//!
//! The digest is an unkeyed SHA-256 of the value, so the scheme only proves
//! "this token was minted by something that knows the format"; anyone who
//! reads this file can forge one. It is kept for compatibility with the
//! cookie format it serves and must not be mistaken for real authentication.

use sha2::{Digest, Sha256};

/// Mint a token embedding `value` in plaintext next to its hex digest.
pub fn make_token(value: &str) -> String {
    let digest = hex::encode(Sha256::digest(value.as_bytes()));
    format!("{value}|{digest}")
}

/// Verify a token and return the embedded value.
///
/// The value is everything before the first `|`; the token is valid iff
/// re-minting that value reproduces the token byte for byte. Malformed
/// input (no separator, truncated digest) simply fails verification.
pub fn check_token(token: &str) -> Option<&str> {
    let value = token.split('|').next().unwrap_or(token);
    if make_token(value) == token {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let token = make_token("alice");
        assert_eq!(check_token(&token), Some("alice"));
    }

    #[test]
    fn round_trip_empty_value() {
        let token = make_token("");
        assert_eq!(check_token(&token), Some(""));
    }

    #[test]
    fn token_shape_is_value_pipe_digest() {
        let token = make_token("alice");
        let (value, digest) = token.split_once('|').expect("separator");
        assert_eq!(value, "alice");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tampered_value_fails() {
        let token = make_token("alice");
        let forged = token.replacen("alice", "mallory", 1);
        assert_eq!(check_token(&forged), None);
    }

    #[test]
    fn tampered_digest_fails() {
        let mut token = make_token("alice");
        token.pop();
        token.push('0');
        // If the last digest character already was '0', flip it instead.
        if check_token(&token).is_some() {
            token.pop();
            token.push('1');
        }
        assert_eq!(check_token(&token), None);
    }

    #[test]
    fn missing_separator_fails() {
        assert_eq!(check_token("alice"), None);
        assert_eq!(check_token(""), None);
    }

    #[test]
    fn value_containing_separator_splits_on_first() {
        // "a|b" can never verify: the embedded value is read as "a".
        let token = format!("a|b|{}", hex::encode(Sha256::digest(b"a|b")));
        assert_eq!(check_token(&token), None);
    }
}
