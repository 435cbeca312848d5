//! Registration field validation.
//!
//! The rules are deliberately loose: usernames are a restricted alphabet,
//! passwords only have a length window, and the email pattern accepts
//! anything shaped like `word@word.word`, including an arbitrary character
//! where the dot should be. That last quirk is load-bearing: callers and
//! tests rely on the pattern as written, so tightening it would change
//! observable behavior.

use std::sync::LazyLock;

use regex::Regex;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,20}$").expect("static regex"));

static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.{3,20}$").expect("static regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\S]+@[\S]+.[\S]+$").expect("static regex"));

/// A username is 3–20 characters from `[a-zA-Z0-9_-]`.
pub fn valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// A password is any 3–20 characters.
pub fn valid_password(password: &str) -> bool {
    PASSWORD_RE.is_match(password)
}

/// An email is optional: empty passes, otherwise it must loosely look like
/// an address (`nonspace+ @ nonspace+ <any char> nonspace+`).
pub fn valid_email(email: &str) -> bool {
    email.is_empty() || EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_accepts_full_alphabet() {
        assert!(valid_username("alice"));
        assert!(valid_username("Alice_99"));
        assert!(valid_username("a-b_c"));
        assert!(valid_username("abc"));
        assert!(valid_username(&"x".repeat(20)));
    }

    #[test]
    fn username_rejects_length_bounds() {
        assert!(!valid_username(""));
        assert!(!valid_username("ab"));
        assert!(!valid_username(&"x".repeat(21)));
    }

    #[test]
    fn username_rejects_foreign_characters() {
        assert!(!valid_username("alice smith"));
        assert!(!valid_username("alice!"));
        assert!(!valid_username("al.ice"));
        assert!(!valid_username("ælice"));
    }

    #[test]
    fn password_is_length_only() {
        assert!(valid_password("abc"));
        assert!(valid_password("p@$$ word"));
        assert!(valid_password(&"x".repeat(20)));
        assert!(!valid_password("ab"));
        assert!(!valid_password(""));
        assert!(!valid_password(&"x".repeat(21)));
    }

    #[test]
    fn email_empty_is_valid() {
        assert!(valid_email(""));
    }

    #[test]
    fn email_accepts_ordinary_addresses() {
        assert!(valid_email("alice@example.com"));
        assert!(valid_email("a@b.c"));
    }

    #[test]
    fn email_dot_position_matches_any_character() {
        // The pattern's "." is an unescaped any-char match, so an address
        // with no literal dot still passes as long as the tail is long enough.
        assert!(valid_email("alice@exampleXcom"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!valid_email("alice"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email("alice@"));
        assert!(!valid_email("alice example@com.x"));
    }
}
