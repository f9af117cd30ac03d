//! Format rules for typed values
//!
//! - email: `local@domain.tld`, no whitespace and a single `@`
//! - number: anything a JavaScript-style numeric conversion accepts after
//!   trimming: decimal with optional exponent, `Infinity`, or a 0x/0o/0b
//!   integer literal

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static NUMBER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn number_pattern() -> &'static Regex {
    NUMBER_PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:[+-]?(?:\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?|Infinity)",
            r"|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$",
        ))
        .expect("number pattern is valid")
    })
}

/// Checks the `local@domain.tld` shape. The value is not trimmed.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Checks that the value reads as a number. Surrounding whitespace is
/// ignored; an empty value is never a number.
pub fn is_valid_number(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && number_pattern().is_match(trimmed)
}

/// Length of a text value in characters
pub fn text_length(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("a@b.c.d"));
    }

    #[test]
    fn test_email_rejects() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_number_accepts() {
        for v in [
            "42", "-7", "+3", "3.14", ".5", "5.", "1e3", "2.5E-4", " 12 ", "Infinity",
            "-Infinity", "0x1A", "0o17", "0b101",
        ] {
            assert!(is_valid_number(v), "{} should be a number", v);
        }
    }

    #[test]
    fn test_number_rejects() {
        for v in [
            "", "   ", "abc", "12abc", "1,000", "1_000", "NaN", "inf", "-0x1A", "1e", ".", "+",
        ] {
            assert!(!is_valid_number(v), "{} should not be a number", v);
        }
    }

    #[test]
    fn test_text_length_counts_chars() {
        assert_eq!(text_length("abc"), 3);
        assert_eq!(text_length("héllo"), 5);
    }

    #[test]
    fn test_text_length_astral_char_counts_once() {
        // Two UTF-16 code units, one char
        let emoji = "\u{1F600}";
        assert_eq!(emoji.encode_utf16().count(), 2);
        assert_eq!(text_length(emoji), 1);
        assert_eq!(text_length("a\u{1F600}b"), 3);
    }
}
