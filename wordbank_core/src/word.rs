//! Word token patterns.
//!
//! A word token is an ASCII letter followed by any run of letters,
//! apostrophes and hyphens (`what's`, `pencil-box`).

use regex::Regex;
use std::sync::OnceLock;

static WORD_FULL: OnceLock<Regex> = OnceLock::new();
static WORD_LEADING: OnceLock<Regex> = OnceLock::new();
static WORD_ANY: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn word_pattern(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Static word pattern is valid"))
}

/// Whether the whole string is a single word token.
#[must_use]
pub fn is_word(s: &str) -> bool {
    word_pattern(&WORD_FULL, r"^[A-Za-z][A-Za-z'\-]*$").is_match(s)
}

/// The word token anchored at the start of `s`, if any.
#[must_use]
pub fn leading_word(s: &str) -> Option<&str> {
    word_pattern(&WORD_LEADING, r"^[A-Za-z][A-Za-z'\-]*")
        .find(s)
        .map(|m| m.as_str())
}

/// The first word token anywhere in `s`.
#[must_use]
pub fn first_word(s: &str) -> Option<&str> {
    word_pattern(&WORD_ANY, r"[A-Za-z][A-Za-z'\-]*")
        .find(s)
        .map(|m| m.as_str())
}

/// Trim whitespace, then strip surrounding double quotes, then single quotes.
#[must_use]
pub fn strip_quotes(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}
