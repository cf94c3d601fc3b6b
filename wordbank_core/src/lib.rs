#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Shared building blocks for the word-list tools.
//!
//! Everything here is line-oriented and allocation-light: word token
//! patterns, level-tag merging, the dedup accumulator used by the
//! extractors, and the text decoding/encoding layer used by every command.

mod error;
pub mod level;
pub mod sink;
pub mod text;
pub mod word;

pub use error::{Error, Result};
pub use level::append_level;
pub use sink::WordSink;
pub use text::{TextEncoding, read_text_file, text_lines, write_text_file};
pub use word::{first_word, is_word, leading_word, strip_quotes};

/// Returns `true` for lines every tool ignores: blank lines and `#` comments.
///
/// Leading whitespace is ignored before checking for the comment marker.
#[must_use]
pub fn is_skipped_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_lines() {
        assert!(is_skipped_line(""));
        assert!(is_skipped_line("   \t "));
        assert!(is_skipped_line("#separator:tab"));
        assert!(is_skipped_line("   # indented comment"));
        assert!(!is_skipped_line("apple\t/ˈæpəl/"));
    }
}
