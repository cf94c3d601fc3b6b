//! Extractor for plain word lists: one entry per line, the word first.
//!
//! Files in this shape often begin with `#separator:tab` style headers and
//! carry the phonetic and meaning after a TAB; only the part before the
//! first TAB is inspected.

use wordbank_core::{first_word, leading_word};

use crate::WordExtractor;

#[derive(Debug, Clone, Copy, Default)]
pub struct GenericExtractor;

impl WordExtractor for GenericExtractor {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let left = line
            .split('\t')
            .next()
            .unwrap_or(line)
            .trim()
            .trim_matches([' ', '"', '\'']);

        leading_word(left).or_else(|| first_word(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(line: &str) -> Option<&str> {
        GenericExtractor.extract_line(line)
    }

    #[test]
    fn test_word_before_tab() {
        assert_eq!(extract("apple\t/ˈæpəl/\tn. 苹果"), Some("apple"));
        assert_eq!(extract("what's [wɒts]\t是什么"), Some("what's"));
        assert_eq!(extract("pencil-box\tn. 文具盒"), Some("pencil-box"));
    }

    #[test]
    fn test_quotes_are_stripped() {
        assert_eq!(extract("\"apple\"\tn. 苹果"), Some("apple"));
    }

    #[test]
    fn test_falls_back_to_first_word_anywhere() {
        assert_eq!(extract("12. apple\tn. 苹果"), Some("apple"));
        assert_eq!(extract("(1) apple"), Some("apple"));
    }

    #[test]
    fn test_only_first_field_is_searched() {
        assert_eq!(extract("苹果\tapple"), None);
        assert_eq!(extract("123"), None);
    }
}
