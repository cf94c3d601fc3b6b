//! Extractor for `RECITE` / `DICTATION` / `SPELLING` tagged study lists.
//!
//! Each entry in these files usually spans three lines:
//!
//! ```text
//! RECITE abandon [ə'bændən]	"RECITE abandon [ə'bændən] ..."
//! "SPELLING ..."	"SPELLING ...	abandon	[ə'bændən] ..."
//! DICTATION	"DICTATION	abandon	[ə'bændən] ..."
//! ```
//!
//! Without deduplication the same word is therefore reported up to three times.

use regex::Regex;
use std::sync::OnceLock;
use wordbank_core::{is_word, strip_quotes};

use crate::WordExtractor;

static RECITE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// `RECITE <word>`, capturing the word.
#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn recite_pattern() -> &'static Regex {
    RECITE_PATTERN.get_or_init(|| {
        Regex::new(r"^RECITE\s+([A-Za-z][A-Za-z'\-]*)\b")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

const DICTATION: &str = "DICTATION";
const SPELLING: &str = "SPELLING";

#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedExtractor;

impl WordExtractor for TaggedExtractor {
    fn name(&self) -> &'static str {
        "tagged"
    }

    fn extract_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let (first, rest) = line.split_once('\t').unwrap_or((line, ""));
        let first = strip_quotes(first);

        if let Some(word) = from_recite(first) {
            return Some(word);
        }

        if first == DICTATION {
            return from_dictation(rest);
        }

        if first.contains(SPELLING) {
            return from_spelling(rest);
        }

        None
    }
}

fn from_recite(first: &str) -> Option<&str> {
    recite_pattern()
        .captures(first.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The token right after the `DICTATION` marker, when it is a word.
fn from_dictation(rest: &str) -> Option<&str> {
    let s = strip_quotes(rest);
    if !s.starts_with(DICTATION) {
        return None;
    }

    let mut tokens = s.split(['\t', ' ']).filter(|t| !t.is_empty());
    tokens.find(|t| *t == DICTATION)?;
    let word = tokens.next()?.trim();
    is_word(word).then_some(word)
}

/// The first word field whose next tab field opens a phonetic transcription.
fn from_spelling(rest: &str) -> Option<&str> {
    let s = strip_quotes(rest);
    if !s.contains(SPELLING) {
        return None;
    }

    let parts: Vec<&str> = s.split('\t').collect();
    parts.iter().enumerate().find_map(|(i, part)| {
        let word = part.trim();
        if !is_word(word) {
            return None;
        }
        let next = parts.get(i + 1).map_or("", |p| p.trim());
        (next.starts_with('[') || next.starts_with('/')).then_some(word)
    })
}
