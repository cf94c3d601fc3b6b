//! Field extraction for a single study-list line.
//!
//! A line looks roughly like `word [/phonetic/] \t meaning [Example sentence.]`
//! but nothing about it is guaranteed; every field is best effort.

use regex::Regex;
use std::sync::OnceLock;
use wordbank_core::leading_word;

use crate::meaning::short_meaning;

static PHONETIC: OnceLock<Regex> = OnceLock::new();
static EXAMPLE: OnceLock<Regex> = OnceLock::new();
static PERCENT: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).expect("Static regex pattern is guaranteed to be valid")
    })
}

fn phonetic_pattern() -> &'static Regex {
    cached(&PHONETIC, r"/[^/]+/")
}

/// A capitalised sentence of at least 16 characters before its terminator.
fn example_pattern() -> &'static Regex {
    cached(&EXAMPLE, r"[A-Z][^.?!]{15,}?[.?!]")
}

fn percent_pattern() -> &'static Regex {
    cached(&PERCENT, r"\d+%")
}

/// Fields pulled out of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFields {
    pub word: String,
    pub phonetic: String,
    /// First three senses of `full_meaning`.
    pub meaning: String,
    pub full_meaning: String,
    /// Only used to find where the meaning ends; never written out.
    pub example: String,
}

/// Split one raw line into its fields.
#[must_use]
pub fn extract_fields(line: &str) -> LineFields {
    let (left, right) = line.split_once('\t').unwrap_or((line, ""));
    let left = left.trim_matches([' ', '"', '\'']);
    let right = right.trim_matches([' ', '"', '\'']);
    let combined = format!("{left} {right}");

    let word = leading_word(left)
        .or_else(|| leading_word(combined.trim()))
        .unwrap_or("");

    let phonetic = phonetic_pattern()
        .find(left)
        .or_else(|| phonetic_pattern().find(right))
        .map_or("", |m| m.as_str());

    let example = example_pattern()
        .find(right)
        .or_else(|| example_pattern().find(left))
        .map_or("", |m| m.as_str().trim());

    let raw_meaning = if right.is_empty() { left } else { right };
    let full_meaning = clean_meaning(raw_meaning, example, word, phonetic);
    let meaning = short_meaning(&full_meaning);

    LineFields {
        word: word.to_string(),
        phonetic: phonetic.to_string(),
        meaning,
        full_meaning,
        example: example.to_string(),
    }
}

/// Strip everything that is not meaning from `text`.
///
/// Cuts at the example sentence (unless it opens the text), drops percent
/// figures such as `28%`, removes the phonetic, and removes a leading copy
/// of the word.
#[must_use]
pub fn clean_meaning(text: &str, example: &str, word: &str, phonetic: &str) -> String {
    let mut meaning = text;
    if !example.is_empty() {
        if let Some(cut) = meaning.find(example).filter(|&cut| cut > 0) {
            meaning = &meaning[..cut];
        }
    }

    let mut meaning = percent_pattern().replace_all(meaning, "").into_owned();
    if !phonetic.is_empty() {
        meaning = meaning.replace(phonetic, "");
    }

    strip_leading_word(&meaning, word).trim().to_string()
}

/// Drop `word` (case-insensitive) from the start of `text` when whitespace follows it.
fn strip_leading_word<'a>(text: &'a str, word: &str) -> &'a str {
    if word.is_empty() {
        return text;
    }
    let Some(head) = text.get(..word.len()) else {
        return text;
    };
    if !head.eq_ignore_ascii_case(word) {
        return text;
    }

    let rest = &text[word.len()..];
    let after = rest.trim_start();
    if after.len() == rest.len() { text } else { after }
}
