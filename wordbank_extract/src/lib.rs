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

//! Word-only extraction from study-list text files.
//!
//! Two line formats are supported, each behind the [`WordExtractor`] trait:
//! - [`TaggedExtractor`]: `RECITE` / `DICTATION` / `SPELLING` tagged lines
//! - [`GenericExtractor`]: any line whose first tab field starts with a word

mod generic;
mod tagged;
mod writer;

pub use generic::GenericExtractor;
pub use tagged::TaggedExtractor;
pub use writer::{OUTPUT_SUFFIX, WordListOptions, default_output_path, write_words};

use wordbank_core::{WordSink, is_skipped_line, text_lines};

/// Pulls at most one word out of a single trimmed, non-comment line.
pub trait WordExtractor {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Extract the word token carried by `line`, if the line has one.
    fn extract_line<'a>(&self, line: &'a str) -> Option<&'a str>;
}

/// Lazily extract words from every usable line of `text`, in input order.
pub fn extract_words<'a, E: WordExtractor>(
    extractor: &'a E,
    text: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    text_lines(text)
        .map(str::trim)
        .filter(|line| !is_skipped_line(line))
        .filter_map(move |line| extractor.extract_line(line))
}

/// Extract words from `text` into a fresh [`WordSink`].
#[must_use]
pub fn collect_words<E: WordExtractor>(extractor: &E, text: &str, dedupe: bool, lowercase: bool) -> WordSink {
    let mut sink = WordSink::new(dedupe, lowercase);
    for word in extract_words(extractor, text) {
        sink.push(word);
    }
    sink
}
