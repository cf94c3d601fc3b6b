//! Order-preserving word accumulator.

use std::collections::HashSet;

/// Collects extracted words for a single run.
///
/// With deduplication on, a word is kept only the first time its lowercase
/// form is seen. The `seen` set lives inside the sink, so two runs never
/// share state.
#[derive(Debug, Default)]
pub struct WordSink {
    dedupe: bool,
    lowercase: bool,
    seen: HashSet<String>,
    words: Vec<String>,
}

impl WordSink {
    #[must_use]
    pub fn new(dedupe: bool, lowercase: bool) -> Self {
        Self {
            dedupe,
            lowercase,
            seen: HashSet::new(),
            words: Vec::new(),
        }
    }

    /// Add a word. Returns `false` when it was dropped as a duplicate.
    pub fn push(&mut self, word: &str) -> bool {
        let word = if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };

        if self.dedupe && !self.seen.insert(word.to_lowercase()) {
            return false;
        }

        self.words.push(word);
        true
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Render as newline-terminated text, one word per line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.words.iter().map(|w| w.len() + 1).sum());
        for word in &self.words {
            out.push_str(word);
            out.push('\n');
        }
        out
    }
}

impl Extend<String> for WordSink {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.push(&word);
        }
    }
}
