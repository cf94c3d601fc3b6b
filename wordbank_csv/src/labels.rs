//! Named label sets built from one-word-per-line files.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use wordbank_core::{Error, Result, TextEncoding, is_skipped_line, read_text_file, text_lines};

use crate::tables::AUTO_LABEL_FILES;

/// A label and the lowercase words that earn it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    pub label: String,
    pub words: HashSet<String>,
}

impl LabelSet {
    #[must_use]
    pub fn new(label: impl Into<String>, words: HashSet<String>) -> Self {
        Self {
            label: label.into(),
            words,
        }
    }

    /// `word_lower` must already be lowercase.
    #[must_use]
    pub fn contains(&self, word_lower: &str) -> bool {
        self.words.contains(word_lower)
    }
}

/// Load a word list into a lowercase set, ignoring blank and `#` lines.
pub fn load_word_set(path: &Path, encoding: TextEncoding) -> Result<HashSet<String>> {
    let text = read_text_file(path, encoding)?;
    Ok(text_lines(&text)
        .filter(|line| !is_skipped_line(line))
        .map(|line| line.trim().to_lowercase())
        .collect())
}

/// Parse `name=path` or `name:path`.
///
/// `=` is preferred when both appear, so Windows paths like
/// `小学=C:\lists\a.txt` work. Quotes around the path are removed.
pub fn parse_label_spec(spec: &str) -> Result<(String, PathBuf)> {
    let s = spec.trim();
    if s.is_empty() {
        return Err(Error::InvalidLabelSpec("empty label spec".to_string()));
    }

    let (label, path) = s
        .split_once('=')
        .or_else(|| s.split_once(':'))
        .ok_or_else(|| {
            Error::InvalidLabelSpec(format!(
                "{s}: must contain \"=\" or \":\" (e.g. 小学=广州小学英语__仅单词.txt)"
            ))
        })?;

    let label = label.trim();
    let path = path.trim().trim_matches('"').trim_matches('\'');
    if label.is_empty() || path.is_empty() {
        return Err(Error::InvalidLabelSpec(format!(
            "{s}: must look like \"小学=path\""
        )));
    }

    Ok((label.to_string(), PathBuf::from(path)))
}

/// Where label sets come from.
#[derive(Debug, Clone, Default)]
pub struct LabelSources<'a> {
    /// Explicit `name=path` specs, in command-line order.
    pub specs: &'a [String],
    /// Look up the well-known files from [`AUTO_LABEL_FILES`].
    pub auto_labels: bool,
    /// Directory searched when `auto_labels` is set.
    pub auto_labels_dir: Option<&'a Path>,
}

impl LabelSources<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.specs.is_empty() && !self.auto_labels
    }
}

/// Build the ordered label sets.
///
/// Auto-discovered labels come first in table order, then explicit specs in
/// the order given. Word sets of a label named more than once are merged.
/// Files that do not exist are skipped.
pub fn build_label_sets(sources: &LabelSources<'_>, encoding: TextEncoding) -> Result<Vec<LabelSet>> {
    let specs = sources
        .specs
        .iter()
        .map(|spec| parse_label_spec(spec))
        .collect::<Result<Vec<_>>>()?;

    let mut merged: HashMap<String, HashSet<String>> = HashMap::new();

    if sources.auto_labels {
        let dir = sources
            .auto_labels_dir
            .filter(|dir| dir.is_dir())
            .ok_or_else(|| Error::AutoLabelsDir(sources.auto_labels_dir.map(Path::to_path_buf)))?;

        for (label, file_name) in AUTO_LABEL_FILES {
            let path = dir.join(file_name);
            if path.exists() {
                merge_file(&mut merged, label, &path, encoding)?;
            } else {
                debug!("Auto label {label}: {} not found", path.display());
            }
        }
    }

    for (label, path) in &specs {
        if path.exists() {
            merge_file(&mut merged, label, path, encoding)?;
        } else {
            warn!("Label {label}: {} not found, skipping", path.display());
        }
    }

    let auto_order = AUTO_LABEL_FILES
        .iter()
        .filter(|_| sources.auto_labels)
        .map(|(label, _)| *label);
    let spec_order = specs.iter().map(|(label, _)| label.as_str());

    let mut out = Vec::new();
    for label in auto_order.chain(spec_order) {
        if let Some(words) = merged.remove(label) {
            out.push(LabelSet::new(label, words));
        }
    }
    Ok(out)
}

fn merge_file(
    merged: &mut HashMap<String, HashSet<String>>,
    label: &str,
    path: &Path,
    encoding: TextEncoding,
) -> Result<()> {
    let words = load_word_set(path, encoding)?;
    info!("Label {label}: {} words from {}", words.len(), path.display());
    merged.entry(label.to_string()).or_default().extend(words);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_spec() {
        let (label, path) = parse_label_spec("小学=/lists/primary.txt").unwrap();
        assert_eq!(label, "小学");
        assert_eq!(path, PathBuf::from("/lists/primary.txt"));

        let (label, path) = parse_label_spec(" 初中 : \"middle.txt\" ").unwrap();
        assert_eq!(label, "初中");
        assert_eq!(path, PathBuf::from("middle.txt"));
    }

    #[test]
    fn test_parse_label_spec_prefers_equals() {
        let (label, path) = parse_label_spec("高中=C:\\lists\\high.txt").unwrap();
        assert_eq!(label, "高中");
        assert_eq!(path, PathBuf::from("C:\\lists\\high.txt"));
    }

    #[test]
    fn test_parse_label_spec_errors() {
        for spec in ["", "   ", "no-delimiter", "=path.txt", "label=", "label= \"\" "] {
            assert!(
                matches!(parse_label_spec(spec), Err(Error::InvalidLabelSpec(_))),
                "spec {spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_load_word_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "# header\nCat\n\n  dog  \ncat\n").unwrap();

        let words = load_word_set(&path, TextEncoding::utf8()).unwrap();
        assert_eq!(words, HashSet::from(["cat".to_string(), "dog".to_string()]));
    }

    #[test]
    fn test_label_set_contains() {
        let set = LabelSet::new("小学", HashSet::from(["cat".to_string()]));
        assert!(set.contains("cat"));
        assert!(!set.contains("Cat"));
    }
}
