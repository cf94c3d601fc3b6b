//! TXT to CSV conversion.

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;
use wordbank_core::{
    Error, Result, TextEncoding, append_level, is_skipped_line, read_text_file, text_lines,
    write_text_file,
};

use crate::existing::{ExistingLevels, load_existing_levels_by_rank};
use crate::fields::extract_fields;
use crate::labels::LabelSet;

/// Column order of every CSV written.
pub const CSV_HEADER: [&str; 8] = [
    "rank",
    "level",
    "word",
    "phonetic",
    "meaning",
    "full_meaning",
    "example",
    "source",
];

/// Appended to the input file stem to name the default CSV output.
pub const CSV_OUTPUT_SUFFIX: &str = ".csv";

pub const DEFAULT_LEVEL_VALUE: &str = "初中";
pub const DEFAULT_LEVEL_SEP: &str = ",";

/// One output row. Field order matches [`CSV_HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CsvRow {
    pub rank: usize,
    pub level: String,
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
    pub full_meaning: String,
    pub example: String,
    pub source: String,
}

/// How the `level` column of each row is computed.
#[derive(Debug, Clone)]
pub struct LevelPolicy {
    /// Starting level for rows not seeded from an existing output.
    pub base_level: String,
    /// Rows whose word is in this set get `level_value` appended.
    pub level_words: Option<HashSet<String>>,
    pub level_value: String,
    /// Separator between tags, also used to detect duplicates.
    pub level_sep: String,
    /// Each set containing the row's word appends its label, in order.
    pub label_sets: Vec<LabelSet>,
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self {
            base_level: String::new(),
            level_words: None,
            level_value: DEFAULT_LEVEL_VALUE.to_string(),
            level_sep: DEFAULT_LEVEL_SEP.to_string(),
            label_sets: Vec::new(),
        }
    }
}

impl LevelPolicy {
    /// Level for the row at `rank` holding `word`.
    #[must_use]
    pub fn level_for(&self, rank: usize, word: &str, existing: Option<&ExistingLevels>) -> String {
        let mut level = existing
            .and_then(|levels| levels.get(&rank))
            .map_or_else(|| self.base_level.clone(), Clone::clone);

        if word.is_empty() {
            return level;
        }
        let word_lower = word.to_lowercase();

        if self
            .level_words
            .as_ref()
            .is_some_and(|words| words.contains(&word_lower))
        {
            level = append_level(&level, &self.level_value, &self.level_sep);
        }

        for set in self.label_sets.iter().filter(|set| set.contains(&word_lower)) {
            level = append_level(&level, &set.label, &self.level_sep);
        }
        level
    }
}

/// Convert every usable line of `text` into a row.
///
/// Ranks start at 1 and count only non-blank, non-comment lines. The
/// counter is local to the call.
#[must_use]
pub fn convert_lines(
    text: &str,
    policy: &LevelPolicy,
    existing: Option<&ExistingLevels>,
) -> Vec<CsvRow> {
    text_lines(text)
        .filter(|line| !is_skipped_line(line))
        .enumerate()
        .map(|(i, line)| {
            let rank = i + 1;
            let fields = extract_fields(line);
            CsvRow {
                rank,
                level: policy.level_for(rank, &fields.word, existing),
                word: fields.word,
                phonetic: fields.phonetic,
                meaning: fields.meaning,
                full_meaning: fields.full_meaning,
                example: String::new(),
                source: String::new(),
            }
        })
        .collect()
}

/// Render rows as CSV text with a header and `\n` line endings.
pub fn rows_to_csv(rows: &[CsvRow]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input_encoding: TextEncoding,
    pub output_encoding: TextEncoding,
    pub policy: LevelPolicy,
    /// Seed levels by rank from the output file if it already exists.
    pub merge_existing_output: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_encoding: TextEncoding::utf8(),
            output_encoding: TextEncoding::utf8(),
            policy: LevelPolicy::default(),
            merge_existing_output: false,
        }
    }
}

/// `dir/stem.ext` becomes `dir/stem.csv`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}{CSV_OUTPUT_SUFFIX}"))
}

/// Whether `a` and `b` name the same file. Paths that cannot be resolved
/// are compared as written.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Convert `input` to a CSV at `output`. Returns the number of rows.
///
/// Fails with [`Error::OutputIsInput`] when `output` is the input file, as
/// happens with the default output path of a `.csv` input.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<usize> {
    if is_same_file(input, output) {
        return Err(Error::OutputIsInput(output.to_path_buf()));
    }

    let existing = if options.merge_existing_output {
        load_existing_levels_by_rank(output)?
    } else {
        None
    };

    info!(
        "Converting {} [{}]",
        input.display(),
        options.input_encoding
    );
    let text = read_text_file(input, options.input_encoding)?;
    let rows = convert_lines(&text, &options.policy, existing.as_ref());

    info!(
        "Writing {} rows to {} [{}]",
        rows.len(),
        output.display(),
        options.output_encoding
    );
    let csv_text = rows_to_csv(&rows)?;
    write_text_file(output, &csv_text, options.output_encoding)?;

    Ok(rows.len())
}
