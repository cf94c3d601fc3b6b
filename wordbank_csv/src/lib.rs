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

//! Study-list TXT to CSV conversion.
//!
//! Each usable input line becomes one row of
//! `rank, level, word, phonetic, meaning, full_meaning, example, source`.
//! The `level` column is assembled from a base level (explicit or inferred
//! from the file name), optional level words, named label sets, and, when
//! merging, the value a previous run wrote for the same rank.

pub mod convert;
pub mod existing;
pub mod fields;
pub mod labels;
pub mod meaning;
pub mod tables;

pub use convert::{
    CSV_HEADER, CSV_OUTPUT_SUFFIX, ConvertOptions, CsvRow, DEFAULT_LEVEL_SEP, DEFAULT_LEVEL_VALUE,
    LevelPolicy, convert_file, convert_lines, default_output_path, rows_to_csv,
};
pub use existing::{ExistingLevels, load_existing_levels_by_rank, parse_existing_levels};
pub use fields::{LineFields, clean_meaning, extract_fields};
pub use labels::{LabelSet, LabelSources, build_label_sets, load_word_set, parse_label_spec};
pub use meaning::{MEANING_STRATEGIES, MeaningStrategy, short_meaning};
pub use tables::{AUTO_LABEL_FILES, LEVEL_FROM_FILENAME, infer_level_from_path, resolve_base_level};
