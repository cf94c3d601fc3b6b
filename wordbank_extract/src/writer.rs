use std::path::{Path, PathBuf};
use tracing::info;
use wordbank_core::{Result, TextEncoding, read_text_file, write_text_file};

use crate::{WordExtractor, collect_words};

/// Appended to the input file stem to name the default output file.
pub const OUTPUT_SUFFIX: &str = "__仅单词.txt";

#[derive(Debug, Clone, Copy)]
pub struct WordListOptions {
    pub input_encoding: TextEncoding,
    pub output_encoding: TextEncoding,
    /// Drop repeats, comparing lowercase forms.
    pub dedupe: bool,
    /// Lowercase every emitted word.
    pub lowercase: bool,
}

impl Default for WordListOptions {
    fn default() -> Self {
        Self {
            input_encoding: TextEncoding::utf8(),
            output_encoding: TextEncoding::utf8(),
            dedupe: true,
            lowercase: false,
        }
    }
}

/// `dir/stem.ext` becomes `dir/stem__仅单词.txt`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Extract words from `input` and write them to `output`, one per line.
///
/// Returns the number of words written.
pub fn write_words<E: WordExtractor>(
    extractor: &E,
    input: &Path,
    output: &Path,
    options: WordListOptions,
) -> Result<usize> {
    info!(
        "Extracting words ({}) from {} [{}]",
        extractor.name(),
        input.display(),
        options.input_encoding
    );
    let text = read_text_file(input, options.input_encoding)?;

    let sink = collect_words(extractor, &text, options.dedupe, options.lowercase);

    info!(
        "Writing {} words to {} [{}]",
        sink.len(),
        output.display(),
        options.output_encoding
    );
    write_text_file(output, &sink.to_text(), options.output_encoding)?;

    Ok(sink.len())
}
