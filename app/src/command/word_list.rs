use clap::Args;
use std::path::PathBuf;
use tracing::info;
use wordbank_config::Config;
use wordbank_extract::{
    GenericExtractor, TaggedExtractor, WordExtractor, WordListOptions, default_output_path,
    write_words,
};

/// Flags shared by both word-only extractors.
#[derive(Debug, Clone, Args)]
pub struct WordListArgs {
    /// Input TXT file
    pub input: PathBuf,

    /// Output TXT file (default: input name + __仅单词.txt)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Input text encoding (default: utf-8)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Output encoding (default: utf-8; "utf-8-sig" for Excel)
    #[arg(long)]
    pub output_encoding: Option<String>,

    /// Write UTF-8 with BOM for Excel
    #[arg(long)]
    pub excel: bool,

    /// Keep repeated words (default: dedupe case-insensitively, keep first)
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Lowercase every word
    #[arg(long)]
    pub lower: bool,
}

/// Which line format the input follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListKind {
    /// `RECITE` / `DICTATION` / `SPELLING` tagged lines.
    Tagged,
    /// The word leads each line.
    Generic,
}

#[derive(Debug, Clone)]
pub struct WordListInput {
    pub kind: WordListKind,
    pub args: WordListArgs,
}

/// Strategy for the word-only extractors.
#[derive(Debug, Clone, Copy)]
pub struct WordListStrategy;

impl super::CommandStrategy for WordListStrategy {
    type Input = WordListInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let args = input.args;

        let (input_encoding, output_encoding) = super::resolve_encodings(
            &config,
            args.encoding.as_deref(),
            args.output_encoding.as_deref(),
            args.excel,
        )?;
        let options = WordListOptions {
            input_encoding,
            output_encoding,
            dedupe: !args.keep_duplicates,
            lowercase: args.lower,
        };

        let output = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));

        let count = match input.kind {
            WordListKind::Tagged => run(&TaggedExtractor, &args.input, &output, options)?,
            WordListKind::Generic => run(&GenericExtractor, &args.input, &output, options)?,
        };

        println!("已输出 {count} 行单词 -> {}", output.display());
        Ok(())
    }
}

fn run<E: WordExtractor>(
    extractor: &E,
    input: &std::path::Path,
    output: &std::path::Path,
    options: WordListOptions,
) -> anyhow::Result<usize> {
    let count = write_words(extractor, input, output, options)?;
    info!("{} extractor wrote {count} words", extractor.name());
    Ok(count)
}
