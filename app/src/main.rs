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

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, ConvertInput, ConvertStrategy, InfoStrategy, InitStrategy, WordListArgs,
    VersionStrategy, WordListInput, WordListKind, WordListStrategy,
};

#[derive(Parser)]
#[command(name = "wordbank")]
#[command(about = "Vocabulary list extraction and CSV conversion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract words from RECITE/DICTATION/SPELLING tagged lists
    ReciteWords(WordListArgs),
    /// Extract the leading word of every line
    Words(WordListArgs),
    /// Convert a word list TXT to CSV (rank, level, word, phonetic, meaning, full_meaning)
    ToCsv {
        /// Input TXT file
        input: PathBuf,

        /// Output CSV file (default: input name with .csv)
        output: Option<PathBuf>,

        /// Input text encoding (default: utf-8)
        #[arg(long)]
        encoding: Option<String>,

        /// Output encoding (default: utf-8; "utf-8-sig" for Excel)
        #[arg(long)]
        output_encoding: Option<String>,

        /// Write UTF-8 with BOM for Excel
        #[arg(long)]
        excel: bool,

        /// Level written to every row (default: inferred from the input file name)
        #[arg(long)]
        level: Option<String>,

        /// One-word-per-line list; matching rows get --level-value appended
        #[arg(long)]
        level_words: Option<PathBuf>,

        /// Tag appended for --level-words matches (default: 初中)
        #[arg(long)]
        level_value: Option<String>,

        /// Separator between level tags (default: ",")
        #[arg(long)]
        level_sep: Option<String>,

        /// Repeatable label spec, e.g. --label 小学=广州小学英语__仅单词.txt
        #[arg(long = "label", value_name = "NAME=PATH")]
        labels: Vec<String>,

        /// Load the well-known *__仅单词.txt lists as labels
        #[arg(long)]
        auto_labels: bool,

        /// Directory searched by --auto-labels (default: input file directory)
        #[arg(long)]
        auto_labels_dir: Option<PathBuf>,

        /// Seed levels by rank from the existing output CSV before appending
        #[arg(long)]
        merge_existing_output: bool,
    },
    /// Create ~/wordbank/config.json
    Init,
    /// Show configuration and level tables
    Info,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::ReciteWords(args) => WordListStrategy.execute(WordListInput {
            kind: WordListKind::Tagged,
            args,
        }),
        Commands::Words(args) => WordListStrategy.execute(WordListInput {
            kind: WordListKind::Generic,
            args,
        }),
        Commands::ToCsv {
            input,
            output,
            encoding,
            output_encoding,
            excel,
            level,
            level_words,
            level_value,
            level_sep,
            labels,
            auto_labels,
            auto_labels_dir,
            merge_existing_output,
        } => ConvertStrategy.execute(ConvertInput {
            input,
            output,
            encoding,
            output_encoding,
            excel,
            level,
            level_words,
            level_value,
            level_sep,
            labels,
            auto_labels,
            auto_labels_dir,
            merge_existing_output,
        }),
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
