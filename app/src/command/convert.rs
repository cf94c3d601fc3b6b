use std::path::{Path, PathBuf};
use tracing::info;
use wordbank_config::Config;
use wordbank_csv::{
    ConvertOptions, LabelSources, LevelPolicy, build_label_sets, convert_file,
    default_output_path, load_word_set, resolve_base_level,
};

/// Input parameters for the TXT to CSV conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertInput {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub encoding: Option<String>,
    pub output_encoding: Option<String>,
    pub excel: bool,
    /// Explicit level; overrides inference from the file name.
    pub level: Option<String>,
    pub level_words: Option<PathBuf>,
    pub level_value: Option<String>,
    pub level_sep: Option<String>,
    /// `name=path` / `name:path` label specs.
    pub labels: Vec<String>,
    pub auto_labels: bool,
    pub auto_labels_dir: Option<PathBuf>,
    pub merge_existing_output: bool,
}

/// Strategy for converting a word list to CSV.
///
/// Steps:
/// - resolve encodings and level defaults from flags and config
/// - load `--level-words` and label sets
/// - convert, optionally seeding levels from the existing output
#[derive(Debug, Clone, Copy)]
pub struct ConvertStrategy;

impl super::CommandStrategy for ConvertStrategy {
    type Input = ConvertInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let output = input
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&input.input));

        let options = build_options(&config, &input)?;
        let count = convert_file(&input.input, &output, &options)?;

        println!("已输出 {count} 行 -> {}", output.display());
        Ok(())
    }
}

fn build_options(config: &Config, input: &ConvertInput) -> anyhow::Result<ConvertOptions> {
    let (input_encoding, output_encoding) = super::resolve_encodings(
        config,
        input.encoding.as_deref(),
        input.output_encoding.as_deref(),
        input.excel,
    )?;

    let auto_labels_dir = input
        .auto_labels_dir
        .clone()
        .unwrap_or_else(|| parent_dir(&input.input));
    let sources = LabelSources {
        specs: &input.labels,
        auto_labels: input.auto_labels,
        auto_labels_dir: Some(auto_labels_dir.as_path()),
    };
    let label_sets = build_label_sets(&sources, input_encoding)?;

    let level_words = input
        .level_words
        .as_deref()
        .map(|path| load_word_set(path, input_encoding))
        .transpose()?;

    let base_level = resolve_base_level(input.level.as_deref(), &input.input, !sources.is_empty());
    info!(
        "Base level: {:?}, {} label sets",
        base_level,
        label_sets.len()
    );

    Ok(ConvertOptions {
        input_encoding,
        output_encoding,
        policy: LevelPolicy {
            base_level,
            level_words,
            level_value: input
                .level_value
                .clone()
                .unwrap_or_else(|| config.defaults.level_value.clone()),
            level_sep: input
                .level_sep
                .clone()
                .unwrap_or_else(|| config.defaults.level_sep.clone()),
            label_sets,
        },
        merge_existing_output: input.merge_existing_output,
    })
}

/// Directory holding `path`; `.` for a bare file name.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordbank_core::TextEncoding;

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("words.txt")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("/data/words.txt")), PathBuf::from("/data"));
    }

    #[test]
    fn test_build_options_infers_level_without_labels() {
        let input = ConvertInput {
            input: PathBuf::from("/data/大学六级英语单词.txt"),
            ..ConvertInput::default()
        };
        let options = build_options(&Config::default(), &input).unwrap();
        assert_eq!(options.policy.base_level, "六级");
        assert_eq!(options.policy.level_sep, ",");
        assert_eq!(options.policy.level_value, "初中");
        assert!(options.policy.label_sets.is_empty());
    }

    #[test]
    fn test_build_options_with_labels_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("初中英语单词__仅单词.txt"), "cat\n").unwrap();
        let level_words = dir.path().join("level.txt");
        std::fs::write(&level_words, "dog\n").unwrap();

        let input = ConvertInput {
            input: dir.path().join("COCA20000.txt"),
            excel: true,
            level_words: Some(level_words),
            level_value: Some("重点".to_string()),
            level_sep: Some("、".to_string()),
            auto_labels: true,
            merge_existing_output: true,
            ..ConvertInput::default()
        };
        let options = build_options(&Config::default(), &input).unwrap();

        assert_eq!(options.policy.base_level, "");
        assert_eq!(options.policy.label_sets.len(), 1);
        assert_eq!(options.policy.label_sets[0].label, "初中");
        assert!(options.policy.level_words.as_ref().unwrap().contains("dog"));
        assert_eq!(options.policy.level_sep, "、");
        assert_eq!(options.output_encoding, TextEncoding::utf8_sig());
        assert!(options.merge_existing_output);
    }

    #[test]
    fn test_bad_label_spec_fails_before_conversion() {
        let input = ConvertInput {
            input: PathBuf::from("words.txt"),
            labels: vec!["nodelimiter".to_string()],
            ..ConvertInput::default()
        };
        assert!(build_options(&Config::default(), &input).is_err());
    }
}
