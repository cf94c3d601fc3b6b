use wordbank_config::Config;
use wordbank_csv::{AUTO_LABEL_FILES, LEVEL_FROM_FILENAME, MEANING_STRATEGIES};

/// Strategy for displaying the effective configuration.
///
/// Prints the config file location, the resolved defaults, and the static
/// tables used for level inference and `--auto-labels`.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load()?;

        println!("=== wordbank Configuration ===\n");

        println!("Config file:");
        if config_path.exists() {
            println!("  {}", config_path.display());
        } else {
            println!("  {} (not found, using defaults)", config_path.display());
        }
        println!();

        println!("Defaults:");
        println!("  Encoding: {}", describe_encoding(&config.defaults.encoding));
        println!(
            "  Output Encoding: {}",
            describe_encoding(&config.defaults.output_encoding)
        );
        println!("  Level Value: {}", config.defaults.level_value);
        println!("  Level Separator: {:?}", config.defaults.level_sep);
        println!();

        println!("Level From File Name (first match wins):");
        for (key, level) in LEVEL_FROM_FILENAME {
            println!("  {key} -> {level}");
        }
        println!();

        println!("Auto Label Files:");
        for (label, file_name) in AUTO_LABEL_FILES {
            println!("  {label}: {file_name}");
        }
        println!();

        println!("Meaning Strategies (in order):");
        for (i, (name, _)) in MEANING_STRATEGIES.iter().enumerate() {
            println!("  {}. {name}", i + 1);
        }

        Ok(())
    }
}

fn describe_encoding(label: &str) -> String {
    match wordbank_core::TextEncoding::from_label(label) {
        Ok(encoding) => encoding.name(),
        Err(e) => format!("{label} ({e})"),
    }
}
