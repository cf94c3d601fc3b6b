use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use wordbank_core::TextEncoding;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: ToolDefaults,
}

/// Defaults applied when the matching command-line flag is absent.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ToolDefaults {
    #[serde(default = "ToolDefaults::default_encoding")]
    pub encoding: String,
    #[serde(default = "ToolDefaults::default_encoding")]
    pub output_encoding: String,
    #[serde(default = "ToolDefaults::default_level_value")]
    pub level_value: String,
    #[serde(default = "ToolDefaults::default_level_sep")]
    pub level_sep: String,
}

impl Default for ToolDefaults {
    fn default() -> Self {
        Self {
            encoding: Self::default_encoding(),
            output_encoding: Self::default_encoding(),
            level_value: Self::default_level_value(),
            level_sep: Self::default_level_sep(),
        }
    }
}

impl ToolDefaults {
    fn default_encoding() -> String {
        "utf-8".to_string()
    }

    fn default_level_value() -> String {
        "初中".to_string()
    }

    fn default_level_sep() -> String {
        ",".to_string()
    }

    pub fn input_encoding(&self) -> anyhow::Result<TextEncoding> {
        Ok(TextEncoding::from_label(&self.encoding)?)
    }

    pub fn output_encoding(&self) -> anyhow::Result<TextEncoding> {
        Ok(TextEncoding::from_label(&self.output_encoding)?)
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "defaults": {
    "encoding": "utf-8",
    "output_encoding": "utf-8",
    "level_value": "初中",
    "level_sep": ","
  }
}
"#;

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("wordbank"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/wordbank/config.json`, falling back to defaults when absent.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
        })?;

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::create_config_at(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - encoding: input text encoding (utf-8, gbk, gb18030, ...)");
        println!("   - output_encoding: output encoding (utf-8-sig for Excel)");
        println!("   - level_value: tag added for --level-words matches");
        println!("   - level_sep: separator between level tags");
        println!();
        Ok(config_path)
    }

    pub fn create_config_at(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(config_path, CONFIG_TEMPLATE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/wordbank/config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.level_sep, ",");
        assert_eq!(config.defaults.level_value, "初中");
    }

    #[test]
    fn test_template_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::create_config_at(&path).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());

        assert!(Config::create_config_at(&path).is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"defaults": {"level_sep": "、", "encoding": "gbk"}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.defaults.level_sep, "、");
        assert_eq!(config.defaults.output_encoding, "utf-8");
        assert_eq!(config.defaults.input_encoding().unwrap().name(), "GBK");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
