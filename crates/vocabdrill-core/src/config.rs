//! JSON configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the current directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Top-level vocabdrill configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Tab-separated dictionary file.
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    /// Words quizzed per session.
    #[serde(default = "default_num_words")]
    pub num_words: usize,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("dictionary.txt")
}

fn default_num_words() -> usize {
    10
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            num_words: default_num_words(),
        }
    }
}

impl DrillConfig {
    /// Score file kept next to the dictionary: same stem, `.cfg` extension.
    pub fn scores_path(&self) -> PathBuf {
        self.dictionary_path.with_extension("cfg")
    }

    /// Apply `VOCABDRILL_DICTIONARY` and `VOCABDRILL_NUM_WORDS` overrides.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = lookup("VOCABDRILL_DICTIONARY") {
            self.dictionary_path = PathBuf::from(path);
        }
        if let Some(n) = lookup("VOCABDRILL_NUM_WORDS") {
            self.num_words = n
                .trim()
                .parse()
                .with_context(|| format!("invalid VOCABDRILL_NUM_WORDS: {n:?}"))?;
        }
        Ok(())
    }

    /// Serialize as 4-space-indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).context("failed to serialize config")?;
        let mut json = String::from_utf8(buf).context("config JSON is not UTF-8")?;
        json.push('\n');
        Ok(json)
    }
}

/// Whether the config was read from disk or generated on the spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded,
    Generated,
}

/// Write the default config to `path`.
pub fn write_default_config(path: &Path) -> Result<()> {
    let json = DrillConfig::default().to_json_pretty()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    tracing::debug!("wrote default config to {}", path.display());
    Ok(())
}

/// Parse a config from a JSON string (useful for testing).
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<DrillConfig> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))
}

/// Load the config at `path`, generating the default first if it is missing.
///
/// Environment overrides are applied to the loaded value.
pub fn load_or_create_config(path: &Path) -> Result<(DrillConfig, ConfigSource)> {
    let source = if path.exists() {
        ConfigSource::Loaded
    } else {
        write_default_config(path)?;
        ConfigSource::Generated
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config = parse_config_str(&content, path)?;
    config.apply_env_overrides()?;

    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DrillConfig::default();
        assert_eq!(config.dictionary_path, PathBuf::from("dictionary.txt"));
        assert_eq!(config.num_words, 10);
    }

    #[test]
    fn scores_path_replaces_extension() {
        let mut config = DrillConfig::default();
        assert_eq!(config.scores_path(), PathBuf::from("dictionary.cfg"));

        config.dictionary_path = PathBuf::from("lists/gre");
        assert_eq!(config.scores_path(), PathBuf::from("lists/gre.cfg"));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse_config_str(r#"{"num_words": 3}"#, Path::new("c.json")).unwrap();
        assert_eq!(config.num_words, 3);
        assert_eq!(config.dictionary_path, PathBuf::from("dictionary.txt"));
    }

    #[test]
    fn parse_malformed_json() {
        assert!(parse_config_str("{ not json", Path::new("bad.json")).is_err());
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let json = DrillConfig::default().to_json_pretty().unwrap();
        assert!(json.contains("\n    \"dictionary_path\": \"dictionary.txt\""));
        assert!(json.contains("\n    \"num_words\": 10"));
    }

    #[test]
    fn load_generates_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let (config, source) = load_or_create_config(&path).unwrap();
        assert_eq!(source, ConfigSource::Generated);
        assert_eq!(config.num_words, 10);
        assert!(path.exists());

        let (_, source) = load_or_create_config(&path).unwrap();
        assert_eq!(source, ConfigSource::Loaded);
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let mut config = DrillConfig::default();
        config
            .apply_overrides(|key| match key {
                "VOCABDRILL_NUM_WORDS" => Some(" 25 ".into()),
                "VOCABDRILL_DICTIONARY" => Some("other.tsv".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.num_words, 25);
        assert_eq!(config.dictionary_path, PathBuf::from("other.tsv"));

        let err = config
            .apply_overrides(|key| (key == "VOCABDRILL_NUM_WORDS").then(|| "many".into()))
            .unwrap_err();
        assert!(err.to_string().contains("VOCABDRILL_NUM_WORDS"));
        assert_eq!(config.num_words, 25);
    }
}
