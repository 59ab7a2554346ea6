use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};

/// File name searched for in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "cmake-bump.toml";

/// Represents the complete configuration for cmake-bump.
///
/// Contains the target file, the key phrases used to classify commit text,
/// additional version declaration patterns and output formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_file")]
    pub file: PathBuf,

    #[serde(default)]
    pub keywords: KeywordsConfig,

    #[serde(default)]
    pub locator: LocatorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default version file.
fn default_file() -> PathBuf {
    PathBuf::from("CMakeLists.txt")
}

/// Returns the default key phrases that request a major bump.
fn default_major_phrases() -> Vec<String> {
    vec![
        "bump version major".to_string(),
        "bump major version".to_string(),
        "#major".to_string(),
    ]
}

/// Returns the default key phrases that request a minor bump.
fn default_minor_phrases() -> Vec<String> {
    vec![
        "bump version minor".to_string(),
        "bump minor version".to_string(),
        "#minor".to_string(),
    ]
}

/// Key phrases matched case-insensitively against commit or pull request text.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct KeywordsConfig {
    #[serde(default = "default_major_phrases")]
    pub major: Vec<String>,

    #[serde(default = "default_minor_phrases")]
    pub minor: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        KeywordsConfig {
            major: default_major_phrases(),
            minor: default_minor_phrases(),
        }
    }
}

/// Extra version declaration patterns, tried after the built-in ones.
///
/// Each pattern is a regular expression with a named `version` group.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct LocatorConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Formatting of the values reported back to the CI environment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            tag_prefix: default_tag_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: default_file(),
            keywords: KeywordsConfig::default(),
            locator: LocatorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `cmake-bump.toml` in current directory
/// 3. `cmake-bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let Some(path) = path else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| BumpError::config(e.to_string()))
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.file, PathBuf::from("CMakeLists.txt"));
        assert!(config.keywords.major.contains(&"#major".to_string()));
        assert!(config.keywords.minor.contains(&"bump minor version".to_string()));
        assert!(config.locator.patterns.is_empty());
        assert_eq!(config.output.tag_prefix, "v");
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
file = "version/CMakeLists.txt"

[keywords]
major = ["breaking:"]
"#,
        )
        .unwrap();

        assert_eq!(config.file, PathBuf::from("version/CMakeLists.txt"));
        assert_eq!(config.keywords.major, vec!["breaking:".to_string()]);
        assert_eq!(config.keywords.minor, default_minor_phrases());
        assert_eq!(config.output.tag_prefix, "v");
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("file = [1, 2").unwrap_err();
        assert!(matches!(err, BumpError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let err = load_config(Some(Path::new("/nonexistent/cmake-bump.toml"))).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
