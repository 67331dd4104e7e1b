//! Configuration management for partfind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure for partfind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the part descriptions come from.
    pub source: SourceConfig,

    /// Query behaviour.
    pub search: SearchConfig,
}

/// Location of the description column inside a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the workbook (xlsx, xls, ods).
    pub path: PathBuf,

    /// Worksheet holding the descriptions.
    pub sheet: String,

    /// Header text of the description column (first row).
    pub column: String,
}

/// Search-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How query tokens combine.
    pub policy: MatchPolicy,

    /// Maximum number of results shown. `None` shows every match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// How the tokens of a query are combined into a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Every token must occur; `/` is just another word boundary.
    #[default]
    AllTokens,
    /// `/` separates alternatives; an entry matches if it contains every
    /// token of at least one alternative.
    SlashAlternatives,
}

impl MatchPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllTokens => "all-tokens",
            Self::SlashAlternatives => "slash-alternatives",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all-tokens" | "all" | "and" => Ok(Self::AllTokens),
            "slash-alternatives" | "slash" | "or" => Ok(Self::SlashAlternatives),
            other => Err(crate::Error::Config(format!(
                "unknown match policy '{other}' (expected 'all-tokens' or 'slash-alternatives')"
            ))),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/part_number_app_data.xlsx"),
            sheet: "Sheet1".to_string(),
            column: "NAME LIST".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;

        config.expand_tilde_in_paths();

        Ok(config)
    }

    /// Load the file at `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn expand_tilde_in_paths(&mut self) {
        let raw = self.source.path.to_string_lossy().into_owned();
        self.source.path = PathBuf::from(shellexpand::tilde(&raw).into_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_workbook_contract() {
        let config = Config::default();
        assert_eq!(config.source.sheet, "Sheet1");
        assert_eq!(config.source.column, "NAME LIST");
        assert_eq!(config.search.policy, MatchPolicy::AllTokens);
        assert_eq!(config.search.limit, None);
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.source.path = PathBuf::from("/data/parts.xlsx");
        config.search.policy = MatchPolicy::SlashAlternatives;
        config.search.limit = Some(25);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[search]\npolicy = \"slash-alternatives\"\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.search.policy, MatchPolicy::SlashAlternatives);
        assert_eq!(loaded.source, SourceConfig::default());
    }

    #[test]
    fn test_tilde_is_expanded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[source]\npath = \"~/parts.xlsx\"\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(!loaded.source.path.to_string_lossy().starts_with('~'));
        assert!(loaded.source.path.ends_with("parts.xlsx"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[search\npolicy=").unwrap();

        assert!(matches!(Config::load(&path), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let loaded = Config::load_or_default(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_match_policy_from_str() {
        assert_eq!("all-tokens".parse::<MatchPolicy>().unwrap(), MatchPolicy::AllTokens);
        assert_eq!(
            "Slash".parse::<MatchPolicy>().unwrap(),
            MatchPolicy::SlashAlternatives
        );
        assert!("fuzzy".parse::<MatchPolicy>().is_err());
    }
}
