use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::paths::Paths;

/// How deprecation notices from legacy translation are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeprecationMode {
    /// Log one warning per translated key (the default).
    Warn,
    /// Collect notices without logging.
    Silent,
    /// Refuse to build a session from legacy capabilities.
    Strict,
}

impl Default for DeprecationMode {
    fn default() -> Self {
        Self::Warn
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Pretty-print payloads on stdout.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub deprecations: DeprecationMode,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(paths: &Paths) -> Result<Self> {
        let config_path = paths.config_file();
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.deprecations, DeprecationMode::Warn);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let raw = r#"{ "deprecations": "strict" }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.deprecations, DeprecationMode::Strict);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_mode_tags_are_lowercase() {
        let raw = r#"{ "deprecations": "silent", "output": { "pretty": false } }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.deprecations, DeprecationMode::Silent);
        assert!(!config.output.pretty);
        let round = serde_json::to_string(&config).unwrap();
        assert!(round.contains(r#""deprecations":"silent""#));
    }

    #[test]
    fn test_save_and_reload_through_paths() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::with_base(dir.path().join(".capmatch"));
        paths.ensure_dirs().unwrap();

        let config = Config {
            deprecations: DeprecationMode::Strict,
            ..Config::default()
        };
        config.save(&paths.config_file()).unwrap();

        let loaded = Config::load_or_default(&paths).unwrap();
        assert_eq!(loaded.deprecations, DeprecationMode::Strict);
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::with_base(dir.path().join(".capmatch"));
        let config = Config::load_or_default(&paths).unwrap();
        assert_eq!(config.deprecations, DeprecationMode::Warn);
        assert!(config.output.pretty);
    }
}
