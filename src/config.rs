use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::DEFAULT_USER_AGENT;
use crate::filter::DEFAULT_DENY_LIST;
use crate::storage::DEFAULT_OUTPUT_ROOT;
use crate::types::{FailurePolicy, OverwritePolicy};

/// Run settings, optionally loaded from a TOML file. Missing keys use defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `User-Agent` sent with every request
    pub user_agent: String,
    /// Directory that holds one folder per product
    pub output_root: PathBuf,
    pub overwrite: OverwritePolicy,
    pub on_failure: FailurePolicy,
    /// Apply `deny_list` on top of the product-word filter
    pub exclude_decorative: bool,
    /// URL substrings of decorative images; only used with `exclude_decorative`
    pub deny_list: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            overwrite: OverwritePolicy::default(),
            on_failure: FailurePolicy::default(),
            exclude_decorative: false,
            deny_list: DEFAULT_DENY_LIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Built-in defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let cfg = Config::default();
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.output_root, PathBuf::from("Scraped Images"));
        assert_eq!(cfg.overwrite, OverwritePolicy::Overwrite);
        assert_eq!(cfg.on_failure, FailurePolicy::Abort);
        assert!(!cfg.exclude_decorative);
        assert_eq!(cfg.deny_list.len(), DEFAULT_DENY_LIST.len());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            output_root = "/tmp/images"
            on_failure = "continue"
            exclude_decorative = true
            deny_list = ["logo.png"]
        "#,
        )
        .unwrap();
        assert_eq!(cfg.output_root, PathBuf::from("/tmp/images"));
        assert_eq!(cfg.on_failure, FailurePolicy::Continue);
        assert!(cfg.exclude_decorative);
        assert_eq!(cfg.deny_list, vec!["logo.png".to_string()]);
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.overwrite, OverwritePolicy::Overwrite);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(toml::from_str::<Config>("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop-images.toml");
        fs::write(&path, "overwrite = \"skip\"\n").unwrap();

        let cfg = Config::load_or_default(Some(path.as_path())).unwrap();
        assert_eq!(cfg.overwrite, OverwritePolicy::Skip);

        let missing = dir.path().join("missing.toml");
        assert!(Config::load(&missing).is_err());
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
