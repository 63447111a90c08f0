//! Build configuration: where client data lives and where JSON goes.
//!
//! Paths are resolved with a priority chain:
//!
//! 1. Explicit overrides (CLI flags)
//! 2. `ivory.toml` in the root directory, if present
//! 3. Built-in defaults
//!
//! Relative paths are taken relative to the root directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::source::read_text;

/// Name of the optional configuration file in the root directory.
pub const CONFIG_FILE: &str = "ivory.toml";

/// Item categories built by default, each backed by `{category}grp.txt`.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["armor", "weapon", "etcitem"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Current client data files.
    pub client_dir: PathBuf,
    /// Baseline client data files used for change tracking.
    pub original_dir: PathBuf,
    /// Hand-authored set definitions.
    pub sets: PathBuf,
    /// Pricing table.
    pub itemdata: PathBuf,
    /// Destination of the generated JSON.
    pub output_dir: PathBuf,
    pub categories: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            client_dir: PathBuf::from("data/custom"),
            original_dir: PathBuf::from("data/original"),
            sets: PathBuf::from("data/sets.json"),
            itemdata: PathBuf::from("data/itemdata.json"),
            output_dir: PathBuf::from("public/data"),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Per-run path overrides. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub client_dir: Option<PathBuf>,
    pub original_dir: Option<PathBuf>,
    pub sets: Option<PathBuf>,
    pub itemdata: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl BuildConfig {
    /// Parse configuration text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read `ivory.toml` from `root`, or the defaults if there is none.
    pub fn load(root: &Path) -> Result<Self, BuildError> {
        let path = root.join(CONFIG_FILE);
        let content = read_text(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        log::debug!("Using config file {}", path.display());
        Self::from_toml(&content).map_err(|source| BuildError::Config {
            path: path.display().to_string(),
            source,
        })
    }

    /// Resolve the full chain for `root` and make every path absolute-or-rooted.
    pub fn resolve(root: &Path, overrides: ConfigOverrides) -> Result<Self, BuildError> {
        let mut config = Self::load(root)?;
        config.apply(overrides);
        Ok(config.rooted_at(root))
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(p) = overrides.client_dir {
            self.client_dir = p;
        }
        if let Some(p) = overrides.original_dir {
            self.original_dir = p;
        }
        if let Some(p) = overrides.sets {
            self.sets = p;
        }
        if let Some(p) = overrides.itemdata {
            self.itemdata = p;
        }
        if let Some(p) = overrides.output_dir {
            self.output_dir = p;
        }
    }

    /// Join every relative path onto `root`. Absolute paths are kept.
    pub fn rooted_at(self, root: &Path) -> Self {
        Self {
            client_dir: root.join(self.client_dir),
            original_dir: root.join(self.original_dir),
            sets: root.join(self.sets),
            itemdata: root.join(self.itemdata),
            output_dir: root.join(self.output_dir),
            categories: self.categories,
        }
    }

    pub fn client_file(&self, name: &str) -> PathBuf {
        self.client_dir.join(name)
    }

    pub fn original_file(&self, name: &str) -> PathBuf {
        self.original_dir.join(name)
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = BuildConfig::resolve(tmp.path(), ConfigOverrides::default()).unwrap();
        assert_eq!(config.client_dir, tmp.path().join("data/custom"));
        assert_eq!(config.output_file("armor.json"), tmp.path().join("public/data/armor.json"));
        assert_eq!(config.categories, vec!["armor", "weapon", "etcitem"]);
    }

    #[test]
    fn config_file_then_overrides() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "client_dir = \"client/live\"\noutput_dir = \"site/data\"\ncategories = [\"weapon\"]\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            output_dir: Some(PathBuf::from("elsewhere")),
            ..ConfigOverrides::default()
        };
        let config = BuildConfig::resolve(tmp.path(), overrides).unwrap();
        assert_eq!(config.client_dir, tmp.path().join("client/live"));
        assert_eq!(config.original_dir, tmp.path().join("data/original"));
        assert_eq!(config.output_dir, tmp.path().join("elsewhere"));
        assert_eq!(config.categories, vec!["weapon"]);
    }

    #[test]
    fn absolute_paths_are_kept() {
        let tmp = TempDir::new().unwrap();
        let abs = tmp.path().join("abs");
        let overrides = ConfigOverrides {
            sets: Some(abs.clone()),
            ..ConfigOverrides::default()
        };
        let config = BuildConfig::resolve(Path::new("/some/root"), overrides).unwrap();
        assert_eq!(config.sets, abs);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "client_dir = [").unwrap();
        let err = BuildConfig::load(tmp.path()).unwrap_err();
        assert!(matches!(err, BuildError::Config { .. }));
    }
}
