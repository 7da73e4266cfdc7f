//! Configuration loading
//!
//! ghar reads an optional `.gbar.yml` (or `.gbar.yaml`) from the working
//! directory:
//!
//! ```yaml
//! protected_branches:
//!   - main
//!   - release/v1.0
//! ```
//!
//! A missing file, an empty file, a missing key, or a key with no value all
//! fall back to the default protected branches. An explicit empty list
//! protects nothing. A file that exists but cannot be read or
//! parsed is an error.

use serde::{Deserialize, Deserializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".gbar.yml", ".gbar.yaml"];

/// Protected branches used when nothing is configured.
pub const DEFAULT_PROTECTED_BRANCHES: [&str; 3] = ["main", "master", "develop"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Branch names that are never deleted.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ProtectedBranches(Vec<String>);

impl ProtectedBranches {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, branch: &str) -> bool {
        self.0.iter().any(|name| name == branch)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ProtectedBranches {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTED_BRANCHES)
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "null_as_default")]
    pub protected_branches: ProtectedBranches,
}

fn null_as_default<'de, D>(deserializer: D) -> Result<ProtectedBranches, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ProtectedBranches>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    pub fn with_protected<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protected_branches: ProtectedBranches::new(names),
        }
    }

    /// Parse a YAML document. An empty or null document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Config> = serde_yaml::from_str(content)?;
        Ok(config.unwrap_or_default())
    }
}

/// Capability to produce the configuration.
pub trait ConfigLoader {
    fn load(&self) -> Result<Config, ConfigError>;
}

/// A fixed configuration.
impl ConfigLoader for Config {
    fn load(&self) -> Result<Config, ConfigError> {
        Ok(self.clone())
    }
}

/// Loads `.gbar.yml` / `.gbar.yaml` from a directory.
#[derive(Debug, Clone)]
pub struct YamlConfigLoader {
    dir: PathBuf,
}

impl YamlConfigLoader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// First existing config file in the directory, if any.
    pub fn find_config_file(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.dir.join(name))
            .find(|path| path.is_file())
    }
}

impl ConfigLoader for YamlConfigLoader {
    fn load(&self) -> Result<Config, ConfigError> {
        let Some(path) = self.find_config_file() else {
            tracing::info!("No config file found, using default settings.");
            return Ok(Config::default());
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Config::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            protected = config.protected_branches.len(),
            "loaded config"
        );
        Ok(config)
    }
}
