//! Repository configuration file support.
//!
//! ```toml
//! [repository]
//! type = "json"
//!
//! [json]
//! path = "ffcs-data.json"
//! pretty = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::config::{JsonStoreConfig, DEFAULT_DATA_FILE};
use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub json: JsonSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// JSON file store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSettings {
    #[serde(default = "default_json_path")]
    pub path: String,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for JsonSettings {
    fn default() -> Self {
        Self {
            path: default_json_path(),
            pretty: default_pretty(),
        }
    }
}

fn default_json_path() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// JSON store settings, or `None` when another backend is selected.
    pub fn to_json_config(&self) -> Result<Option<JsonStoreConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type != RepositoryType::Json {
            return Ok(None);
        }

        if self.json.path.trim().is_empty() {
            return Err(RepositoryError::configuration(
                "JSON repository requires a non-empty 'json.path' setting",
            ));
        }

        Ok(Some(
            JsonStoreConfig::new(&self.json.path).with_pretty(self.json.pretty),
        ))
    }
}
