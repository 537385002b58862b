//! Repository factory for dependency injection.
//!
//! Picks and builds a repository from an explicit type, the environment or
//! `repository.toml`. The caller owns the result; nothing is cached globally.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::config::{JsonStoreConfig, DATA_FILE_ENV};
use super::repo_config::RepositoryConfig;
#[cfg(feature = "json-repo")]
use super::repositories::JsonFileRepository;
#[cfg(feature = "local-repo")]
use super::repositories::LocalRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};

/// Environment variable selecting the backend.
pub const REPOSITORY_TYPE_ENV: &str = "REPOSITORY_TYPE";

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
    /// Single JSON document on disk
    Json,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory", "json", "file").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "json" | "file" => Ok(Self::Json),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variables.
    ///
    /// Reads `REPOSITORY_TYPE`; when unset, a configured `FFCS_DATA_FILE`
    /// selects Json, otherwise Local. An unparsable value falls back to Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var(REPOSITORY_TYPE_ENV) {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var(DATA_FILE_ENV).is_ok() {
            Self::Json
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use ffcs_planner::db::{RepositoryFactory, RepositoryType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let local_repo = RepositoryFactory::create(RepositoryType::Local, None).await?;
///     let from_env = RepositoryFactory::from_env().await?;
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `json_config` - Store location for Json (defaults from the environment)
    pub async fn create(
        repo_type: RepositoryType,
        json_config: Option<&JsonStoreConfig>,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            RepositoryType::Json => {
                let config = json_config.cloned().unwrap_or_else(JsonStoreConfig::from_env);
                Self::create_json(config).await
            }
            RepositoryType::Local => Self::create_local(),
        }
    }

    /// Create an in-memory local repository.
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> RepositoryResult<Arc<dyn FullRepository>> {
        Ok(Arc::new(LocalRepository::new()))
    }

    #[cfg(not(feature = "local-repo"))]
    pub fn create_local() -> RepositoryResult<Arc<dyn FullRepository>> {
        Err(RepositoryError::configuration(
            "Local repository feature not enabled",
        ))
    }

    /// Open a JSON file repository.
    #[cfg(feature = "json-repo")]
    pub async fn create_json(config: JsonStoreConfig) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo = JsonFileRepository::open(config).await?;
        Ok(Arc::new(repo))
    }

    #[cfg(not(feature = "json-repo"))]
    pub async fn create_json(config: JsonStoreConfig) -> RepositoryResult<Arc<dyn FullRepository>> {
        let _ = config;
        Err(RepositoryError::configuration(
            "JSON repository feature not enabled",
        ))
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` and `FFCS_DATA_FILE`.
    pub async fn from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        Self::create(RepositoryType::from_env(), None).await
    }

    /// Create repository from a TOML configuration file.
    pub async fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config).await
    }

    /// Create repository from the default configuration file location.
    ///
    /// Searches for `repository.toml` in standard locations.
    pub async fn from_default_config() -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config).await
    }

    /// Create repository from a RepositoryConfig instance.
    pub async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Json => {
                let json_config = config.to_json_config()?.ok_or_else(|| {
                    RepositoryError::configuration("JSON repository requires [json] settings")
                })?;
                Self::create_json(json_config).await
            }
            RepositoryType::Local => Self::create_local(),
        }
    }
}
