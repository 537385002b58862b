//! Store configuration and environment variable handling.

use std::env;
use std::path::PathBuf;

/// Data file used when neither the environment nor a config file names one.
pub const DEFAULT_DATA_FILE: &str = "ffcs-data.json";

/// Environment variable naming the data file.
pub const DATA_FILE_ENV: &str = "FFCS_DATA_FILE";

/// Location and formatting of the JSON store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStoreConfig {
    pub path: PathBuf,
    /// Pretty-print the document on write.
    pub pretty: bool,
}

impl JsonStoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Reads `FFCS_DATA_FILE`, falling back to [`DEFAULT_DATA_FILE`].
    pub fn from_env() -> Self {
        let path = env::var(DATA_FILE_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        Self::new(path)
    }
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JsonStoreConfig::default();
        assert_eq!(config.path, PathBuf::from(DEFAULT_DATA_FILE));
        assert!(config.pretty);
        assert!(!config.with_pretty(false).pretty);
    }
}
