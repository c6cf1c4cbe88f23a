//! Lookup configuration
//!
//! Loaded from TOML; every field is optional and falls back to the default.
//!
//! ```toml
//! [storage]
//! data_dir = ".hazard-lookup"
//! key = "explosiveDB"
//!
//! [search]
//! mode = "substring"   # or "prefix"
//! limit = 20
//! ```

use hazard_store::{FileBackend, MatchMode, RecordStore, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory of the file backend
pub const DEFAULT_DATA_DIR: &str = ".hazard-lookup";

/// Complete lookup configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    /// Where records are persisted
    pub storage: StorageConfig,
    /// How queries are matched
    pub search: SearchConfig,
}

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding one JSON file per slot
    pub data_dir: PathBuf,
    /// Slot name of the record set
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Search settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Substring (default) or prefix matching
    pub mode: MatchMode,
    /// Maximum number of suggestions, unlimited if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl SearchConfig {
    /// With match mode
    #[inline]
    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// With suggestion limit
    #[inline]
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl LookupConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With storage directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.data_dir = dir.into();
        self
    }

    /// With slot key
    #[inline]
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.storage.key = key.into();
        self
    }

    /// With search settings
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on invalid TOML or unknown fields
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Render as TOML
    ///
    /// # Errors
    /// Returns [`ConfigError::Serialize`] if encoding fails
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load the record store this configuration points at
    #[must_use]
    pub fn open_store(&self) -> RecordStore {
        RecordStore::load_with_key(
            FileBackend::new(&self.storage.data_dir),
            self.storage.key.clone(),
        )
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("io error reading {path}: {source}")]
    Read {
        /// Configuration file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML or unknown setting
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered
    #[error("failed to render configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_store::LoadSource;

    #[test]
    fn defaults_match_reference_storage() {
        let config = LookupConfig::new();
        assert_eq!(config.storage.key, "explosiveDB");
        assert_eq!(config.storage.data_dir, PathBuf::from(".hazard-lookup"));
        assert_eq!(config.search.mode, MatchMode::Substring);
        assert_eq!(config.search.limit, None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = LookupConfig::from_toml_str("[search]\nmode = \"prefix\"\n").unwrap();
        assert_eq!(config.search.mode, MatchMode::Prefix);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn unknown_settings_are_rejected() {
        let err = LookupConfig::from_toml_str("[search]\nfuzzy = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = LookupConfig::from_toml_str("[search]\nmode = \"fuzzy\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let config = LookupConfig::new()
            .with_key("altDB")
            .with_search(SearchConfig::default().with_limit(5));
        let text = config.to_toml_string().unwrap();
        assert_eq!(LookupConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookup.toml");
        std::fs::write(&path, "[storage]\nkey = \"fromFile\"\n").unwrap();

        assert_eq!(LookupConfig::load(&path).unwrap().storage.key, "fromFile");
        assert!(matches!(
            LookupConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn open_store_uses_configured_slot() {
        let dir = tempfile::tempdir().unwrap();
        let config = LookupConfig::new().with_data_dir(dir.path()).with_key("testDB");

        let store = config.open_store();
        assert_eq!(store.source(), &LoadSource::Seeded);
        assert!(dir.path().join("testDB.json").exists());

        let again = config.open_store();
        assert_eq!(again.source(), &LoadSource::Persisted);
    }
}
