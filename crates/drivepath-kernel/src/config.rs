//! RON configuration.
//!
//! ```ron
//! (
//!     store_path: Some("/home/amy/.local/share/drivepath/drive.json"),
//!     resolver: (
//!         max_ancestry_depth: 128,
//!         include_trashed: false,
//!     ),
//! )
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default cap on how many ancestors a single path walk may climb.
pub const DEFAULT_MAX_ANCESTRY_DEPTH: usize = 512;

/// Config file name under the platform config directory.
const CONFIG_FILE: &str = "config.ron";

/// Snapshot file name under the platform data directory.
const SNAPSHOT_FILE: &str = "drive.json";

const APP_DIR: &str = "drivepath";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("RON syntax error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Resolver tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Ancestry deeper than this fails with `DepthExceeded`.
    pub max_ancestry_depth: usize,
    /// Let trashed items match path lookups.
    pub include_trashed: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_ancestry_depth: DEFAULT_MAX_ANCESTRY_DEPTH,
            include_trashed: false,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Snapshot file backing the drive. `None` means [`DriveConfig::default_store_path`].
    pub store_path: Option<PathBuf>,
    pub resolver: ResolverConfig,
}

impl DriveConfig {
    /// Parse a RON document.
    pub fn from_ron(src: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(src)?)
    }

    /// Load from a file.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_ron(&src)
    }

    /// Load from `path` if it exists, otherwise defaults.
    pub async fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path).await {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// `$XDG_CONFIG_HOME/drivepath/config.ron` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
    }

    /// `$XDG_DATA_HOME/drivepath/drive.json` or the platform equivalent.
    pub fn default_store_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join(SNAPSHOT_FILE))
    }

    /// The configured snapshot path, falling back to the platform default.
    pub fn effective_store_path(&self) -> Option<PathBuf> {
        self.store_path.clone().or_else(Self::default_store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_all_defaults() {
        let cfg = DriveConfig::from_ron("()").unwrap();
        assert_eq!(cfg, DriveConfig::default());
        assert_eq!(cfg.resolver.max_ancestry_depth, DEFAULT_MAX_ANCESTRY_DEPTH);
        assert!(!cfg.resolver.include_trashed);
    }

    #[test]
    fn test_partial_resolver_section() {
        let cfg = DriveConfig::from_ron("(resolver: (include_trashed: true))").unwrap();
        assert!(cfg.resolver.include_trashed);
        assert_eq!(cfg.resolver.max_ancestry_depth, DEFAULT_MAX_ANCESTRY_DEPTH);
        assert!(cfg.store_path.is_none());
    }

    #[test]
    fn test_full_document() {
        let cfg = DriveConfig::from_ron(
            r#"(
                store_path: Some("/tmp/drive.json"),
                resolver: (max_ancestry_depth: 8, include_trashed: false),
            )"#,
        )
        .unwrap();
        assert_eq!(cfg.store_path, Some(PathBuf::from("/tmp/drive.json")));
        assert_eq!(cfg.effective_store_path(), Some(PathBuf::from("/tmp/drive.json")));
        assert_eq!(cfg.resolver.max_ancestry_depth, 8);
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            DriveConfig::from_ron("(resolver: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DriveConfig::load_or_default(&dir.path().join("absent.ron"))
            .await
            .unwrap();
        assert_eq!(cfg, DriveConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "(resolver: (max_ancestry_depth: 4))").unwrap();

        let cfg = DriveConfig::load(&path).await.unwrap();
        assert_eq!(cfg.resolver.max_ancestry_depth, 4);
    }
}
