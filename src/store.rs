//! Configuration file store.
//!
//! Maps the fixed set of logical configuration names onto files inside the
//! configuration directory and reads them straight from disk.
//!
//! ```text
//! <content_root>/config_files/cooker_config.json
//! <content_root>/config_files/eiot_config.json
//! <content_root>/config_files/pico_iot_config.json
//! ```
//!
//! Files are owned by operators. The store never writes, creates or deletes
//! them, and never caches their contents: every read goes to disk so an
//! updated file is visible on the next request.

use std::fmt;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::error::ConfigFileError;

/// Name of the directory under the content root that holds the files.
pub const CONFIG_DIR_NAME: &str = "config_files";

// =============================================================================
// Configuration Names
// =============================================================================

/// One of the fixed configuration documents exposed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigName {
    Cooker,
    Eiot,
    PicoIot,
}

impl ConfigName {
    /// Every served configuration, in route registration order.
    pub const ALL: [ConfigName; 3] = [ConfigName::Cooker, ConfigName::Eiot, ConfigName::PicoIot];

    /// Logical name without extension (e.g. `cooker_config`).
    pub const fn logical_name(self) -> &'static str {
        match self {
            ConfigName::Cooker => "cooker_config",
            ConfigName::Eiot => "eiot_config",
            ConfigName::PicoIot => "pico_iot_config",
        }
    }

    /// File name on disk, identical to the last URL segment.
    pub const fn file_name(self) -> &'static str {
        match self {
            ConfigName::Cooker => "cooker_config.json",
            ConfigName::Eiot => "eiot_config.json",
            ConfigName::PicoIot => "pico_iot_config.json",
        }
    }

    /// Route path the file is served under.
    pub const fn route(self) -> &'static str {
        match self {
            ConfigName::Cooker => "/cooker_config.json",
            ConfigName::Eiot => "/eiot_config.json",
            ConfigName::PicoIot => "/pico_iot_config.json",
        }
    }
}

impl fmt::Display for ConfigName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// =============================================================================
// File Status
// =============================================================================

/// Snapshot of a configuration file on disk, used by `check`.
#[derive(Debug, Clone, Serialize)]
pub struct FileStatus {
    /// Which configuration this is
    pub name: ConfigName,

    /// Resolved path, lossily rendered so non-UTF-8 paths still serialize
    pub path: String,

    /// Whether a regular file exists at `path`
    pub present: bool,

    /// Size in bytes when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Error text when the file could not be inspected for a reason other than absence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of checking every configuration file, printed by `check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Resolved configuration directory
    pub config_dir: String,

    /// Whether the configuration directory exists
    pub config_dir_exists: bool,

    /// One entry per [`ConfigName::ALL`]
    pub files: Vec<FileStatus>,

    /// True when the directory and every file are present
    pub ok: bool,
}

// =============================================================================
// Store
// =============================================================================

/// Resolves and reads configuration files below a content root.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    content_root: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at `content_root`.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }

    /// The content root this store resolves against.
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// The configuration directory, recomputed on every call.
    pub fn config_dir(&self) -> PathBuf {
        self.content_root.join(CONFIG_DIR_NAME)
    }

    /// Full path of the file backing `name`.
    pub fn resolve(&self, name: ConfigName) -> PathBuf {
        self.config_dir().join(name.file_name())
    }

    /// Read the raw bytes of `name` from disk.
    ///
    /// Anything other than a regular file at the resolved path is reported
    /// as [`ConfigFileError::NotFound`].
    pub async fn read(&self, name: ConfigName) -> Result<Bytes, ConfigFileError> {
        let path = self.resolve(name);

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| ConfigFileError::from_io(&path, &e))?;
        if !metadata.is_file() {
            return Err(ConfigFileError::NotFound { path });
        }

        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| ConfigFileError::from_io(&path, &e))?;

        debug!(path = %path.display(), bytes = data.len(), "Read config file");
        Ok(Bytes::from(data))
    }

    /// Inspect `name` without reading its contents.
    pub async fn inspect(&self, name: ConfigName) -> FileStatus {
        let path = self.resolve(name);
        let (present, size, error) = match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => (true, Some(metadata.len()), None),
            Ok(_) => (false, None, None),
            Err(e) => match ConfigFileError::from_io(&path, &e) {
                ConfigFileError::NotFound { .. } => (false, None, None),
                ConfigFileError::Io { message, .. } => (false, None, Some(message)),
            },
        };

        FileStatus {
            name,
            path: path.display().to_string(),
            present,
            size,
            error,
        }
    }

    /// Inspect the configuration directory and every file in it.
    pub async fn check(&self) -> CheckReport {
        let config_dir = self.config_dir();
        let config_dir_exists = tokio::fs::metadata(&config_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        let mut files = Vec::with_capacity(ConfigName::ALL.len());
        for name in ConfigName::ALL {
            files.push(self.inspect(name).await);
        }

        let ok = config_dir_exists && files.iter().all(|f| f.present);
        CheckReport {
            config_dir: config_dir.display().to_string(),
            config_dir_exists,
            files,
            ok,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
