use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const APP_DIR_NAME: &str = "profile_editor";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageConfigError {
    #[error("PROFILE_STORAGE_BACKEND must be `file` or `memory`, got `{0}`")]
    UnknownBackend(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = StorageConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(StorageConfigError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::File => f.write_str("file"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Only used by the file backend.
    pub directory: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    pub fn from_env() -> Result<Self, StorageConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StorageConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("PROFILE_STORAGE_BACKEND") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => StorageBackend::default(),
        };

        let directory = lookup("PROFILE_STORAGE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_directory);

        Ok(Self { backend, directory })
    }

    /// `<platform data dir>/profile_editor`, or `./data` when the platform has none.
    pub fn default_directory() -> PathBuf {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}
