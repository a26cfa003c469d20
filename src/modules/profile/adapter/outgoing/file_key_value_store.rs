use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::profile::application::ports::outgoing::{KeyValueStore, KeyValueStoreError};

/// Directory-backed implementation of `KeyValueStore`.
///
/// ## Layout
/// ```text
/// {root}/{key}.json      -> value
/// {root}/{key}.json.tmp  -> in-flight write
/// ```
///
/// A write goes to the temp file first and is then renamed over the target, so a
/// reader sees either the previous value or the new one.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys become file names, so only a conservative character set is accepted.
    fn entry_path(&self, key: &str) -> Result<PathBuf, KeyValueStoreError> {
        let valid = !key.is_empty()
            && key.len() <= 128
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KeyValueStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    async fn ensure_root(&self) -> Result<(), KeyValueStoreError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            KeyValueStoreError::StorageError(format!(
                "Cannot create {}: {}",
                self.root.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let path = self.entry_path(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueStoreError::StorageError(format!(
                "Cannot read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        let path = self.entry_path(key)?;
        self.ensure_root().await?;

        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, value.as_bytes())
            .await
            .map_err(|e| {
                KeyValueStoreError::StorageError(format!(
                    "Cannot write {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;

        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(KeyValueStoreError::StorageError(format!(
                "Cannot replace {}: {}",
                path.display(),
                e
            )));
        }

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let path = self.entry_path(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueStoreError::StorageError(format!(
                "Cannot remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn ping(&self) -> Result<(), KeyValueStoreError> {
        self.ensure_root().await?;

        let metadata = tokio::fs::metadata(&self.root)
            .await
            .map_err(|e| KeyValueStoreError::StorageError(e.to_string()))?;

        if metadata.permissions().readonly() {
            return Err(KeyValueStoreError::StorageError(format!(
                "{} is read-only",
                self.root.display()
            )));
        }

        Ok(())
    }
}
