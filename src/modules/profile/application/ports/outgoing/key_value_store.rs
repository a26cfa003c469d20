use async_trait::async_trait;

/// Errors that can occur in key/value store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Durable string store addressed by key, the local equivalent of browser storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `None` when the key was never written or has been removed
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Replace the value under `key`. Readers see either the old or the new value, never a mix.
    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStoreError>;

    /// Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;

    /// Readiness probe
    async fn ping(&self) -> Result<(), KeyValueStoreError>;
}

#[async_trait]
impl<T> KeyValueStore for std::sync::Arc<T>
where
    T: KeyValueStore + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        (**self).remove(key).await
    }

    async fn ping(&self) -> Result<(), KeyValueStoreError> {
        (**self).ping().await
    }
}
