use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Stored profile is malformed: {0}")]
    Corrupt(String),

    #[error("Stored profile has unsupported version {0}")]
    UnsupportedVersion(u64),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Persistence port for the single profile record.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn load(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError>;

    /// Overwrites the stored record wholesale.
    async fn save(&self, record: &ProfileRecord) -> Result<(), ProfileRepositoryError>;

    /// Idempotent.
    async fn clear(&self) -> Result<(), ProfileRepositoryError>;
}
