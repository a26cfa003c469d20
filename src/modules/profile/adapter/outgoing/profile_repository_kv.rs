use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::application::{
    domain::entities::ProfileRecord,
    ports::outgoing::{KeyValueStore, KeyValueStoreError, ProfileRepository, ProfileRepositoryError},
};

/// Key the profile lives under. There is exactly one profile per store.
pub const PROFILE_KEY: &str = "profile";

/// Version written into every envelope.
pub const STORAGE_VERSION: u64 = 1;

/// Stored shape:
/// ```text
/// profile -> {"version":1,"savedAt":"…","profile":{…}}
/// ```
/// Records written without an envelope (just the camelCase record) are read as
/// version 0. Versions newer than [`STORAGE_VERSION`] are refused.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProfile {
    version: u64,
    saved_at: DateTime<Utc>,
    profile: ProfileRecord,
}

impl From<KeyValueStoreError> for ProfileRepositoryError {
    fn from(err: KeyValueStoreError) -> Self {
        ProfileRepositoryError::StorageError(err.to_string())
    }
}

#[derive(Clone)]
pub struct KeyValueProfileRepository<S>
where
    S: KeyValueStore,
{
    store: S,
}

impl<S> KeyValueProfileRepository<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn decode(raw: &str) -> Result<ProfileRecord, ProfileRepositoryError> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| ProfileRepositoryError::Corrupt(e.to_string()))?;

        match value.get("version") {
            None => serde_json::from_value::<ProfileRecord>(value)
                .map_err(|e| ProfileRepositoryError::Corrupt(e.to_string())),
            Some(version) => {
                let version = version.as_u64().ok_or_else(|| {
                    ProfileRepositoryError::Corrupt(format!("invalid version tag: {version}"))
                })?;
                if version > STORAGE_VERSION {
                    return Err(ProfileRepositoryError::UnsupportedVersion(version));
                }
                serde_json::from_value::<StoredProfile>(value)
                    .map(|stored| stored.profile)
                    .map_err(|e| ProfileRepositoryError::Corrupt(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl<S> ProfileRepository for KeyValueProfileRepository<S>
where
    S: KeyValueStore,
{
    async fn load(&self) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        match self.store.get(PROFILE_KEY).await? {
            Some(raw) => Self::decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    async fn save(&self, record: &ProfileRecord) -> Result<(), ProfileRepositoryError> {
        let stored = StoredProfile {
            version: STORAGE_VERSION,
            saved_at: Utc::now(),
            profile: record.clone(),
        };
        let raw = serde_json::to_string(&stored)
            .map_err(|e| ProfileRepositoryError::StorageError(e.to_string()))?;

        self.store.set(PROFILE_KEY, raw).await?;
        debug!(key = PROFILE_KEY, "Profile written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ProfileRepositoryError> {
        self.store.remove(PROFILE_KEY).await?;
        debug!(key = PROFILE_KEY, "Profile removed");
        Ok(())
    }
}
