pub mod data_uri_preview_reader;
pub mod file_key_value_store;
pub mod memory_key_value_store;
pub mod profile_repository_kv;
pub mod storage_config;

pub use data_uri_preview_reader::DataUriPreviewReader;
pub use file_key_value_store::FileKeyValueStore;
pub use memory_key_value_store::InMemoryKeyValueStore;
pub use profile_repository_kv::{KeyValueProfileRepository, PROFILE_KEY, STORAGE_VERSION};
pub use storage_config::{StorageBackend, StorageConfig, StorageConfigError};
