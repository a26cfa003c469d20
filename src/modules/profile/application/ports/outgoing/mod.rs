pub mod avatar_preview_reader;
pub mod key_value_store;
pub mod profile_repository;

pub use avatar_preview_reader::{AvatarPreviewReader, PreviewError};
pub use key_value_store::{KeyValueStore, KeyValueStoreError};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
