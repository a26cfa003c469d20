use async_trait::async_trait;

use crate::profile::application::domain::entities::{AvatarFile, AvatarPreview};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("Failed to read avatar: {0}")]
    ReadFailed(String),
}

/// Turns a selected file into something a renderer can display directly.
#[async_trait]
pub trait AvatarPreviewReader: Send + Sync {
    async fn read_preview(&self, file: AvatarFile) -> Result<AvatarPreview, PreviewError>;
}
