use async_trait::async_trait;
use base64::Engine;

use crate::profile::application::{
    domain::entities::{AvatarFile, AvatarPreview},
    ports::outgoing::{AvatarPreviewReader, PreviewError},
};

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Reads the whole file into a `data:<type>;base64,<payload>` URI.
#[derive(Debug, Clone, Default)]
pub struct DataUriPreviewReader;

impl DataUriPreviewReader {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(media_type: &str, bytes: &[u8]) -> String {
        let media_type = if media_type.trim().is_empty() {
            FALLBACK_MEDIA_TYPE
        } else {
            media_type
        };
        format!(
            "data:{};base64,{}",
            media_type,
            base64::engine::general_purpose::STANDARD.encode(bytes)
        )
    }
}

#[async_trait]
impl AvatarPreviewReader for DataUriPreviewReader {
    async fn read_preview(&self, file: AvatarFile) -> Result<AvatarPreview, PreviewError> {
        // Encoding a few MB is CPU work; keep it off the async workers.
        tokio::task::spawn_blocking(move || {
            AvatarPreview::new(Self::encode(file.media_type(), file.bytes()))
        })
        .await
        .map_err(|e| PreviewError::ReadFailed(e.to_string()))
    }
}
