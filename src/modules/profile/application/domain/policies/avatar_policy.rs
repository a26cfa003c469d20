use crate::profile::application::domain::entities::AvatarFile;

#[derive(Debug, Clone)]
pub struct AvatarPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
}

impl AvatarPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/jpg"];

    pub fn new(max_file_size_bytes: u64, allowed_mime_types: &'static [&'static str]) -> Self {
        Self {
            max_file_size_bytes,
            allowed_mime_types,
        }
    }

    pub fn accepts_mime(&self, media_type: &str) -> bool {
        self.allowed_mime_types.contains(&media_type)
    }

    pub fn accepts_size(&self, size_bytes: u64) -> bool {
        size_bytes <= self.max_file_size_bytes
    }

    /// Both the declared type and the size must pass.
    pub fn accepts(&self, file: &AvatarFile) -> bool {
        self.accepts_mime(file.media_type()) && self.accepts_size(file.size_bytes())
    }
}

impl Default for AvatarPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            Self::DEFAULT_ALLOWED_MIME_TYPES,
        )
    }
}
