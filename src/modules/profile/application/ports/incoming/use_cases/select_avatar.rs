use async_trait::async_trait;

use crate::profile::application::domain::{entities::AvatarFile, form_state::FormView};

/// Returns as soon as the file is recorded; the preview shows up later.
#[async_trait]
pub trait SelectAvatarUseCase: Send + Sync {
    async fn execute(&self, file: AvatarFile) -> FormView;
}
