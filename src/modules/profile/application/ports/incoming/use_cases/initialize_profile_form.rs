use async_trait::async_trait;

use crate::profile::application::domain::form_state::FormView;

/// Loads the stored profile into the form. Never fails: unreadable storage yields an empty form.
#[async_trait]
pub trait InitializeProfileFormUseCase: Send + Sync {
    async fn execute(&self) -> FormView;
}
