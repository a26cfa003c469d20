use async_trait::async_trait;

use crate::profile::application::domain::form_state::FormView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CancelProfileError {
    #[error("Form was reset but stored profile could not be removed: {0}")]
    ClearFailed(String),
}

/// Reset the form and delete the stored profile. No confirmation, no undo.
#[async_trait]
pub trait CancelProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<FormView, CancelProfileError>;
}
