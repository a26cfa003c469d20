use async_trait::async_trait;

use crate::profile::application::domain::{form_state::FormView, validation::ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitProfileError {
    #[error("{0}")]
    Invalid(ValidationErrors),

    #[error("Could not save profile: {0}")]
    SaveFailed(String),
}

/// Validate the whole form and persist it. Both failure kinds leave the form editable.
#[async_trait]
pub trait SubmitProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<FormView, SubmitProfileError>;
}
