use async_trait::async_trait;

use crate::profile::application::domain::{
    entities::ProfileField,
    form_state::{FormView, NotATextField},
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileFieldError {
    #[error("Field `{0}` cannot be edited as text, select a file instead")]
    NotEditable(ProfileField),
}

impl From<NotATextField> for UpdateProfileFieldError {
    fn from(err: NotATextField) -> Self {
        UpdateProfileFieldError::NotEditable(err.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileFieldUseCase: Send + Sync {
    async fn execute(
        &self,
        field: ProfileField,
        value: String,
    ) -> Result<FormView, UpdateProfileFieldError>;
}
