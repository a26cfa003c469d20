use async_trait::async_trait;

use crate::profile::application::domain::form_state::FormView;

#[async_trait]
pub trait GetProfileFormUseCase: Send + Sync {
    async fn execute(&self) -> FormView;
}
