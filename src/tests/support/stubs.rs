use async_trait::async_trait;

use crate::profile::application::domain::{
    entities::{AvatarFile, ProfileField},
    form_state::FormView,
    validation::ValidationErrors,
};
use crate::profile::application::ports::incoming::use_cases::{
    CancelProfileError, CancelProfileUseCase, GetProfileFormUseCase,
    InitializeProfileFormUseCase, SelectAvatarUseCase, SubmitProfileError, SubmitProfileUseCase,
    UpdateProfileFieldError, UpdateProfileFieldUseCase,
};
use crate::tests::support::profile_test_fixtures::empty_view;

#[derive(Clone)]
pub struct StubInitializeProfileFormUseCase {
    view: FormView,
}

impl StubInitializeProfileFormUseCase {
    pub fn returning(view: FormView) -> Self {
        Self { view }
    }
}

impl Default for StubInitializeProfileFormUseCase {
    fn default() -> Self {
        Self::returning(empty_view())
    }
}

#[async_trait]
impl InitializeProfileFormUseCase for StubInitializeProfileFormUseCase {
    async fn execute(&self) -> FormView {
        self.view.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProfileFormUseCase {
    view: FormView,
}

impl StubGetProfileFormUseCase {
    pub fn returning(view: FormView) -> Self {
        Self { view }
    }
}

impl Default for StubGetProfileFormUseCase {
    fn default() -> Self {
        Self::returning(empty_view())
    }
}

#[async_trait]
impl GetProfileFormUseCase for StubGetProfileFormUseCase {
    async fn execute(&self) -> FormView {
        self.view.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileFieldUseCase;

#[async_trait]
impl UpdateProfileFieldUseCase for StubUpdateProfileFieldUseCase {
    async fn execute(
        &self,
        _field: ProfileField,
        _value: String,
    ) -> Result<FormView, UpdateProfileFieldError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSelectAvatarUseCase;

#[async_trait]
impl SelectAvatarUseCase for StubSelectAvatarUseCase {
    async fn execute(&self, _file: AvatarFile) -> FormView {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubSubmitProfileUseCase {
    result: Result<FormView, SubmitProfileError>,
}

impl StubSubmitProfileUseCase {
    pub fn success(view: FormView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        Self {
            result: Err(SubmitProfileError::Invalid(errors)),
        }
    }

    pub fn save_failed(msg: &str) -> Self {
        Self {
            result: Err(SubmitProfileError::SaveFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl SubmitProfileUseCase for StubSubmitProfileUseCase {
    async fn execute(&self) -> Result<FormView, SubmitProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubCancelProfileUseCase {
    result: Result<FormView, CancelProfileError>,
}

impl StubCancelProfileUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(empty_view()),
        }
    }

    pub fn clear_failed(msg: &str) -> Self {
        Self {
            result: Err(CancelProfileError::ClearFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl CancelProfileUseCase for StubCancelProfileUseCase {
    async fn execute(&self) -> Result<FormView, CancelProfileError> {
        self.result.clone()
    }
}
