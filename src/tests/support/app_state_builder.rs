use crate::profile::application::ports::incoming::use_cases::{
    CancelProfileUseCase, GetProfileFormUseCase, InitializeProfileFormUseCase,
    SelectAvatarUseCase, SubmitProfileUseCase, UpdateProfileFieldUseCase,
};
use crate::profile::application::profile_form_use_cases::ProfileFormUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    profile_form: ProfileFormUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile_form: ProfileFormUseCases {
                initialize: Arc::new(StubInitializeProfileFormUseCase::default()),
                get_form: Arc::new(StubGetProfileFormUseCase::default()),
                update_field: Arc::new(StubUpdateProfileFieldUseCase),
                select_avatar: Arc::new(StubSelectAvatarUseCase),
                submit: Arc::new(StubSubmitProfileUseCase::save_failed(
                    "not used in this test",
                )),
                cancel: Arc::new(StubCancelProfileUseCase::success()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_initialize_profile_form(
        mut self,
        uc: impl InitializeProfileFormUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile_form.initialize = Arc::new(uc);
        self
    }

    pub fn with_get_profile_form(
        mut self,
        uc: impl GetProfileFormUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile_form.get_form = Arc::new(uc);
        self
    }

    pub fn with_update_profile_field(
        mut self,
        uc: impl UpdateProfileFieldUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile_form.update_field = Arc::new(uc);
        self
    }

    pub fn with_select_avatar(
        mut self,
        uc: impl SelectAvatarUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile_form.select_avatar = Arc::new(uc);
        self
    }

    pub fn with_submit_profile(
        mut self,
        uc: impl SubmitProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile_form.submit = Arc::new(uc);
        self
    }

    pub fn with_cancel_profile(
        mut self,
        uc: impl CancelProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile_form.cancel = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile_form: self.profile_form,
        })
    }
}
