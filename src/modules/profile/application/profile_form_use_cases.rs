use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    CancelProfileUseCase, GetProfileFormUseCase, InitializeProfileFormUseCase,
    SelectAvatarUseCase, SubmitProfileUseCase, UpdateProfileFieldUseCase,
};

#[derive(Clone)]
pub struct ProfileFormUseCases {
    pub initialize: Arc<dyn InitializeProfileFormUseCase + Send + Sync>,
    pub get_form: Arc<dyn GetProfileFormUseCase + Send + Sync>,
    pub update_field: Arc<dyn UpdateProfileFieldUseCase + Send + Sync>,
    pub select_avatar: Arc<dyn SelectAvatarUseCase + Send + Sync>,
    pub submit: Arc<dyn SubmitProfileUseCase + Send + Sync>,
    pub cancel: Arc<dyn CancelProfileUseCase + Send + Sync>,
}

impl ProfileFormUseCases {
    /// Every use case backed by the same form instance.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: InitializeProfileFormUseCase
            + GetProfileFormUseCase
            + UpdateProfileFieldUseCase
            + SelectAvatarUseCase
            + SubmitProfileUseCase
            + CancelProfileUseCase
            + Send
            + Sync
            + 'static,
    {
        Self {
            initialize: service.clone(),
            get_form: service.clone(),
            update_field: service.clone(),
            select_avatar: service.clone(),
            submit: service.clone(),
            cancel: service,
        }
    }
}
