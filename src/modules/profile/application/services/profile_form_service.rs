use std::sync::Arc;

use async_trait::async_trait;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::profile::application::{
    domain::{
        entities::{AvatarFile, AvatarPreview, ProfileDraft, ProfileField},
        form_state::{FormState, FormView},
        validation::ProfileSchema,
    },
    ports::{
        incoming::use_cases::{
            CancelProfileError, CancelProfileUseCase, GetProfileFormUseCase,
            InitializeProfileFormUseCase, SelectAvatarUseCase, SubmitProfileError,
            SubmitProfileUseCase, UpdateProfileFieldError, UpdateProfileFieldUseCase,
        },
        outgoing::{AvatarPreviewReader, PreviewError, ProfileRepository},
    },
};

const PREVIEW_FAILED_MESSAGE: &str = "Avatar could not be read, please select it again";

struct PendingPreview {
    file_name: String,
    handle: JoinHandle<Result<AvatarPreview, PreviewError>>,
}

struct FormSession {
    state: FormState,
    pending_preview: Option<PendingPreview>,
    preview_failed: bool,
}

impl FormSession {
    fn new(state: FormState) -> Self {
        Self {
            state,
            pending_preview: None,
            preview_failed: false,
        }
    }

    fn view(&self) -> FormView {
        self.state.view(self.pending_preview.is_some())
    }

    fn discard_pending_preview(&mut self) {
        if let Some(pending) = self.pending_preview.take() {
            pending.handle.abort();
        }
    }

    fn reset(&mut self) {
        self.discard_pending_preview();
        self.preview_failed = false;
        self.state.reset();
    }

    /// Apply a finished preview. With `wait` set, block until a pending one finishes.
    async fn settle_preview(&mut self, wait: bool) {
        let ready = self
            .pending_preview
            .as_ref()
            .is_some_and(|pending| wait || pending.handle.is_finished());
        if !ready {
            return;
        }

        let Some(pending) = self.pending_preview.take() else {
            return;
        };

        match pending.handle.await {
            Ok(Ok(preview)) => {
                debug!(file_name = %pending.file_name, "Avatar preview ready");
                self.state.set_avatar_preview(Some(preview));
                self.preview_failed = false;
            }
            Ok(Err(e)) => {
                warn!(file_name = %pending.file_name, error = %e, "Avatar preview failed");
                self.state.set_avatar_preview(None);
                self.preview_failed = true;
            }
            Err(e) => {
                error!(file_name = %pending.file_name, error = %e, "Avatar preview task aborted");
                self.state.set_avatar_preview(None);
                self.preview_failed = true;
            }
        }
    }
}

/// Owns the single profile form: working values, errors, avatar preview and the
/// save/cancel lifecycle. Operations are serialized through one lock.
pub struct ProfileFormService<R, P>
where
    R: ProfileRepository + Send + Sync,
    P: AvatarPreviewReader + Send + Sync + 'static,
{
    repository: R,
    preview_reader: Arc<P>,
    schema: ProfileSchema,
    session: Mutex<FormSession>,
}

impl<R, P> ProfileFormService<R, P>
where
    R: ProfileRepository + Send + Sync,
    P: AvatarPreviewReader + Send + Sync + 'static,
{
    pub fn new(repository: R, preview_reader: P, schema: ProfileSchema) -> Self {
        Self {
            repository,
            preview_reader: Arc::new(preview_reader),
            schema,
            session: Mutex::new(FormSession::new(FormState::empty())),
        }
    }

    pub async fn initialize(&self) -> FormView {
        let state = match self.repository.load().await {
            Ok(Some(record)) => match self.schema.validate(&ProfileDraft::from(record.clone())) {
                Ok(_) => {
                    info!(has_avatar = record.avatar.is_some(), "Loaded stored profile");
                    FormState::loaded(record)
                }
                Err(errors) => {
                    warn!(fields = %errors, "Ignoring stored profile that fails validation");
                    FormState::empty()
                }
            },
            Ok(None) => {
                debug!("No stored profile, starting empty");
                FormState::empty()
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable stored profile");
                FormState::empty()
            }
        };

        let mut session = self.session.lock().await;
        session.discard_pending_preview();
        *session = FormSession::new(state);
        session.view()
    }

    pub async fn snapshot(&self) -> FormView {
        let mut session = self.session.lock().await;
        session.settle_preview(false).await;
        session.view()
    }

    pub async fn update_field(
        &self,
        field: ProfileField,
        value: String,
    ) -> Result<FormView, UpdateProfileFieldError> {
        let mut session = self.session.lock().await;
        session.state.set_text(field, value)?;
        session.settle_preview(false).await;
        Ok(session.view())
    }

    pub async fn select_avatar(&self, file: AvatarFile) -> FormView {
        let mut session = self.session.lock().await;

        // A newer selection wins over one still being read.
        session.discard_pending_preview();
        session.preview_failed = false;
        session.state.set_avatar_file(file.clone());

        let file_name = file.file_name().to_string();
        debug!(
            file_name = %file_name,
            media_type = %file.media_type(),
            size_bytes = file.size_bytes(),
            "Avatar selected"
        );

        let reader = Arc::clone(&self.preview_reader);
        let handle = tokio::spawn(async move { reader.read_preview(file).await });
        session.pending_preview = Some(PendingPreview { file_name, handle });

        session.view()
    }

    /// Waits for a pending avatar preview before validating, so what gets saved is
    /// always the preview of the file that was validated.
    pub async fn submit(&self) -> Result<FormView, SubmitProfileError> {
        let mut session = self.session.lock().await;
        session.settle_preview(true).await;

        let mut outcome = self.schema.validate(session.state.draft());
        if session.preview_failed {
            let mut errors = outcome.err().unwrap_or_default();
            errors.insert(ProfileField::Avatar, PREVIEW_FAILED_MESSAGE);
            outcome = Err(errors);
        }

        let record = match outcome {
            Ok(record) => record,
            Err(errors) => {
                warn!(fields = %errors, "Profile submission rejected");
                session.state.mark_invalid(errors.clone());
                return Err(SubmitProfileError::Invalid(errors));
            }
        };

        if let Err(e) = self.repository.save(&record).await {
            error!(error = %e, "Failed to persist profile");
            return Err(SubmitProfileError::SaveFailed(e.to_string()));
        }

        info!(visibility = %record.visibility, "Profile saved");
        session.state.mark_saved();
        Ok(session.view())
    }

    /// The form is reset even when removing the stored record fails.
    pub async fn cancel(&self) -> Result<FormView, CancelProfileError> {
        let mut session = self.session.lock().await;
        session.reset();

        self.repository.clear().await.map_err(|e| {
            error!(error = %e, "Failed to clear stored profile");
            CancelProfileError::ClearFailed(e.to_string())
        })?;

        info!("Profile form cancelled and storage cleared");
        Ok(session.view())
    }
}

#[async_trait]
impl<R, P> InitializeProfileFormUseCase for ProfileFormService<R, P>
where
    R: ProfileRepository + Send + Sync,
    P: AvatarPreviewReader + Send + Sync + 'static,
{
    async fn execute(&self) -> FormView {
        self.initialize().await
    }
}

#[async_trait]
impl<R, P> GetProfileFormUseCase for ProfileFormService<R, P>
where
    R: ProfileRepository + Send + Sync,
    P: AvatarPreviewReader + Send + Sync + 'static,
{
    async fn execute(&self) -> FormView {
        self.snapshot().await
    }
}

#[async_trait]
impl<R, P> UpdateProfileFieldUseCase for ProfileFormService<R, P>
where
    R: ProfileRepository + Send + Sync,
    P: AvatarPreviewReader + Send + Sync + 'static,
{
    async fn execute(
        &self,
        field: ProfileField,
        value: String,
    ) -> Result<FormView, UpdateProfileFieldError> {
        self.update_field(field, value).await
    }
}

#[async_trait]
impl<R, P> SelectAvatarUseCase for ProfileFormService<R, P>
where
    R: ProfileRepository + Send + Sync,
    P: AvatarPreviewReader + Send + Sync + 'static,
{
    async fn execute(&self, file: AvatarFile) -> FormView {
        self.select_avatar(file).await
    }
}

#[async_trait]
impl<R, P> SubmitProfileUseCase for ProfileFormService<R, P>
where
    R: ProfileRepository + Send + Sync,
    P: AvatarPreviewReader + Send + Sync + 'static,
{
    async fn execute(&self) -> Result<FormView, SubmitProfileError> {
        self.submit().await
    }
}

#[async_trait]
impl<R, P> CancelProfileUseCase for ProfileFormService<R, P>
where
    R: ProfileRepository + Send + Sync,
    P: AvatarPreviewReader + Send + Sync + 'static,
{
    async fn execute(&self) -> Result<FormView, CancelProfileError> {
        self.cancel().await
    }
}
