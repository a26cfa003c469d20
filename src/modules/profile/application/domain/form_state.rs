use serde::Serialize;
use utoipa::ToSchema;

use crate::profile::application::domain::{
    entities::{AvatarFile, AvatarPreview, ProfileDraft, ProfileField, ProfileRecord},
    validation::ValidationErrors,
};

/// Lifecycle of one form instance.
///
/// `Empty -> Editing -> {Saved, Invalid}`. Edits move `Saved` back to `Editing`
/// and keep `Invalid` while its errors are still on screen. Cancel goes back to
/// `Empty` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum FormStatus {
    Empty,
    Editing,
    Saved,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field `{0}` is not a text field")]
pub struct NotATextField(pub ProfileField);

/// What a renderer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub status: FormStatus,
    pub draft: ProfileDraft,
    pub errors: ValidationErrors,
    pub preview_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    draft: ProfileDraft,
    errors: ValidationErrors,
    status: FormStatus,
}

impl Default for FormState {
    fn default() -> Self {
        Self::empty()
    }
}

impl FormState {
    pub fn empty() -> Self {
        Self {
            draft: ProfileDraft::default(),
            errors: ValidationErrors::new(),
            status: FormStatus::Empty,
        }
    }

    /// State restored from storage. Values equal the stored record, so it counts as saved.
    pub fn loaded(record: ProfileRecord) -> Self {
        Self {
            draft: ProfileDraft::from(record),
            errors: ValidationErrors::new(),
            status: FormStatus::Saved,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    fn touch(&mut self) {
        self.status = if self.errors.is_empty() {
            FormStatus::Editing
        } else {
            FormStatus::Invalid
        };
    }

    pub fn set_text(&mut self, field: ProfileField, value: String) -> Result<(), NotATextField> {
        let slot = self.draft.text_mut(field).ok_or(NotATextField(field))?;
        *slot = value;
        self.touch();
        Ok(())
    }

    pub fn set_avatar_file(&mut self, file: AvatarFile) {
        self.draft.avatar_file = Some(file);
        self.touch();
    }

    /// Previews arrive asynchronously; they do not count as an edit by themselves.
    pub fn set_avatar_preview(&mut self, preview: Option<AvatarPreview>) {
        self.draft.avatar_preview = preview;
    }

    pub fn mark_saved(&mut self) {
        self.errors = ValidationErrors::new();
        self.status = FormStatus::Saved;
    }

    pub fn mark_invalid(&mut self, errors: ValidationErrors) {
        self.errors = errors;
        self.status = FormStatus::Invalid;
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    pub fn view(&self, preview_pending: bool) -> FormView {
        FormView {
            status: self.status,
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            preview_pending,
        }
    }
}
