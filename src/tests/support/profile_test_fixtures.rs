use crate::profile::application::domain::{
    entities::{AvatarPreview, ProfileDraft, ProfileRecord, Visibility},
    form_state::{FormStatus, FormView},
    validation::ValidationErrors,
};

pub fn anna_record() -> ProfileRecord {
    ProfileRecord {
        name: "Anna".to_string(),
        surname: "Ivanova".to_string(),
        job_title: None,
        phone: "+15551234567".to_string(),
        email: "a@b.com".to_string(),
        address: None,
        pitch: None,
        visibility: Visibility::Private,
        avatar: Some(AvatarPreview::new("data:image/png;base64,iVBORw0KGgo=")),
    }
}

pub fn empty_view() -> FormView {
    FormView {
        status: FormStatus::Empty,
        draft: ProfileDraft::default(),
        errors: ValidationErrors::new(),
        preview_pending: false,
    }
}

pub fn editing_view() -> FormView {
    FormView {
        status: FormStatus::Editing,
        ..empty_view()
    }
}

pub fn saved_view() -> FormView {
    FormView {
        status: FormStatus::Saved,
        draft: ProfileDraft::from(anna_record()),
        errors: ValidationErrors::new(),
        preview_pending: false,
    }
}
