use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::profile::application::domain::{
    form_state::{FormStatus, FormView},
    validation::ValidationErrors,
};

/// Current text values, exactly as entered.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileValuesDto {
    #[schema(example = "Anna")]
    pub name: String,
    #[schema(example = "Ivanova")]
    pub surname: String,
    pub job_title: String,
    #[schema(example = "+15551234567")]
    pub phone: String,
    #[schema(example = "a@b.com")]
    pub email: String,
    pub address: String,
    pub pitch: String,
    #[schema(example = "Private")]
    pub visibility: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarStateDto {
    /// Name of the selected file, if one was picked in this session
    pub file_name: Option<String>,
    /// `data:` URI to render, `null` means show the placeholder
    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub preview: Option<String>,
    /// A selected file is still being read
    pub pending: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormResponse {
    pub status: FormStatus,
    pub values: ProfileValuesDto,
    pub avatar: AvatarStateDto,
    /// Field name -> message from the last rejected submit
    pub errors: BTreeMap<String, String>,
}

pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .as_map()
        .iter()
        .map(|(field, message)| (field.as_str().to_string(), message.clone()))
        .collect()
}

impl From<FormView> for ProfileFormResponse {
    fn from(view: FormView) -> Self {
        let errors = field_messages(&view.errors);
        let draft = view.draft;

        Self {
            status: view.status,
            avatar: AvatarStateDto {
                file_name: draft.avatar_file.as_ref().map(|f| f.file_name().to_string()),
                preview: draft.avatar_preview.map(|p| p.into_inner()),
                pending: view.preview_pending,
            },
            values: ProfileValuesDto {
                name: draft.name,
                surname: draft.surname,
                job_title: draft.job_title,
                phone: draft.phone,
                email: draft.email,
                address: draft.address,
                pitch: draft.pitch,
                visibility: draft.visibility,
            },
            errors,
        }
    }
}
