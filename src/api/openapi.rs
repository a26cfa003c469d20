use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::profile::adapter::incoming::web::routes::{
    AvatarStateDto, ProfileFormResponse, ProfileValuesDto, UpdateProfileFieldRequest,
};
use crate::profile::application::domain::{
    entities::{ProfileField, Visibility},
    form_state::FormStatus,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Profile Editor API",
        version = "1.0.0",
        description = "Single-profile form: edit fields, pick an avatar, validate and save locally"
    ),
    paths(
        crate::profile::adapter::incoming::web::routes::get_profile_form_handler,
        crate::profile::adapter::incoming::web::routes::reload_profile_form_handler,
        crate::profile::adapter::incoming::web::routes::update_profile_field_handler,
        crate::profile::adapter::incoming::web::routes::select_avatar_handler,
        crate::profile::adapter::incoming::web::routes::submit_profile_handler,
        crate::profile::adapter::incoming::web::routes::cancel_profile_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ProfileFormResponse>,
            ErrorResponse,
            ErrorDetail,

            // Profile DTOs
            ProfileFormResponse,
            ProfileValuesDto,
            AvatarStateDto,
            UpdateProfileFieldRequest,
            FormStatus,
            ProfileField,
            Visibility
        )
    ),
    tags(
        (name = "profile", description = "Profile form endpoints"),
    )
)]
pub struct ApiDoc;
