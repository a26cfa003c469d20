use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::adapter::incoming::web::routes::{field_messages, ProfileFormResponse};
use crate::profile::application::ports::incoming::use_cases::SubmitProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Validate and save the profile
///
/// Waits for a pending avatar preview first. On validation failure the entered
/// values stay in the form and `error.fields` lists every invalid field.
#[utoipa::path(
    post,
    path = "/api/profile/submit",
    tag = "profile",
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<ProfileFormResponse>)),
        (
            status = 422,
            description = "One or more fields are invalid",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_FAILED",
                    "message": "Profile has invalid fields",
                    "fields": {
                        "phone": "Phone must be in the format +<country code><number>"
                    }
                }
            })
        ),
        (
            status = 500,
            description = "Storage write failed, form keeps its values",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SAVE_FAILED",
                    "message": "Could not save profile, please try again"
                }
            })
        ),
    )
)]
#[post("/api/profile/submit")]
pub async fn submit_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile_form.submit.execute().await {
        Ok(view) => {
            info!("Profile submitted");
            ApiResponse::success(ProfileFormResponse::from(view))
        }

        Err(SubmitProfileError::Invalid(errors)) => {
            warn!(fields = %errors, "Profile submission has invalid fields");
            ApiResponse::unprocessable(
                "VALIDATION_FAILED",
                "Profile has invalid fields",
                field_messages(&errors),
            )
        }

        Err(SubmitProfileError::SaveFailed(e)) => {
            error!(error = %e, "Profile could not be saved");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "SAVE_FAILED",
                "Could not save profile, please try again",
            )
        }
    }
}
