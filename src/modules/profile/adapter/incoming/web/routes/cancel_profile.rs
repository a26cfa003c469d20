use actix_web::{http::StatusCode, post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::adapter::incoming::web::routes::ProfileFormResponse;
use crate::profile::application::ports::incoming::use_cases::CancelProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Cancel editing and delete the saved profile
///
/// Resets every field to its default and removes the stored record. There is no
/// confirmation and no undo. The form is reset even if removal fails.
#[utoipa::path(
    post,
    path = "/api/profile/cancel",
    tag = "profile",
    responses(
        (status = 200, description = "Form reset and storage cleared", body = inline(SuccessResponse<ProfileFormResponse>)),
        (
            status = 500,
            description = "Form reset but stored profile could not be removed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "CLEAR_FAILED",
                    "message": "Form was reset but the saved profile could not be deleted"
                }
            })
        ),
    )
)]
#[post("/api/profile/cancel")]
pub async fn cancel_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile_form.cancel.execute().await {
        Ok(view) => {
            info!("Profile cancelled");
            ApiResponse::success(ProfileFormResponse::from(view))
        }

        Err(CancelProfileError::ClearFailed(e)) => {
            error!(error = %e, "Stored profile could not be removed");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "CLEAR_FAILED",
                "Form was reset but the saved profile could not be deleted",
            )
        }
    }
}
