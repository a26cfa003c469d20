use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::SuccessResponse;
use crate::profile::adapter::incoming::web::routes::ProfileFormResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current state of the profile form
///
/// Values, last validation errors, status and the avatar preview. A finished
/// avatar read is applied before the snapshot is taken.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (
            status = 200,
            description = "Form state",
            body = inline(SuccessResponse<ProfileFormResponse>),
            example = json!({
                "success": true,
                "data": {
                    "status": "Saved",
                    "values": {
                        "name": "Anna",
                        "surname": "Ivanova",
                        "jobTitle": "",
                        "phone": "+15551234567",
                        "email": "a@b.com",
                        "address": "",
                        "pitch": "",
                        "visibility": "Private"
                    },
                    "avatar": { "fileName": null, "preview": null, "pending": false },
                    "errors": {}
                }
            })
        ),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_form_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.profile_form.get_form.execute().await;
    debug!(status = ?view.status, "Profile form requested");
    ApiResponse::success(ProfileFormResponse::from(view))
}
