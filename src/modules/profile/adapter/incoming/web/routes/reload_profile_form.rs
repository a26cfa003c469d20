use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::SuccessResponse;
use crate::profile::adapter::incoming::web::routes::ProfileFormResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Reload the form from storage
///
/// Discards unsaved edits. An unreadable stored profile gives an empty form.
#[utoipa::path(
    post,
    path = "/api/profile/reload",
    tag = "profile",
    responses(
        (status = 200, description = "Form reloaded", body = inline(SuccessResponse<ProfileFormResponse>)),
    )
)]
#[post("/api/profile/reload")]
pub async fn reload_profile_form_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.profile_form.initialize.execute().await;
    info!(status = ?view.status, "Profile form reloaded");
    ApiResponse::success(ProfileFormResponse::from(view))
}
