use actix_web::{http::header, put, web, HttpRequest, Responder};
use tracing::{info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::adapter::incoming::web::routes::ProfileFormResponse;
use crate::profile::application::domain::entities::AvatarFile;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const FILE_NAME_HEADER: &str = "X-File-Name";
const DEFAULT_FILE_NAME: &str = "avatar";

/// Media type without parameters, e.g. `image/png; charset=binary` -> `image/png`.
fn declared_media_type(req: &HttpRequest) -> String {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

fn declared_file_name(req: &HttpRequest) -> String {
    req.headers()
        .get(FILE_NAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string()
}

/// Select an avatar image
///
/// The raw file is the request body; `Content-Type` is its declared media type.
/// Type and size are checked on submit. The preview is produced in the
/// background and shows up in later reads of the form.
#[utoipa::path(
    put,
    path = "/api/profile/avatar",
    tag = "profile",
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "image/png"),
    params(("X-File-Name" = Option<String>, Header, description = "Original file name")),
    responses(
        (status = 200, description = "File recorded, preview pending", body = inline(SuccessResponse<ProfileFormResponse>)),
        (
            status = 400,
            description = "Empty body",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMPTY_AVATAR", "message": "Avatar file is empty" }
            })
        ),
    )
)]
#[put("/api/profile/avatar")]
pub async fn select_avatar_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if body.is_empty() {
        warn!("Avatar upload with empty body");
        return ApiResponse::bad_request("EMPTY_AVATAR", "Avatar file is empty");
    }

    let file = AvatarFile::new(declared_file_name(&req), declared_media_type(&req), body.to_vec());

    info!(
        file_name = %file.file_name(),
        media_type = %file.media_type(),
        size_bytes = file.size_bytes(),
        "Avatar selected"
    );

    let view = data.profile_form.select_avatar.execute(file).await;
    ApiResponse::success(ProfileFormResponse::from(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    use crate::profile::application::domain::form_state::FormView;
    use crate::profile::application::ports::incoming::use_cases::SelectAvatarUseCase;
    use crate::shared::api::avatar_payload_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::profile_test_fixtures::editing_view;

    #[derive(Clone, Default)]
    struct RecordingSelectAvatarUseCase {
        files: Arc<Mutex<Vec<AvatarFile>>>,
    }

    #[async_trait]
    impl SelectAvatarUseCase for RecordingSelectAvatarUseCase {
        async fn execute(&self, file: AvatarFile) -> FormView {
            self.files.lock().unwrap().push(file.clone());
            let mut view = editing_view();
            view.draft.avatar_file = Some(file);
            view.preview_pending = true;
            view
        }
    }

    #[actix_web::test]
    async fn test_select_avatar_passes_declared_metadata() {
        let use_case = RecordingSelectAvatarUseCase::default();
        let app_state = TestAppStateBuilder::default()
            .with_select_avatar(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(select_avatar_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile/avatar")
            .insert_header((header::CONTENT_TYPE, "image/PNG; charset=binary"))
            .insert_header((FILE_NAME_HEADER, "me.png"))
            .set_payload(vec![0x89, 0x50, 0x4e, 0x47])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["avatar"]["fileName"], "me.png");
        assert_eq!(body["data"]["avatar"]["pending"], true);

        let files = use_case.files.lock().unwrap().clone();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].media_type(), "image/png");
        assert_eq!(files[0].bytes(), &[0x89, 0x50, 0x4e, 0x47]);
    }

    #[actix_web::test]
    async fn test_select_avatar_defaults_file_name() {
        let use_case = RecordingSelectAvatarUseCase::default();
        let app_state = TestAppStateBuilder::default()
            .with_select_avatar(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(select_avatar_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile/avatar")
            .insert_header((header::CONTENT_TYPE, "image/gif"))
            .set_payload(vec![1, 2, 3])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let files = use_case.files.lock().unwrap().clone();
        assert_eq!(files[0].file_name(), "avatar");
        // Disallowed types are still recorded; submit reports them.
        assert_eq!(files[0].media_type(), "image/gif");
    }

    #[actix_web::test]
    async fn test_select_avatar_empty_body_rejected() {
        let use_case = RecordingSelectAvatarUseCase::default();
        let app_state = TestAppStateBuilder::default()
            .with_select_avatar(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(select_avatar_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile/avatar")
            .insert_header((header::CONTENT_TYPE, "image/png"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_AVATAR");
        assert!(use_case.files.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_select_avatar_accepts_file_over_policy_limit() {
        let use_case = RecordingSelectAvatarUseCase::default();
        let app_state = TestAppStateBuilder::default()
            .with_select_avatar(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(avatar_payload_config())
                .service(select_avatar_handler),
        )
        .await;

        let six_mb = vec![0u8; 6 * 1024 * 1024];
        let req = test::TestRequest::put()
            .uri("/api/profile/avatar")
            .insert_header((header::CONTENT_TYPE, "image/png"))
            .set_payload(six_mb)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let files = use_case.files.lock().unwrap().clone();
        assert_eq!(files[0].size_bytes(), 6 * 1024 * 1024);
    }
}
