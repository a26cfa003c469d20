use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::adapter::incoming::web::routes::ProfileFormResponse;
use crate::profile::application::domain::entities::ProfileField;
use crate::profile::application::ports::incoming::use_cases::UpdateProfileFieldError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateProfileFieldRequest {
    /// New working value. Not validated until submit.
    #[schema(example = "+15551234567")]
    pub value: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Set one text field
///
/// `field` is one of `name`, `surname`, `jobTitle`, `phone`, `email`, `address`,
/// `pitch`, `visibility`. The avatar is set through `PUT /api/profile/avatar`.
#[utoipa::path(
    patch,
    path = "/api/profile/fields/{field}",
    tag = "profile",
    params(("field" = String, Path, description = "Field name", example = "phone")),
    request_body = UpdateProfileFieldRequest,
    responses(
        (status = 200, description = "Value stored", body = inline(SuccessResponse<ProfileFormResponse>)),
        (
            status = 400,
            description = "Unknown or non-text field",
            body = ErrorResponse,
            examples(
                ("Unknown field" = (value = json!({
                    "success": false,
                    "error": { "code": "UNKNOWN_FIELD", "message": "Unknown profile field: age" }
                }))),
                ("Avatar" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "FIELD_NOT_EDITABLE",
                        "message": "Field `avatar` cannot be edited as text, select a file instead"
                    }
                })))
            )
        ),
    )
)]
#[patch("/api/profile/fields/{field}")]
pub async fn update_profile_field_handler(
    path: web::Path<String>,
    req: web::Json<UpdateProfileFieldRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_field = path.into_inner();

    let field = match raw_field.parse::<ProfileField>() {
        Ok(field) => field,
        Err(e) => {
            warn!(field = %raw_field, "Update for unknown profile field");
            return ApiResponse::bad_request("UNKNOWN_FIELD", &e.to_string());
        }
    };

    match data
        .profile_form
        .update_field
        .execute(field, req.into_inner().value)
        .await
    {
        Ok(view) => {
            debug!(field = %field, "Profile field updated");
            ApiResponse::success(ProfileFormResponse::from(view))
        }

        Err(e @ UpdateProfileFieldError::NotEditable(_)) => {
            warn!(field = %field, "Rejected text update for non-text field");
            ApiResponse::bad_request("FIELD_NOT_EDITABLE", &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::profile::application::domain::form_state::{FormStatus, FormView};
    use crate::profile::application::ports::incoming::use_cases::UpdateProfileFieldUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::profile_test_fixtures::editing_view;

    /* --------------------------------------------------
     * Recording UpdateProfileFieldUseCase
     * -------------------------------------------------- */

    #[derive(Clone, Default)]
    struct RecordingUpdateFieldUseCase {
        calls: Arc<Mutex<Vec<(ProfileField, String)>>>,
    }

    #[async_trait]
    impl UpdateProfileFieldUseCase for RecordingUpdateFieldUseCase {
        async fn execute(
            &self,
            field: ProfileField,
            value: String,
        ) -> Result<FormView, UpdateProfileFieldError> {
            if field == ProfileField::Avatar {
                return Err(UpdateProfileFieldError::NotEditable(field));
            }
            self.calls.lock().unwrap().push((field, value.clone()));

            let mut view = editing_view();
            if let Some(slot) = view.draft.text_mut(field) {
                *slot = value;
            }
            Ok(view)
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_update_field_success() {
        let use_case = RecordingUpdateFieldUseCase::default();
        let app_state = TestAppStateBuilder::default()
            .with_update_profile_field(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_profile_field_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/profile/fields/jobTitle")
            .set_json(json!({ "value": "Engineer" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "Editing");
        assert_eq!(body["data"]["values"]["jobTitle"], "Engineer");

        let calls = use_case.calls.lock().unwrap().clone();
        assert_eq!(calls, vec![(ProfileField::JobTitle, "Engineer".to_string())]);
    }

    #[actix_web::test]
    async fn test_update_field_unknown_field() {
        let use_case = RecordingUpdateFieldUseCase::default();
        let app_state = TestAppStateBuilder::default()
            .with_update_profile_field(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_profile_field_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/profile/fields/age")
            .set_json(json!({ "value": "42" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UNKNOWN_FIELD");
        assert!(use_case.calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_field_avatar_not_editable() {
        let app_state = TestAppStateBuilder::default()
            .with_update_profile_field(RecordingUpdateFieldUseCase::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_profile_field_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/profile/fields/avatar")
            .set_json(json!({ "value": "data:image/png;base64,AA==" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FIELD_NOT_EDITABLE");
    }

    #[actix_web::test]
    async fn test_update_field_missing_value_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(update_profile_field_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/profile/fields/name")
            .set_json(json!({ "text": "Anna" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_REQUEST_BODY");
    }

    #[actix_web::test]
    async fn test_update_field_keeps_invalid_status_from_use_case() {
        #[derive(Clone)]
        struct StillInvalid;

        #[async_trait]
        impl UpdateProfileFieldUseCase for StillInvalid {
            async fn execute(
                &self,
                _field: ProfileField,
                _value: String,
            ) -> Result<FormView, UpdateProfileFieldError> {
                let mut view = editing_view();
                view.status = FormStatus::Invalid;
                view.errors
                    .insert(ProfileField::Phone, "Phone must be at least 10 characters long");
                Ok(view)
            }
        }

        let app_state = TestAppStateBuilder::default()
            .with_update_profile_field(StillInvalid)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_profile_field_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/profile/fields/name")
            .set_json(json!({ "value": "Anna" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "Invalid");
        assert_eq!(
            body["data"]["errors"]["phone"],
            "Phone must be at least 10 characters long"
        );
    }
}
