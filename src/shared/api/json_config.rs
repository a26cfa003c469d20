// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

/// Upper bound for a raw avatar body. Must stay above the avatar policy limit so
/// oversized images still reach validation.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_REQUEST_BODY", &message),
        )
        .into()
    })
}

pub fn avatar_payload_config() -> PayloadConfig {
    PayloadConfig::new(MAX_UPLOAD_BYTES)
}
