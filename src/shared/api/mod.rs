pub mod json_config;
pub mod response;

pub use json_config::{avatar_payload_config, custom_json_config, MAX_UPLOAD_BYTES};
pub use response::{ApiError, ApiResponse};
