use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Reports unreadable JSON bodies through the standard error envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
