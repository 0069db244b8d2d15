use actix_web::{http::StatusCode, HttpResponse};

use crate::auth::application::domain::errors::AccountErrorKind;
use crate::shared::api::ApiResponse;

pub fn status_for(kind: AccountErrorKind) -> StatusCode {
    match kind {
        AccountErrorKind::Validation
        | AccountErrorKind::InvalidState
        | AccountErrorKind::Expired
        | AccountErrorKind::InvalidCode => StatusCode::BAD_REQUEST,
        AccountErrorKind::Conflict => StatusCode::CONFLICT,
        AccountErrorKind::NotFound => StatusCode::NOT_FOUND,
        AccountErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders an account workflow failure. Internal failures never expose
/// their cause to the client.
pub fn account_error_response(kind: AccountErrorKind, code: &str, message: &str) -> HttpResponse {
    match kind {
        AccountErrorKind::Internal => ApiResponse::internal_error(),
        other => ApiResponse::error(status_for(other), code, message),
    }
}
