use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::verify_user_email::{
    VerifyEmailInput, VerifyUserEmailError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::account_error::account_error_response;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct VerifyEmailRequest {
    #[schema(example = "a@x.io")]
    pub email: String,

    /// The 6-digit code from the verification email
    #[schema(example = "004217")]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyEmailResponse {
    #[schema(example = "Email verified successfully")]
    pub message: String,
}

fn map_verify_email_error(err: VerifyUserEmailError, email: &str) -> HttpResponse {
    match &err {
        VerifyUserEmailError::QueryError(_) | VerifyUserEmailError::RepositoryError(_) => {
            error!(email = %email, error = %err, "Email verification failed");
        }
        _ => {
            warn!(email = %email, code = err.code(), "Email verification rejected");
        }
    }

    account_error_response(err.kind(), err.code(), &err.to_string())
}

/// Verify an email address
///
/// Confirms account ownership with the code sent at registration.
/// Verifying an already verified account succeeds without changes.
#[utoipa::path(
    post,
    path = "/api/auth/verify-email",
    tag = "auth",
    request_body = VerifyEmailRequest,
    responses(
        (
            status = 200,
            description = "Email verified (or already verified)",
            body = inline(SuccessResponse<VerifyEmailResponse>),
            example = json!({
                "success": true,
                "data": { "message": "Email verified successfully" }
            })
        ),
        (
            status = 400,
            description = "Missing input, no outstanding code, expired or wrong code",
            body = ErrorResponse,
            examples(
                ("Missing fields" = (value = json!({
                    "success": false,
                    "error": { "code": "VALIDATION_ERROR", "message": "Email and code are required" }
                }))),
                ("No code" = (value = json!({
                    "success": false,
                    "error": { "code": "NO_CODE_SET", "message": "No verification code set for this user" }
                }))),
                ("Expired" = (value = json!({
                    "success": false,
                    "error": { "code": "CODE_EXPIRED", "message": "Verification code has expired" }
                }))),
                ("Wrong code" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_CODE", "message": "Invalid verification code" }
                })))
            )
        ),
        (
            status = 404,
            description = "No account with this email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "USER_NOT_FOUND", "message": "User not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/verify-email")]
pub async fn verify_user_email_handler(
    req: web::Json<VerifyEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.verify_user_email_use_case;

    let input = VerifyEmailInput {
        email: req.email.clone(),
        code: req.code.clone(),
    };

    match use_case.execute(input).await {
        Ok(outcome) => {
            info!(email = %req.email, outcome = ?outcome, "Email verification");
            ApiResponse::success(VerifyEmailResponse {
                message: outcome.message().to_string(),
            })
        }
        Err(e) => map_verify_email_error(e, &req.email),
    }
}
