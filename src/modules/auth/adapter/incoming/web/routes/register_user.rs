use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserInput, RegistrationKind,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::account_error::account_error_response;

/// Request body for user registration
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterUserRequest {
    /// Unique account name
    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "pw1")]
    pub password: String,

    /// Unique email address, compared exactly
    #[schema(example = "a@x.io")]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    #[schema(example = "User created successfully. Verification code sent.")]
    pub message: String,

    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: String,

    #[schema(example = false)]
    pub is_verified: bool,
}

fn map_register_user_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::QueryError(_) | RegisterUserError::RepositoryError(_) => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "Registration failed"
            );
        }
        _ => {
            warn!(
                username = %req.username,
                email = %req.email,
                code = err.code(),
                "Registration rejected"
            );
        }
    }

    account_error_response(err.kind(), err.code(), &err.to_string())
}

/// Register a new user
///
/// Creates an unverified account and emails a 6-digit verification code.
/// Re-submitting the same username and email for an unverified account
/// issues a fresh code instead.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "Account created, verification code sent",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "User created successfully. Verification code sent.",
                    "userId": "123e4567-e89b-12d3-a456-426614174000",
                    "isVerified": false
                }
            })
        ),
        (
            status = 200,
            description = "Account exists but is unverified, new code sent",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Account exists but not verified. Sent new verification code.",
                    "userId": "123e4567-e89b-12d3-a456-426614174000",
                    "isVerified": false
                }
            })
        ),
        (
            status = 400,
            description = "Missing fields",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Missing fields" }
            })
        ),
        (
            status = 409,
            description = "Username or email belongs to another account",
            body = ErrorResponse,
            examples(
                ("Email in use" = (value = json!({
                    "success": false,
                    "error": { "code": "EMAIL_IN_USE", "message": "Email already in use" }
                }))),
                ("Username in use" = (value = json!({
                    "success": false,
                    "error": { "code": "USERNAME_IN_USE", "message": "Username already in use" }
                }))),
                ("Mixed collision" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "USERNAME_OR_EMAIL_IN_USE",
                        "message": "Username or email already in use"
                    }
                })))
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let orchestrator = &data.register_user_orchestrator;

    info!(
        username = %req.username,
        email = %req.email,
        "User registration attempt"
    );

    let input = RegisterUserInput {
        username: req.username.clone(),
        password: req.password.clone(),
        email: req.email.clone(),
    };

    match orchestrator.register_user(input).await {
        Ok(user) => {
            info!(
                user_id = %user.user_id,
                username = %user.username,
                email = %user.email,
                kind = ?user.kind,
                "Verification code issued"
            );

            let body = RegisterUserResponse {
                message: user.message,
                user_id: user.user_id.to_string(),
                is_verified: user.is_verified,
            };

            match user.kind {
                RegistrationKind::Created => ApiResponse::created(body),
                RegistrationKind::Resent => ApiResponse::success(body),
            }
        }
        Err(e) => map_register_user_error(e, &req),
    }
}
