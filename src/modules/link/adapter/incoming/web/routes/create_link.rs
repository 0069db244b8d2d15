use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::application::domain::entities::UserId,
    link::application::ports::{
        incoming::use_cases::{CreateLinkCommand, CreateLinkCommandError, CreateLinkError},
        outgoing::LinkResult,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[schema(example = "https://doc.rust-lang.org/book/")]
    pub url: String,

    /// Defaults to the url when blank
    #[schema(example = "The Rust Book")]
    pub title: Option<String>,

    pub description: Option<String>,

    /// Free-form tags
    #[schema(example = "rust, books")]
    pub tags: Option<String>,

    /// Owner account id
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<LinkResult> for LinkResponse {
    fn from(link: LinkResult) -> Self {
        Self {
            id: link.id,
            url: link.url,
            title: link.title,
            description: link.description,
            tags: link.tags,
            user_id: link.owner.value(),
            created_at: link.created_at,
        }
    }
}

/// Save a link
///
/// Stores a bookmark for an existing account.
#[utoipa::path(
    post,
    path = "/api/links",
    tag = "links",
    request_body = CreateLinkRequest,
    responses(
        (status = 201, description = "Link stored", body = inline(SuccessResponse<LinkResponse>)),
        (status = 400, description = "Missing url or userId", body = ErrorResponse),
        (status = 404, description = "Owner account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/links")]
pub async fn create_link_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateLinkRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateLinkCommand::new(
        payload.user_id.map(UserId::from),
        payload.url,
        payload.title,
        payload.description,
        payload.tags,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_link_use_case.execute(command).await {
        Ok(link) => {
            info!(link_id = %link.id, user_id = %link.owner, "Link created");
            ApiResponse::created(LinkResponse::from(link))
        }
        Err(err) => map_create_link_error(err),
    }
}

fn map_command_error(err: CreateLinkCommandError) -> HttpResponse {
    warn!(error = %err, "Invalid link input");
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}

fn map_create_link_error(err: CreateLinkError) -> HttpResponse {
    match err {
        CreateLinkError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        other => {
            error!(error = %other, "Failed to create link");
            ApiResponse::internal_error()
        }
    }
}
