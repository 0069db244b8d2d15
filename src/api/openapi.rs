use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    RegisterUserRequest, RegisterUserResponse, VerifyEmailRequest, VerifyEmailResponse,
};
use crate::link::adapter::incoming::web::routes::{CreateLinkRequest, LinkResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Linkis API",
        version = "1.0.0",
        description = "Account registration with email verification, and link bookmarking"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_user_email_handler,
        crate::link::adapter::incoming::web::routes::get_links_handler,
        crate::link::adapter::incoming::web::routes::create_link_handler,
    ),
    components(
        schemas(
            SuccessResponse<RegisterUserResponse>,
            SuccessResponse<VerifyEmailResponse>,
            SuccessResponse<LinkResponse>,
            ErrorResponse,
            ErrorDetail,

            RegisterUserRequest,
            RegisterUserResponse,
            VerifyEmailRequest,
            VerifyEmailResponse,
            CreateLinkRequest,
            LinkResponse
        )
    ),
    tags(
        (name = "auth", description = "Registration and email verification"),
        (name = "links", description = "Bookmarked links"),
    )
)]
pub struct ApiDoc;
