use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    AppState,
};

/// List link titles
///
/// Returns the titles of all stored links, newest first.
#[utoipa::path(
    get,
    path = "/api/links",
    tag = "links",
    responses(
        (
            status = 200,
            description = "Link titles, newest first",
            body = inline(SuccessResponse<Vec<String>>),
            example = json!({
                "success": true,
                "data": ["The Rust Book", "https://tokio.rs"]
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/links")]
pub async fn get_links_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_links_use_case.execute().await {
        Ok(links) => {
            let titles: Vec<String> = links.into_iter().map(|link| link.title).collect();
            ApiResponse::success(titles)
        }
        Err(err) => {
            error!(error = %err, "Failed to fetch links");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::link::application::ports::incoming::use_cases::{GetLinksError, GetLinksUseCase};
    use crate::link::application::ports::outgoing::LinkQueryResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct FixedLinks(Result<Vec<LinkQueryResult>, GetLinksError>);

    #[async_trait]
    impl GetLinksUseCase for FixedLinks {
        async fn execute(&self) -> Result<Vec<LinkQueryResult>, GetLinksError> {
            self.0.clone()
        }
    }

    fn link(title: &str) -> LinkQueryResult {
        LinkQueryResult {
            id: Uuid::new_v4(),
            owner: UserId::new(),
            url: "https://x.io".to_string(),
            title: title.to_string(),
            description: None,
            tags: None,
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn get_links_returns_titles_in_order() {
        let app_state = TestAppStateBuilder::default()
            .with_get_links(FixedLinks(Ok(vec![link("newer"), link("older")])))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_links_handler)).await;

        let req = test::TestRequest::get().uri("/api/links").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], serde_json::json!(["newer", "older"]));
    }

    #[actix_web::test]
    async fn get_links_failure_is_internal() {
        let app_state = TestAppStateBuilder::default()
            .with_get_links(FixedLinks(Err(GetLinksError::QueryFailed(
                "timeout".to_string(),
            ))))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_links_handler)).await;

        let req = test::TestRequest::get().uri("/api/links").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
