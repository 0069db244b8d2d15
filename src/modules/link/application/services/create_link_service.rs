use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::link::application::ports::{
    incoming::use_cases::{CreateLinkCommand, CreateLinkError, CreateLinkUseCase},
    outgoing::{CreateLinkData, LinkRepository, LinkRepositoryError, LinkResult},
};

#[derive(Clone)]
pub struct CreateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    repository: R,
    user_query: Arc<dyn UserQuery>,
}

impl<R> CreateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    pub fn new(repository: R, user_query: Arc<dyn UserQuery>) -> Self {
        Self {
            repository,
            user_query,
        }
    }
}

#[async_trait]
impl<R> CreateLinkUseCase for CreateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    async fn execute(&self, command: CreateLinkCommand) -> Result<LinkResult, CreateLinkError> {
        let owner = self
            .user_query
            .find_by_id(command.owner())
            .await
            .map_err(|e| CreateLinkError::QueryError(e.to_string()))?;

        if owner.is_none() {
            warn!(user_id = %command.owner(), "Link owner not found");
            return Err(CreateLinkError::UserNotFound);
        }

        let data = CreateLinkData {
            owner: command.owner(),
            url: command.url().to_string(),
            title: command.title().to_string(),
            description: command.description().cloned(),
            tags: command.tags().cloned(),
        };

        self.repository
            .create_link(data)
            .await
            .map_err(|e| match e {
                // Owner deleted between the lookup and the insert.
                LinkRepositoryError::OwnerNotFound => CreateLinkError::UserNotFound,
                other => CreateLinkError::RepositoryError(other.to_string()),
            })
    }
}
