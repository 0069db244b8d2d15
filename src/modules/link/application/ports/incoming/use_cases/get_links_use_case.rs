use async_trait::async_trait;

use crate::link::application::ports::outgoing::LinkQueryResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetLinksError {
    #[error("Failed to fetch links: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetLinksUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<LinkQueryResult>, GetLinksError>;
}
