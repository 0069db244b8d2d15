use async_trait::async_trait;

use crate::link::application::ports::{
    incoming::use_cases::{GetLinksError, GetLinksUseCase},
    outgoing::{LinkQuery, LinkQueryResult},
};

#[derive(Debug, Clone)]
pub struct GetLinksService<Q>
where
    Q: LinkQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetLinksService<Q>
where
    Q: LinkQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetLinksUseCase for GetLinksService<Q>
where
    Q: LinkQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<LinkQueryResult>, GetLinksError> {
        self.query
            .get_links()
            .await
            .map_err(|e| GetLinksError::QueryFailed(e.to_string()))
    }
}
