use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, link::application::ports::outgoing::LinkResult,
};

#[derive(Debug, Clone)]
pub struct CreateLinkCommand {
    owner: UserId,
    url: String,
    title: String,
    description: Option<String>,
    tags: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateLinkCommandError {
    #[error("Missing 'url'")]
    MissingUrl,

    #[error("Missing 'userId'")]
    MissingUserId,
}

/// Trims the value and drops it when nothing is left.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateLinkCommand {
    pub fn new(
        owner: Option<UserId>,
        url: String,
        title: Option<String>,
        description: Option<String>,
        tags: Option<String>,
    ) -> Result<Self, CreateLinkCommandError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(CreateLinkCommandError::MissingUrl);
        }

        let owner = owner.ok_or(CreateLinkCommandError::MissingUserId)?;
        let title = non_blank(title).unwrap_or_else(|| url.to_string());

        Ok(Self {
            owner,
            url: url.to_string(),
            title,
            description: non_blank(description),
            tags: non_blank(tags),
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    pub fn tags(&self) -> Option<&String> {
        self.tags.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateLinkError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateLinkUseCase: Send + Sync {
    async fn execute(&self, command: CreateLinkCommand) -> Result<LinkResult, CreateLinkError>;
}
