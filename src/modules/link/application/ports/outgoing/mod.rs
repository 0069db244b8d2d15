mod link_query;
mod link_repository;

pub use link_query::{LinkQuery, LinkQueryError, LinkQueryResult};
pub use link_repository::{CreateLinkData, LinkRepository, LinkRepositoryError, LinkResult};
