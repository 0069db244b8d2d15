pub mod link_query_postgres;
pub mod link_repository_postgres;
pub mod sea_orm_entity;

pub use link_query_postgres::LinkQueryPostgres;
pub use link_repository_postgres::LinkRepositoryPostgres;
