pub mod sea_orm_entity;
pub mod security;
pub mod system_clock;
pub mod user_query_postgres;
pub mod user_repository_postgres;
#[cfg(test)]
pub mod user_store_memory;

pub use security::RandomCodeGenerator;
pub use system_clock::SystemClock;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
#[cfg(test)]
pub use user_store_memory::InMemoryUserStore;
