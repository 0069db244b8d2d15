pub mod clock;
pub mod code_generator;
pub mod user_query;
pub mod user_repository;

pub use clock::Clock;
pub use code_generator::VerificationCodeGenerator;
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError, UserResult};
