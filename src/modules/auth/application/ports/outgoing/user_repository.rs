use async_trait::async_trait;

use crate::auth::application::domain::entities::{PendingCode, UserId};

/// Fields of a freshly registered, unverified account.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub pending_code: PendingCode,
}

#[derive(Debug, Clone)]
pub struct UserResult {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    /// A unique constraint on username or email rejected the write.
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    /// The account was verified before the write landed.
    #[error("User already verified")]
    UserAlreadyVerified,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the user store.
///
/// Every method is a single atomic write. Uniqueness of `username` and
/// `email` is enforced by the store itself, never by a prior lookup.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    /// Replaces the password and pending code of an unverified account.
    async fn reissue_verification(
        &self,
        user_id: UserId,
        password: String,
        pending_code: PendingCode,
    ) -> Result<(), UserRepositoryError>;

    /// Marks the account verified and clears its pending code.
    async fn activate_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
