use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::errors::AccountErrorKind;
use crate::auth::application::ports::outgoing::{
    Clock, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct VerifyEmailInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyEmailOutcome {
    Verified,
    /// The account was verified earlier; nothing changed.
    AlreadyVerified,
}

impl VerifyEmailOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            VerifyEmailOutcome::Verified => "Email verified successfully",
            VerifyEmailOutcome::AlreadyVerified => "Email already verified",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyUserEmailError {
    #[error("Email and code are required")]
    MissingFields,

    #[error("User not found")]
    UserNotFound,

    #[error("No verification code set for this user")]
    NoCodeSet,

    #[error("Verification code has expired")]
    CodeExpired,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

impl VerifyUserEmailError {
    pub fn kind(&self) -> AccountErrorKind {
        match self {
            VerifyUserEmailError::MissingFields => AccountErrorKind::Validation,
            VerifyUserEmailError::UserNotFound => AccountErrorKind::NotFound,
            VerifyUserEmailError::NoCodeSet => AccountErrorKind::InvalidState,
            VerifyUserEmailError::CodeExpired => AccountErrorKind::Expired,
            VerifyUserEmailError::InvalidCode => AccountErrorKind::InvalidCode,
            VerifyUserEmailError::QueryError(_) | VerifyUserEmailError::RepositoryError(_) => {
                AccountErrorKind::Internal
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            VerifyUserEmailError::MissingFields => "VALIDATION_ERROR",
            VerifyUserEmailError::UserNotFound => "USER_NOT_FOUND",
            VerifyUserEmailError::NoCodeSet => "NO_CODE_SET",
            VerifyUserEmailError::CodeExpired => "CODE_EXPIRED",
            VerifyUserEmailError::InvalidCode => "INVALID_CODE",
            VerifyUserEmailError::QueryError(_) | VerifyUserEmailError::RepositoryError(_) => {
                "INTERNAL_ERROR"
            }
        }
    }
}

#[async_trait]
pub trait IVerifyUserEmailUseCase: Send + Sync {
    async fn execute(&self, input: VerifyEmailInput)
        -> Result<VerifyEmailOutcome, VerifyUserEmailError>;
}

#[derive(Clone)]
pub struct VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<Q, R> VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            query,
            repository,
            clock,
        }
    }
}

#[async_trait]
impl<Q, R> IVerifyUserEmailUseCase for VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: VerifyEmailInput,
    ) -> Result<VerifyEmailOutcome, VerifyUserEmailError> {
        let email = input.email.trim();
        let code = input.code.trim();

        if email.is_empty() || code.is_empty() {
            return Err(VerifyUserEmailError::MissingFields);
        }

        let user = self
            .query
            .find_by_email(email)
            .await?
            .ok_or(VerifyUserEmailError::UserNotFound)?;

        // Verified is terminal; retries succeed without touching the row.
        if user.is_verified {
            return Ok(VerifyEmailOutcome::AlreadyVerified);
        }

        let pending = user
            .pending_code
            .as_ref()
            .ok_or(VerifyUserEmailError::NoCodeSet)?;

        if pending.is_expired_at(self.clock.now()) {
            return Err(VerifyUserEmailError::CodeExpired);
        }

        if !pending.code.matches(code) {
            return Err(VerifyUserEmailError::InvalidCode);
        }

        self.repository
            .activate_user(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyUserEmailError::UserNotFound,
                other => VerifyUserEmailError::RepositoryError(other),
            })?;

        Ok(VerifyEmailOutcome::Verified)
    }
}
