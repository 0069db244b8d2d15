use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::{PendingCode, UserId};
use crate::auth::application::domain::errors::AccountErrorKind;
use crate::auth::application::ports::outgoing::{
    Clock, CreateUserData, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError, VerificationCodeGenerator,
};

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl RegisterUserInput {
    /// Trims every field and rejects the input if any of them ends up empty.
    fn normalized(self) -> Result<Self, RegisterUserError> {
        let username = self.username.trim();
        let password = self.password.trim();
        let email = self.email.trim();

        if username.is_empty() || password.is_empty() || email.is_empty() {
            return Err(RegisterUserError::MissingFields);
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    /// A new unverified account was created.
    Created,
    /// An existing unverified account received a fresh code.
    Resent,
}

#[derive(Debug, Clone)]
pub struct RegisterUserOutput {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub kind: RegistrationKind,
    pub pending_code: PendingCode,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Email already in use")]
    EmailInUse,

    #[error("Username already in use")]
    UsernameInUse,

    #[error("Username or email already in use")]
    UsernameOrEmailInUse,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

impl RegisterUserError {
    pub fn kind(&self) -> AccountErrorKind {
        match self {
            RegisterUserError::MissingFields => AccountErrorKind::Validation,
            RegisterUserError::EmailInUse
            | RegisterUserError::UsernameInUse
            | RegisterUserError::UsernameOrEmailInUse => AccountErrorKind::Conflict,
            RegisterUserError::QueryError(_) | RegisterUserError::RepositoryError(_) => {
                AccountErrorKind::Internal
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RegisterUserError::MissingFields => "VALIDATION_ERROR",
            RegisterUserError::EmailInUse => "EMAIL_IN_USE",
            RegisterUserError::UsernameInUse => "USERNAME_IN_USE",
            RegisterUserError::UsernameOrEmailInUse => "USERNAME_OR_EMAIL_IN_USE",
            RegisterUserError::QueryError(_) | RegisterUserError::RepositoryError(_) => {
                "INTERNAL_ERROR"
            }
        }
    }
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput)
        -> Result<RegisterUserOutput, RegisterUserError>;
}

/// Decides between creating an account, re-issuing a code to an
/// unverified one, or rejecting the registration.
///
/// Returns the account to resend to, `None` when a new account should be
/// created, or the collision error. Checks run in a fixed order: verified
/// email, verified username, then ownership of the unverified matches.
fn resolve_registration<'a>(
    by_email: Option<&'a UserQueryResult>,
    by_username: Option<&'a UserQueryResult>,
) -> Result<Option<&'a UserQueryResult>, RegisterUserError> {
    if by_email.is_some_and(|user| user.is_verified) {
        return Err(RegisterUserError::EmailInUse);
    }

    if by_username.is_some_and(|user| user.is_verified) {
        return Err(RegisterUserError::UsernameInUse);
    }

    match (by_email, by_username) {
        (Some(email_owner), Some(username_owner)) if email_owner.id == username_owner.id => {
            Ok(Some(email_owner))
        }
        (None, None) => Ok(None),
        _ => Err(RegisterUserError::UsernameOrEmailInUse),
    }
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    code_generator: Arc<dyn VerificationCodeGenerator>,
    clock: Arc<dyn Clock>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        code_generator: Arc<dyn VerificationCodeGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            query,
            repository,
            code_generator,
            clock,
        }
    }

    fn issue_code(&self) -> PendingCode {
        PendingCode::issue(self.code_generator.generate(), self.clock.now())
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let input = input.normalized()?;

        let by_email = self.query.find_by_email(&input.email).await?;
        let by_username = self.query.find_by_username(&input.username).await?;

        match resolve_registration(by_email.as_ref(), by_username.as_ref())? {
            Some(existing) => {
                let pending_code = self.issue_code();

                self.repository
                    .reissue_verification(existing.id, input.password, pending_code.clone())
                    .await
                    .map_err(|e| match e {
                        // Verified between our lookup and the write.
                        UserRepositoryError::UserAlreadyVerified => RegisterUserError::EmailInUse,
                        other => RegisterUserError::RepositoryError(other),
                    })?;

                Ok(RegisterUserOutput {
                    user_id: existing.id,
                    username: existing.username.clone(),
                    email: existing.email.clone(),
                    is_verified: false,
                    kind: RegistrationKind::Resent,
                    pending_code,
                })
            }
            None => {
                let pending_code = self.issue_code();

                let created = self
                    .repository
                    .create_user(CreateUserData {
                        username: input.username,
                        email: input.email,
                        password: input.password,
                        pending_code: pending_code.clone(),
                    })
                    .await
                    .map_err(|e| match e {
                        // Lost a race against a concurrent registration.
                        UserRepositoryError::UserAlreadyExists => {
                            RegisterUserError::UsernameOrEmailInUse
                        }
                        other => RegisterUserError::RepositoryError(other),
                    })?;

                Ok(RegisterUserOutput {
                    user_id: created.id,
                    username: created.username,
                    email: created.email,
                    is_verified: created.is_verified,
                    kind: RegistrationKind::Created,
                    pending_code,
                })
            }
        }
    }
}
