use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
    RegistrationKind,
};
use crate::email::application::ports::outgoing::{UserEmailNotifier, VerificationEmail};

pub const CREATED_MESSAGE: &str = "User created successfully. Verification code sent.";
pub const RESENT_MESSAGE: &str = "Account exists but not verified. Sent new verification code.";

#[derive(Debug, Clone)]
pub struct UserRegistrationOutput {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub kind: RegistrationKind,
    pub message: String,
}

impl From<&RegisterUserOutput> for UserRegistrationOutput {
    fn from(output: &RegisterUserOutput) -> Self {
        let message = match output.kind {
            RegistrationKind::Created => CREATED_MESSAGE,
            RegistrationKind::Resent => RESENT_MESSAGE,
        };

        Self {
            user_id: output.user_id,
            username: output.username.clone(),
            email: output.email.clone(),
            is_verified: output.is_verified,
            kind: output.kind,
            message: message.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    send_timeout: Duration,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
        send_timeout: Duration,
    ) -> Self {
        Self {
            register_user_use_case,
            email_notifier,
            send_timeout,
        }
    }

    /// Runs the registration workflow, then hands the fresh code to the
    /// notifier in a detached task. Delivery is attempted once; its outcome
    /// never changes the returned result.
    pub async fn register_user(
        &self,
        input: RegisterUserInput,
    ) -> Result<UserRegistrationOutput, RegisterUserError> {
        let registered = self.register_user_use_case.execute(input).await?;
        let output = UserRegistrationOutput::from(&registered);

        let notifier = self.email_notifier.clone();
        let send_timeout = self.send_timeout;
        let email = VerificationEmail {
            user_id: registered.user_id,
            to: registered.email,
            username: registered.username,
            code: registered.pending_code.code,
            expires_at: registered.pending_code.expires_at,
        };

        tokio::spawn(async move {
            let user_id = email.user_id;

            match tokio::time::timeout(send_timeout, notifier.send_verification_code(email)).await
            {
                Ok(Ok(())) => {
                    tracing::info!(user_id = %user_id, "Verification email sent");
                }
                Ok(Err(e)) => {
                    tracing::error!(user_id = %user_id, error = %e, "Verification email failed");
                }
                Err(_) => {
                    tracing::warn!(
                        user_id = %user_id,
                        timeout_secs = send_timeout.as_secs(),
                        "Verification email timed out"
                    );
                }
            }
        });

        Ok(output)
    }
}
