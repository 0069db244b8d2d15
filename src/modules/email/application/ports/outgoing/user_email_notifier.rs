use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{UserId, VerificationCode};

/// Everything needed to tell an account owner about a freshly issued code.
#[derive(Debug, Clone)]
pub struct VerificationEmail {
    pub user_id: UserId,
    pub to: String,
    pub username: String,
    pub code: VerificationCode,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_code(
        &self,
        email: VerificationEmail,
    ) -> Result<(), UserEmailNotificationError>;
}
