use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::{
    EmailSender, UserEmailNotificationError, UserEmailNotifier, VerificationEmail,
};

pub const VERIFICATION_SUBJECT: &str = "Your Verification Code";

/// Renders verification-code emails and hands them to an [`EmailSender`].
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn render_body(email: &VerificationEmail) -> String {
        format!("Your verification code is: {}", email.code.as_str())
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_code(
        &self,
        email: VerificationEmail,
    ) -> Result<(), UserEmailNotificationError> {
        let body = Self::render_body(&email);

        self.sender
            .send_email(&email.to, VERIFICATION_SUBJECT, &body)
            .await
            .map_err(|e| UserEmailNotificationError::EmailSendingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, VerificationCode};
    use crate::email::adapter::outgoing::mock_sender::MockEmailSender;
    use crate::email::application::ports::outgoing::EmailSendError;
    use chrono::{TimeZone, Utc};
    use mockall::mock;

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError>;
        }
    }

    fn verification_email() -> VerificationEmail {
        VerificationEmail {
            user_id: UserId::new(),
            to: "a@x.com".to_string(),
            username: "ann".to_string(),
            code: VerificationCode::from_number(7),
            expires_at: Utc.with_ymd_and_hms(2025, 3, 4, 10, 10, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn sends_code_to_account_email() {
        let sender = Arc::new(MockEmailSender::new());
        let service = UserEmailService::new(sender.clone());

        service
            .send_verification_code(verification_email())
            .await
            .expect("send should succeed");

        let sent = sender.sent_emails().await;
        assert_eq!(sent.len(), 1);

        let (to, subject, body) = &sent[0];
        assert_eq!(to, "a@x.com");
        assert_eq!(subject, VERIFICATION_SUBJECT);
        assert_eq!(body, "Your verification code is: 000007");
    }

    #[tokio::test]
    async fn sender_failure_is_reported() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .withf(|to, subject, _| to == "a@x.com" && subject == VERIFICATION_SUBJECT)
            .times(1)
            .returning(|_, _, _| Err(EmailSendError::Transport("connection refused".into())));

        let service = UserEmailService::new(Arc::new(sender));

        let err = service
            .send_verification_code(verification_email())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn debug_output_hides_sender() {
        let service = UserEmailService::new(Arc::new(MockEmailSenderMock::new()));

        assert_eq!(
            format!("{:?}", service),
            "UserEmailService { sender: \"<dyn EmailSender>\" }"
        );
    }
}
