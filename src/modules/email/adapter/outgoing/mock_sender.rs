use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Records every message instead of delivering it.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<(String, String, String)>>>,
    fail_with: Option<EmailSendError>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every delivery attempt fails.
    pub fn failing(error: EmailSendError) -> Self {
        Self {
            sent_emails: Arc::default(),
            fail_with: Some(error),
        }
    }

    pub async fn sent_emails(&self) -> Vec<(String, String, String)> {
        self.sent_emails.lock().await.clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }

        self.sent_emails
            .lock()
            .await
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}
