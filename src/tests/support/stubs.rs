use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Notify;

use crate::auth::application::domain::entities::VerificationCode;
use crate::auth::application::ports::outgoing::{Clock, VerificationCodeGenerator};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};
use crate::auth::application::use_cases::verify_user_email::{
    IVerifyUserEmailUseCase, VerifyEmailInput, VerifyEmailOutcome, VerifyUserEmailError,
};
use crate::email::application::ports::outgoing::{
    UserEmailNotificationError, UserEmailNotifier, VerificationEmail,
};
use crate::link::application::ports::incoming::use_cases::{
    CreateLinkCommand, CreateLinkError, CreateLinkUseCase, GetLinksError, GetLinksUseCase,
};
use crate::link::application::ports::outgoing::{LinkQueryResult, LinkResult};

// ============================================================================
// Time and code generation
// ============================================================================

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Hands out the given codes in order, repeating the last one.
#[derive(Debug)]
pub struct SequenceCodeGenerator {
    codes: Vec<u32>,
    next: AtomicUsize,
}

impl SequenceCodeGenerator {
    pub fn new(codes: &[u32]) -> Self {
        assert!(!codes.is_empty(), "at least one code is required");
        Self {
            codes: codes.to_vec(),
            next: AtomicUsize::new(0),
        }
    }
}

impl VerificationCodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> VerificationCode {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        let value = self.codes[index.min(self.codes.len() - 1)];
        VerificationCode::from_number(value)
    }
}

// ============================================================================
// Email
// ============================================================================

#[derive(Default, Clone)]
pub struct StubUserEmailNotifier;

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_verification_code(
        &self,
        _email: VerificationEmail,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }
}

/// Keeps every verification email so tests can read the code back.
#[derive(Default, Clone)]
pub struct RecordingEmailNotifier {
    sent: Arc<Mutex<Vec<VerificationEmail>>>,
    notify: Arc<Notify>,
}

impl RecordingEmailNotifier {
    pub fn sent(&self) -> Vec<VerificationEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Waits until at least `count` emails were recorded.
    pub async fn wait_for(&self, count: usize) -> Vec<VerificationEmail> {
        loop {
            let notified = self.notify.notified();
            let sent = self.sent();
            if sent.len() >= count {
                return sent;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl UserEmailNotifier for RecordingEmailNotifier {
    async fn send_verification_code(
        &self,
        email: VerificationEmail,
    ) -> Result<(), UserEmailNotificationError> {
        self.sent.lock().unwrap().push(email);
        self.notify.notify_waiters();
        Ok(())
    }
}

// ============================================================================
// Use cases
// ============================================================================

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyUserEmailUseCase;

#[async_trait]
impl IVerifyUserEmailUseCase for StubVerifyUserEmailUseCase {
    async fn execute(
        &self,
        _input: VerifyEmailInput,
    ) -> Result<VerifyEmailOutcome, VerifyUserEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateLinkUseCase;

#[async_trait]
impl CreateLinkUseCase for StubCreateLinkUseCase {
    async fn execute(&self, _command: CreateLinkCommand) -> Result<LinkResult, CreateLinkError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetLinksUseCase;

#[async_trait]
impl GetLinksUseCase for StubGetLinksUseCase {
    async fn execute(&self) -> Result<Vec<LinkQueryResult>, GetLinksError> {
        Ok(vec![])
    }
}
