mod user_email_service;

pub use user_email_service::{UserEmailService, VERIFICATION_SUBJECT};
