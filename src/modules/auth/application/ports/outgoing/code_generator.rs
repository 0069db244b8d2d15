use crate::auth::application::domain::entities::VerificationCode;

pub trait VerificationCodeGenerator: Send + Sync {
    fn generate(&self) -> VerificationCode;
}
