use rand::Rng;

use crate::auth::application::domain::entities::VerificationCode;
use crate::auth::application::ports::outgoing::VerificationCodeGenerator;

/// Upper bound (exclusive) of the numeric code space.
const CODE_SPACE: u32 = 1_000_000;

/// Draws codes uniformly from `000000..=999999`.
#[derive(Debug, Clone, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl VerificationCodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> VerificationCode {
        VerificationCode::from_number(rand::thread_rng().gen_range(0..CODE_SPACE))
    }
}
