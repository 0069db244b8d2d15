use serde::Serialize;

/// Stable classification of account workflow failures.
///
/// The web layer derives HTTP status codes from this, so every use-case
/// error maps onto exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountErrorKind {
    /// Missing or empty required input.
    Validation,
    /// Username or email collides with another account.
    Conflict,
    /// No account for the submitted email.
    NotFound,
    /// Verification requested while no code is outstanding.
    InvalidState,
    /// The submitted code is past its window.
    Expired,
    /// The submitted code does not match.
    InvalidCode,
    /// Storage failure unrelated to input.
    Internal,
}
