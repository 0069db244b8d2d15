use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of digits in a verification code.
pub const VERIFICATION_CODE_LENGTH: usize = 6;

/// Lifetime of an issued verification code.
pub const VERIFICATION_CODE_TTL_MINUTES: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-time numeric code mailed to the account owner.
///
/// Comparison is exact string equality; a stored code is never normalized.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Builds a zero-padded code from a number in `0..10^6`.
    pub fn from_number(value: u32) -> Self {
        Self(format!(
            "{:0width$}",
            value % 1_000_000,
            width = VERIFICATION_CODE_LENGTH
        ))
    }

    /// Wraps a code loaded from storage.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted
    }
}

// Codes are secrets; keep them out of debug logs.
impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationCode(******)")
    }
}

/// The outstanding code of an unverified account together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCode {
    pub code: VerificationCode,
    pub expires_at: DateTime<Utc>,
}

impl PendingCode {
    pub fn issue(code: VerificationCode, issued_at: DateTime<Utc>) -> Self {
        Self {
            code,
            expires_at: issued_at + Duration::minutes(VERIFICATION_CODE_TTL_MINUTES),
        }
    }

    /// Rebuilds a pending code from nullable storage columns.
    /// Returns `None` unless both halves are present.
    pub fn from_parts(code: Option<String>, expires_at: Option<DateTime<Utc>>) -> Option<Self> {
        match (code, expires_at) {
            (Some(code), Some(expires_at)) => Some(Self {
                code: VerificationCode::from_stored(code),
                expires_at,
            }),
            _ => None,
        }
    }

    /// A code is still valid at the exact expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
