use chrono::{DateTime, Utc};

/// Source of the current UTC time for issuing and checking codes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
