/// A one-time verification code issued to an email address.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait and is
/// keyed by the email itself, so issuing again for the same address replaces the code.
use chrono::{DateTime, Utc};

#[derive(Clone, PartialEq)]
pub struct VerificationCode {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    /// Verified or found expired; the code can no longer be used and awaits the sweeper.
    pub consumed: bool,
}

impl VerificationCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

// Keeps codes out of debug logs.
impl std::fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationCode")
            .field("email", &self.email)
            .field("expires_at", &self.expires_at)
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}

/// Payload for issuing a code.
#[derive(Clone)]
pub struct IssueCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueCode")
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Selects codes for listing and purging.
#[derive(Debug, Clone, Copy)]
pub enum CodeFilter {
    /// Codes that can no longer be verified at the given instant.
    Unusable(DateTime<Utc>),
}

/// A code handed back to the caller of `issue`.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}
