//! Custom actions for the verification code actor.

use crate::model::IssueCode;
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub enum VerificationAction {
    /// Replaces the code and its expiry, making it usable again.
    Reissue(IssueCode),
    /// Checks `code` at instant `now`. A code verifies at most once.
    Verify { code: String, now: DateTime<Utc> },
}

impl std::fmt::Debug for VerificationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationAction::Reissue(issue) => f.debug_tuple("Reissue").field(issue).finish(),
            VerificationAction::Verify { now, .. } => f
                .debug_struct("Verify")
                .field("now", now)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Issued,
    Verified,
}
