//! Error types for the verification code actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VerificationError {
    /// The email or code in the request is missing or malformed.
    #[error("{0}")]
    Invalid(String),

    #[error("OTP not found or expired")]
    NotFound,

    #[error("OTP has expired")]
    Expired,

    #[error("Invalid OTP")]
    Mismatch,

    #[error("Verification store unavailable: {0}")]
    Unavailable(String),
}

impl From<String> for VerificationError {
    fn from(msg: String) -> Self {
        VerificationError::Unavailable(msg)
    }
}
