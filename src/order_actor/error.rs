//! Error types for the Order actor and the order flow.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A field is missing or malformed. Nothing was written.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The counter, order or item store failed. Not retried.
    #[error("Order persistence error: {0}")]
    Persistence(String),
}

impl OrderError {
    /// The short message shown to callers, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            OrderError::Validation(msg) | OrderError::Persistence(msg) => msg,
            OrderError::NotFound(_) => "Order not found",
        }
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Persistence(msg)
    }
}
