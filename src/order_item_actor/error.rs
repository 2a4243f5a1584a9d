//! Error types for the OrderItem actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderItemError {
    #[error("Invalid order item: {0}")]
    Invalid(String),

    #[error("Order item store unavailable: {0}")]
    Unavailable(String),
}

impl From<String> for OrderItemError {
    fn from(msg: String) -> Self {
        OrderItemError::Unavailable(msg)
    }
}
