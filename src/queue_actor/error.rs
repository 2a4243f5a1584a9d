//! Error types for the QueueCounter actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueueError {
    /// Every number of the day has been issued.
    #[error("Queue numbers exhausted for {0}")]
    Exhausted(chrono::NaiveDate),

    /// The counter actor could not be reached.
    #[error("Queue counter unavailable: {0}")]
    Unavailable(String),
}

impl From<String> for QueueError {
    fn from(msg: String) -> Self {
        QueueError::Unavailable(msg)
    }
}
