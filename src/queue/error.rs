//! Queue Error Types
//!
//! Defines error types specific to the queue disciplines.

use thiserror::Error;

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur during queue operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Pop was called on an absent or empty container
    #[error("Cannot pop from an empty {discipline} queue")]
    Underflow { discipline: &'static str },

    /// Unknown queue discipline name
    #[error("Invalid queue kind: {0}. Valid options: fifo, lifo, priority")]
    InvalidKind(String),

    /// Unknown priority ordering name
    #[error("Invalid priority order: {0}. Valid options: max, min")]
    InvalidOrder(String),

    /// Unknown heap layout name
    #[error("Invalid heap layout: {0}. Valid options: shifted, conventional")]
    InvalidLayout(String),
}

impl QueueError {
    /// Create an underflow error for the named discipline
    pub fn underflow(discipline: &'static str) -> Self {
        Self::Underflow { discipline }
    }

    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow { .. })
    }
}
