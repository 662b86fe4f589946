//! Queue Discipline Interface
//!
//! Every discipline exposes the same three operations. The container is owned
//! by the caller and threaded through each call: `None` means "not yet
//! created", and the first insert materializes it.

use crate::queue::QueueResult;

/// Uniform empty/insert/pop interface shared by FIFO, LIFO and priority queues
pub trait QueueDiscipline<T> {
    /// Short discipline name used in errors and log output
    fn name(&self) -> &'static str;

    /// True if the container is absent or holds no elements
    fn queue_empty(&self, queue: Option<&[T]>) -> bool {
        queue.map_or(true, |items| items.is_empty())
    }

    /// Insert `element`, creating the container if it does not exist yet.
    ///
    /// Returns the container the caller must hold on to for later calls.
    fn queue_insert(&self, element: T, queue: Option<Vec<T>>) -> Vec<T>;

    /// Remove and return the next element according to the discipline.
    ///
    /// Fails with [`QueueError::Underflow`](crate::queue::QueueError::Underflow)
    /// when the container is absent or empty.
    fn queue_pop(&self, queue: Option<&mut Vec<T>>) -> QueueResult<T>;
}
