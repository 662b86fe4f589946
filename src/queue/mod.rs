//! Queue Disciplines
//!
//! FIFO, LIFO and priority (binary max-heap) queues behind one
//! three-operation interface: test-empty, insert, pop.
//!
//! # Architecture
//!
//! - **QueueDiscipline**: the shared interface. The caller owns the container
//!   (`Option<Vec<T>>`) and threads it through every call.
//! - **SequenceQueue**: FIFO and LIFO over an append-only `Vec`
//! - **PriorityQueue**: heap discipline bound to an `is_above` predicate
//! - **heap**: sift-up / sift-down primitives and the index layouts
//! - **Queue**: optional owner pairing a discipline with its container
//!
//! # Usage
//!
//! ```rust
//! use qdisc::queue::{priority_queue, QueueDiscipline};
//!
//! let pq = priority_queue(|a: &i32, b: &i32| a > b);
//! let mut queue = None;
//! for value in [5, 1, 8, 3] {
//!     queue = Some(pq.queue_insert(value, queue));
//! }
//!
//! let mut popped = Vec::new();
//! while !pq.queue_empty(queue.as_deref()) {
//!     popped.push(pq.queue_pop(queue.as_mut()).unwrap());
//! }
//! assert_eq!(popped, vec![8, 5, 3, 1]);
//! ```

pub mod bound;
pub mod config;
pub mod error;
pub mod heap;
pub mod priority;
pub mod sequence;
pub mod traits;

// Re-export main types for convenience
pub use bound::Queue;
pub use config::{AnyQueue, PriorityOrder, QueueConfig, QueueKind};
pub use error::{QueueError, QueueResult};
pub use heap::{sift_down, sift_up, HeapLayout};
pub use priority::{priority_queue, PriorityQueue};
pub use sequence::{fifo_queue, lifo_queue, SequenceQueue, FIFO, LIFO};
pub use traits::QueueDiscipline;

#[cfg(test)]
mod tests;
