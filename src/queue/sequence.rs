//! Sequence Queues
//!
//! FIFO and LIFO disciplines over a plain `Vec`. Both append at the tail;
//! they differ only in which end `queue_pop` takes from.

use log::{debug, trace};
use crate::queue::{QueueDiscipline, QueueError, QueueResult};

/// Append-only sequence queue, popping from the head or the tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceQueue {
    /// Pop the oldest element (O(n), remaining elements shift forward)
    Fifo,
    /// Pop the newest element (O(1))
    Lifo,
}

/// First-in-first-out discipline
pub const FIFO: SequenceQueue = SequenceQueue::Fifo;

/// Last-in-first-out discipline
pub const LIFO: SequenceQueue = SequenceQueue::Lifo;

pub fn fifo_queue() -> SequenceQueue {
    FIFO
}

pub fn lifo_queue() -> SequenceQueue {
    LIFO
}

impl<T> QueueDiscipline<T> for SequenceQueue {
    fn name(&self) -> &'static str {
        match self {
            SequenceQueue::Fifo => "fifo",
            SequenceQueue::Lifo => "lifo",
        }
    }

    fn queue_insert(&self, element: T, queue: Option<Vec<T>>) -> Vec<T> {
        match queue {
            None => vec![element],
            Some(mut items) => {
                items.push(element);
                trace!("{} insert, {} queued", QueueDiscipline::<T>::name(self), items.len());
                items
            }
        }
    }

    fn queue_pop(&self, queue: Option<&mut Vec<T>>) -> QueueResult<T> {
        let name = QueueDiscipline::<T>::name(self);
        let popped = match (self, queue) {
            (SequenceQueue::Fifo, Some(items)) if !items.is_empty() => {
                let element = items.remove(0);
                Some((element, items.len()))
            }
            (SequenceQueue::Lifo, Some(items)) => items.pop().map(|element| (element, items.len())),
            _ => None,
        };

        match popped {
            Some((element, remaining)) => {
                trace!("{} pop, {} remaining", name, remaining);
                Ok(element)
            }
            None => {
                debug!("Pop on empty {} queue", name);
                Err(QueueError::underflow(name))
            }
        }
    }
}
