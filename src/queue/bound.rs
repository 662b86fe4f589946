//! Bound Queue
//!
//! Pairs a discipline with the container it threads, for callers that would
//! rather not carry the `Option<Vec<T>>` around themselves.

use std::marker::PhantomData;
use crate::queue::{QueueDiscipline, QueueResult};

/// A discipline together with its lazily created container
pub struct Queue<T, D> {
    discipline: D,
    items: Option<Vec<T>>,
    _element: PhantomData<fn(T) -> T>,
}

impl<T, D: QueueDiscipline<T>> Queue<T, D> {
    /// Create a queue; no container is allocated until the first insert
    pub fn new(discipline: D) -> Self {
        Self {
            discipline,
            items: None,
            _element: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.discipline.queue_empty(self.items.as_deref())
    }

    pub fn insert(&mut self, element: T) {
        let items = self.items.take();
        self.items = Some(self.discipline.queue_insert(element, items));
    }

    pub fn pop(&mut self) -> QueueResult<T> {
        self.discipline.queue_pop(self.items.as_mut())
    }
}

impl<T, D: QueueDiscipline<T>> Extend<T> for Queue<T, D> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T, D: QueueDiscipline<T> + std::fmt::Debug> std::fmt::Debug for Queue<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("discipline", &self.discipline)
            .field("allocated", &self.items.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::{priority_queue, FIFO, LIFO, QueueError};

    #[test]
    fn test_bound_queue_defers_allocation() {
        let mut queue: Queue<u32, _> = Queue::new(FIFO);
        assert!(queue.is_empty());
        assert!(queue.items.is_none());

        queue.insert(1);
        assert!(queue.items.is_some());
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_bound_queue_round_trip_per_discipline() {
        let mut fifo = Queue::new(FIFO);
        fifo.insert("a");
        assert_eq!(fifo.pop(), Ok("a"));
        assert!(fifo.is_empty());

        let mut lifo = Queue::new(LIFO);
        lifo.insert("a");
        assert_eq!(lifo.pop(), Ok("a"));
        assert!(lifo.is_empty());

        let mut heap = Queue::new(priority_queue(|a: &&str, b: &&str| a > b));
        heap.insert("a");
        assert_eq!(heap.pop(), Ok("a"));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_bound_queue_extend() {
        let mut queue = Queue::new(LIFO);
        queue.extend([1, 2, 3]);
        assert_eq!(queue.pop(), Ok(3));
        assert_eq!(queue.pop(), Ok(2));
        assert_eq!(queue.pop(), Ok(1));
        assert_eq!(queue.pop(), Err(QueueError::underflow("lifo")));
    }

    #[test]
    fn test_fresh_bound_queue_pop_fails() {
        let mut queue: Queue<i64, _> = Queue::new(priority_queue(|a: &i64, b: &i64| a > b));
        assert!(queue.pop().unwrap_err().is_underflow());
    }
}
