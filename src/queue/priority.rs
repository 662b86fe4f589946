//! Priority Queue
//!
//! Binary max-heap discipline bound to an ordering predicate.

use std::fmt;
use log::{debug, trace};
use crate::queue::heap::{self, HeapLayout};
use crate::queue::{QueueDiscipline, QueueError, QueueResult};

/// Heap-backed discipline popping the element the predicate ranks highest.
///
/// `is_above(a, b)` returns true iff `a` has strictly higher priority than
/// `b`. It must be a strict weak ordering; equal-priority elements pop in an
/// unspecified order.
#[derive(Clone, Copy)]
pub struct PriorityQueue<F> {
    is_above: F,
    layout: HeapLayout,
}

/// Build a priority discipline using the default heap layout
pub fn priority_queue<T, F>(is_above: F) -> PriorityQueue<F>
where
    F: Fn(&T, &T) -> bool,
{
    PriorityQueue::new(is_above)
}

impl<F> PriorityQueue<F> {
    pub fn new(is_above: F) -> Self {
        Self::with_layout(is_above, HeapLayout::default())
    }

    pub fn with_layout(is_above: F, layout: HeapLayout) -> Self {
        Self { is_above, layout }
    }

    pub fn layout(&self) -> HeapLayout {
        self.layout
    }
}

impl<F> fmt::Debug for PriorityQueue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<T, F> QueueDiscipline<T> for PriorityQueue<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn name(&self) -> &'static str {
        "priority"
    }

    fn queue_insert(&self, element: T, queue: Option<Vec<T>>) -> Vec<T> {
        match queue {
            // a single element is trivially a heap
            None => vec![element],
            Some(mut items) => {
                items.push(element);
                let last = items.len() - 1;
                heap::sift_up(&mut items, last, self.layout, &self.is_above);
                trace!("priority insert, {} queued", items.len());
                items
            }
        }
    }

    fn queue_pop(&self, queue: Option<&mut Vec<T>>) -> QueueResult<T> {
        let items = match queue {
            Some(items) if !items.is_empty() => items,
            _ => {
                debug!("Pop on empty priority queue");
                return Err(QueueError::underflow("priority"));
            }
        };

        // moves the last element into the root slot
        let highest = items.swap_remove(0);
        heap::sift_down(items, 0, self.layout, &self.is_above);
        trace!("priority pop, {} remaining", items.len());
        Ok(highest)
    }
}
