//! Queue Configuration Module
//!
//! Selects a discipline by name so the driver and configuration files can
//! choose one at runtime. Elements are `i64` at this level.

use std::fmt;
use std::str::FromStr;
use log::debug;
use serde::Deserialize;
use crate::queue::{
    HeapLayout, PriorityQueue, Queue, QueueError, QueueResult, SequenceQueue, FIFO, LIFO,
};

/// Runtime-selectable queue discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum QueueKind {
    #[default]
    Fifo,
    Lifo,
    Priority,
}

impl FromStr for QueueKind {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fifo" | "queue" => Ok(QueueKind::Fifo),
            "lifo" | "stack" => Ok(QueueKind::Lifo),
            "priority" | "heap" => Ok(QueueKind::Priority),
            _ => Err(QueueError::InvalidKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for QueueKind {
    type Error = QueueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueueKind::Fifo => "fifo",
            QueueKind::Lifo => "lifo",
            QueueKind::Priority => "priority",
        };
        f.write_str(name)
    }
}

/// Which end of the integer range a priority queue pops first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PriorityOrder {
    #[default]
    Max,
    Min,
}

impl PriorityOrder {
    /// Ordering predicate for this order
    pub fn predicate(self) -> fn(&i64, &i64) -> bool {
        match self {
            PriorityOrder::Max => |a, b| a > b,
            PriorityOrder::Min => |a, b| a < b,
        }
    }
}

impl FromStr for PriorityOrder {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max" => Ok(PriorityOrder::Max),
            "min" => Ok(PriorityOrder::Min),
            _ => Err(QueueError::InvalidOrder(s.to_string())),
        }
    }
}

impl TryFrom<String> for PriorityOrder {
    type Error = QueueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriorityOrder::Max => "max",
            PriorityOrder::Min => "min",
        })
    }
}

/// Main queue configuration
///
/// Field values go through the `FromStr` impls, so names are
/// case-insensitive and accept the same aliases as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct QueueConfig {
    /// Discipline to build
    pub kind: QueueKind,

    /// Integer ordering, priority queues only
    pub order: PriorityOrder,

    /// Heap index layout, priority queues only
    pub layout: HeapLayout,
}

impl QueueConfig {
    pub fn new(kind: QueueKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Build an empty queue for this configuration
    pub fn build(&self) -> AnyQueue {
        debug!("Building {} queue (order: {}, layout: {})", self.kind, self.order, self.layout);
        match self.kind {
            QueueKind::Fifo => AnyQueue::Sequence(Queue::new(FIFO)),
            QueueKind::Lifo => AnyQueue::Sequence(Queue::new(LIFO)),
            QueueKind::Priority => AnyQueue::Priority(Queue::new(PriorityQueue::with_layout(
                self.order.predicate(),
                self.layout,
            ))),
        }
    }
}

/// Integer predicate signature used by configured priority queues
pub type IntPredicate = fn(&i64, &i64) -> bool;

/// Queue of integers whose discipline was chosen at runtime
#[derive(Debug)]
pub enum AnyQueue {
    Sequence(Queue<i64, SequenceQueue>),
    Priority(Queue<i64, PriorityQueue<IntPredicate>>),
}

impl AnyQueue {
    pub fn is_empty(&self) -> bool {
        match self {
            AnyQueue::Sequence(queue) => queue.is_empty(),
            AnyQueue::Priority(queue) => queue.is_empty(),
        }
    }

    pub fn insert(&mut self, element: i64) {
        match self {
            AnyQueue::Sequence(queue) => queue.insert(element),
            AnyQueue::Priority(queue) => queue.insert(element),
        }
    }

    pub fn pop(&mut self) -> QueueResult<i64> {
        match self {
            AnyQueue::Sequence(queue) => queue.pop(),
            AnyQueue::Priority(queue) => queue.pop(),
        }
    }

    /// Pop until empty, returning elements in pop order
    pub fn drain(&mut self) -> QueueResult<Vec<i64>> {
        let mut popped = Vec::new();
        while !self.is_empty() {
            popped.push(self.pop()?);
        }
        Ok(popped)
    }
}
