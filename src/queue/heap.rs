//! Binary Heap Core
//!
//! Sift-up and sift-down repairs for an array-backed max-heap, ordered by a
//! caller-supplied `is_above` predicate. "Max" means whatever the predicate
//! places on top.
//!
//! The predicate must be a strict weak ordering (irreflexive, transitive).
//! A predicate that is not leaves the heap in an unspecified order; it is
//! never detected at runtime.

use std::fmt;
use std::str::FromStr;
use serde::Deserialize;
use crate::queue::QueueError;

/// Parent/child index formulas used to lay a tree over the backing array.
///
/// A heap must be repaired with the same layout for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum HeapLayout {
    /// `parent = i >> 1`, `children = (i << 1, (i << 1) + 1)`.
    ///
    /// Both 0 and 1 map to parent 0, so the root has a single child at
    /// index 1, which heads an ordinary 1-based heap over the rest.
    #[default]
    Shifted,
    /// `parent = (i - 1) / 2`, `children = (2i + 1, 2i + 2)`.
    Conventional,
}

impl HeapLayout {
    /// Parent of `index`, or `None` for the root
    pub fn parent(self, index: usize) -> Option<usize> {
        if index == 0 {
            return None;
        }
        Some(match self {
            HeapLayout::Shifted => index >> 1,
            HeapLayout::Conventional => (index - 1) / 2,
        })
    }

    /// Left and right child slots of `index` (not bounds-checked)
    pub fn children(self, index: usize) -> (usize, usize) {
        match self {
            // root's shifted "left child" is itself
            HeapLayout::Shifted if index == 0 => (1, usize::MAX),
            HeapLayout::Shifted => {
                let left = index << 1;
                (left, left + 1)
            }
            HeapLayout::Conventional => {
                let left = 2 * index + 1;
                (left, left + 1)
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeapLayout::Shifted => "shifted",
            HeapLayout::Conventional => "conventional",
        }
    }
}

impl fmt::Display for HeapLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeapLayout {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shifted" => Ok(HeapLayout::Shifted),
            "conventional" => Ok(HeapLayout::Conventional),
            _ => Err(QueueError::InvalidLayout(s.to_string())),
        }
    }
}

impl TryFrom<String> for HeapLayout {
    type Error = QueueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Restore the heap invariant after an element was placed at `index`
/// (normally the last slot). Walks toward the root.
pub fn sift_up<T, F>(heap: &mut [T], mut index: usize, layout: HeapLayout, is_above: &F)
where
    F: Fn(&T, &T) -> bool,
{
    if index >= heap.len() {
        return;
    }
    while let Some(parent) = layout.parent(index) {
        if !is_above(&heap[index], &heap[parent]) {
            break;
        }
        heap.swap(index, parent);
        index = parent;
    }
}

/// Restore the heap invariant after the element at `index` (normally the
/// root) was overwritten and the sub-heaps below it are still valid.
/// Walks toward the leaves.
pub fn sift_down<T, F>(heap: &mut [T], mut index: usize, layout: HeapLayout, is_above: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = heap.len();
    if index >= len {
        return;
    }
    loop {
        let (left, right) = layout.children(index);
        if left >= len {
            return;
        }
        let max = if right >= len || is_above(&heap[left], &heap[right]) {
            left
        } else {
            right
        };
        if !is_above(&heap[max], &heap[index]) {
            return;
        }
        heap.swap(index, max);
        index = max;
    }
}

/// True if no element sits above its parent under `layout`
pub fn is_heap<T, F>(heap: &[T], layout: HeapLayout, is_above: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    (1..heap.len()).all(|index| match layout.parent(index) {
        Some(parent) => !is_above(&heap[index], &heap[parent]),
        None => true,
    })
}
