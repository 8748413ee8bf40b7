// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::QueueError;
use crate::queue::Entry;

/// The operation set of a priority queue shared between callers.
///
/// All methods take `&self`: implementations are responsible for their own
/// synchronization. Absent values and empty queues are reported as `None`
/// or `false`, never as errors.
///
/// # Examples
///
/// ## Writing code against the trait
/// ```rust
/// use the_heapwood::traits::PriorityQueue;
/// use the_heapwood::queue::{HeapMode, HeapPriorityQueue};
///
/// fn drain_values<Q: PriorityQueue<u32, u32>>(queue: &Q) -> Vec<u32> {
///     let mut out = Vec::new();
///     while let Some(entry) = queue.get_and_pop() {
///         out.push(entry.value);
///     }
///     out
/// }
///
/// let queue = HeapPriorityQueue::new(HeapMode::MaxExtremal);
/// queue.put(1, 10).unwrap();
/// queue.put(2, 30).unwrap();
/// queue.put(3, 20).unwrap();
///
/// assert_eq!(drain_values(&queue), vec![2, 3, 1]);
/// ```
pub trait PriorityQueue<V, P>: Send + Sync {
    /// Number of queued entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queue a single value
    fn put(&self, value: V, priority: P) -> Result<(), QueueError>;

    /// Queue several values at once; an empty batch is a no-op
    fn batch_put(&self, entries: Vec<Entry<V, P>>) -> Result<(), QueueError>;

    /// Copy of the extremal entry
    fn get(&self) -> Option<Entry<V, P>>;

    /// Remove and return the extremal entry
    fn get_and_pop(&self) -> Option<Entry<V, P>>;

    /// Move a queued value to a new priority
    fn update(&self, value: &V, priority: P) -> bool;

    fn clear(&self);
}
