// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Thread-safe priority queue over an [`IndexedHeap`].
//!
//! The heap's entry array and its value→index lookup table are only valid
//! as a pair, so they live behind one lock and are published together.
//! Every public method takes the lock for its whole duration, which makes
//! the queue serializable: any set of concurrent calls has the same effect
//! as some sequential ordering of them, and no caller ever sees an entry
//! array that disagrees with its lookup table.
//!
//! Nothing inside the queue is lent out. `get` clones the root entry and
//! `snapshot` clones the whole array.
//!
//! # Examples
//!
//! ## Sharing a queue across threads
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use the_heapwood::queue::{HeapMode, HeapPriorityQueue};
//!
//! let queue = Arc::new(HeapPriorityQueue::new(HeapMode::MinExtremal));
//!
//! let handles: Vec<_> = (0..4u32)
//!     .map(|worker| {
//!         let queue = Arc::clone(&queue);
//!         thread::spawn(move || {
//!             for i in 0..100u32 {
//!                 queue.put(worker * 100 + i, i).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(queue.len(), 400);
//! assert_eq!(queue.get().map(|e| e.priority), Some(0));
//! ```
//!
//! ## Updating a queued value
//! ```rust
//! use the_heapwood::queue::{Entry, HeapMode, HeapPriorityQueue};
//!
//! let queue = HeapPriorityQueue::new(HeapMode::MinExtremal);
//! queue.put("task1", 5).unwrap();
//! queue.put("task2", 3).unwrap();
//! queue.put("task3", 7).unwrap();
//!
//! assert_eq!(queue.get_and_pop(), Some(Entry::new("task2", 3)));
//! assert_eq!(queue.get_and_pop(), Some(Entry::new("task1", 5)));
//!
//! queue.update(&"task3", 1);
//! assert_eq!(queue.get_and_pop(), Some(Entry::new("task3", 1)));
//! assert_eq!(queue.get_and_pop(), None);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::config::{DuplicatePolicy, QueueConfig};
use crate::errors::{ConfigError, QueueError};
use crate::observability::messages::queue::{
    BatchInserted, DuplicateRejected, PriorityUpdated, QueueCleared, QueueCreated,
};
use crate::observability::messages::StructuredLog;
use crate::queue::{Entry, HeapMode, IndexedHeap};
use crate::traits::PriorityQueue;

/// A keyed priority queue safe to share between threads.
///
/// `V` identifies an entry and must be unique while queued; `P` is any
/// totally ordered priority. Whether `put` of an already-queued value is
/// refused or treated as an update is chosen by [`DuplicatePolicy`].
#[derive(Debug)]
pub struct HeapPriorityQueue<V, P> {
    heap: Mutex<IndexedHeap<V, P>>,
    duplicates: DuplicatePolicy,
}

impl<V, P> HeapPriorityQueue<V, P>
where
    V: Eq + Hash + Clone + Debug,
    P: Ord + Clone,
{
    /// Create an empty queue that rejects duplicate values
    pub fn new(mode: HeapMode) -> Self {
        Self::with_capacity(mode, 0)
    }

    pub fn with_capacity(mode: HeapMode, capacity: usize) -> Self {
        Self::build(mode, capacity, DuplicatePolicy::default())
    }

    /// Create an empty queue from validated configuration
    pub fn from_config(cfg: &QueueConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::build(cfg.mode, cfg.initial_capacity, cfg.duplicates))
    }

    fn build(mode: HeapMode, capacity: usize, duplicates: DuplicatePolicy) -> Self {
        QueueCreated {
            mode,
            initial_capacity: capacity,
        }
        .log();

        Self {
            heap: Mutex::new(IndexedHeap::with_capacity(mode, capacity)),
            duplicates,
        }
    }

    pub fn mode(&self) -> HeapMode {
        self.heap.lock().mode()
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.heap.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.lock().is_empty()
    }

    pub fn contains(&self, value: &V) -> bool {
        self.heap.lock().contains(value)
    }

    /// Current priority of `value`, if it is queued
    pub fn priority_of(&self, value: &V) -> Option<P> {
        self.heap.lock().priority_of(value).cloned()
    }

    /// Queue `value` at `priority`.
    ///
    /// Under [`DuplicatePolicy::Reject`] a value that is already queued is
    /// refused with [`QueueError::DuplicateValue`] and the queue is left as it
    /// was. Under [`DuplicatePolicy::Replace`] the queued entry moves to the
    /// new priority instead.
    pub fn put(&self, value: V, priority: P) -> Result<(), QueueError> {
        let mut heap = self.heap.lock();
        let Err(existing) = heap.insert(value, priority) else {
            return Ok(());
        };

        match self.duplicates {
            DuplicatePolicy::Reject => {
                let err = QueueError::DuplicateValue {
                    value: format!("{:?}", existing.value),
                };
                DuplicateRejected {
                    value: err.value(),
                    in_batch: false,
                }
                .log();
                Err(err)
            }
            DuplicatePolicy::Replace => {
                if heap.update(&existing.value, existing.priority) {
                    PriorityUpdated {
                        queue_len: heap.len(),
                    }
                    .log();
                }
                Ok(())
            }
        }
    }

    /// Queue many entries under a single lock acquisition.
    ///
    /// The batch is all-or-nothing. Under [`DuplicatePolicy::Reject`] any
    /// value that is already queued, or that appears twice in the batch,
    /// fails the whole call before anything is inserted. Under
    /// [`DuplicatePolicy::Replace`] queued values are moved to their new
    /// priority and a value repeated in the batch keeps its last priority.
    ///
    /// An empty batch is a no-op.
    pub fn batch_put<I>(&self, entries: I) -> Result<(), QueueError>
    where
        I: IntoIterator<Item = Entry<V, P>>,
    {
        let entries: Vec<Entry<V, P>> = entries.into_iter().collect();
        if entries.is_empty() {
            return Ok(());
        }

        let mut heap = self.heap.lock();
        let (fresh, updated) = match self.duplicates {
            DuplicatePolicy::Reject => {
                Self::reject_duplicates(&heap, &entries)?;
                (entries, 0)
            }
            DuplicatePolicy::Replace => {
                let mut latest: HashMap<V, P> = HashMap::with_capacity(entries.len());
                for entry in entries {
                    latest.insert(entry.value, entry.priority);
                }

                let mut fresh = Vec::with_capacity(latest.len());
                let mut updated = 0;
                for (value, priority) in latest {
                    if heap.contains(&value) {
                        if heap.update(&value, priority) {
                            updated += 1;
                        }
                    } else {
                        fresh.push(Entry::new(value, priority));
                    }
                }
                (fresh, updated)
            }
        };

        let inserted = fresh.len();
        let rejected = heap.batch_insert(fresh);
        debug_assert!(rejected.is_empty(), "batch was screened for duplicates");

        BatchInserted {
            inserted: inserted - rejected.len(),
            updated,
            queue_len: heap.len(),
        }
        .log();
        Ok(())
    }

    fn reject_duplicates(heap: &IndexedHeap<V, P>, entries: &[Entry<V, P>]) -> Result<(), QueueError> {
        let mut seen: HashSet<&V> = HashSet::with_capacity(entries.len());
        for entry in entries {
            let err = if heap.contains(&entry.value) {
                QueueError::DuplicateValue {
                    value: format!("{:?}", entry.value),
                }
            } else if !seen.insert(&entry.value) {
                QueueError::DuplicateInBatch {
                    value: format!("{:?}", entry.value),
                }
            } else {
                continue;
            };

            DuplicateRejected {
                value: err.value(),
                in_batch: true,
            }
            .log();
            return Err(err);
        }
        Ok(())
    }

    /// Insert `value` or move it to `priority`, regardless of the duplicate
    /// policy. Returns `true` when a new entry was created.
    pub fn upsert(&self, value: V, priority: P) -> bool {
        self.heap.lock().upsert(value, priority)
    }

    /// A copy of the extremal entry, without removing it
    pub fn get(&self) -> Option<Entry<V, P>> {
        self.heap.lock().peek().cloned()
    }

    /// Remove and return the extremal entry
    pub fn get_and_pop(&self) -> Option<Entry<V, P>> {
        self.heap.lock().pop()
    }

    /// Move a queued value to `priority`.
    ///
    /// Absent values and unchanged priorities are ignored and no heap repair
    /// runs for them. Returns `true` when the entry was repaired.
    pub fn update(&self, value: &V, priority: P) -> bool {
        let mut heap = self.heap.lock();
        let repaired = heap.update(value, priority);
        if repaired {
            PriorityUpdated {
                queue_len: heap.len(),
            }
            .log();
        }
        repaired
    }

    /// Drop every entry
    pub fn clear(&self) {
        let mut heap = self.heap.lock();
        let discarded = heap.len();
        heap.clear();
        QueueCleared { discarded }.log();
    }

    /// Remove every entry, returning them extremal-first
    pub fn drain_sorted(&self) -> Vec<Entry<V, P>> {
        self.heap.lock().drain_sorted()
    }

    /// A copy of every entry in heap order
    pub fn snapshot(&self) -> Vec<Entry<V, P>> {
        self.heap.lock().entries().to_vec()
    }

    /// Verify heap order and lookup consistency under the lock
    pub fn check_invariants(&self) -> Result<(), String> {
        self.heap.lock().check_invariants()
    }
}

impl<V, P> Default for HeapPriorityQueue<V, P>
where
    V: Eq + Hash + Clone + Debug,
    P: Ord + Clone,
{
    fn default() -> Self {
        Self::new(HeapMode::default())
    }
}

impl<V, P> PriorityQueue<V, P> for HeapPriorityQueue<V, P>
where
    V: Eq + Hash + Clone + Debug + Send,
    P: Ord + Clone + Send,
{
    fn len(&self) -> usize {
        HeapPriorityQueue::len(self)
    }

    fn is_empty(&self) -> bool {
        HeapPriorityQueue::is_empty(self)
    }

    fn put(&self, value: V, priority: P) -> Result<(), QueueError> {
        HeapPriorityQueue::put(self, value, priority)
    }

    fn batch_put(&self, entries: Vec<Entry<V, P>>) -> Result<(), QueueError> {
        HeapPriorityQueue::batch_put(self, entries)
    }

    fn get(&self) -> Option<Entry<V, P>> {
        HeapPriorityQueue::get(self)
    }

    fn get_and_pop(&self) -> Option<Entry<V, P>> {
        HeapPriorityQueue::get_and_pop(self)
    }

    fn update(&self, value: &V, priority: P) -> bool {
        HeapPriorityQueue::update(self, value, priority)
    }

    fn clear(&self) {
        HeapPriorityQueue::clear(self)
    }
}
