// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Binary heap with a value-keyed position index.
//!
//! `IndexedHeap` is the single-threaded engine behind
//! [`HeapPriorityQueue`](crate::queue::HeapPriorityQueue). It keeps two
//! structures in lock-step:
//!
//! - **entries**: a dense array in heap order, index 0 holding the extremal entry
//! - **lookup**: a map from each value to its current index in `entries`
//!
//! Every swap performed while sifting also rewrites the two affected lookup
//! slots, so after any public call `lookup[entries[i].value] == i` holds for
//! every `i` and both structures have the same length.
//!
//! # Performance Characteristics
//!
//! - **peek / contains / priority_of**: O(1)
//! - **insert / pop / update**: O(log n)
//! - **batch_insert**: O(k log n) for small batches, O(n + k) when the batch
//!   is larger than the heap it lands in
//!
//! # Examples
//! ```rust
//! use the_heapwood::queue::{HeapMode, IndexedHeap};
//!
//! let mut heap = IndexedHeap::new(HeapMode::MinExtremal);
//! heap.insert("task1", 5).unwrap();
//! heap.insert("task2", 3).unwrap();
//! heap.insert("task3", 7).unwrap();
//!
//! assert_eq!(heap.peek().map(|e| e.value), Some("task2"));
//!
//! heap.update(&"task3", 1);
//! assert_eq!(heap.pop().map(|e| e.value), Some("task3"));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::queue::{Entry, HeapMode};

#[derive(Debug, Clone)]
pub struct IndexedHeap<V, P> {
    entries: Vec<Entry<V, P>>,
    lookup: HashMap<V, usize>,
    mode: HeapMode,
}

impl<V, P> IndexedHeap<V, P>
where
    V: Eq + Hash + Clone,
    P: Ord,
{
    pub fn new(mode: HeapMode) -> Self {
        Self::with_capacity(mode, 0)
    }

    pub fn with_capacity(mode: HeapMode, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
            mode,
        }
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, value: &V) -> bool {
        self.lookup.contains_key(value)
    }

    /// Current priority of `value`, if present
    pub fn priority_of(&self, value: &V) -> Option<&P> {
        self.lookup.get(value).map(|&idx| &self.entries[idx].priority)
    }

    /// The extremal entry, without removing it
    pub fn peek(&self) -> Option<&Entry<V, P>> {
        self.entries.first()
    }

    /// Entries in heap order (not sorted beyond the root)
    pub fn entries(&self) -> &[Entry<V, P>] {
        &self.entries
    }

    /// Insert a new value.
    ///
    /// A value that is already present is handed back untouched as
    /// `Err(entry)`; the heap is not modified in that case.
    pub fn insert(&mut self, value: V, priority: P) -> Result<(), Entry<V, P>> {
        if self.lookup.contains_key(&value) {
            return Err(Entry::new(value, priority));
        }

        let idx = self.entries.len();
        self.lookup.insert(value.clone(), idx);
        self.entries.push(Entry::new(value, priority));
        self.sift_up(idx);
        Ok(())
    }

    /// Insert `value`, or move it to `priority` if it is already present.
    ///
    /// Returns `true` when a new entry was created.
    pub fn upsert(&mut self, value: V, priority: P) -> bool {
        match self.insert(value, priority) {
            Ok(()) => true,
            Err(existing) => {
                self.update(&existing.value, existing.priority);
                false
            }
        }
    }

    /// Append many entries at once and restore heap order.
    ///
    /// Entries whose value is already present, either in the heap or
    /// earlier in the same batch, are skipped and returned in their
    /// original order.
    pub fn batch_insert<I>(&mut self, batch: I) -> Vec<Entry<V, P>>
    where
        I: IntoIterator<Item = Entry<V, P>>,
    {
        let batch = batch.into_iter();
        let start = self.entries.len();
        let (lower, _) = batch.size_hint();
        self.entries.reserve(lower);
        self.lookup.reserve(lower);

        let mut rejected = Vec::new();
        for entry in batch {
            if self.lookup.contains_key(&entry.value) {
                rejected.push(entry);
                continue;
            }
            self.lookup.insert(entry.value.clone(), self.entries.len());
            self.entries.push(entry);
        }

        let appended = self.entries.len() - start;
        if appended > start {
            // Appended slots now have appended children; fixing them one at
            // a time could sink an entry below an unsettled smaller one.
            self.heapify();
        } else {
            // No appended slot has a child, so each fix can only climb.
            for idx in start..self.entries.len() {
                self.sift_up(idx);
            }
        }

        rejected
    }

    /// Remove and return the extremal entry
    pub fn pop(&mut self) -> Option<Entry<V, P>> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap_entries(0, last);
        let entry = self.entries.pop()?;
        self.lookup.remove(&entry.value);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some(entry)
    }

    /// Move `value` to `priority`.
    ///
    /// Returns `false` without touching the heap when the value is absent or
    /// the priority is unchanged. Otherwise the entry is repaired in place and
    /// `true` is returned.
    pub fn update(&mut self, value: &V, priority: P) -> bool {
        let Some(&idx) = self.lookup.get(value) else {
            return false;
        };

        if self.entries[idx].priority == priority {
            return false;
        }

        self.entries[idx].priority = priority;
        self.fix(idx);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.lookup.clear();
    }

    /// Remove every entry, returning them in extremal-first order
    pub fn drain_sorted(&mut self) -> Vec<Entry<V, P>> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Verify the heap-order and lookup invariants.
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.lookup.len() != self.entries.len() {
            return Err(format!(
                "lookup holds {} values but the heap holds {} entries",
                self.lookup.len(),
                self.entries.len()
            ));
        }

        for (idx, entry) in self.entries.iter().enumerate() {
            match self.lookup.get(&entry.value) {
                Some(&found) if found == idx => {}
                Some(&found) => {
                    return Err(format!("entry at {} is indexed at {}", idx, found));
                }
                None => return Err(format!("entry at {} is missing from lookup", idx)),
            }

            if idx > 0 {
                let parent = (idx - 1) / 2;
                if !self
                    .mode
                    .is_ordered(&self.entries[parent].priority, &entry.priority)
                {
                    return Err(format!(
                        "entry at {} is out of {} order with its parent at {}",
                        idx, self.mode, parent
                    ));
                }
            }
        }

        Ok(())
    }

    /// Repair the entry at `idx` in whichever direction it needs to move
    fn fix(&mut self, idx: usize) {
        if !self.sift_up(idx) {
            self.sift_down(idx);
        }
    }

    /// Returns true if the entry moved
    fn sift_up(&mut self, mut idx: usize) -> bool {
        let start = idx;
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self
                .mode
                .precedes(&self.entries[idx].priority, &self.entries[parent].priority)
            {
                break;
            }
            self.swap_entries(idx, parent);
            idx = parent;
        }
        idx != start
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut best = left;
            if right < len
                && self
                    .mode
                    .precedes(&self.entries[right].priority, &self.entries[left].priority)
            {
                best = right;
            }

            if !self
                .mode
                .precedes(&self.entries[best].priority, &self.entries[idx].priority)
            {
                break;
            }

            self.swap_entries(idx, best);
            idx = best;
        }
    }

    fn heapify(&mut self) {
        for idx in (0..self.entries.len() / 2).rev() {
            self.sift_down(idx);
        }
    }

    /// Swap two entries and rewrite both lookup slots
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(slot) = self.lookup.get_mut(&self.entries[a].value) {
            *slot = a;
        }
        if let Some(slot) = self.lookup.get_mut(&self.entries[b].value) {
            *slot = b;
        }
    }
}
