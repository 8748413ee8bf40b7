// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A value paired with its priority.
///
/// Entries handed out by the queue are always copies; mutating one never
/// touches the queue. The value is the identity used by updates, so two
/// entries with the same value never coexist inside a queue.
///
/// # Examples
/// ```rust
/// use the_heapwood::queue::Entry;
///
/// let entry = Entry::new("task1", 5);
/// assert_eq!(entry.value, "task1");
/// assert_eq!(entry.priority, 5);
///
/// let from_tuple: Entry<&str, i32> = ("task2", 3).into();
/// assert_eq!(from_tuple.into_parts(), ("task2", 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V, P> {
    pub value: V,
    pub priority: P,
}

impl<V, P> Entry<V, P> {
    pub fn new(value: V, priority: P) -> Self {
        Self { value, priority }
    }

    /// Split the entry back into its `(value, priority)` pair
    pub fn into_parts(self) -> (V, P) {
        (self.value, self.priority)
    }
}

impl<V, P> From<(V, P)> for Entry<V, P> {
    fn from((value, priority): (V, P)) -> Self {
        Self { value, priority }
    }
}
