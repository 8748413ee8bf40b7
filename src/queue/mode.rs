// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// Which end of the priority order sits at the root of the heap.
///
/// The mode is fixed when a queue is built. Switching it would require
/// re-heapifying every entry, so no queue exposes a setter.
///
/// # Variants
/// * `MinExtremal` - the smallest priority is served first
/// * `MaxExtremal` - the largest priority is served first
///
/// # Example
/// ```yaml
/// mode: max_extremal
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapMode {
    #[default]
    #[serde(alias = "min")]
    MinExtremal,
    #[serde(alias = "max")]
    MaxExtremal,
}

impl HeapMode {
    /// Returns true when `a` must sit strictly above `b` in the heap.
    ///
    /// Equal priorities never precede each other, so ties are left where
    /// they are.
    ///
    /// ```rust
    /// use the_heapwood::queue::HeapMode;
    ///
    /// assert!(HeapMode::MinExtremal.precedes(&1, &2));
    /// assert!(HeapMode::MaxExtremal.precedes(&2, &1));
    /// assert!(!HeapMode::MinExtremal.precedes(&2, &2));
    /// ```
    #[inline]
    pub fn precedes<P: Ord>(self, a: &P, b: &P) -> bool {
        match self {
            HeapMode::MinExtremal => a < b,
            HeapMode::MaxExtremal => a > b,
        }
    }

    /// The heap-order relation between a parent and its child
    #[inline]
    pub fn is_ordered<P: Ord>(self, parent: &P, child: &P) -> bool {
        !self.precedes(child, parent)
    }
}

impl std::fmt::Display for HeapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapMode::MinExtremal => write!(f, "min-extremal"),
            HeapMode::MaxExtremal => write!(f, "max-extremal"),
        }
    }
}
