// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod entry;
mod heap;
mod mode;
mod priority_queue;

#[cfg(test)]
mod integration_tests;

pub use entry::Entry;
pub use heap::IndexedHeap;
pub use mode::HeapMode;
pub use priority_queue::HeapPriorityQueue;
