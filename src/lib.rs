// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;         // queue construction settings
pub mod errors;         // error handling
pub mod observability;  // structured log messages
pub mod queue;          // heap engine + shared queue
pub mod traits;         // queue abstraction

pub use queue::{Entry, HeapMode, HeapPriorityQueue};
