// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors reported by queue mutations.
//!
//! An empty queue or an absent value is not an error: those outcomes come
//! back as `None` or `false`. The only failure a caller can trigger is
//! inserting a value that is already queued while the queue rejects
//! duplicates.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The value is already present in the queue.
    #[error("Value {value} is already queued")]
    DuplicateValue { value: String },

    /// The same value appears more than once in a single batch.
    #[error("Value {value} appears more than once in the batch")]
    DuplicateInBatch { value: String },
}

impl QueueError {
    /// The offending value, rendered with its `Debug` representation
    pub fn value(&self) -> &str {
        match self {
            QueueError::DuplicateValue { value } | QueueError::DuplicateInBatch { value } => value,
        }
    }
}
