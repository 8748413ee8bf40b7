// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for priority queue lifecycle events.
//!
//! Single-entry `put`/`get_and_pop` calls are deliberately silent; only
//! events that touch many entries, or that a caller may want to audit,
//! produce output.

use crate::observability::messages::StructuredLog;
use crate::queue::HeapMode;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A queue was constructed.
///
/// # Log Level
/// `debug!` - Lifecycle detail
///
/// # Example
/// ```
/// use the_heapwood::observability::messages::queue::QueueCreated;
/// use the_heapwood::queue::HeapMode;
///
/// let msg = QueueCreated {
///     mode: HeapMode::MinExtremal,
///     initial_capacity: 16,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct QueueCreated {
    pub mode: HeapMode,
    pub initial_capacity: usize,
}

impl Display for QueueCreated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Created {} priority queue with capacity {}",
            self.mode, self.initial_capacity
        )
    }
}

impl StructuredLog for QueueCreated {
    fn log(&self) {
        tracing::debug!(
            mode = %self.mode,
            initial_capacity = self.initial_capacity,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "queue_created",
            span_name = name,
            mode = %self.mode,
            initial_capacity = self.initial_capacity,
        )
    }
}

/// A batch of entries was appended.
///
/// # Log Level
/// `trace!` - High-volume detail
pub struct BatchInserted {
    pub inserted: usize,
    pub updated: usize,
    pub queue_len: usize,
}

impl Display for BatchInserted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Batch inserted {} entries and updated {}; queue now holds {}",
            self.inserted, self.updated, self.queue_len
        )
    }
}

impl StructuredLog for BatchInserted {
    fn log(&self) {
        tracing::trace!(
            inserted = self.inserted,
            updated = self.updated,
            queue_len = self.queue_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "batch_inserted",
            span_name = name,
            inserted = self.inserted,
            updated = self.updated,
            queue_len = self.queue_len,
        )
    }
}

/// A duplicate value was turned away.
///
/// # Log Level
/// `warn!` - Caller contract violation
///
/// # Example
/// ```
/// use the_heapwood::observability::messages::queue::DuplicateRejected;
///
/// let msg = DuplicateRejected {
///     value: "\"task1\"",
///     in_batch: false,
/// };
///
/// assert_eq!(msg.to_string(), "Rejected duplicate value \"task1\"");
/// ```
pub struct DuplicateRejected<'a> {
    pub value: &'a str,
    pub in_batch: bool,
}

impl Display for DuplicateRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.in_batch {
            write!(f, "Rejected batch containing duplicate value {}", self.value)
        } else {
            write!(f, "Rejected duplicate value {}", self.value)
        }
    }
}

impl StructuredLog for DuplicateRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            value = self.value,
            in_batch = self.in_batch,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "duplicate_rejected",
            span_name = name,
            value = self.value,
            in_batch = self.in_batch,
        )
    }
}

/// A priority change triggered a heap repair.
///
/// # Log Level
/// `trace!` - High-volume detail
pub struct PriorityUpdated {
    pub queue_len: usize,
}

impl Display for PriorityUpdated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Repaired heap of {} entries after priority update", self.queue_len)
    }
}

impl StructuredLog for PriorityUpdated {
    fn log(&self) {
        tracing::trace!(queue_len = self.queue_len, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("priority_updated", span_name = name, queue_len = self.queue_len)
    }
}

/// The queue was emptied.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct QueueCleared {
    pub discarded: usize,
}

impl Display for QueueCleared {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cleared priority queue, discarding {} entries", self.discarded)
    }
}

impl StructuredLog for QueueCleared {
    fn log(&self) {
        tracing::debug!(discarded = self.discarded, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("queue_cleared", span_name = name, discarded = self.discarded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render() {
        let created = QueueCreated {
            mode: HeapMode::MaxExtremal,
            initial_capacity: 8,
        };
        assert_eq!(
            created.to_string(),
            "Created max-extremal priority queue with capacity 8"
        );

        let batch = BatchInserted {
            inserted: 3,
            updated: 1,
            queue_len: 10,
        };
        assert_eq!(
            batch.to_string(),
            "Batch inserted 3 entries and updated 1; queue now holds 10"
        );

        let rejected = DuplicateRejected {
            value: "42",
            in_batch: true,
        };
        assert_eq!(
            rejected.to_string(),
            "Rejected batch containing duplicate value 42"
        );

        assert_eq!(
            QueueCleared { discarded: 0 }.to_string(),
            "Cleared priority queue, discarding 0 entries"
        );
    }

    #[test]
    fn test_log_without_subscriber_is_harmless() {
        PriorityUpdated { queue_len: 3 }.log();
        let _span = QueueCleared { discarded: 2 }.span("test");
    }
}
