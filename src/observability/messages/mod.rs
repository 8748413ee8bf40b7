// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `queue` - queue construction, batch loading, duplicate handling and clearing

use tracing::Span;

pub mod queue;

/// A log message that knows its level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a tracing event
    fn log(&self);

    /// Open a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
