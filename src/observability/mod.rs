// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Diagnostic events are modelled as message structs with a `Display`
//! implementation rather than format strings scattered through the queue
//! code. Each message also knows its own log level and structured fields
//! through [`StructuredLog`](messages::StructuredLog).
//!
//! Nothing here installs a subscriber; embedding programs decide where the
//! events go. The demo binary uses `tracing_subscriber::fmt` with an
//! `EnvFilter` driven by `RUST_LOG`.
//!
//! # Usage
//!
//! ```rust
//! use the_heapwood::observability::messages::StructuredLog;
//! use the_heapwood::observability::messages::queue::QueueCleared;
//!
//! let msg = QueueCleared { discarded: 12 };
//! msg.log();
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;
