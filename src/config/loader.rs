// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_INITIAL_CAPACITY, MAX_INITIAL_CAPACITY};
use crate::errors::ConfigError;
use crate::queue::HeapMode;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Construction settings for a [`HeapPriorityQueue`](crate::queue::HeapPriorityQueue).
///
/// Every field is optional; an empty document yields a min-extremal queue
/// that rejects duplicates.
///
/// # Fields
/// * `mode` - Which end of the priority order is served first (defaults to `min_extremal`)
/// * `initial_capacity` - Entries to pre-allocate in both the heap and its lookup table
/// * `duplicates` - What `put` does with a value that is already queued
///
/// # Example
/// ```yaml
/// mode: max_extremal
/// initial_capacity: 1024
/// duplicates: replace
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub mode: HeapMode,
    pub initial_capacity: usize,
    pub duplicates: DuplicatePolicy,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            mode: HeapMode::default(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl QueueConfig {
    pub fn new(mode: HeapMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Check values that parse but cannot be honoured
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity {} exceeds the maximum of {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }
}

/// How a queue treats a `put` for a value it already holds.
///
/// # Variants
/// * `Reject` - Leave the queue unchanged and report [`QueueError::DuplicateValue`](crate::errors::QueueError)
/// * `Replace` - Later insert wins: the queued entry moves to the new priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Replace,
}

/// Parse and validate a config from a YAML string
pub fn parse_config(yaml: &str) -> Result<QueueConfig, ConfigError> {
    // An empty document deserializes as unit, not as an empty mapping.
    if yaml.trim().is_empty() {
        return Ok(QueueConfig::default());
    }
    let cfg: QueueConfig = serde_yaml::from_str(yaml)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<QueueConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
