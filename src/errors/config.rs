// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading and validating queue configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid YAML or does not match the schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The configuration parsed but carries an out-of-range value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
