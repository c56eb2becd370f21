//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error types for fixture generation

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Error type for fixture generation
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch {program}: {reason}")]
    Launch { program: String, reason: String },

    #[error("Fixture tool exited with {status}")]
    ToolFailed { status: String, output: String },

    #[error("Gave up after {attempts} draws with {found} of {target} unique values")]
    SamplingExhausted {
        target: usize,
        found: usize,
        attempts: usize,
    },
}

impl FixtureError {
    /// Captured tool output attached to this error, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            FixtureError::ToolFailed { output, .. } => Some(output.as_str()),
            _ => None,
        }
    }
}
