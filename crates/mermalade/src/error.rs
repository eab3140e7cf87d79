//! Error types for mermalade operations.
//!
//! This module provides the main error type [`MermaladeError`] which
//! wraps the error conditions that can occur around a conversion. The
//! conversion itself is total; errors arise only from I/O, from
//! configuration loading, or from the opt-in strict mode.

use std::io;

use thiserror::Error;

use mermalade_convert::DroppedLine;

/// The main error type for mermalade operations.
#[derive(Debug, Error)]
pub enum MermaladeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("strict mode: {} relationship line(s) could not be converted", dropped.len())]
    Strict { dropped: Vec<DroppedLine> },
}

impl MermaladeError {
    /// Create a strict-mode error from the dropped lines of a report.
    pub fn new_strict_error(dropped: impl Into<Vec<DroppedLine>>) -> Self {
        Self::Strict {
            dropped: dropped.into(),
        }
    }
}
