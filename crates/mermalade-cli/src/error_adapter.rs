//! Error adapter for converting MermaladeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a strict-mode error carries multiple dropped lines, each dropped
//! line is rendered independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use mermalade::{DroppedLine, MermaladeError};

/// Adapter for a single dropped relationship line.
///
/// This adapter wraps a single [`DroppedLine`] and implements
/// [`MietteDiagnostic`] to enable rich error formatting in the CLI.
pub struct DroppedLineAdapter<'a> {
    /// The wrapped dropped line
    line: &'a DroppedLine,
}

impl<'a> DroppedLineAdapter<'a> {
    /// Create a new dropped-line adapter.
    pub fn new(line: &'a DroppedLine) -> Self {
        Self { line }
    }
}

impl fmt::Debug for DroppedLineAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DroppedLineAdapter")
            .field("line", &self.line)
            .finish()
    }
}

impl fmt::Display for DroppedLineAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.line, f)
    }
}

impl std::error::Error for DroppedLineAdapter<'_> {}

impl MietteDiagnostic for DroppedLineAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("mermalade::strict"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "run without --strict to skip unconvertible lines",
        ))
    }
}

/// Adapter for non-strict [`MermaladeError`] variants.
///
/// This adapter handles errors without per-line detail, such as I/O
/// errors and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a MermaladeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MermaladeError::Io(_) => "mermalade::io",
            MermaladeError::Config(_) => "mermalade::config",
            MermaladeError::Strict { .. } => "mermalade::strict",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single dropped line or a plain error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// One unconvertible line from a strict-mode failure.
    Dropped(DroppedLineAdapter<'a>),
    /// A simple error without per-line detail.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Dropped(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Dropped(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Dropped(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Dropped(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Dropped(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`MermaladeError`] into a list of reportable errors.
///
/// For [`MermaladeError::Strict`], this returns one [`Reportable`] for
/// each dropped line in the error. For other error variants, this
/// returns a single [`Reportable`].
pub fn to_reportables(err: &MermaladeError) -> Vec<Reportable<'_>> {
    match err {
        MermaladeError::Strict { dropped } => dropped
            .iter()
            .map(|line| Reportable::Dropped(DroppedLineAdapter::new(line)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
