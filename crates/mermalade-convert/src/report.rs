//! Scan statistics and dropped-line accounting.
//!
//! The conversion itself is total and never fails, so everything a
//! caller might want to act on — how many types were emitted, which
//! relationship lines could not be rewritten — is collected here as a
//! side channel. The report never influences the emitted text.

use std::fmt;

/// Why a relationship line produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The line matched a relationship shape but none of the four
    /// supported operators (e.g. the dotted `<..`/`..>` forms).
    UnsupportedOperator,
    /// The operator did not split the line into exactly two sides.
    MalformedSides,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::UnsupportedOperator => write!(f, "unsupported relationship operator"),
            DropReason::MalformedSides => write!(f, "relationship does not have exactly two sides"),
        }
    }
}

/// A relationship line that was silently dropped from the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    line_number: usize,
    text: String,
    reason: DropReason,
}

impl DroppedLine {
    pub(crate) fn new(line_number: usize, text: impl Into<String>, reason: DropReason) -> Self {
        Self {
            line_number,
            text: text.into(),
            reason,
        }
    }

    /// 1-based line number in the source document.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The trimmed source line as scanned.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Why the line was dropped.
    pub fn reason(&self) -> DropReason {
        self.reason
    }
}

impl fmt::Display for DroppedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: `{}` ({})",
            self.line_number, self.text, self.reason
        )
    }
}

/// Summary of one conversion scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    classes: usize,
    interfaces: usize,
    relations: usize,
    dropped: Vec<DroppedLine>,
}

impl ConversionReport {
    /// Number of class blocks emitted.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Number of interface blocks emitted.
    pub fn interfaces(&self) -> usize {
        self.interfaces
    }

    /// Number of relationship lines emitted.
    pub fn relations(&self) -> usize {
        self.relations
    }

    /// Relationship lines that produced no output.
    pub fn dropped(&self) -> &[DroppedLine] {
        &self.dropped
    }

    /// True when no relationship line had to be dropped.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    pub(crate) fn record_class(&mut self) {
        self.classes += 1;
    }

    pub(crate) fn record_interface(&mut self) {
        self.interfaces += 1;
    }

    pub(crate) fn record_relation(&mut self) {
        self.relations += 1;
    }

    pub(crate) fn record_dropped(&mut self, dropped: DroppedLine) {
        self.dropped.push(dropped);
    }
}
