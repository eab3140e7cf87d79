//! # Mermalade conversion engine
//!
//! Translates PlantUML class diagram text into Mermaid `classDiagram`
//! text in a single forward scan. The input is the notation emitted by
//! Go class-diagram generators: document delimiters, optional
//! `namespace` blocks, stereotyped `class`/`interface` blocks with
//! visibility-marked members, and standalone relationship lines.
//!
//! The conversion is a total function over any input string: malformed
//! or unrecognized lines are silently skipped and the output degrades
//! to the minimal valid diagram (the `classDiagram` header alone)
//! rather than failing. See [`convert_with_report`] for the skipped-line
//! accounting callers can opt into.
//!
//! ## Usage
//!
//! ```
//! let source = r#"@startuml
//! class "User" << (S,Aquamarine) >> {
//!     + ID int
//! }
//! @enduml"#;
//!
//! let mermaid = mermalade_convert::convert(source);
//! assert!(mermaid.starts_with("classDiagram"));
//! ```

mod classify;
mod decl;
mod member;
mod relation;
mod report;
mod sanitize;
mod scan;
mod stereotype;

pub use report::{ConversionReport, DropReason, DroppedLine};

use scan::Scanner;

/// Convert a PlantUML class diagram document to Mermaid.
///
/// Total over any input, including the empty string; never fails. The
/// output always begins with the `classDiagram` header line and lines
/// are joined with `\n` without a trailing newline.
pub fn convert(source: &str) -> String {
    convert_with_report(source).0
}

/// Convert a document and return the scan statistics alongside the text.
///
/// The emitted text is byte-identical to [`convert`]; the
/// [`ConversionReport`] records emitted type and relationship counts
/// plus any relationship lines that produced no output.
pub fn convert_with_report(source: &str) -> (String, ConversionReport) {
    Scanner::new().scan(source)
}
