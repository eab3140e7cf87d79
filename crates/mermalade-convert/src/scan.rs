//! The forward scan.
//!
//! One [`Scanner`] is allocated per conversion call and discarded when
//! the call returns; nothing is shared between invocations. The scan
//! walks the source line by line, threading two pieces of context —
//! the current namespace and whether the cursor is inside a type body —
//! and appends rewritten lines to the output buffer as it goes. No
//! recursion, no backtracking.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::classify::{LineKind, TypeKind, classify};
use crate::decl::{declared_name, namespace_name};
use crate::member::rewrite_member;
use crate::relation::rewrite_relation;
use crate::report::{ConversionReport, DroppedLine};
use crate::sanitize::sanitize_name;
use crate::stereotype;

/// Fixed first line of every emitted document.
pub(crate) const HEADER: &str = "classDiagram";

const TYPE_INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";

/// Mutable scan context for one conversion call.
pub(crate) struct Scanner {
    /// Enclosing namespace name; empty outside any namespace block.
    namespace: String,
    /// True between a type-open line and its matching close.
    inside_body: bool,
    /// Sanitized fully-qualified name to sanitized short name.
    ///
    /// Redeclaring a qualified name overwrites its entry: last write
    /// wins, matching the one-definition-per-scan assumption.
    names: IndexMap<String, String>,
    out: Vec<String>,
    report: ConversionReport,
}

impl Scanner {
    pub(crate) fn new() -> Self {
        Self {
            namespace: String::new(),
            inside_body: false,
            names: IndexMap::new(),
            out: vec![HEADER.to_string()],
            report: ConversionReport::default(),
        }
    }

    /// Run the scan over the full source document.
    ///
    /// Total over any input: unrecognized lines are skipped, an
    /// unterminated type block is treated as implicitly closed at end
    /// of input, and the worst case degrades to the header-only
    /// minimal diagram.
    pub(crate) fn scan(mut self, source: &str) -> (String, ConversionReport) {
        for (index, raw) in source.lines().enumerate() {
            let trimmed = raw.trim();
            // An embedded struct tag must be removed before
            // classification so it cannot leak into the declared name.
            let line = stereotype::strip_struct_tag(trimmed);

            let kind = classify(&line, self.inside_body);
            trace!(line_number = index + 1, kind:? = kind; "classified line");

            match kind {
                LineKind::Delimiter | LineKind::Constraint | LineKind::Other => {}
                LineKind::NamespaceOpen => {
                    if let Some(name) = namespace_name(&line) {
                        self.namespace = name.to_string();
                    }
                }
                LineKind::TypeOpen(type_kind) => self.open_type(&line, type_kind),
                LineKind::Member => {
                    let member = rewrite_member(&line);
                    if !member.is_empty() {
                        self.out.push(format!("{BODY_INDENT}{member}"));
                    }
                }
                LineKind::BodyClose => self.close_body(),
                LineKind::Relation => self.relation(index + 1, &line),
            }
        }

        debug!(
            classes = self.report.classes(),
            interfaces = self.report.interfaces(),
            relations = self.report.relations(),
            dropped = self.report.dropped().len();
            "scan finished"
        );

        (self.out.join("\n"), self.report)
    }

    /// Open a class or interface block.
    ///
    /// Registers the qualified-to-short name mapping and the declared
    /// kind, then emits the type-open line plus any kind annotation.
    /// Interfaces always get an `<<interface>>` annotation; classes get
    /// one only when the line carries a decodable stereotype.
    fn open_type(&mut self, line: &str, kind: TypeKind) {
        let Some(name) = declared_name(line) else {
            return;
        };

        let short = sanitize_name(name);
        let qualified = sanitize_name(&format!("{}.{name}", self.namespace));
        self.out.push(format!("{TYPE_INDENT}class {short} {{"));
        self.names.insert(qualified, short);
        match kind {
            TypeKind::Interface => {
                self.out.push(format!("{BODY_INDENT}<<interface>>"));
                self.report.record_interface();
            }
            TypeKind::Class => {
                if let Some(annotation) = stereotype::decode(line) {
                    self.out.push(format!("{BODY_INDENT}<<{annotation}>>"));
                }
                self.report.record_class();
            }
        }
        self.inside_body = true;
    }

    /// Handle a lone closing brace.
    ///
    /// A close ends the open type body if one is open, otherwise the
    /// enclosing namespace; the two constructs never nest in this
    /// notation, so one flag and one string are enough context.
    fn close_body(&mut self) {
        if self.inside_body {
            self.out.push(format!("{TYPE_INDENT}}}"));
            self.inside_body = false;
        } else if !self.namespace.is_empty() {
            self.namespace.clear();
        }
    }

    fn relation(&mut self, line_number: usize, line: &str) {
        match rewrite_relation(line, &self.names) {
            Ok(rewritten) => {
                self.out.push(format!("{TYPE_INDENT}{rewritten}"));
                self.report.record_relation();
            }
            Err(reason) => {
                trace!(line_number, reason:? = reason; "dropped relationship line");
                self.report
                    .record_dropped(DroppedLine::new(line_number, line, reason));
            }
        }
    }
}
