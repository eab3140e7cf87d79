//! Relationship line rewriting.
//!
//! PlantUML relationship lines reference types by quoted fully-qualified
//! name; Mermaid references the short sanitized identifiers the scan
//! registered when each type was opened. Operator tokens overlap as
//! substrings (`--` is contained in all the longer forms), so detection
//! order is load-bearing: inheritance before dependency before the
//! plain association form.

use indexmap::IndexMap;

use crate::report::DropReason;
use crate::sanitize::sanitize_name;

/// The four relationship operators, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Inheritance,
    Composition,
    Dependency,
    Association,
}

impl Operator {
    /// Source-notation token.
    fn token(self) -> &'static str {
        match self {
            Operator::Inheritance => "<|--",
            Operator::Composition => "*--",
            Operator::Dependency => "<--",
            Operator::Association => "--",
        }
    }

    /// First operator whose token appears in the line.
    fn detect(line: &str) -> Option<Self> {
        [
            Operator::Inheritance,
            Operator::Composition,
            Operator::Dependency,
            Operator::Association,
        ]
        .into_iter()
        .find(|op| line.contains(op.token()))
    }
}

/// True when a line should be classified as a relationship.
///
/// The dotted operators are recognized here so that lines using them
/// are consumed (and reported) by the relationship path instead of
/// leaking into the catch-all skip.
pub(crate) fn looks_like_relation(line: &str) -> bool {
    Operator::detect(line).is_some() || line.contains("<..") || line.contains("..>")
}

/// Resolve one side of a relationship to its Mermaid identifier.
///
/// Quotes are stripped, the remainder is sanitized into the
/// fully-qualified key, and the key is looked up in the name mapping.
/// Unknown names fall back to the sanitized fully-qualified form, which
/// keeps relationships to types declared outside the scanned document
/// renderable.
fn resolve_side(side: &str, names: &IndexMap<String, String>) -> String {
    let unquoted = side.replace('"', "");
    let full = sanitize_name(unquoted.trim());
    names.get(&full).cloned().unwrap_or(full)
}

/// Rewrite a relationship line into Mermaid form.
///
/// Inheritance reverses the side order (`parent <|-- child` becomes
/// `child --|> parent`); every other operator keeps left and right as
/// written. Lines matching no supported operator, or splitting into
/// other than exactly two sides, yield the reason they were dropped.
pub(crate) fn rewrite_relation(
    line: &str,
    names: &IndexMap<String, String>,
) -> Result<String, DropReason> {
    let op = Operator::detect(line).ok_or(DropReason::UnsupportedOperator)?;

    let sides: Vec<&str> = line.split(op.token()).collect();
    let [left, right] = sides.as_slice() else {
        return Err(DropReason::MalformedSides);
    };

    let left = resolve_side(left, names);
    let right = resolve_side(right, names);

    Ok(match op {
        Operator::Inheritance => format!("{right} --|> {left}"),
        Operator::Composition => format!("{left} *-- {right}"),
        Operator::Dependency => format!("{left} <-- {right}"),
        Operator::Association => format!("{left} -- {right}"),
    })
}
