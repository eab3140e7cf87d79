//! Line classification.
//!
//! Each trimmed source line is mapped to exactly one [`LineKind`] by an
//! ordered sequence of guarded match rules. The order is part of the
//! contract: type-open checks run before the member check because a
//! type-open line can contain visibility-marker-like substrings in its
//! stereotype, and relationship checks only apply outside a body so a
//! member signature containing a literal `--` is never misread as a
//! relationship.

use crate::member::VISIBILITY_MARKERS;
use crate::relation::looks_like_relation;

/// The kind of type a type-open line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeKind {
    Class,
    Interface,
}

/// What a single trimmed line means to the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// `@startuml` / `@enduml` document delimiter.
    Delimiter,
    /// `namespace <name> {` opener.
    NamespaceOpen,
    /// `class <name> {` or `interface <name> {` opener.
    TypeOpen(TypeKind),
    /// Visibility-marked member inside a type body.
    Member,
    /// Generic constraints line; has no Mermaid equivalent.
    Constraint,
    /// A lone closing brace.
    BodyClose,
    /// Relationship line outside any type body.
    Relation,
    /// Anything else; silently skipped.
    Other,
}

/// Classify one trimmed line given whether the scan is inside a type body.
pub(crate) fn classify(line: &str, inside_body: bool) -> LineKind {
    if line.starts_with("@startuml") || line.starts_with("@enduml") {
        LineKind::Delimiter
    } else if line.starts_with("namespace ") {
        LineKind::NamespaceOpen
    } else if line.contains("interface ") && line.contains(" {") {
        LineKind::TypeOpen(TypeKind::Interface)
    } else if line.contains("class ") && line.contains(" {") {
        LineKind::TypeOpen(TypeKind::Class)
    } else if inside_body && VISIBILITY_MARKERS.iter().any(|m| line.starts_with(m)) {
        LineKind::Member
    } else if line.contains("constraints:") {
        LineKind::Constraint
    } else if line == "}" {
        LineKind::BodyClose
    } else if !inside_body && looks_like_relation(line) {
        LineKind::Relation
    } else {
        LineKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters() {
        assert_eq!(classify("@startuml", false), LineKind::Delimiter);
        assert_eq!(classify("@enduml", false), LineKind::Delimiter);
    }

    #[test]
    fn namespace_open() {
        assert_eq!(classify("namespace example {", false), LineKind::NamespaceOpen);
    }

    #[test]
    fn type_open() {
        assert_eq!(
            classify(r#"interface "UserService" {"#, false),
            LineKind::TypeOpen(TypeKind::Interface)
        );
        assert_eq!(
            classify(r#"class "User" << (S,Aquamarine) >> {"#, false),
            LineKind::TypeOpen(TypeKind::Class)
        );
    }

    #[test]
    fn member_only_inside_body() {
        assert_eq!(classify("+ ID int", true), LineKind::Member);
        assert_eq!(classify("+ ID int", false), LineKind::Other);
    }

    #[test]
    fn relation_only_outside_body() {
        let line = r#""a.X" <|-- "b.Y""#;
        assert_eq!(classify(line, false), LineKind::Relation);
        assert_eq!(classify(line, true), LineKind::Other);
    }

    #[test]
    fn member_with_dashes_is_not_a_relation() {
        assert_eq!(classify("- connect(a --> b) error", true), LineKind::Member);
    }

    #[test]
    fn constraint_dropped() {
        assert_eq!(classify("constraints: Comparable", true), LineKind::Constraint);
    }

    #[test]
    fn body_close() {
        assert_eq!(classify("}", true), LineKind::BodyClose);
        assert_eq!(classify("}", false), LineKind::BodyClose);
    }

    #[test]
    fn prose_is_other() {
        assert_eq!(classify("this is not valid plantuml", false), LineKind::Other);
    }
}
