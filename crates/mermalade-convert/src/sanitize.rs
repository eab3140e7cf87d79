//! Identifier sanitization for Mermaid output.
//!
//! Mermaid class identifiers cannot carry quotes, dots, generics
//! brackets, or punctuation that PlantUML names routinely contain.
//! [`sanitize_name`] is the single place that maps arbitrary source
//! names onto Mermaid-safe identifiers; it is applied to every declared
//! type name before registration and to both sides of every
//! relationship before lookup.

/// Characters that are illegal in a Mermaid class identifier.
const ILLEGAL: [char; 10] = ['"', '.', '<', '>', '[', ']', ' ', ',', '(', ')'];

/// Replace every illegal character with an underscore.
///
/// Replacement is one-to-one: character order and count are preserved
/// and consecutive underscores are never collapsed, so distinct source
/// names stay distinct after sanitization unless they only differed in
/// which illegal character they contained at the same position.
pub(crate) fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if ILLEGAL.contains(&c) { '_' } else { c })
        .collect()
}
