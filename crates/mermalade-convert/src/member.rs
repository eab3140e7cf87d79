//! Member line rewriting.
//!
//! PlantUML member lines carry a visibility marker separated from the
//! declaration by a space (`+ ID int`); Mermaid wants the marker fused
//! to the declaration (`+ID int`). Generator output also wraps keyword
//! highlights in HTML font tags that Mermaid cannot render.

/// Visibility markers recognized on member lines, in classification order.
pub(crate) const VISIBILITY_MARKERS: [&str; 3] = ["+ ", "- ", "# "];

/// Rewrite a PlantUML field or method line into Mermaid form.
///
/// Strips the known font-color wrapper markers, then fuses the leading
/// visibility marker to the payload. Removal is best-effort: only the
/// exact recognized marker strings are dropped, and unmatched fragments
/// stay in place rather than causing a failure. Lines without a
/// recognized visibility marker pass through unchanged.
pub(crate) fn rewrite_member(line: &str) -> String {
    let cleaned = line
        .trim()
        .replace("<font color=blue>", "")
        .replace("</font>", "");

    for marker in VISIBILITY_MARKERS {
        if let Some(rest) = cleaned.strip_prefix(marker) {
            let visibility = &marker[..1];
            return format!("{visibility}{}", rest.trim());
        }
    }

    cleaned
}
