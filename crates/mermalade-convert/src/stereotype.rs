//! Stereotype handling for type-open lines.
//!
//! PlantUML annotates type declarations with a `<< ... >>` stereotype
//! whose payload takes one of three shapes:
//!
//! - `(S,Aquamarine)` — a kind letter plus a color; the letter maps to
//!   a Mermaid kind annotation (`S` struct, `I` interface, `E` enum)
//! - `[T, K]` — generic type parameters
//! - free text — custom stereotypes such as `type parameter`
//!
//! Some generator versions also embed a bare `S,`-tagged marker inside
//! the declaration line itself; [`strip_struct_tag`] removes it before
//! classification so the marker can never leak into the declared name
//! or be misread as a relationship operator.

use std::borrow::Cow;

use winnow::{
    Parser as _,
    combinator::delimited,
    error::{ContextError, ErrMode},
    token::take_until,
};

type PResult<O> = Result<O, ErrMode<ContextError>>;

/// Locate the first `<< ... >>` payload in a line, trimmed.
fn bracketed_payload(line: &str) -> Option<&str> {
    let mut rest = &line[line.find("<<")?..];
    let payload: PResult<&str> =
        delimited("<<", take_until(0.., ">>"), ">>").parse_next(&mut rest);
    Some(payload.ok()?.trim())
}

/// Remove an embedded `<< S,... >>` struct marker from a line.
///
/// Only markers whose payload starts with the `S,` struct tag are
/// removed; every other stereotype is left in place for
/// [`decode`] to interpret after the line has been classified.
pub(crate) fn strip_struct_tag(line: &str) -> Cow<'_, str> {
    if let Some(start) = line.find("<<") {
        if let Some(end) = line.find(">>") {
            if end > start {
                let payload = line[start + 2..end].trim();
                if payload.starts_with("S,") {
                    return Cow::Owned(format!("{}{}", &line[..start], &line[end + 2..]));
                }
            }
        }
    }
    Cow::Borrowed(line)
}

/// Decode the stereotype on a type-open line into a Mermaid kind
/// annotation payload.
///
/// Returns `None` when the line carries no stereotype (or an empty
/// one), meaning no annotation line is emitted.
pub(crate) fn decode(line: &str) -> Option<String> {
    let payload = bracketed_payload(line)?;

    if payload.contains('(') && payload.contains(')') {
        // Kind letter plus color, e.g. (S,Aquamarine)
        let stripped: String = payload.chars().filter(|c| *c != '(' && *c != ')').collect();
        let first = stripped.split(',').next().unwrap_or("").trim();
        return match first {
            "" => None,
            "S" => Some("struct".to_string()),
            "I" => Some("interface".to_string()),
            "E" => Some("enum".to_string()),
            other => Some(other.to_string()),
        };
    }

    if payload.contains('[') && payload.contains(']') {
        // Generic type parameters, e.g. [T, K]
        let params = payload
            .chars()
            .filter(|c| *c != '[' && *c != ']')
            .collect::<String>()
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        return Some(format!("generic: {params}"));
    }

    if payload.is_empty() {
        None
    } else {
        Some(payload.to_string())
    }
}
