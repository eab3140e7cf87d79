//! Payload parsers for declaration lines.
//!
//! These small [`winnow`] parsers pull the declared type name out of a
//! `class`/`interface` opening line and the namespace token out of a
//! `namespace` opening line. A parser that fails simply means the line
//! does not have that shape; no error ever escapes this module.

use winnow::{
    Parser as _,
    combinator::delimited,
    error::{ContextError, ErrMode},
    token::{take_till, take_until},
};

type PResult<O> = Result<O, ErrMode<ContextError>>;

/// Parse a non-empty double-quoted name, returning the unquoted payload.
fn quoted_name<'s>(input: &mut &'s str) -> PResult<&'s str> {
    delimited('"', take_until(1.., "\""), '"').parse_next(input)
}

/// Parse a bare name: everything up to the first whitespace.
fn bare_name<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_till(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Extract the declared name from a type-open line.
///
/// The declaring keyword is located first (`interface` takes precedence
/// over `class`, matching the classification order); the remainder is
/// then parsed as either a quoted or a bare name:
///
/// ```text
/// class "User" << (S,Aquamarine) >> {                       -> User
/// interface "AllowedResponseTypes" as ART_generic_D_I {     -> AllowedResponseTypes
/// class User {                                              -> User
/// ```
///
/// Returns `None` when no keyword is present or the payload is empty,
/// in which case the caller emits nothing for the line.
pub(crate) fn declared_name(line: &str) -> Option<&str> {
    let rest = line
        .split_once("interface ")
        .or_else(|| line.split_once("class "))
        .map(|(_, rest)| rest)?;
    let mut rest = rest.trim_start();
    if rest.starts_with('"') {
        quoted_name.parse_next(&mut rest).ok()
    } else {
        bare_name.parse_next(&mut rest).ok()
    }
}

/// Extract the namespace name from a `namespace` opening line.
///
/// Takes the first whitespace-delimited token after the keyword and
/// strips any trailing brace marker, so `namespace example {` and
/// `namespace example{` both yield `example`. Returns `None` when the
/// keyword has no payload at all.
pub(crate) fn namespace_name(line: &str) -> Option<&str> {
    let mut rest = line.strip_prefix("namespace ")?.trim_start();
    let token = bare_name.parse_next(&mut rest).ok()?;
    Some(token.trim_end_matches('{'))
}
