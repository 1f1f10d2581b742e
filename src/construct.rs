//! Building error chains.
//!
//! Every function that annotates an error accepts anything convertible into
//! an `Option<Error>` and returns `None` straight away when given `None`, so
//! the result of an operation can be annotated without checking it first.

use std::fmt;

use crate::error::Error;
use crate::fields::{Fields, Value};
use crate::stack::Stack;

/// Returns an error with the supplied message, recording the stack at the
/// point it was called.
///
/// # Example
///
/// ```
/// let err = errwrap::new("disk full");
///
/// assert_eq!(err.to_string(), "disk full");
/// ```
#[track_caller]
#[inline(never)]
pub fn new(message: impl Into<String>) -> Error {
    Error::fundamental(message.into(), Stack::capture(1))
}

/// Returns an error with a formatted message, recording the stack at the
/// point it was called.
///
/// See also the [`errorf!`](crate::errorf!) macro.
///
/// # Example
///
/// ```
/// let err = errwrap::errorf(format_args!("x={}", 5));
///
/// assert_eq!(err.to_string(), "x=5");
/// ```
#[track_caller]
#[inline(never)]
pub fn errorf(args: fmt::Arguments<'_>) -> Error {
    Error::fundamental(fmt::format(args), Stack::capture(1))
}

/// Annotates `err` with a message and the stack at the point `wrap` was
/// called.
///
/// Returns `None` if `err` is `None`.
///
/// # Example
///
/// ```
/// let err = errwrap::wrap(errwrap::new("disk full"), "write failed").unwrap();
///
/// assert_eq!(err.to_string(), "write failed: disk full");
/// assert!(errwrap::wrap(None, "write failed").is_none());
/// ```
#[must_use]
#[track_caller]
#[inline(never)]
pub fn wrap(err: impl Into<Option<Error>>, message: impl Into<String>) -> Option<Error> {
    let err: Option<Error> = err.into();
    Some(
        err?.annotate_message(message.into())
            .annotate_stack(Stack::capture(1)),
    )
}

/// Annotates `err` with a formatted message and the stack at the point
/// `wrapf` was called.
///
/// Returns `None` if `err` is `None`. See also the [`wrapf!`](crate::wrapf!)
/// macro.
#[must_use]
#[track_caller]
#[inline(never)]
pub fn wrapf(err: impl Into<Option<Error>>, args: fmt::Arguments<'_>) -> Option<Error> {
    let err: Option<Error> = err.into();
    Some(
        err?.annotate_message(fmt::format(args))
            .annotate_stack(Stack::capture(1)),
    )
}

/// Annotates `err` with a message, without recording a stack.
///
/// Returns `None` if `err` is `None`.
#[must_use]
pub fn with_message(err: impl Into<Option<Error>>, message: impl Into<String>) -> Option<Error> {
    let err: Option<Error> = err.into();
    Some(err?.annotate_message(message.into()))
}

/// Annotates `err` with a formatted message, without recording a stack.
///
/// Returns `None` if `err` is `None`. See also the
/// [`with_messagef!`](crate::with_messagef!) macro.
#[must_use]
pub fn with_messagef(err: impl Into<Option<Error>>, args: fmt::Arguments<'_>) -> Option<Error> {
    let err: Option<Error> = err.into();
    Some(err?.annotate_message(fmt::format(args)))
}

/// Annotates `err` with the stack at the point `with_stack` was called.
///
/// Returns `None` if `err` is `None`.
#[must_use]
#[track_caller]
#[inline(never)]
pub fn with_stack(err: impl Into<Option<Error>>) -> Option<Error> {
    let err: Option<Error> = err.into();
    Some(err?.annotate_stack(Stack::capture(1)))
}

/// Annotates `err` with a single field.
///
/// Returns `None` if `err` is `None`.
///
/// # Example
///
/// ```
/// use errwrap::Value;
///
/// let err = errwrap::with_field(errwrap::new("denied"), "user", "alice");
///
/// assert_eq!(errwrap::fields(err.as_ref()).get("user"), Some(&Value::from("alice")));
/// ```
#[must_use]
pub fn with_field(
    err: impl Into<Option<Error>>,
    key: impl Into<String>,
    value: impl Into<Value>,
) -> Option<Error> {
    let mut fields = Fields::new();
    let _ = fields.insert(key, value);
    let err: Option<Error> = err.into();
    Some(err?.annotate_fields(fields))
}

/// Annotates `err` with a copy of the supplied fields.
///
/// Returns `None` if `err` is `None`. An empty collection still adds a node to
/// the chain, contributing no fields.
#[must_use]
pub fn with_fields<I, K, V>(err: impl Into<Option<Error>>, fields: I) -> Option<Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let err: Option<Error> = err.into();
    Some(err?.annotate_fields(fields.into_iter().collect()))
}
