//! Annotating errors in place on `Result` and `Option`.

use crate::error::Error;
use crate::fields::Value;
use crate::stack::Stack;

/// Annotate the error of a `Result` in place.
///
/// The error is converted into an [`Error`] first, so foreign errors with a
/// `From` conversion can be annotated directly.
///
/// # Example
///
/// ```
/// use errwrap::ResultExt;
///
/// fn parse(s: &str) -> errwrap::Result<u8> {
///     s.parse::<u8>().with_field("input", s).wrap("parse failed")
/// }
///
/// let err = parse("x").unwrap_err();
///
/// assert_eq!(err.to_string(), "parse failed: invalid digit found in string");
/// assert_eq!(err.fields().get("input").and_then(|v| v.as_str()), Some("x"));
/// ```
pub trait ResultExt<T> {
    /// See [`Error::wrap()`].
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn wrap(self, message: impl Into<String>) -> Result<T, Error>;

    /// Like [`ResultExt::wrap()`], but the message is only built on error.
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn wrap_with<M, F>(self, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// See [`Error::with_message()`].
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn with_message(self, message: impl Into<String>) -> Result<T, Error>;

    /// See [`Error::with_stack()`].
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn with_stack(self) -> Result<T, Error>;

    /// See [`Error::with_field()`].
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn with_field(self, key: impl Into<String>, value: impl Into<Value>) -> Result<T, Error>;

    /// See [`Error::with_fields()`].
    ///
    /// # Errors
    ///
    /// Returns the annotated error if `self` is an error.
    fn with_fields<I, K, V>(self, fields: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[track_caller]
    #[inline(never)]
    fn wrap(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(Into::<Error>::into(err)
                .annotate_message(message.into())
                .annotate_stack(Stack::capture(1))),
        }
    }

    #[track_caller]
    #[inline(never)]
    fn wrap_with<M, F>(self, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(Into::<Error>::into(err)
                .annotate_message(f().into())
                .annotate_stack(Stack::capture(1))),
        }
    }

    fn with_message(self, message: impl Into<String>) -> Result<T, Error> {
        self.map_err(|err| Into::<Error>::into(err).with_message(message))
    }

    #[track_caller]
    #[inline(never)]
    fn with_stack(self) -> Result<T, Error> {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(Into::<Error>::into(err).annotate_stack(Stack::capture(1))),
        }
    }

    fn with_field(self, key: impl Into<String>, value: impl Into<Value>) -> Result<T, Error> {
        self.map_err(|err| Into::<Error>::into(err).with_field(key, value))
    }

    fn with_fields<I, K, V>(self, fields: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.map_err(|err| Into::<Error>::into(err).with_fields(fields))
    }
}

/// Turn a missing value into an [`Error`].
pub trait OptionExt<T> {
    /// Returns the value, or a new error with the supplied message recording
    /// the stack at the point `ok_or_new` was called.
    ///
    /// # Errors
    ///
    /// Returns a new error if `self` is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use errwrap::OptionExt;
    ///
    /// let err = None::<u8>.ok_or_new("missing").unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "missing");
    /// ```
    fn ok_or_new(self, message: impl Into<String>) -> Result<T, Error>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    #[inline(never)]
    fn ok_or_new(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::fundamental(message.into(), Stack::capture(1))),
        }
    }
}
