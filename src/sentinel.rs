use std::error::Error as StdError;
use std::fmt;

use crate::error::Error;

/// A constant error that compares by its message.
///
/// Sentinels are declared once as `const`s and returned as the root cause of
/// an [`Error`], so callers can check which condition was hit however many
/// annotations were applied on the way out.
///
/// # Example
///
/// ```
/// use errwrap::Sentinel;
///
/// const EOF: Sentinel = Sentinel::new("EOF");
///
/// let err = errwrap::Error::from(EOF).wrap("read header");
///
/// assert_eq!(err.to_string(), "read header: EOF");
/// assert!(EOF.matches(&err));
/// assert_eq!(err.downcast_ref::<Sentinel>(), Some(&EOF));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sentinel(&'static str);

impl Sentinel {
    /// Create a sentinel with the supplied message.
    pub const fn new(message: &'static str) -> Self {
        Self(message)
    }

    /// The message of the sentinel.
    pub const fn message(self) -> &'static str {
        self.0
    }

    /// Returns `true` if the root cause of `err` is this sentinel.
    pub fn matches(self, err: &Error) -> bool {
        err.downcast_ref::<Self>() == Some(&self)
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl StdError for Sentinel {}

impl_from_external!(Sentinel);
