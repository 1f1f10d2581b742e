//! Walking error chains.

use core::iter::FusedIterator;

use crate::error::{Error, Message, Node};
use crate::fields::Fields;

/// Iterator over the nodes of an error chain, from the head to the root cause.
///
/// Created with [`Error::chain()`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(head: &'a Error) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl Error {
    /// The node at the end of the chain.
    ///
    /// Returns `self` if it doesn't wrap a cause.
    pub fn root_cause(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.cause() {
            err = cause;
        }
        err
    }

    /// Flatten the chain into the errors that describe it, root cause first.
    ///
    /// Every [`Kind::WithMessage`](crate::Kind::WithMessage) node becomes a
    /// plain error holding just its message, and the root cause is included
    /// as is. Nodes that only carry a stack or fields add nothing.
    ///
    /// # Example
    ///
    /// ```
    /// let err = errwrap::new("disk full").wrap("write failed").wrap("save failed");
    /// let unpacked: Vec<_> = err.unpack().iter().map(ToString::to_string).collect();
    ///
    /// assert_eq!(unpacked, ["disk full", "write failed", "save failed"]);
    /// ```
    pub fn unpack(&self) -> Vec<Error> {
        let mut unpacked: Vec<Error> = self
            .chain()
            .filter_map(|err| match err.node() {
                Node::WithMessage { message, .. } => {
                    Some(Error::external(Message(message.clone())))
                }
                Node::Fundamental { .. } | Node::External(_) => Some(err.clone()),
                Node::WithStack { .. } | Node::WithFields { .. } => None,
            })
            .collect();
        unpacked.reverse();
        unpacked
    }

    /// Collect the fields attached anywhere along the chain.
    ///
    /// The chain is walked from the head to the root cause and each node's
    /// fields are merged over those collected so far, so where a field is set
    /// more than once the value closest to the root cause wins.
    ///
    /// # Example
    ///
    /// ```
    /// use errwrap::Value;
    ///
    /// let err = errwrap::new("denied")
    ///     .with_field("user", "alice")
    ///     .with_field("attempt", 3)
    ///     .with_field("user", "bob");
    /// let fields = err.fields();
    ///
    /// assert_eq!(fields.get("attempt"), Some(&Value::Int(3)));
    /// assert_eq!(fields.get("user"), Some(&Value::from("alice")));
    /// ```
    pub fn fields(&self) -> Fields {
        let mut fields = Fields::new();
        for err in self.chain() {
            if let Some(own) = err.own_fields() {
                fields.merge(own);
            }
        }
        fields
    }
}

/// Returns the root cause of an error.
///
/// The chain is followed until reaching a node that wraps nothing, which is
/// returned. `None` yields `None`.
///
/// # Example
///
/// ```
/// let root = errwrap::new("disk full");
/// let err = errwrap::wrap(errwrap::wrap(root.clone(), "a"), "b");
///
/// assert_eq!(errwrap::cause(err.as_ref()), Some(&root));
/// assert_eq!(errwrap::cause(None), None);
/// ```
pub fn cause(err: Option<&Error>) -> Option<&Error> {
    err.map(Error::root_cause)
}

/// Flatten an error chain, root cause first. See [`Error::unpack()`].
///
/// `None` yields an empty `Vec`.
pub fn unpack(err: Option<&Error>) -> Vec<Error> {
    err.map(Error::unpack).unwrap_or_default()
}

/// Collect the fields of an error chain. See [`Error::fields()`].
///
/// `None` yields no fields.
pub fn fields(err: Option<&Error>) -> Fields {
    err.map(Error::fields).unwrap_or_default()
}
