//! The error chain.
//!
//! An [`Error`] is the head of a chain of nodes. Every node is one of the
//! variants named by [`Kind`]:
//!
//! | Kind          | Payload         | Cause          |
//! | ------------- | --------------- | -------------- |
//! | `Fundamental` | message, stack  | none           |
//! | `WithStack`   | stack           | the annotated  |
//! | `WithMessage` | message         | the annotated  |
//! | `WithFields`  | fields          | the annotated  |
//! | `External`    | a foreign error | none           |
//!
//! Nodes are immutable once built and shared by reference counting, so
//! cloning an [`Error`] is cheap and never copies the chain. Two errors are
//! equal only if they are the same node.

mod display;

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::chain::Chain;
use crate::fields::{Fields, Value};
use crate::stack::Stack;

/// Boxed foreign error stored by [`Kind::External`] nodes.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// `Result` with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The variant of a node in an error chain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    /// A message and the stack where it was created. Terminates the chain.
    Fundamental,
    /// The stack where the cause was annotated.
    WithStack,
    /// A message prefixed to the description of the cause.
    WithMessage,
    /// Structured fields attached to the cause.
    WithFields,
    /// An error foreign to this crate. Terminates the chain.
    External,
}

impl Kind {
    /// Returns `true` if nodes of this kind wrap a cause.
    pub fn is_wrapper(self) -> bool {
        matches!(self, Self::WithStack | Self::WithMessage | Self::WithFields)
    }
}

/// An error annotated with call stacks, messages and fields.
///
/// See the [module documentation](crate::error) for the chain layout.
///
/// # Formatting
///
/// - `{}` writes the description: the message of the root cause prefixed by
///   every message annotation, outermost first (`"outer: inner: root"`).
/// - `{:?}` writes the description quoted and escaped.
/// - `{:#}` and `{:#?}` write the verbose form: the root cause with its stack,
///   followed by every annotation in the order applied, each with its stack,
///   message or fields.
///
/// # Example
///
/// ```
/// let err = errwrap::new("disk full").wrap("write failed");
///
/// assert_eq!(err.to_string(), "write failed: disk full");
/// assert_eq!(err.root_cause().to_string(), "disk full");
/// ```
#[derive(Clone)]
#[must_use = "error must be handled"]
pub struct Error {
    node: Arc<Node>,
}

pub(crate) enum Node {
    Fundamental { message: String, stack: Stack },
    WithStack { cause: Error, stack: Stack },
    WithMessage { cause: Error, message: String },
    WithFields { cause: Error, fields: Fields },
    External(BoxError),
}

impl Error {
    /// Create an error with the supplied message, recording the stack at the
    /// point it was called.
    #[track_caller]
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self::fundamental(message.into(), Stack::capture(1))
    }

    /// Create an error from a foreign error.
    ///
    /// No stack is recorded. If `error` is itself an [`Error`], it is returned
    /// as is.
    pub fn external<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Create an error from a boxed foreign error.
    ///
    /// If the box holds an [`Error`], it is unboxed rather than wrapped again.
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<Self>() {
            Ok(error) => *error,
            Err(error) => Self::from_node(Node::External(error)),
        }
    }

    /// Annotate `self` with a message and the stack at the point `wrap` was
    /// called.
    ///
    /// The description becomes `"<message>: <description of self>"`.
    #[track_caller]
    #[inline(never)]
    pub fn wrap(self, message: impl Into<String>) -> Self {
        self.annotate_message(message.into())
            .annotate_stack(Stack::capture(1))
    }

    /// Annotate `self` with a message, without recording a stack.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.annotate_message(message.into())
    }

    /// Annotate `self` with the stack at the point `with_stack` was called.
    #[track_caller]
    #[inline(never)]
    pub fn with_stack(self) -> Self {
        self.annotate_stack(Stack::capture(1))
    }

    /// Annotate `self` with a single field.
    pub fn with_field(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut fields = Fields::new();
        let _ = fields.insert(key, value);
        self.annotate_fields(fields)
    }

    /// Annotate `self` with a copy of the supplied fields.
    ///
    /// An empty collection still adds a node to the chain.
    pub fn with_fields<I, K, V>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.annotate_fields(fields.into_iter().collect())
    }

    /// The variant of this node.
    pub fn kind(&self) -> Kind {
        match *self.node {
            Node::Fundamental { .. } => Kind::Fundamental,
            Node::WithStack { .. } => Kind::WithStack,
            Node::WithMessage { .. } => Kind::WithMessage,
            Node::WithFields { .. } => Kind::WithFields,
            Node::External(_) => Kind::External,
        }
    }

    /// The error this node wraps, or `None` if it terminates the chain.
    pub fn cause(&self) -> Option<&Error> {
        match &*self.node {
            Node::WithStack { cause, .. }
            | Node::WithMessage { cause, .. }
            | Node::WithFields { cause, .. } => Some(cause),
            Node::Fundamental { .. } | Node::External(_) => None,
        }
    }

    /// The message carried by this node, if it is a
    /// [`Kind::Fundamental`] or [`Kind::WithMessage`].
    pub fn message(&self) -> Option<&str> {
        match &*self.node {
            Node::Fundamental { message, .. } | Node::WithMessage { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The stack recorded by this node, if it is a [`Kind::Fundamental`] or
    /// [`Kind::WithStack`].
    pub fn stack(&self) -> Option<&Stack> {
        match &*self.node {
            Node::Fundamental { stack, .. } | Node::WithStack { stack, .. } => Some(stack),
            _ => None,
        }
    }

    /// The fields attached by this node alone, if it is a
    /// [`Kind::WithFields`].
    ///
    /// See [`Error::fields()`] for the fields of the whole chain.
    pub fn own_fields(&self) -> Option<&Fields> {
        match &*self.node {
            Node::WithFields { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// The foreign error held by this node, if it is a [`Kind::External`].
    pub fn as_external(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match &*self.node {
            Node::External(error) => Some(error.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` if the foreign error at the root of the chain is an `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Returns a reference to the foreign error at the root of the chain if it
    /// is an `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.root_cause().as_external()?.downcast_ref::<E>()
    }

    /// Iterate over the nodes of the chain, starting with `self`.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    pub(crate) fn fundamental(message: String, stack: Stack) -> Self {
        Self::from_node(Node::Fundamental { message, stack })
    }

    pub(crate) fn annotate_stack(self, stack: Stack) -> Self {
        Self::from_node(Node::WithStack { cause: self, stack })
    }

    pub(crate) fn annotate_message(self, message: String) -> Self {
        Self::from_node(Node::WithMessage {
            cause: self,
            message,
        })
    }

    pub(crate) fn annotate_fields(self, fields: Fields) -> Self {
        Self::from_node(Node::WithFields {
            cause: self,
            fields,
        })
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Error {}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.node {
            Node::External(error) => error.source(),
            _ => {
                let cause: &Error = self.cause()?;
                Some(cause)
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
// Message

/// A bare message without a stack, used when flattening chains.
#[derive(Debug)]
pub(crate) struct Message(pub(crate) String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_kind_is_wrapper() {
        assert!(!Kind::Fundamental.is_wrapper());
        assert!(Kind::WithStack.is_wrapper());
        assert!(Kind::WithMessage.is_wrapper());
        assert!(Kind::WithFields.is_wrapper());
        assert!(!Kind::External.is_wrapper());
    }

    #[test]
    fn test_from_boxed_unwraps_error() {
        let err = Error::new("boxed");
        let boxed: BoxError = Box::new(err.clone());
        assert_eq!(Error::from_boxed(boxed), err);
        assert_eq!(Error::external(err.clone()), err);
    }

    #[test]
    fn test_source_follows_cause() {
        let root = Error::new("root");
        let err = root.clone().with_message("outer");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("root"));
        assert!(root.source().is_none());
    }
}
