use std::fmt::{self, Write};

use super::{Error, Node};

impl Error {
    /// Writes the description of the chain.
    ///
    /// Only [`Kind::WithMessage`] nodes add to the description of their
    /// cause, the other wrappers pass it through unchanged.
    ///
    /// [`Kind::WithMessage`]: crate::Kind::WithMessage
    fn write_description(&self, w: &mut dyn Write) -> fmt::Result {
        let mut node = self;
        loop {
            match node.node() {
                Node::Fundamental { message, .. } => return w.write_str(message),
                Node::External(error) => return write!(w, "{}", error),
                Node::WithMessage { cause, message } => {
                    w.write_str(message)?;
                    w.write_str(": ")?;
                    node = cause;
                }
                Node::WithStack { cause, .. } | Node::WithFields { cause, .. } => node = cause,
            }
        }
    }

    /// Writes the verbose form of the chain, root cause first.
    fn write_verbose(&self, w: &mut dyn Write) -> fmt::Result {
        match self.node() {
            Node::Fundamental { message, stack } => {
                w.write_str(message)?;
                stack.write(w)
            }
            Node::WithStack { cause, stack } => {
                cause.write_verbose(w)?;
                stack.write(w)
            }
            Node::WithMessage { cause, message } => {
                cause.write_verbose(w)?;
                w.write_char('\n')?;
                w.write_str(message)
            }
            Node::WithFields { cause, fields } => {
                cause.write_verbose(w)?;
                for (key, value) in fields {
                    write!(w, "\n  {}: {}", key, value)?;
                }
                Ok(())
            }
            Node::External(error) => write!(w, "{:#}", error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_verbose(f)
        } else {
            self.write_description(f)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_verbose(f)
        } else {
            let mut description = String::new();
            self.write_description(&mut description)?;
            fmt::Debug::fmt(description.as_str(), f)
        }
    }
}
