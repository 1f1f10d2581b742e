use std::io;
use std::net::AddrParseError;
use std::string::FromUtf8Error;

use crate::error::{BoxError, Error};

impl_from_external!(io::Error, AddrParseError, FromUtf8Error);

impl From<BoxError> for Error {
    fn from(error: BoxError) -> Self {
        Self::from_boxed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, ResultExt};

    #[test]
    fn test_io_error_is_external() {
        let err = Error::from(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"));
        assert_eq!(err.kind(), Kind::External);
        assert_eq!(err.to_string(), "EOF");
        assert!(err.stack().is_none());
    }

    #[test]
    fn test_annotate_foreign_result() {
        let result: Result<(), io::Error> = Err(io::ErrorKind::NotFound.into());
        let err = result.wrap("open config").unwrap_err();
        assert!(err.is::<io::Error>());
        assert_eq!(
            err.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_boxed_error_roundtrip() {
        let err = crate::new("root");
        let boxed: BoxError = err.clone().into();
        assert_eq!(Error::from(boxed), err);
    }
}
