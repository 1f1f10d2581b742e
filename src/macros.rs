/// Returns an error with a formatted message, recording the stack at the
/// point it was invoked.
///
/// # Example
///
/// ```
/// let err = errwrap::errorf!("x={}", 5);
///
/// assert_eq!(err.to_string(), "x=5");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::errorf(::core::format_args!($($arg)*))
    };
}

/// Annotates an error with a formatted message and the stack at the point it
/// was invoked.
///
/// Returns `None` if the error is `None`.
///
/// # Example
///
/// ```
/// let err = errwrap::wrapf!(errwrap::new("EOF"), "read {} bytes", 3).unwrap();
///
/// assert_eq!(err.to_string(), "read 3 bytes: EOF");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrapf($err, ::core::format_args!($($arg)*))
    };
}

/// Annotates an error with a formatted message, without recording a stack.
///
/// Returns `None` if the error is `None`.
#[macro_export]
macro_rules! with_messagef {
    ($err:expr, $($arg:tt)*) => {
        $crate::with_messagef($err, ::core::format_args!($($arg)*))
    };
}

macro_rules! impl_from_external {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Error {
                fn from(error: $ty) -> Self {
                    Self::external(error)
                }
            }
        )+
    };
}
