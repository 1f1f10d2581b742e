#![allow(unused_macros, unused_imports, dead_code)]

pub use errwrap::*;
pub use indoc::indoc;

use std::io;

macro_rules! assert_str_eq {
    ($actual:expr, $expected:expr) => {{
        let actual = &$actual[..];
        let expected = &$expected[..];
        if actual != expected {
            panic!(
                indoc! {"
                string not expected value:
                ============================EXPECTED==========================
                {}
                =============================ACTUAL===========================
                {}
                ==============================DIFF============================
                {}
                ==============================================================
            "},
                expected,
                actual,
                colored_diff::PrettyDifference { expected, actual },
            );
        }
    }};
}

macro_rules! assert_error_display_eq {
    ($err:expr, $format:expr, $expected:expr) => {
        assert_str_eq!(format!($format, $err), $expected)
    };
}

/// An error without a stack, so its verbose form is predictable.
pub fn io_error(message: &str) -> Error {
    Error::external(io::Error::new(io::ErrorKind::Other, message.to_owned()))
}
