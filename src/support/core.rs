use core::char::ParseCharError;
use core::num::{ParseFloatError, ParseIntError, TryFromIntError};
use core::str::{ParseBoolError, Utf8Error};

use crate::error::Error;

impl_from_external!(
    ParseIntError,
    ParseFloatError,
    ParseBoolError,
    ParseCharError,
    TryFromIntError,
    Utf8Error,
    core::fmt::Error,
);
