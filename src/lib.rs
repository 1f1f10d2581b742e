//! Annotate errors with call stacks, messages and structured fields.
//!
//! # Basic usage
//!
//! ```rust
//! use errwrap::ResultExt;
//!
//! fn read_config(path: &str) -> errwrap::Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_field("path", path)
//!         .wrap("read config failed")
//! }
//!
//! let err = read_config("/does/not/exist").unwrap_err();
//!
//! assert!(err.to_string().starts_with("read config failed: "));
//! assert!(err.is::<std::io::Error>());
//! assert_eq!(err.fields().get("path").and_then(|v| v.as_str()), Some("/does/not/exist"));
//! ```
//!
//! Free functions mirror the methods on [`Error`], but accept and return an
//! `Option<Error>` so a missing error passes straight through:
//!
//! ```rust
//! let err = errwrap::wrap(errwrap::new("disk full"), "write failed");
//!
//! assert_eq!(err.unwrap().to_string(), "write failed: disk full");
//! assert!(errwrap::wrap(None, "write failed").is_none());
//! ```
//!
//! Conditions callers need to test for are declared as constant
//! [`Sentinel`]s, which still match once the error has been annotated:
//!
//! ```rust
//! use errwrap::{Error, Sentinel};
//!
//! const NOT_FOUND: Sentinel = Sentinel::new("not found");
//!
//! let err = Error::from(NOT_FOUND).wrap("lookup user");
//!
//! assert!(NOT_FOUND.matches(&err));
//! ```
//!
//! # Formatting
//!
//! - `{}` writes the messages of the chain, outermost first, joined by `": "`.
//! - `{:?}` writes the same, quoted.
//! - `{:#}` and `{:#?}` write the root cause first, followed by every stack,
//!   message and field attached on the way out.
//!
//! # Features
//!
//! - `full-backtrace` (default): record the full call stack at every
//!   annotation. Without it only the calling location is recorded.
//! - `log` (default): expose error fields as `log` key/values.
//! - `anyhow`: convert from `anyhow::Error`.

#![deny(unsafe_code, unused_qualifications, clippy::pedantic)]
#![forbid(
    anonymous_parameters,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

#[macro_use]
mod macros;

mod chain;
mod construct;
pub mod error;
mod ext;
mod fields;
mod sentinel;
mod stack;
mod support;

pub use self::chain::{cause, fields, unpack, Chain};
pub use self::construct::{
    errorf, new, with_field, with_fields, with_message, with_messagef, with_stack, wrap, wrapf,
};
pub use self::error::{BoxError, Error, Kind, Result};
pub use self::ext::{OptionExt, ResultExt};
pub use self::fields::{Fields, Iter, Value};
pub use self::sentinel::Sentinel;
pub use self::stack::{Stack, MAX_DEPTH};
