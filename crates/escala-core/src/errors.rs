//! Error types for escala.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below.  The `ensure!` and `fail!`
//! macros are shorthands for returning one of its message-carrying variants.

use thiserror::Error;

/// The top-level error type used throughout escala.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A rotating rule without an anchor day, or with a non-positive period.
    #[error("invalid rule configuration: {0}")]
    InvalidRuleConfiguration(String),

    /// A vacation interval that ends before it starts.
    #[error("invalid vacation interval: {0}")]
    InvalidInterval(String),

    /// A (year, month, day) triple that does not name a real calendar day.
    #[error("invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    /// Day arithmetic left the supported date range.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// No roster member carries the given id.
    #[error("member not found: {0}")]
    MemberNotFound(String),

    /// A roster member with the given id already exists.
    #[error("duplicate member id: {0}")]
    DuplicateMember(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed textual input (dates, JSON documents).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid settings.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout escala.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

/// Return `Err(Error::$kind(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use escala_core::{ensure, errors::Error};
/// fn period(p: i64) -> escala_core::errors::Result<i64> {
///     ensure!(p > 0, InvalidRuleConfiguration, "period must be positive, got {p}");
///     Ok(p)
/// }
/// assert!(period(6).is_ok());
/// assert!(matches!(period(0), Err(Error::InvalidRuleConfiguration(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::$kind(...))` immediately.
///
/// # Example
/// ```
/// use escala_core::{fail, errors::Error};
/// fn always_err() -> escala_core::errors::Result<()> {
///     fail!(InvalidArgument, "something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}
