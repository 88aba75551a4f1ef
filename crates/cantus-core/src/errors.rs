//! Error types for cantus.
//!
//! A single `thiserror`-derived enum covers every failure in the library
//! crates.  Lookups that routinely find nothing (no commemoration on a day,
//! an unknown style tag) return `Option` instead and never reach this type.

use thiserror::Error;

/// The top-level error type used throughout cantus.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime failure (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A value could not be parsed or is not one of the accepted forms.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout cantus.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if the condition is false.
///
/// # Example
/// ```
/// use cantus_core::{ensure, errors::Error};
/// fn positive(x: i32) -> cantus_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use cantus_core::{fail, errors::Error};
/// fn lookup(tag: &str) -> cantus_core::errors::Result<u8> {
///     match tag {
///         "one" => Ok(1),
///         _ => fail!("no entry for `{tag}`"),
///     }
/// }
/// assert_eq!(lookup("one"), Ok(1));
/// assert!(matches!(lookup("two"), Err(Error::Runtime(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
