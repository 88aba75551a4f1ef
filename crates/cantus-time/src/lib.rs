//! # cantus-time
//!
//! Gregorian calendar primitives: [`Date`], [`Weekday`], and [`Month`].
//!
//! Dates carry no timezone and no time of day.  Nothing in this crate reads
//! the system clock; callers always supply the date they are asking about.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

#[cfg(feature = "chrono")]
mod chrono_interop;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use month::Month;
pub use weekday::Weekday;
