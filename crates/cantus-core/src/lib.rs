//! # cantus-core
//!
//! Core error definitions shared across the cantus workspace.
//!
//! Every fallible operation in the other crates returns [`Result`], and the
//! [`ensure!`] macro is the usual way of producing an error from a violated
//! precondition; [`fail!`] returns a runtime error unconditionally.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error type and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
