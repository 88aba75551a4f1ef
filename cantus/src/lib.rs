//! # cantus
//!
//! Liturgical calendar resolution and music-planning suggestions.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `cantus-*` crates.  It also ships the `cantus` command-line tool.
//!
//! ```rust
//! use cantus::liturgy::{resolve_season, LiturgicalSeason};
//! use cantus::time::Date;
//!
//! let date = Date::from_ymd(2024, 3, 31).unwrap();
//! assert_eq!(resolve_season(date).unwrap(), LiturgicalSeason::Easter);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and checking macros.
pub use cantus_core as core;

/// Date, weekday, and month types.
pub use cantus_time as time;

/// Easter, feast dates, seasons, profiles, and suggestions.
pub use cantus_liturgy as liturgy;
