//! # cantus-liturgy
//!
//! Liturgical calendar resolution: Easter, the feast dates of a year, the
//! season containing a date, and the musical suggestions attached to each
//! season.
//!
//! Every function is pure.  Nothing reads the system clock: pass the date
//! you are asking about.
//!
//! ```
//! use cantus_liturgy::{resolve_season, season_profile, LiturgicalSeason};
//! use cantus_time::Date;
//!
//! let today = Date::from_ymd(2024, 12, 24).unwrap();
//! let season = resolve_season(today).unwrap();
//! assert_eq!(season, LiturgicalSeason::Advent);
//! assert_eq!(season_profile(season).color, "#663399");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Fixed-date commemorations.
pub mod commemoration;

/// A/B/C lectionary cycle.
pub mod cycle;

/// Gregorian Easter computation.
pub mod easter;

/// Style and key catalogs.
pub mod music;

/// Season profiles (color, style, themes, keys, instruments).
pub mod profile;

/// Season classification.
pub mod season;

/// Per-date summaries.
pub mod summary;

/// Feast dates of a calendar year.
pub mod year_dates;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use commemoration::{commemoration_for, commemoration_on};
pub use cycle::{liturgical_year_letter, YearLetter};
pub use easter::easter_sunday;
pub use music::{style_info, KeyInfo, StyleInfo};
pub use profile::{season_profile, season_profile_by_name, SeasonProfile};
pub use season::{classify, resolve_season, season_spans, LiturgicalSeason, SeasonSpan};
pub use summary::{LiturgicalSummary, MusicalSuggestions};
pub use year_dates::{Feast, LiturgicalYearDates};
