//! Liturgical season classification.
//!
//! A date is classified by interval membership against the feast dates of
//! its own calendar year, tested in a fixed order:
//!
//! 1. `[Advent start, Christmas)` → Advent
//! 2. on or after Christmas, or on or before January 13 → Christmas
//! 3. `[Ash Wednesday, Easter)` → Lent
//! 4. `[Easter, Pentecost]` → Easter (Pentecost day included)
//! 5. anything else → Ordinary Time
//!
//! The January tail of the Christmas season belongs to the previous
//! liturgical year; its bound (January 13) is fixed, so no Easter computation
//! for the previous year is needed.

use std::str::FromStr;

use cantus_core::ensure;
use cantus_core::errors::{Error, Result};
use cantus_time::{Date, Month};
use serde::Serialize;
use tracing::trace;

use crate::year_dates::LiturgicalYearDates;

/// Last day of the Christmas season in January (Baptism of the Lord).
pub const CHRISTMAS_TAIL_END_DAY: u8 = 13;

/// A liturgical season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiturgicalSeason {
    /// From the first Sunday of Advent to Christmas Eve.
    Advent,
    /// From Christmas to January 13.
    Christmas,
    /// From Ash Wednesday to Holy Saturday.
    Lent,
    /// From Easter Sunday to Pentecost, inclusive.
    Easter,
    /// Everything outside the other seasons.
    OrdinaryTime,
    /// Pentecost.  Never produced by [`resolve_season`], which folds the day
    /// into Easter; kept so its profile can be requested by name.
    Pentecost,
}

impl LiturgicalSeason {
    /// Every season.
    pub const ALL: [LiturgicalSeason; 6] = [
        LiturgicalSeason::Advent,
        LiturgicalSeason::Christmas,
        LiturgicalSeason::Lent,
        LiturgicalSeason::Easter,
        LiturgicalSeason::OrdinaryTime,
        LiturgicalSeason::Pentecost,
    ];

    /// English name.
    pub fn name(&self) -> &'static str {
        match self {
            LiturgicalSeason::Advent => "Advent",
            LiturgicalSeason::Christmas => "Christmas",
            LiturgicalSeason::Lent => "Lent",
            LiturgicalSeason::Easter => "Easter",
            LiturgicalSeason::OrdinaryTime => "Ordinary Time",
            LiturgicalSeason::Pentecost => "Pentecost",
        }
    }

    /// Portuguese name, as used in the suggestion tables.
    pub fn local_name(&self) -> &'static str {
        match self {
            LiturgicalSeason::Advent => "Advento",
            LiturgicalSeason::Christmas => "Natal",
            LiturgicalSeason::Lent => "Quaresma",
            LiturgicalSeason::Easter => "Páscoa",
            LiturgicalSeason::OrdinaryTime => "Tempo Comum",
            LiturgicalSeason::Pentecost => "Pentecostes",
        }
    }
}

impl std::fmt::Display for LiturgicalSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LiturgicalSeason {
    type Err = Error;

    /// Parse an English or Portuguese season name.  Case, spaces,
    /// underscores, and hyphens are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        let season = match key.as_str() {
            "advent" | "advento" => LiturgicalSeason::Advent,
            "christmas" | "natal" => LiturgicalSeason::Christmas,
            "lent" | "quaresma" => LiturgicalSeason::Lent,
            "easter" | "páscoa" | "pascoa" => LiturgicalSeason::Easter,
            "ordinarytime" | "ordinary" | "tempocomum" => LiturgicalSeason::OrdinaryTime,
            "pentecost" | "pentecostes" => LiturgicalSeason::Pentecost,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "`{s}` is not a liturgical season"
                )))
            }
        };
        Ok(season)
    }
}

/// Return the liturgical season containing `date`.
///
/// # Errors
/// Returns `Error::Date` if the feast dates of `date`'s year cannot be
/// computed (year outside the supported range).
pub fn resolve_season(date: Date) -> Result<LiturgicalSeason> {
    let dates = LiturgicalYearDates::for_year(date.year())?;
    classify(&dates, date)
}

/// Classify `date` against precomputed feast dates of its own year.
///
/// # Errors
/// Returns `Error::Precondition` if `dates` belong to a different year.
pub fn classify(dates: &LiturgicalYearDates, date: Date) -> Result<LiturgicalSeason> {
    let year = date.year();
    ensure!(
        dates.year() == year,
        "feast dates for {} cannot classify {date:?}",
        dates.year()
    );
    let christmas_tail_end = Date::new(year, Month::January, CHRISTMAS_TAIL_END_DAY)?;

    let season = if dates.advent_start() <= date && date < dates.christmas() {
        LiturgicalSeason::Advent
    } else if date >= dates.christmas() || date <= christmas_tail_end {
        LiturgicalSeason::Christmas
    } else if dates.ash_wednesday() <= date && date < dates.easter() {
        LiturgicalSeason::Lent
    } else if dates.easter() <= date && date <= dates.pentecost() {
        LiturgicalSeason::Easter
    } else {
        LiturgicalSeason::OrdinaryTime
    };
    trace!(%date, %season, "classified");
    Ok(season)
}

/// A maximal run of consecutive days sharing a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonSpan {
    /// The season.
    pub season: LiturgicalSeason,
    /// First day of the run.
    pub start: Date,
    /// Last day of the run, inclusive.
    pub end: Date,
}

/// Partition calendar year `year` into consecutive season runs.
///
/// The runs cover January 1 through December 31 without gaps; a typical
/// year yields Christmas, Ordinary Time, Lent, Easter, Ordinary Time,
/// Advent, Christmas.
pub fn season_spans(year: u16) -> Result<Vec<SeasonSpan>> {
    let dates = LiturgicalYearDates::for_year(year)?;
    let mut spans: Vec<SeasonSpan> = Vec::new();
    for date in Date::days_of_year(year)? {
        let season = classify(&dates, date)?;
        match spans.last_mut() {
            Some(span) if span.season == season => span.end = date,
            _ => spans.push(SeasonSpan {
                season,
                start: date,
                end: date,
            }),
        }
    }
    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn season(y: u16, m: u8, d: u8) -> LiturgicalSeason {
        resolve_season(date(y, m, d)).unwrap()
    }

    #[test]
    fn christmas_boundary_2024() {
        assert_eq!(season(2024, 12, 24), LiturgicalSeason::Advent);
        assert_eq!(season(2024, 12, 25), LiturgicalSeason::Christmas);
        assert_eq!(season(2024, 12, 31), LiturgicalSeason::Christmas);
    }

    #[test]
    fn christmas_tail_in_january() {
        assert_eq!(season(2025, 1, 1), LiturgicalSeason::Christmas);
        assert_eq!(season(2025, 1, 13), LiturgicalSeason::Christmas);
        assert_eq!(season(2025, 1, 14), LiturgicalSeason::OrdinaryTime);
    }

    #[test]
    fn advent_boundary_2024() {
        assert_eq!(season(2024, 11, 30), LiturgicalSeason::OrdinaryTime);
        assert_eq!(season(2024, 12, 1), LiturgicalSeason::Advent);
    }

    #[test]
    fn lent_and_easter_2024() {
        assert_eq!(season(2024, 2, 13), LiturgicalSeason::OrdinaryTime);
        assert_eq!(season(2024, 2, 14), LiturgicalSeason::Lent);
        assert_eq!(season(2024, 3, 30), LiturgicalSeason::Lent);
        assert_eq!(season(2024, 3, 31), LiturgicalSeason::Easter);
        assert_eq!(season(2024, 5, 19), LiturgicalSeason::Easter);
        assert_eq!(season(2024, 5, 20), LiturgicalSeason::OrdinaryTime);
    }

    #[test]
    fn classify_rejects_other_year() {
        let dates = LiturgicalYearDates::for_year(2023).unwrap();
        assert!(matches!(
            classify(&dates, date(2024, 6, 1)),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn parse_names() {
        assert_eq!("Advent".parse::<LiturgicalSeason>().unwrap(), LiturgicalSeason::Advent);
        assert_eq!(
            "Tempo Comum".parse::<LiturgicalSeason>().unwrap(),
            LiturgicalSeason::OrdinaryTime
        );
        assert_eq!(
            "ordinary_time".parse::<LiturgicalSeason>().unwrap(),
            LiturgicalSeason::OrdinaryTime
        );
        assert_eq!("PÁSCOA".parse::<LiturgicalSeason>().unwrap(), LiturgicalSeason::Easter);
        assert!("Septuagesima".parse::<LiturgicalSeason>().is_err());
        for s in LiturgicalSeason::ALL {
            assert_eq!(s.name().parse::<LiturgicalSeason>().unwrap(), s);
            assert_eq!(s.local_name().parse::<LiturgicalSeason>().unwrap(), s);
        }
    }

    #[test]
    fn spans_2024() {
        let spans = season_spans(2024).unwrap();
        let order: Vec<_> = spans.iter().map(|s| s.season).collect();
        assert_eq!(
            order,
            [
                LiturgicalSeason::Christmas,
                LiturgicalSeason::OrdinaryTime,
                LiturgicalSeason::Lent,
                LiturgicalSeason::Easter,
                LiturgicalSeason::OrdinaryTime,
                LiturgicalSeason::Advent,
                LiturgicalSeason::Christmas,
            ]
        );
        assert_eq!(spans[2].start, date(2024, 2, 14));
        assert_eq!(spans[3].end, date(2024, 5, 19));
    }
}
