//! Key feast dates of a liturgical year.
//!
//! The moving feasts hang off Easter; Advent hangs off the weekday of
//! Christmas.  Everything is computed from the calendar year alone.

use cantus_core::errors::Result;
use cantus_time::{Date, Month, Weekday};
use serde::Serialize;
use tracing::trace;

use crate::easter::easter_sunday;

/// Days from Ash Wednesday to Easter Sunday.
pub const ASH_WEDNESDAY_OFFSET: i32 = -46;

/// Days from Easter Sunday to Ascension Thursday.
pub const ASCENSION_OFFSET: i32 = 39;

/// Days from Easter Sunday to Pentecost.
pub const PENTECOST_OFFSET: i32 = 49;

/// A named feast tracked by [`LiturgicalYearDates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feast {
    /// Epiphany of the Lord (January 6).
    Epiphany,
    /// Presentation of the Lord (February 2).
    Candlemas,
    /// Ash Wednesday, start of Lent.
    AshWednesday,
    /// Annunciation of the Lord (March 25).
    Annunciation,
    /// Easter Sunday.
    Easter,
    /// Ascension of the Lord.
    Ascension,
    /// Pentecost Sunday.
    Pentecost,
    /// Assumption of Mary (August 15).
    Assumption,
    /// All Saints (November 1).
    AllSaints,
    /// Christ the King, last Sunday before Advent.
    ChristTheKing,
    /// First Sunday of Advent.
    AdventStart,
    /// Christmas (December 25).
    Christmas,
}

impl Feast {
    /// Every feast, in declaration order.
    pub const ALL: [Feast; 12] = [
        Feast::Epiphany,
        Feast::Candlemas,
        Feast::AshWednesday,
        Feast::Annunciation,
        Feast::Easter,
        Feast::Ascension,
        Feast::Pentecost,
        Feast::Assumption,
        Feast::AllSaints,
        Feast::ChristTheKing,
        Feast::AdventStart,
        Feast::Christmas,
    ];

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            Feast::Epiphany => "Epiphany",
            Feast::Candlemas => "Candlemas",
            Feast::AshWednesday => "Ash Wednesday",
            Feast::Annunciation => "Annunciation",
            Feast::Easter => "Easter Sunday",
            Feast::Ascension => "Ascension",
            Feast::Pentecost => "Pentecost",
            Feast::Assumption => "Assumption",
            Feast::AllSaints => "All Saints",
            Feast::ChristTheKing => "Christ the King",
            Feast::AdventStart => "First Sunday of Advent",
            Feast::Christmas => "Christmas",
        }
    }
}

impl std::fmt::Display for Feast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The key feast dates of one calendar year.
///
/// Built with [`LiturgicalYearDates::for_year`]; immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LiturgicalYearDates {
    year: u16,
    advent_start: Date,
    christmas: Date,
    ash_wednesday: Date,
    easter: Date,
    ascension: Date,
    pentecost: Date,
    christ_the_king: Date,
    epiphany: Date,
    candlemas: Date,
    annunciation: Date,
    assumption: Date,
    all_saints: Date,
}

impl LiturgicalYearDates {
    /// Compute the feast dates of calendar year `year`.
    ///
    /// # Errors
    /// Returns `Error::Date` if `year` is outside the supported range.
    pub fn for_year(year: u16) -> Result<Self> {
        let easter = easter_sunday(year)?;
        let christmas = Date::new(year, Month::December, 25)?;
        // Sunday on or before Christmas, then three more weeks back.
        let advent_start = christmas.previous_or_same(Weekday::Sunday)?.add_days(-21)?;

        let dates = Self {
            year,
            advent_start,
            christmas,
            ash_wednesday: easter.add_days(ASH_WEDNESDAY_OFFSET)?,
            easter,
            ascension: easter.add_days(ASCENSION_OFFSET)?,
            pentecost: easter.add_days(PENTECOST_OFFSET)?,
            christ_the_king: advent_start.add_days(-7)?,
            epiphany: Date::new(year, Month::January, 6)?,
            candlemas: Date::new(year, Month::February, 2)?,
            annunciation: Date::new(year, Month::March, 25)?,
            assumption: Date::new(year, Month::August, 15)?,
            all_saints: Date::new(year, Month::November, 1)?,
        };
        trace!(year, easter = %dates.easter, advent = %dates.advent_start, "computed liturgical dates");
        Ok(dates)
    }

    /// The calendar year these dates belong to.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// First Sunday of Advent.
    pub fn advent_start(&self) -> Date {
        self.advent_start
    }

    /// Christmas Day.
    pub fn christmas(&self) -> Date {
        self.christmas
    }

    /// Ash Wednesday (Easter − 46 days).
    pub fn ash_wednesday(&self) -> Date {
        self.ash_wednesday
    }

    /// Easter Sunday.
    pub fn easter(&self) -> Date {
        self.easter
    }

    /// Ascension (Easter + 39 days).
    pub fn ascension(&self) -> Date {
        self.ascension
    }

    /// Pentecost (Easter + 49 days).
    pub fn pentecost(&self) -> Date {
        self.pentecost
    }

    /// Christ the King: one week before this year's Advent start.
    pub fn christ_the_king(&self) -> Date {
        self.christ_the_king
    }

    /// Return the date of `feast` in this year.
    pub fn get(&self, feast: Feast) -> Date {
        match feast {
            Feast::Epiphany => self.epiphany,
            Feast::Candlemas => self.candlemas,
            Feast::AshWednesday => self.ash_wednesday,
            Feast::Annunciation => self.annunciation,
            Feast::Easter => self.easter,
            Feast::Ascension => self.ascension,
            Feast::Pentecost => self.pentecost,
            Feast::Assumption => self.assumption,
            Feast::AllSaints => self.all_saints,
            Feast::ChristTheKing => self.christ_the_king,
            Feast::AdventStart => self.advent_start,
            Feast::Christmas => self.christmas,
        }
    }

    /// All feasts with their dates, in chronological order.
    pub fn feasts(&self) -> Vec<(Feast, Date)> {
        let mut feasts: Vec<_> = Feast::ALL.iter().map(|&f| (f, self.get(f))).collect();
        feasts.sort_by_key(|&(f, d)| (d, f));
        feasts
    }

    /// Return the feast falling on `date`, if any.
    ///
    /// When two feasts share a date (the Annunciation can fall on Easter
    /// Sunday), the one listed first in [`Feast::ALL`] is returned.
    pub fn feast_on(&self, date: Date) -> Option<Feast> {
        Feast::ALL.into_iter().find(|&f| self.get(f) == date)
    }
}
