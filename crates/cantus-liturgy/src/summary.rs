//! Per-date summaries combining season, profile, cycle, and commemoration.

use cantus_core::errors::Result;
use cantus_time::Date;
use serde::Serialize;
use tracing::debug;

use crate::commemoration::commemoration_on;
use crate::cycle::{liturgical_year_letter, YearLetter};
use crate::music::KeyInfo;
use crate::profile::season_profile;
use crate::season::{classify, resolve_season, LiturgicalSeason};
use crate::year_dates::{Feast, LiturgicalYearDates};

/// Liturgical overview of one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiturgicalSummary {
    /// The date described.
    pub date: Date,
    /// Season containing the date.
    pub season: LiturgicalSeason,
    /// Liturgical color (`#RRGGBB`).
    pub color: &'static str,
    /// Suggested style tag.
    pub style: &'static str,
    /// Suggested themes.
    pub themes: &'static [&'static str],
    /// Lectionary letter of the date's calendar year.
    pub year_letter: YearLetter,
    /// Feast falling on the date, if any.
    pub feast: Option<Feast>,
}

impl LiturgicalSummary {
    /// Summarize `date`.
    pub fn for_date(date: Date) -> Result<Self> {
        let dates = LiturgicalYearDates::for_year(date.year())?;
        let season = classify(&dates, date)?;
        let profile = season_profile(season);
        Ok(Self {
            date,
            season,
            color: profile.color,
            style: profile.style,
            themes: profile.themes,
            year_letter: liturgical_year_letter(date.year()),
            feast: dates.feast_on(date),
        })
    }
}

/// Detailed musical suggestions for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicalSuggestions {
    /// The date described.
    pub date: Date,
    /// Season containing the date.
    pub season: LiturgicalSeason,
    /// Main style tag.
    pub style: &'static str,
    /// Suggested themes.
    pub themes: &'static [&'static str],
    /// Commemoration of the day, if any.
    pub commemoration: Option<&'static str>,
    /// Recommended keys with their tonic frequencies.
    pub keys: Vec<KeyInfo>,
    /// Recommended instruments.
    pub instruments: &'static [&'static str],
}

impl MusicalSuggestions {
    /// Build suggestions for `date`.
    ///
    /// Set `with_commemoration` to `false` to leave the saint of the day out.
    pub fn for_date(date: Date, with_commemoration: bool) -> Result<Self> {
        let season = resolve_season(date)?;
        let profile = season_profile(season);
        let keys = profile
            .keys
            .iter()
            .map(|k| KeyInfo::parse(k))
            .collect::<Result<Vec<_>>>()?;
        let commemoration = if with_commemoration {
            commemoration_on(date)
        } else {
            None
        };
        debug!(%date, %season, ?commemoration, "built musical suggestions");
        Ok(Self {
            date,
            season,
            style: profile.style,
            themes: profile.themes,
            commemoration,
            keys,
            instruments: profile.instruments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn summary_on_christmas() {
        let s = LiturgicalSummary::for_date(date(2024, 12, 25)).unwrap();
        assert_eq!(s.season, LiturgicalSeason::Christmas);
        assert_eq!(s.color, "#FFFFFF");
        assert_eq!(s.style, "tradicional");
        assert_eq!(s.year_letter, YearLetter::B);
        assert_eq!(s.feast, Some(Feast::Christmas));
    }

    #[test]
    fn summary_on_plain_day() {
        let s = LiturgicalSummary::for_date(date(2024, 7, 10)).unwrap();
        assert_eq!(s.season, LiturgicalSeason::OrdinaryTime);
        assert_eq!(s.color, "#228B22");
        assert_eq!(s.feast, None);
    }

    #[test]
    fn suggestions_in_lent() {
        let s = MusicalSuggestions::for_date(date(2024, 3, 19), true).unwrap();
        assert_eq!(s.season, LiturgicalSeason::Lent);
        assert_eq!(s.commemoration, Some("São José"));
        let names: Vec<_> = s.keys.iter().map(KeyInfo::name).collect();
        assert_eq!(names, ["Dm", "Am", "Em"]);
        assert!(s.keys.iter().all(|k| k.minor));
    }

    #[test]
    fn suggestions_without_commemoration() {
        let s = MusicalSuggestions::for_date(date(2024, 3, 19), false).unwrap();
        assert_eq!(s.commemoration, None);
    }
}
