//! Musical suggestions per liturgical season.

use serde::Serialize;
use tracing::debug;

use crate::season::LiturgicalSeason;

/// Static musical suggestions for one season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonProfile {
    /// Season described by this profile.
    pub season: LiturgicalSeason,
    /// Liturgical color as `#RRGGBB`.
    pub color: &'static str,
    /// Name of the liturgical color.
    pub color_name: &'static str,
    /// Style tag, resolvable with [`style_info`](crate::music::style_info).
    pub style: &'static str,
    /// Theme keywords.
    pub themes: &'static [&'static str],
    /// Recommended keys, resolvable with [`KeyInfo::parse`](crate::music::KeyInfo::parse).
    pub keys: &'static [&'static str],
    /// Recommended instruments.
    pub instruments: &'static [&'static str],
}

static PROFILES: [SeasonProfile; 6] = [
    SeasonProfile {
        season: LiturgicalSeason::Advent,
        color: "#663399",
        color_name: "roxo",
        style: "gregoriano",
        themes: &["esperança", "preparação", "vigilância", "Maria"],
        keys: &["D", "Em", "Am"],
        instruments: &["órgão", "flauta", "violino"],
    },
    SeasonProfile {
        season: LiturgicalSeason::Christmas,
        color: "#FFFFFF",
        color_name: "branco",
        style: "tradicional",
        themes: &["alegria", "nascimento de Jesus", "paz", "família"],
        keys: &["C", "G", "F"],
        instruments: &["órgão", "violão", "flauta", "coral"],
    },
    SeasonProfile {
        season: LiturgicalSeason::Lent,
        color: "#663399",
        color_name: "roxo",
        style: "gregoriano",
        themes: &["penitência", "conversão", "jejum", "oração"],
        keys: &["Dm", "Am", "Em"],
        instruments: &["órgão", "violino", "voz solo"],
    },
    SeasonProfile {
        season: LiturgicalSeason::Easter,
        color: "#FFFFFF",
        color_name: "branco",
        style: "tradicional",
        themes: &["ressurreição", "vida nova", "alegria", "vitória"],
        keys: &["C", "G", "D", "A"],
        instruments: &["órgão", "trompete", "coral", "violão"],
    },
    SeasonProfile {
        season: LiturgicalSeason::OrdinaryTime,
        color: "#228B22",
        color_name: "verde",
        style: "contemporâneo",
        themes: &["crescimento espiritual", "vida cristã", "comunidade"],
        keys: &["G", "C", "D", "A"],
        instruments: &["violão", "piano", "flauta"],
    },
    SeasonProfile {
        season: LiturgicalSeason::Pentecost,
        color: "#DC143C",
        color_name: "vermelho",
        style: "contemporâneo",
        themes: &["Espírito Santo", "dons", "missão", "Igreja"],
        keys: &["G", "D", "A"],
        instruments: &["órgão", "violão", "percussão leve"],
    },
];

/// Return the profile of `season`.
pub fn season_profile(season: LiturgicalSeason) -> &'static SeasonProfile {
    match season {
        LiturgicalSeason::Advent => &PROFILES[0],
        LiturgicalSeason::Christmas => &PROFILES[1],
        LiturgicalSeason::Lent => &PROFILES[2],
        LiturgicalSeason::Easter => &PROFILES[3],
        LiturgicalSeason::OrdinaryTime => &PROFILES[4],
        LiturgicalSeason::Pentecost => &PROFILES[5],
    }
}

/// Return the profile for a season given by name.
///
/// Names that do not parse as a [`LiturgicalSeason`] get the Ordinary Time
/// profile, so callers always receive some suggestion.
pub fn season_profile_by_name(name: &str) -> &'static SeasonProfile {
    match name.parse::<LiturgicalSeason>() {
        Ok(season) => season_profile(season),
        Err(_) => {
            debug!(name, "unknown season name, using the Ordinary Time profile");
            season_profile(LiturgicalSeason::OrdinaryTime)
        }
    }
}
