//! Catalogs of musical styles and keys referenced by the season profiles.

use cantus_core::errors::Result;
use cantus_core::{ensure, fail};
use serde::Serialize;

/// A musical style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleInfo {
    /// Tag used by [`SeasonProfile::style`](crate::profile::SeasonProfile::style).
    pub tag: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Chord progression as frequency ratios over the tonic.
    pub progression: &'static [f64],
    /// Tempo marking.
    pub tempo: &'static str,
}

static STYLES: [StyleInfo; 5] = [
    StyleInfo {
        tag: "tradicional",
        name: "Tradicional (Hinos Clássicos)",
        description: "Hinos clássicos católicos com harmonias tradicionais",
        progression: &[1.0, 1.5, 1.68, 1.33], // I-V-vi-IV
        tempo: "moderato",
    },
    StyleInfo {
        tag: "contemporâneo",
        name: "Contemporâneo (Música Católica Moderna)",
        description: "Música católica moderna com instrumentação atual",
        progression: &[1.68, 1.33, 1.0, 1.5], // vi-IV-I-V
        tempo: "allegro",
    },
    StyleInfo {
        tag: "gregoriano",
        name: "Gregoriano (Inspiração Medieval)",
        description: "Inspirado no canto gregoriano medieval",
        progression: &[1.0, 1.125, 1.25, 1.0], // modal
        tempo: "largo",
    },
    StyleInfo {
        tag: "mariano",
        name: "Mariano (Devoção à Nossa Senhora)",
        description: "Focado na devoção à Virgem Maria",
        progression: &[1.0, 1.33, 1.5, 1.0], // I-IV-V-I
        tempo: "andante",
    },
    StyleInfo {
        tag: "litúrgico",
        name: "Litúrgico (Para Missa)",
        description: "Apropriado para uso durante a Santa Missa",
        progression: &[1.0, 1.25, 1.5, 1.33], // I-iii-V-IV
        tempo: "moderato",
    },
];

/// Return the style registered under `tag`.
pub fn style_info(tag: &str) -> Option<&'static StyleInfo> {
    STYLES.iter().find(|s| s.tag == tag)
}

/// Every known style.
pub fn styles() -> &'static [StyleInfo] {
    &STYLES
}

/// Tonic name, frequency in Hz (octave 4), and solfège name.
static TONICS: [(&str, f64, &str); 17] = [
    ("C", 261.63, "Dó"),
    ("C#", 277.18, "Dó#"),
    ("Db", 277.18, "Réb"),
    ("D", 293.66, "Ré"),
    ("D#", 311.13, "Ré#"),
    ("Eb", 311.13, "Mib"),
    ("E", 329.63, "Mi"),
    ("F", 349.23, "Fá"),
    ("F#", 369.99, "Fá#"),
    ("Gb", 369.99, "Solb"),
    ("G", 392.00, "Sol"),
    ("G#", 415.30, "Sol#"),
    ("Ab", 415.30, "Láb"),
    ("A", 440.00, "Lá"),
    ("A#", 466.16, "Lá#"),
    ("Bb", 466.16, "Sib"),
    ("B", 493.88, "Si"),
];

/// A key such as `"G"` or `"Em"`, resolved against the tonic table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyInfo {
    /// Tonic name (`"E"` for `"Em"`).
    pub tonic: &'static str,
    /// `true` for minor keys.
    pub minor: bool,
    /// Tonic frequency in Hz.
    pub frequency_hz: f64,
    /// Solfège name of the tonic.
    pub solfege: &'static str,
}

impl KeyInfo {
    /// Parse a key name: a tonic from the table, optionally followed by `m`
    /// for minor.
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        ensure!(!name.is_empty(), "key name must not be empty");
        let (tonic, minor) = match name.strip_suffix('m') {
            Some(t) if !t.is_empty() => (t, true),
            _ => (name, false),
        };
        let Some(&(tonic, frequency_hz, solfege)) = TONICS.iter().find(|(t, _, _)| *t == tonic)
        else {
            fail!("unknown key `{name}`");
        };
        Ok(KeyInfo {
            tonic,
            minor,
            frequency_hz,
            solfege,
        })
    }

    /// Key name in chord-symbol form (`"Em"`, `"G"`).
    pub fn name(&self) -> String {
        if self.minor {
            format!("{}m", self.tonic)
        } else {
            self.tonic.to_string()
        }
    }
}
