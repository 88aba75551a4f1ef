//! Three-year lectionary cycle.

use serde::Serialize;

/// Lectionary year letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YearLetter {
    /// Year A (Matthew).
    A,
    /// Year B (Mark).
    B,
    /// Year C (Luke).
    C,
}

impl YearLetter {
    /// The letter as a `char`.
    pub fn as_char(&self) -> char {
        match self {
            YearLetter::A => 'A',
            YearLetter::B => 'B',
            YearLetter::C => 'C',
        }
    }
}

impl std::fmt::Display for YearLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Return the lectionary letter of `calendar_year`: `year % 3` with
/// 0 → A, 1 → B, 2 → C.
///
/// ```
/// use cantus_liturgy::{liturgical_year_letter, YearLetter};
///
/// assert_eq!(liturgical_year_letter(2024), YearLetter::B);
/// ```
pub fn liturgical_year_letter(calendar_year: u16) -> YearLetter {
    match calendar_year % 3 {
        0 => YearLetter::A,
        1 => YearLetter::B,
        _ => YearLetter::C,
    }
}
