//! Fixed-date commemorations (saint of the day).

use cantus_time::{Date, Month};

/// Commemorations by month and day, sorted.
static COMMEMORATIONS: [(Month, u8, &str); 15] = [
    (Month::January, 1, "Santa Maria, Mãe de Deus"),
    (Month::January, 6, "Epifania do Senhor"),
    (Month::February, 2, "Apresentação do Senhor"),
    (Month::March, 19, "São José"),
    (Month::March, 25, "Anunciação do Senhor"),
    (Month::May, 31, "Visitação de Nossa Senhora"),
    (Month::June, 24, "Nascimento de São João Batista"),
    (Month::June, 29, "São Pedro e São Paulo"),
    (Month::August, 15, "Assunção de Nossa Senhora"),
    (Month::September, 8, "Natividade de Nossa Senhora"),
    (Month::October, 4, "São Francisco de Assis"),
    (Month::November, 1, "Todos os Santos"),
    (Month::November, 2, "Finados"),
    (Month::December, 8, "Imaculada Conceição"),
    (Month::December, 25, "Natal do Senhor"),
];

/// Return the commemoration kept on `month`/`day`, if any.
///
/// Most days have none; an out-of-range month or day simply finds nothing.
pub fn commemoration_for(month: u8, day: u8) -> Option<&'static str> {
    COMMEMORATIONS
        .binary_search_by(|&(m, d, _)| (m.number(), d).cmp(&(month, day)))
        .ok()
        .map(|i| COMMEMORATIONS[i].2)
}

/// Return the commemoration kept on `date`, if any.
pub fn commemoration_on(date: Date) -> Option<&'static str> {
    let (_, m, d) = date.ymd();
    commemoration_for(m, d)
}

/// Iterate over every `(month, day, name)` entry in calendar order.
pub fn commemorations() -> impl Iterator<Item = (Month, u8, &'static str)> {
    COMMEMORATIONS.iter().copied()
}
