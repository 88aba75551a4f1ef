//! Gregorian Easter date.

use cantus_core::errors::Result;
use cantus_time::Date;

/// Return the date of Easter Sunday in `year`.
///
/// Uses the Gauss/Meeus algorithm for the Gregorian calendar.  The result
/// always falls between March 22 and April 25.
///
/// # Errors
/// Returns `Error::Date` if `year` is outside the supported date range
/// (1583–4099).
///
/// # Example
/// ```
/// use cantus_liturgy::easter_sunday;
/// use cantus_time::Date;
///
/// assert_eq!(easter_sunday(2024).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    // Golden number, century, and year of century.
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    // Leap-century and lunar corrections.
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    // Epact: days from the equinox to the paschal full moon.
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    // Days from the full moon to the following Sunday.
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    Date::from_ymd(year, (n / 31) as u8, (n % 31 + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantus_time::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_dates() {
        let cases = [
            (1583, date(1583, 4, 10)),
            (1818, date(1818, 3, 22)), // earliest possible
            (1943, date(1943, 4, 25)), // latest possible
            (2000, date(2000, 4, 23)),
            (2019, date(2019, 4, 21)),
            (2023, date(2023, 4, 9)),
            (2024, date(2024, 3, 31)),
            (2025, date(2025, 4, 20)),
            (2038, date(2038, 4, 25)),
        ];
        for (year, expected) in cases {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(easter, expected, "Easter {year}");
            assert_eq!(easter.weekday(), Weekday::Sunday);
        }
    }

    #[test]
    fn pre_gregorian_year_is_rejected() {
        assert!(easter_sunday(1582).is_err());
        assert!(easter_sunday(4100).is_err());
    }
}
