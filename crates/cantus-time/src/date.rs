//! `Date` type: a Gregorian calendar day stored as a serial number.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1583, the first full year of the Gregorian
//!   calendar.
//! * The valid date range is 1583-01-01 to 4099-12-31.  Every constructor
//!   and every arithmetic operation keeps a `Date` inside it, so there is no
//!   null or default date.

use std::str::FromStr;

use cantus_core::errors::{Error, Result};
use serde::{Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// First supported year.
pub const FIRST_YEAR: u16 = 1583;

/// Last supported year.
pub const LAST_YEAR: u16 = 4099;

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 4099.
    pub const MAX: Date = Date(919_316);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` falls outside [`Date::MIN`]..=[`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{FIRST_YEAR}, {LAST_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a year, a [`Month`], and a day-of-month.
    pub fn new(year: u16, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    /// Iterate over every day of `year`, January 1 through December 31.
    pub fn days_of_year(year: u16) -> Result<impl Iterator<Item = Date>> {
        let first = Date::from_ymd(year, 1, 1)?;
        let last = Date::from_ymd(year, 12, 31)?;
        Ok((first.0..=last.0).map(Date))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1583–4099).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("decomposed month always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1583-01-01 (serial 1) was a Saturday.
        Weekday::ALL[(self.0 + 4).rem_euclid(7) as usize]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: {self:?} {n:+} days is out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the latest date on or before `self` that falls on `weekday`.
    ///
    /// For example, the Sunday on or before Wednesday 2024-12-25 is
    /// 2024-12-22; the Sunday on or before a Sunday is that same day.
    pub fn previous_or_same(self, weekday: Weekday) -> Result<Self> {
        let back = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self.add_days(-back)
    }

    /// Format as ISO 8601 (`YYYY-MM-DD`).
    pub fn to_iso_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}-{d:02}")
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Parsing & formatting ──────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    ///
    /// Exactly four year digits and two month and day digits are accepted;
    /// signs, single-digit fields, and trailing text are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument(format!("`{s}` is not a YYYY-MM-DD date"));
        let fields: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = fields[..] else {
            return Err(invalid());
        };
        let well_formed = [(y, 4), (m, 2), (d, 2)]
            .iter()
            .all(|(part, len)| part.len() == *len && part.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(invalid());
        }
        let year = y.parse::<u16>().map_err(|_| invalid())?;
        let month = m.parse::<u8>().map_err(|_| invalid())?;
        let day = d.parse::<u8>().map_err(|_| invalid())?;
        Date::from_ymd(year, month, day)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, _, d) = ymd_from_serial(self.0);
        write!(f, "{d} {} {y}", self.month_of_year())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of Gregorian leap years in `[1, year]`.
fn leap_years_through(year: i32) -> i32 {
    year / 4 - year / 100 + year / 400
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1583-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let first = FIRST_YEAR as i32;

    let mut serial = (y - first) * 365 + leap_years_through(y - 1) - leap_years_through(first - 1);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate from the mean Gregorian year, then correct.
    let mut y = (FIRST_YEAR as i64 + (serial as i64 - 1) * 400 / 146_097) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days || m == 12 {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1583, 1, 1).serial(), 1);
        assert_eq!(date(1583, 1, 1), Date::MIN);
        assert_eq!(date(4099, 12, 31), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1600, 2, 29), // leap century
            (1900, 3, 1),
            (2000, 2, 29),
            (2100, 2, 28), // non-leap century
            (2024, 12, 31),
            (4099, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(Date::from_ymd(1582, 12, 31).is_err());
        assert!(Date::from_ymd(4100, 1, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 0).is_err());
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1583, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 12, 25).weekday(), Weekday::Wednesday);
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2024, 1, 1).day_of_year(), 1);
        assert_eq!(date(2024, 3, 1).day_of_year(), 61);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
    }

    #[test]
    fn test_previous_or_same() {
        let christmas = date(2024, 12, 25);
        assert_eq!(
            christmas.previous_or_same(Weekday::Sunday).unwrap(),
            date(2024, 12, 22)
        );
        let sunday = date(2022, 12, 25);
        assert_eq!(sunday.previous_or_same(Weekday::Sunday).unwrap(), sunday);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        let d2 = d + 31;
        assert_eq!(d2, date(2023, 2, 1));
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(d.days_between(date(2024, 1, 1)), 365);
    }

    #[test]
    fn test_parse_and_format() {
        let d: Date = "2024-03-31".parse().unwrap();
        assert_eq!(d, date(2024, 3, 31));
        assert_eq!(d.to_iso_string(), "2024-03-31");
        assert_eq!(d.to_string(), "31 March 2024");
        assert_eq!(format!("{d:?}"), "Date(2024-03-31)");
        assert!(matches!(
            "31/03/2024".parse::<Date>(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!("2024-02-30".parse::<Date>(), Err(Error::Date(_))));
    }

    #[test]
    fn test_parse_requires_padded_digits() {
        for s in [
            "+2024-03-31",
            "2024-3-5",
            "2024-03-5",
            "24-03-31",
            "02024-03-31",
            "2024-+3-31",
            "2024-03-31-01",
            "2024-03",
            "",
        ] {
            assert!(
                matches!(s.parse::<Date>(), Err(Error::InvalidArgument(_))),
                "{s:?} should be rejected"
            );
        }
        assert_eq!(" 2024-03-05 ".parse::<Date>().unwrap(), date(2024, 3, 5));
    }

    #[test]
    fn test_no_date_outside_range() {
        assert!(Date::from_serial(0).is_err());
        assert!(Date::from_serial(-1).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
        assert_eq!(Date::from_serial(1).unwrap().ymd(), (1583, 1, 1));
        assert_eq!(Date::MIN.year(), FIRST_YEAR);
        assert_eq!(Date::MAX.year(), LAST_YEAR);
        assert_eq!(format!("{:?}", Date::MIN), "Date(1583-01-01)");
        assert_eq!(Date::MIN.to_string(), "1 January 1583");
    }

    #[test]
    fn test_days_of_year() {
        assert_eq!(Date::days_of_year(2023).unwrap().count(), 365);
        assert_eq!(Date::days_of_year(2024).unwrap().count(), 366);
        assert!(Date::days_of_year(1500).is_err());
    }
}
