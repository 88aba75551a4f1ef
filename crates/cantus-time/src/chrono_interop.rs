//! Conversions between [`Date`] and `chrono::NaiveDate`.

use cantus_core::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};

use crate::date::Date;

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: NaiveDate) -> Result<Self> {
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

impl Date {
    /// Convert to a `chrono::NaiveDate`.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let (y, m, d) = self.ymd();
        NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let date = Date::try_from(naive).unwrap();
        assert_eq!(date, Date::from_ymd(2024, 3, 31).unwrap());
        assert_eq!(date.to_naive_date(), Some(naive));
        assert_eq!(
            Date::MIN.to_naive_date(),
            NaiveDate::from_ymd_opt(1583, 1, 1)
        );
        assert_eq!(
            Date::MAX.to_naive_date(),
            NaiveDate::from_ymd_opt(4099, 12, 31)
        );
    }

    #[test]
    fn rejects_pre_gregorian() {
        let naive = NaiveDate::from_ymd_opt(1500, 1, 1).unwrap();
        assert!(Date::try_from(naive).is_err());
    }
}
