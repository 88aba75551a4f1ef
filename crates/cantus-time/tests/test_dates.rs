//! Integration tests for `Date`, `Weekday`, and `Month`.

use proptest::prelude::*;

use cantus_time::date::{FIRST_YEAR, LAST_YEAR};
use cantus_time::{days_in_month, is_leap_year, Date, Month, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consecutive_serials_are_consecutive_days() {
    let mut d = date(1899, 12, 25);
    let end = date(1901, 1, 10);
    let mut prev = d;
    d += 1;
    while d <= end {
        assert_eq!(d - prev, 1);
        let (py, pm, pd) = prev.ymd();
        let (y, m, dd) = d.ymd();
        if pd == days_in_month(py, pm) {
            assert_eq!(dd, 1, "{d:?} should start a month");
            assert!(m == pm % 12 + 1);
            assert!(y == py || (pm == 12 && y == py + 1));
        } else {
            assert_eq!((y, m, dd), (py, pm, pd + 1));
        }
        prev = d;
        d += 1;
    }
}

#[test]
fn weekday_cycles_daily() {
    let mut d = date(2023, 12, 1);
    let mut w = d.weekday();
    for _ in 0..400 {
        d += 1;
        let next = d.weekday();
        assert_eq!(next.ordinal(), w.ordinal() % 7 + 1);
        w = next;
    }
}

#[test]
fn known_weekdays() {
    // Gregorian reform took effect on Friday, 15 October 1582; the first full
    // year opened on a Saturday.
    assert_eq!(date(1583, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(1969, 7, 20).weekday(), Weekday::Sunday);
    assert_eq!(date(2024, 3, 31).weekday(), Weekday::Sunday);
    assert_eq!(date(2100, 1, 1).weekday(), Weekday::Friday);
}

#[test]
fn leap_years() {
    assert!(is_leap_year(1600));
    assert!(!is_leap_year(1700));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert_eq!(Date::days_of_year(1700).unwrap().count(), 365);
    assert_eq!(Date::days_of_year(1600).unwrap().count(), 366);
}

#[test]
fn month_accessor() {
    let d = date(2024, 8, 15);
    assert_eq!(d.month_of_year(), Month::August);
    assert_eq!(Date::new(2024, Month::August, 15).unwrap(), d);
}

#[test]
fn serializes_as_iso_string() {
    let json = serde_json::to_string(&date(2024, 5, 19)).unwrap();
    assert_eq!(json, "\"2024-05-19\"");
}

proptest! {
    #[test]
    fn ymd_roundtrip(serial in 1i32..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, dd) = d.ymd();
        prop_assert!((FIRST_YEAR..=LAST_YEAR).contains(&y));
        prop_assert_eq!(Date::from_ymd(y, m, dd).unwrap(), d);
        prop_assert_eq!(d.to_iso_string().parse::<Date>().unwrap(), d);
    }

    #[test]
    fn previous_or_same_sunday(serial in 7i32..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let sunday = d.previous_or_same(Weekday::Sunday).unwrap();
        prop_assert_eq!(sunday.weekday(), Weekday::Sunday);
        prop_assert!(sunday <= d);
        prop_assert!(d - sunday < 7);
    }
}
