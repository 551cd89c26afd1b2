use tzrule::{Year, Month, SUPPORTED_YEARS};


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(Year(1900).is_leap_year() == false);
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap_year());
}

#[test]
fn year_2038() {
    assert!(Year(2038).is_leap_year() == false);
}

#[test]
fn february_follows_leap_years() {
    for year in SUPPORTED_YEARS {
        let expected = if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) { 29 } else { 28 };
        assert_eq!(Year(year).month(Month::February).day_count(), expected, "February {}", year);
        assert_eq!(Year(year).day_count(), 337 + expected as i16);
    }
}
