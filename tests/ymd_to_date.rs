use tzrule::{LocalDate, Month, Weekday};
use tzrule::DatePiece;


#[test]
fn the_distant_past() {
    let date = LocalDate::ymd(1400, Month::January, 1).unwrap();

    assert_eq!(date.year(),  1400);
    assert_eq!(date.month(), Month::January);
    assert_eq!(date.day(),   1);
    assert_eq!(date.weekday(), Weekday::Wednesday);
}

#[test]
fn the_distant_present() {
    let date = LocalDate::ymd(2004, Month::April, 4).unwrap();

    assert_eq!(date.year(),  2004);
    assert_eq!(date.month(), Month::April);
    assert_eq!(date.day(),   4);
    assert_eq!(date.weekday(), Weekday::Sunday);
}

#[test]
fn the_distant_future() {
    let date = LocalDate::ymd(9999, Month::December, 31).unwrap();

    assert_eq!(date.year(), 9999);
    assert_eq!(date.month(), Month::December);
    assert_eq!(date.day(), 31);
    assert_eq!(date.weekday(), Weekday::Friday);
}

#[test]
fn no_such_days() {
    assert!(LocalDate::ymd(2004, Month::April, 31).is_err());
    assert!(LocalDate::ymd(2003, Month::February, 29).is_err());
    assert!(LocalDate::ymd(2004, Month::January, 0).is_err());
}
