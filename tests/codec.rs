#![cfg(feature = "codec")]

use tzrule::{parse_descriptor, Date, DateGenerator, DatePeriod, Days, Month, TransitionRule, Weekday};
use tzrule::codec::{Error, TextCodec};


#[test]
fn rule_from_a_descriptor() {
    let rule = parse_descriptor("EST5EDT1,M3.2.0,M11.1.0").unwrap().rule().unwrap();
    let text = rule.to_text();

    assert_eq!(text, "nth 2 0 3|nth 1 0 11|3600 7200 7200");
    assert_eq!(TransitionRule::from_text(&text), Ok(rule));
}

#[test]
fn every_kind_of_generator() {
    let generators = vec![
        DateGenerator::first(Weekday::Sunday, Month::April),
        DateGenerator::last(Weekday::Sunday, Month::October),
        DateGenerator::before(Weekday::Sunday, Month::April, 1).unwrap(),
        DateGenerator::after(Weekday::Friday, Month::March, 23).unwrap(),
        DateGenerator::julian(60).unwrap(),
        DateGenerator::zero_based(0).unwrap(),
        DateGenerator::partial(Month::February, 29).unwrap(),
    ];

    for generator in generators {
        assert_eq!(DateGenerator::from_text(&generator.to_text()), Ok(generator));
    }
}

#[test]
fn ordinal_dates() {
    assert_eq!(Date::from_text("2004-095"), Ok(Date::ymd(2004, Month::April, 4).unwrap()));
}

#[test]
fn special_values() {
    assert_eq!(Date::from_text("+infinity"), Ok(Date::pos_infinity()));
    assert_eq!(Days::from_text("-infinity"), Ok(Days::neg_infinity()));
}

#[test]
fn bad_text() {
    assert_eq!(DateGenerator::from_text("sometimes 0 10"), Err(Error::UnknownTag("sometimes".into())));
    assert_eq!(DateGenerator::from_text("last 0"), Err(Error::WrongFieldCount { expected: 2, found: 1 }));
    assert!(TransitionRule::from_text("last 0 10").is_err());
}

#[test]
fn trailing_text_is_refused() {
    assert!(Date::from_text("2004-04-04junk").is_err());
    assert!(Date::from_text("2004-04-04/2004-10-31").is_err());
}

#[test]
fn periods() {
    let text = "2004-04-04/2004-10-31";
    let period = DatePeriod::from_text(text).unwrap();

    assert_eq!(period.begin(), Date::ymd(2004, Month::April, 4).unwrap());
    assert_eq!(period.to_text(), text);
    assert!(DatePeriod::from_text("2004-04-04/2004-10-31x").is_err());
}
