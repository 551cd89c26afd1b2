use tzrule::{Date, DatePeriod, Days, SpecialValue, Month};


fn ymd(year: i64, month: Month, day: i8) -> Date {
    Date::ymd(year, month, day).unwrap()
}


#[test]
fn infinities_surround_everything() {
    assert!(Date::neg_infinity() < Date::min_date());
    assert!(Date::max_date() < Date::pos_infinity());
    assert!(Date::neg_infinity() < Date::pos_infinity());
}

#[test]
fn not_a_date_is_unordered() {
    let nad = Date::not_a_date();
    assert_eq!(nad, Date::not_a_date());
    assert_eq!(nad.partial_cmp(&ymd(2004, Month::April, 4)), None);
    assert!(!(nad < Date::pos_infinity()));
    assert!(!(nad > Date::neg_infinity()));
}

#[test]
fn sticky_arithmetic() {
    let date = ymd(2004, Month::April, 4);

    assert_eq!(date + Days::pos_infinity(), Date::pos_infinity());
    assert_eq!(date - Days::pos_infinity(), Date::neg_infinity());
    assert_eq!(Date::neg_infinity() + Days::of(30), Date::neg_infinity());
    assert!((date + Days::not_a_date()).is_not_a_date());
    assert!((Date::pos_infinity() + Days::neg_infinity()).is_not_a_date());
}

#[test]
fn distances() {
    assert_eq!(ymd(2004, Month::October, 31) - ymd(2004, Month::April, 4), Days::of(210));
    assert_eq!(Date::pos_infinity() - ymd(2004, Month::April, 4), Days::pos_infinity());
    assert_eq!(ymd(2004, Month::April, 4) - Date::pos_infinity(), Days::neg_infinity());
    assert!((Date::neg_infinity() - Date::neg_infinity()).is_not_a_date());
}

#[test]
fn falling_off_the_calendar() {
    assert!((Date::max_date() + Days::of(1)).is_not_a_date());
    assert!((Date::min_date() - Days::of(1)).is_not_a_date());
    assert_eq!(Date::max_date() - Date::min_date(), Days::of(3_141_084));
}

#[test]
fn spellings() {
    assert_eq!(Date::not_a_date().to_string(), "not-a-date-time");
    assert_eq!(Days::neg_infinity().to_string(), "-infinity");
    assert_eq!(SpecialValue::from_str_exact("+infinity"), Some(SpecialValue::PosInfinity));
    assert_eq!(SpecialValue::from_str_exact("infinity"), None);
    assert_eq!(ymd(2004, Month::April, 4).to_string(), "2004-04-04");
}

#[test]
fn overflow_is_not_a_date() {
    let date = ymd(2004, Month::April, 4);

    assert!((date + Days::of(i64::MAX)).is_not_a_date());
    assert!((date + Days::of(i64::MIN)).is_not_a_date());
    assert!((Days::of(i64::MAX) + Days::of(1)).is_not_a_date());
    assert!((-Days::of(i64::MIN)).is_not_a_date());
    assert_eq!(-Days::of(i64::MAX), Days::of(-i64::MAX));
}

#[test]
fn periods() {
    let summer = DatePeriod::new(ymd(2004, Month::April, 4), ymd(2004, Month::October, 31));

    assert_eq!(summer.length(), Days::of(210));
    assert!(summer.contains(ymd(2004, Month::July, 4)));
    assert!(!summer.contains(summer.end()));
    assert!(DatePeriod::new(summer.end(), summer.begin()).is_null());
}
