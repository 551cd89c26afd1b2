//! Dates and day counts that can also hold a *special value*: not-a-date,
//! or one of the two infinities.
//!
//! Special values are sticky. Arithmetic involving one never fails and
//! never panics; it produces another special value instead:
//!
//! - anything involving *not-a-date* is *not-a-date*;
//! - an infinity combined with a finite value stays that infinity;
//! - opposite infinities cancel out into *not-a-date*.
//!
//! ```
//! use tzrule::{Date, Days, Month};
//!
//! let date = Date::ymd(2004, Month::April, 4).unwrap();
//! assert_eq!(date + Days::of(27), Date::ymd(2004, Month::May, 1).unwrap());
//! assert_eq!(date + Days::pos_infinity(), Date::pos_infinity());
//! assert!((Date::pos_infinity() - Date::pos_infinity()).is_not_a_date());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub, Neg};

use crate::cal::{LocalDate, Month, Error, SUPPORTED_YEARS, DatePiece};
use crate::cal::fmt::ISO;
use crate::util::RangeExt;


/// The number of days from `Date::min_date()` to `Date::max_date()`. A
/// finite step longer than this can only leave the supported range.
const SUPPORTED_SPAN: i64 = 3_141_084;


/// One of the three values that a `Date` or `Days` can hold instead of a
/// finite one.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum SpecialValue {
    NotADate,
    NegInfinity,
    PosInfinity,
}

impl SpecialValue {

    /// The stable spelling of this value, shared by `Display` and the text
    /// codec.
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialValue::NotADate     => "not-a-date-time",
            SpecialValue::NegInfinity  => "-infinity",
            SpecialValue::PosInfinity  => "+infinity",
        }
    }

    /// Parses the spelling produced by `as_str`.
    pub fn from_str_exact(input: &str) -> Option<Self> {
        [SpecialValue::NotADate, SpecialValue::NegInfinity, SpecialValue::PosInfinity]
            .iter()
            .copied()
            .find(|special| special.as_str() == input)
    }

    fn negate(self) -> Self {
        match self {
            SpecialValue::NotADate     => SpecialValue::NotADate,
            SpecialValue::NegInfinity  => SpecialValue::PosInfinity,
            SpecialValue::PosInfinity  => SpecialValue::NegInfinity,
        }
    }

    /// Position on the timeline relative to the finite values, which sit
    /// at zero. Not-a-date has no position.
    fn rank(self) -> Option<i8> {
        match self {
            SpecialValue::NotADate     => None,
            SpecialValue::NegInfinity  => Some(-1),
            SpecialValue::PosInfinity  => Some(1),
        }
    }
}

impl fmt::Display for SpecialValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What adding `rhs` to `lhs` produces when either of them is special, or
/// `None` when both are finite and ordinary arithmetic applies.
fn sticky_sum(lhs: Option<SpecialValue>, rhs: Option<SpecialValue>) -> Option<SpecialValue> {
    use self::SpecialValue::*;

    match (lhs, rhs) {
        (None, None)                                 => None,
        (Some(NotADate), _) | (_, Some(NotADate))    => Some(NotADate),
        (Some(NegInfinity), Some(PosInfinity))
        | (Some(PosInfinity), Some(NegInfinity))     => Some(NotADate),
        (Some(infinity), _) | (None, Some(infinity)) => Some(infinity),
    }
}

fn compare<T: Ord>(lhs: Result<T, SpecialValue>, rhs: Result<T, SpecialValue>) -> Option<Ordering> {
    match (lhs, rhs) {
        (Ok(a), Ok(b))   => Some(a.cmp(&b)),
        (Err(a), Err(b)) if a == b => Some(Ordering::Equal),
        (Ok(_), Err(b))  => b.rank().map(|rank| 0.cmp(&rank)),
        (Err(a), Ok(_))  => a.rank().map(|rank| rank.cmp(&0)),
        (Err(a), Err(b)) => match (a.rank(), b.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _                  => None,
        },
    }
}


/// A **date** is either a concrete `LocalDate` within the supported years,
/// or a special value.
///
/// Dates are ordered with negative infinity before every concrete date and
/// positive infinity after every one. Not-a-date equals itself but is
/// unordered against anything else.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Date(Result<LocalDate, SpecialValue>);

impl Date {

    /// Creates a date from year, month, and day fields, checking both that
    /// they form a real date and that the year is supported.
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(Error::OutOfRange);
        }

        LocalDate::ymd(year, month, day).map(|date| Date(Ok(date)))
    }

    pub fn not_a_date() -> Self {
        Date(Err(SpecialValue::NotADate))
    }

    pub fn pos_infinity() -> Self {
        Date(Err(SpecialValue::PosInfinity))
    }

    pub fn neg_infinity() -> Self {
        Date(Err(SpecialValue::NegInfinity))
    }

    pub fn special(value: SpecialValue) -> Self {
        Date(Err(value))
    }

    /// The earliest concrete date, the 1st of January of the first
    /// supported year.
    pub fn min_date() -> Self {
        Date(LocalDate::ymd(*SUPPORTED_YEARS.start(), Month::January, 1).map_err(|_| SpecialValue::NotADate))
    }

    /// The latest concrete date, the 31st of December of the last
    /// supported year.
    pub fn max_date() -> Self {
        Date(LocalDate::ymd(*SUPPORTED_YEARS.end(), Month::December, 31).map_err(|_| SpecialValue::NotADate))
    }

    /// Returns the concrete date, if this is not a special value.
    pub fn local_date(self) -> Option<LocalDate> {
        self.0.ok()
    }

    /// Returns the special value, if this is one.
    pub fn special_value(self) -> Option<SpecialValue> {
        self.0.err()
    }

    pub fn is_special(self) -> bool {
        self.0.is_err()
    }

    pub fn is_not_a_date(self) -> bool {
        self.0 == Err(SpecialValue::NotADate)
    }

    pub fn is_infinity(self) -> bool {
        self.is_pos_infinity() || self.is_neg_infinity()
    }

    pub fn is_pos_infinity(self) -> bool {
        self.0 == Err(SpecialValue::PosInfinity)
    }

    pub fn is_neg_infinity(self) -> bool {
        self.0 == Err(SpecialValue::NegInfinity)
    }
}

impl From<LocalDate> for Date {

    /// Wraps a concrete date. Dates in unsupported years become
    /// *not-a-date*.
    fn from(date: LocalDate) -> Self {
        if SUPPORTED_YEARS.contains(&date.year()) {
            Date(Ok(date))
        }
        else {
            Date::not_a_date()
        }
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self.0, other.0)
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Date({})", self)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Ok(date)     => f.write_str(&date.iso()),
            Err(special) => f.write_str(special.as_str()),
        }
    }
}

impl Add<Days> for Date {
    type Output = Self;

    fn add(self, days: Days) -> Self {
        if let Some(special) = sticky_sum(self.special_value(), days.special_value()) {
            return Date::special(special);
        }

        match (self.0, days.0) {
            (Ok(date), Ok(count)) if count.is_within(-SUPPORTED_SPAN ..= SUPPORTED_SPAN) => {
                Date::from(date.add_days(count))
            }
            _ => Date::not_a_date(),
        }
    }
}

impl Sub<Days> for Date {
    type Output = Self;

    fn sub(self, days: Days) -> Self {
        self + -days
    }
}

impl Sub<Date> for Date {
    type Output = Days;

    fn sub(self, other: Date) -> Days {
        if let Some(special) = sticky_sum(self.special_value(), other.special_value().map(SpecialValue::negate)) {
            return Days::special(special);
        }

        match (self.0, other.0) {
            (Ok(a), Ok(b)) => Days::of(a.days_since_epoch() - b.days_since_epoch()),
            _              => Days::not_a_date(),
        }
    }
}


/// A **days** value is a signed count of whole days, or a special value.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Days(Result<i64, SpecialValue>);

impl Days {

    pub fn of(count: i64) -> Self {
        Days(Ok(count))
    }

    pub fn not_a_date() -> Self {
        Days(Err(SpecialValue::NotADate))
    }

    pub fn pos_infinity() -> Self {
        Days(Err(SpecialValue::PosInfinity))
    }

    pub fn neg_infinity() -> Self {
        Days(Err(SpecialValue::NegInfinity))
    }

    pub fn special(value: SpecialValue) -> Self {
        Days(Err(value))
    }

    /// Wraps the result of checked arithmetic, which is *not-a-date* when
    /// it overflowed.
    fn checked(count: Option<i64>) -> Self {
        Days(count.ok_or(SpecialValue::NotADate))
    }

    /// Returns the number of days, if this is not a special value.
    pub fn count(self) -> Option<i64> {
        self.0.ok()
    }

    pub fn special_value(self) -> Option<SpecialValue> {
        self.0.err()
    }

    pub fn is_special(self) -> bool {
        self.0.is_err()
    }

    pub fn is_not_a_date(self) -> bool {
        self.0 == Err(SpecialValue::NotADate)
    }
}

impl PartialOrd for Days {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self.0, other.0)
    }
}

impl fmt::Debug for Days {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Days({})", self)
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Ok(count)    => write!(f, "{}", count),
            Err(special) => f.write_str(special.as_str()),
        }
    }
}

impl Add<Days> for Days {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match sticky_sum(self.special_value(), rhs.special_value()) {
            Some(special) => Days::special(special),
            None          => Days::checked(self.0.ok().zip(rhs.0.ok()).and_then(|(a, b)| a.checked_add(b))),
        }
    }
}

impl Sub<Days> for Days {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match sticky_sum(self.special_value(), rhs.special_value().map(SpecialValue::negate)) {
            Some(special) => Days::special(special),
            None          => Days::checked(self.0.ok().zip(rhs.0.ok()).and_then(|(a, b)| a.checked_sub(b))),
        }
    }
}

impl Neg for Days {
    type Output = Self;

    fn neg(self) -> Self {
        match self.0 {
            Ok(count)    => Days::checked(count.checked_neg()),
            Err(special) => Days::special(special.negate()),
        }
    }
}


/// A **date period** is the half-open span of days from `begin` up to,
/// but not including, `end`.
///
/// A period whose end is not after its beginning holds no days, and is
/// *null*. So is any period with a *not-a-date* at either end.
///
/// ```
/// use tzrule::{Date, DatePeriod, Days, Month};
///
/// let april = DatePeriod::new(Date::ymd(2004, Month::April, 1).unwrap(),
///                             Date::ymd(2004, Month::May, 1).unwrap());
/// assert_eq!(april.length(), Days::of(30));
/// assert!(april.contains(Date::ymd(2004, Month::April, 30).unwrap()));
/// assert!(!april.contains(Date::ymd(2004, Month::May, 1).unwrap()));
/// ```
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct DatePeriod {
    begin: Date,
    end: Date,
}

impl DatePeriod {

    pub fn new(begin: Date, end: Date) -> Self {
        Self { begin, end }
    }

    /// The first day of the period.
    pub fn begin(&self) -> Date {
        self.begin
    }

    /// The first day *after* the period.
    pub fn end(&self) -> Date {
        self.end
    }

    /// The number of days in the period, which is negative or zero for a
    /// null period.
    pub fn length(&self) -> Days {
        self.end - self.begin
    }

    pub fn is_null(&self) -> bool {
        !(self.begin < self.end)
    }

    /// Returns whether the given date falls within this period.
    pub fn contains(&self, date: Date) -> bool {
        !self.is_null() && self.begin <= date && date < self.end
    }
}

impl fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}/{})", self.begin, self.end)
    }
}
