//! A stable text form for the calendar values and rules, for storing them
//! and reading them back.
//!
//! Numeric fields are written as plain integers, so a month is `4` and a
//! weekday is `0` for Sunday. Durations are whole seconds. Dates use the
//! extended ISO-8601 form, and a period is its two ends separated by a
//! slash. Generators are a tag followed by their fields:
//!
//! ```rust
//! use tzrule::{DateGenerator, Month, Weekday};
//! use tzrule::codec::TextCodec;
//!
//! let generator = DateGenerator::last(Weekday::Sunday, Month::October);
//! assert_eq!(generator.to_text(), "last 0 10");
//! assert_eq!(DateGenerator::from_text("last 0 10"), Ok(generator));
//! ```
//!
//! With the `serde` feature, every type here is serialized as its text.

use std::convert::TryFrom;
use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::fmt::zero_padded;
use crate::cal::{self, Month, Weekday, LocalDate, Date, DatePeriod, Days, SpecialValue, DatePiece};
use crate::duration::Duration;
use crate::generator::{self, DateGenerator, WeekOfMonth};
use crate::rule::{self, AdjustmentOffsets, TransitionRule};


/// Conversion to and from the stable text form.
pub trait TextCodec: Sized {

    /// Writes this value out as text.
    fn to_text(&self) -> String;

    /// Reads a value back from the text written by `to_text`.
    fn from_text(text: &str) -> Result<Self, Error>;
}


impl TextCodec for Month {
    fn to_text(&self) -> String {
        (*self as i8).to_string()
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        Ok(Month::from_one(small(number(text)?)?)?)
    }
}

impl TextCodec for Weekday {
    fn to_text(&self) -> String {
        self.days_from_sunday().to_string()
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        Ok(Weekday::from_zero(small(number(text)?)?)?)
    }
}

impl TextCodec for WeekOfMonth {
    fn to_text(&self) -> String {
        (*self as i8).to_string()
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        Ok(WeekOfMonth::from_one(small(number(text)?)?)?)
    }
}

impl TextCodec for Duration {
    fn to_text(&self) -> String {
        self.seconds().to_string()
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        number(text).map(Duration::of)
    }
}

impl TextCodec for Days {
    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        match SpecialValue::from_str_exact(text) {
            Some(special) => Ok(Days::special(special)),
            None          => number(text).map(Days::of),
        }
    }
}

impl TextCodec for Date {
    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        if let Some(special) = SpecialValue::from_str_exact(text) {
            return Ok(Date::special(special));
        }

        // The parser stops once it has a date and ignores anything after
        // it, so the extended form of what it found has to be the whole
        // text.
        let parsed = iso8601::date(text).map_err(Error::Parse)?;
        let date = match parsed {
            iso8601::Date::YMD { year, month, day } => {
                check_whole_text(text, &[zero_padded(year as i64, 4), zero_padded(month as i64, 2), zero_padded(day as i64, 2)])?;
                let month = Month::from_one(small(month as i64)?)?;
                Date::ymd(year as i64, month, small(day as i64)?)?
            }
            iso8601::Date::Ordinal { year, ddd } => {
                check_whole_text(text, &[zero_padded(year as i64, 4), zero_padded(ddd as i64, 3)])?;
                let date = LocalDate::yd(year as i64, ddd as i64)?;
                Date::ymd(date.year(), date.month(), date.day())?
            }
            iso8601::Date::Week { .. } => {
                return Err(Error::Parse(format!("week dates are not supported: {:?}", text)));
            }
        };

        Ok(date)
    }
}

impl TextCodec for DatePeriod {
    fn to_text(&self) -> String {
        format!("{}/{}", self.begin().to_text(), self.end().to_text())
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        let parts = text.split('/').collect::<Vec<_>>();

        match parts.as_slice() {
            &[begin, end] => Ok(DatePeriod::new(Date::from_text(begin)?, Date::from_text(end)?)),
            other         => Err(Error::WrongFieldCount { expected: 2, found: other.len() }),
        }
    }
}

fn check_whole_text(text: &str, fields: &[String]) -> Result<(), Error> {
    if text == fields.join("-") {
        Ok(())
    }
    else {
        Err(Error::Parse(format!("not an extended ISO-8601 date: {:?}", text)))
    }
}

impl TextCodec for DateGenerator {
    fn to_text(&self) -> String {
        match *self {
            DateGenerator::NthWeekdayOfMonth { week, weekday, month } => {
                format!("nth {} {} {}", week.to_text(), weekday.to_text(), month.to_text())
            }
            DateGenerator::FirstWeekdayOfMonth { weekday, month } => {
                format!("first {} {}", weekday.to_text(), month.to_text())
            }
            DateGenerator::LastWeekdayOfMonth { weekday, month } => {
                format!("last {} {}", weekday.to_text(), month.to_text())
            }
            DateGenerator::WeekdayBefore { weekday, month, day } => {
                format!("before {} {} {}", weekday.to_text(), month.to_text(), day)
            }
            DateGenerator::WeekdayAfter { weekday, month, day } => {
                format!("after {} {} {}", weekday.to_text(), month.to_text(), day)
            }
            DateGenerator::FixedJulianDay(day)        => format!("julian {}", day),
            DateGenerator::ZeroBasedDay(day)          => format!("day {}", day),
            DateGenerator::PartialDate { month, day } => format!("partial {} {}", month.to_text(), day),
        }
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        let mut words = text.split_whitespace();
        let tag = words.next().unwrap_or("");
        let fields = words.map(number).collect::<Result<Vec<_>, _>>()?;

        let expected = match tag {
            "nth" | "before" | "after"  => 3,
            "first" | "last" | "partial" => 2,
            "julian" | "day"            => 1,
            _                           => return Err(Error::UnknownTag(tag.to_owned())),
        };

        if fields.len() != expected {
            return Err(Error::WrongFieldCount { expected, found: fields.len() });
        }

        let weekday = |n: i64| -> Result<Weekday, Error> { Ok(Weekday::from_zero(small(n)?)?) };
        let month   = |n: i64| -> Result<Month, Error>   { Ok(Month::from_one(small(n)?)?) };
        let day_of_year = |n: i64| u16::try_from(n).map_err(|_| Error::Parse(format!("day {} is out of range", n)));

        Ok(match tag {
            "nth"     => DateGenerator::nth(WeekOfMonth::from_one(small(fields[0])?)?, weekday(fields[1])?, month(fields[2])?),
            "first"   => DateGenerator::first(weekday(fields[0])?, month(fields[1])?),
            "last"    => DateGenerator::last(weekday(fields[0])?, month(fields[1])?),
            "before"  => DateGenerator::before(weekday(fields[0])?, month(fields[1])?, small(fields[2])?)?,
            "after"   => DateGenerator::after(weekday(fields[0])?, month(fields[1])?, small(fields[2])?)?,
            "julian"  => DateGenerator::julian(day_of_year(fields[0])?)?,
            "day"     => DateGenerator::zero_based(day_of_year(fields[0])?)?,
            _         => DateGenerator::partial(month(fields[0])?, small(fields[1])?)?,
        })
    }
}

impl TextCodec for AdjustmentOffsets {
    fn to_text(&self) -> String {
        format!("{} {} {}", self.dst_length().to_text(), self.dst_start_offset().to_text(), self.dst_end_offset().to_text())
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        let fields = text.split_whitespace().map(Duration::from_text).collect::<Result<Vec<_>, _>>()?;

        match fields.as_slice() {
            &[dst_length, start, end] => Ok(AdjustmentOffsets::new(dst_length, start, end)?),
            other                     => Err(Error::WrongFieldCount { expected: 3, found: other.len() }),
        }
    }
}

impl TextCodec for TransitionRule {
    fn to_text(&self) -> String {
        format!("{}|{}|{}", self.start().to_text(), self.end().to_text(), self.adjustment().to_text())
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        let parts = text.split('|').collect::<Vec<_>>();

        match parts.as_slice() {
            &[start, end, adjustment] => Ok(TransitionRule::new(DateGenerator::from_text(start)?,
                                                                DateGenerator::from_text(end)?,
                                                                AdjustmentOffsets::from_text(adjustment)?)),
            other                     => Err(Error::WrongFieldCount { expected: 3, found: other.len() }),
        }
    }
}


fn number(text: &str) -> Result<i64, Error> {
    text.trim().parse().map_err(|_| Error::Parse(format!("expected a number, found {:?}", text)))
}

fn small(n: i64) -> Result<i8, Error> {
    i8::try_from(n).map_err(|_| Error::Parse(format!("{} is out of range", n)))
}


/// Something wrong with a piece of text being read back.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The text isn’t in the expected form at all.
    Parse(String),

    /// The text has a generator tag that isn’t known.
    UnknownTag(String),

    /// The text has the wrong number of fields for its type.
    WrongFieldCount { expected: usize, found: usize },

    /// The fields don’t make a valid date.
    Date(cal::Error),

    /// The fields don’t make a valid generator.
    Generator(generator::Error),

    /// The fields don’t make a valid rule.
    Rule(rule::Error),
}

impl From<cal::Error> for Error {
    fn from(error: cal::Error) -> Self {
        Error::Date(error)
    }
}

impl From<generator::Error> for Error {
    fn from(error: generator::Error) -> Self {
        Error::Generator(error)
    }
}

impl From<rule::Error> for Error {
    fn from(error: rule::Error) -> Self {
        Error::Rule(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse(ref message)                    => write!(f, "parse error: {}", message),
            Error::UnknownTag(ref tag)                   => write!(f, "unknown generator tag {:?}", tag),
            Error::WrongFieldCount { expected, found }   => write!(f, "expected {} fields, found {}", expected, found),
            Error::Date(ref error)                       => write!(f, "invalid date: {}", error),
            Error::Generator(ref error)                  => write!(f, "invalid generator: {}", error),
            Error::Rule(ref error)                       => write!(f, "invalid rule: {}", error),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Error::Date(ref error)       => Some(error),
            Error::Generator(ref error)  => Some(error),
            Error::Rule(ref error)       => Some(error),
            _                            => None,
        }
    }
}


#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;

    macro_rules! serde_via_text {
        ($($type:ty => $expecting:expr),* $(,)?) => { $(
            impl serde::Serialize for $type {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.to_text())
                }
            }

            impl<'de> serde::Deserialize<'de> for $type {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    struct TextVisitor;

                    impl<'de> serde::de::Visitor<'de> for TextVisitor {
                        type Value = $type;

                        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                            f.write_str($expecting)
                        }

                        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<$type, E> {
                            <$type>::from_text(value).map_err(E::custom)
                        }
                    }

                    deserializer.deserialize_str(TextVisitor)
                }
            }
        )* };
    }

    serde_via_text! {
        Month             => "a month number",
        Weekday           => "a weekday number",
        WeekOfMonth       => "a week-of-month number",
        Duration          => "a number of seconds",
        Days              => "a number of days",
        Date              => "an ISO-8601 date",
        DatePeriod        => "two ISO-8601 dates separated by a slash",
        DateGenerator     => "a date generator",
        AdjustmentOffsets => "three numbers of seconds",
        TransitionRule    => "a transition rule",
    }
}
