//! Date generators: rules that pick one concrete date out of any year,
//! such as “the last Sunday of October”.

use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::{Year, YearMonth, Month, Weekday, LocalDate, Date, DatePiece, SUPPORTED_YEARS};
use crate::util::RangeExt;


/// Which occurrence of a weekday within a month to pick.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum WeekOfMonth {
    First = 1, Second = 2, Third = 3, Fourth = 4, Fifth = 5,
}

static WEEKS_OF_MONTH: [WeekOfMonth; 5] = [
    WeekOfMonth::First, WeekOfMonth::Second, WeekOfMonth::Third,
    WeekOfMonth::Fourth, WeekOfMonth::Fifth,
];

impl WeekOfMonth {

    /// Returns the week based on a number, with the first week as
    /// **Week 1**.
    ///
    /// ```rust
    /// use tzrule::WeekOfMonth;
    /// assert_eq!(WeekOfMonth::from_one(2), Ok(WeekOfMonth::Second));
    /// assert!(WeekOfMonth::from_one(6).is_err());
    /// ```
    pub fn from_one(week: i8) -> Result<Self, Error> {
        if week.is_within(1 ..= 5) {
            Ok(WEEKS_OF_MONTH[week as usize - 1])
        }
        else {
            Err(Error::InvalidField { field: "week of month", value: week as i64 })
        }
    }

    /// The number of whole weeks to skip past the first occurrence.
    fn weeks_after_first(self) -> i8 {
        self as i8 - 1
    }
}

impl fmt::Display for WeekOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            WeekOfMonth::First  => "first",
            WeekOfMonth::Second => "second",
            WeekOfMonth::Third  => "third",
            WeekOfMonth::Fourth => "fourth",
            WeekOfMonth::Fifth  => "fifth",
        })
    }
}


/// A **date generator** maps a year to one date within it.
///
/// Generators are plain values: they hold only the fields they need and
/// are evaluated from scratch for every year they’re given.
///
/// The variants can be built directly, but the constructor functions check
/// their fields first. A generator with fields that can never produce a
/// date fails every evaluation with `Error::InvalidGenerator`.
///
/// ### Examples
///
/// ```rust
/// use tzrule::{DateGenerator, LocalDate, Month, Weekday};
///
/// let end_of_dst = DateGenerator::last(Weekday::Sunday, Month::October);
/// assert_eq!(end_of_dst.date_in(2004).unwrap(), LocalDate::ymd(2004, Month::October, 31).unwrap());
/// assert_eq!(end_of_dst.to_string(), "last Sunday of October");
/// ```
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum DateGenerator {

    /// The first, second, third, fourth, or fifth occurrence of a weekday
    /// in a month. There isn’t always a fifth one.
    NthWeekdayOfMonth { week: WeekOfMonth, weekday: Weekday, month: Month },

    /// The first occurrence of a weekday in a month.
    FirstWeekdayOfMonth { weekday: Weekday, month: Month },

    /// The last occurrence of a weekday in a month.
    LastWeekdayOfMonth { weekday: Weekday, month: Month },

    /// The latest date on or before an anchor day that falls on the given
    /// weekday. This can land in the previous year.
    WeekdayBefore { weekday: Weekday, month: Month, day: i8 },

    /// The earliest date on or after an anchor day that falls on the given
    /// weekday. This can land in the next year.
    WeekdayAfter { weekday: Weekday, month: Month, day: i8 },

    /// A day of the year from 1 to 365, where the 29th of February is never
    /// counted: day 59 is always the 28th of February, and day 60 is always
    /// the 1st of March.
    FixedJulianDay(u16),

    /// A day of the year from 0 to 365, where the 29th of February *is*
    /// counted, so day 365 only exists in leap years.
    ZeroBasedDay(u16),

    /// The same month and day every year.
    PartialDate { month: Month, day: i8 },
}

impl DateGenerator {

    /// The nth occurrence of a weekday in a month.
    pub fn nth(week: WeekOfMonth, weekday: Weekday, month: Month) -> Self {
        DateGenerator::NthWeekdayOfMonth { week, weekday, month }
    }

    /// The first occurrence of a weekday in a month.
    pub fn first(weekday: Weekday, month: Month) -> Self {
        DateGenerator::FirstWeekdayOfMonth { weekday, month }
    }

    /// The last occurrence of a weekday in a month.
    pub fn last(weekday: Weekday, month: Month) -> Self {
        DateGenerator::LastWeekdayOfMonth { weekday, month }
    }

    /// The given weekday on or before the anchor day, which has to exist in
    /// at least leap years.
    pub fn before(weekday: Weekday, month: Month, day: i8) -> Result<Self, Error> {
        check_month_day(month, day)?;
        Ok(DateGenerator::WeekdayBefore { weekday, month, day })
    }

    /// The given weekday on or after the anchor day, which has to exist in
    /// at least leap years.
    pub fn after(weekday: Weekday, month: Month, day: i8) -> Result<Self, Error> {
        check_month_day(month, day)?;
        Ok(DateGenerator::WeekdayAfter { weekday, month, day })
    }

    /// A day of the year from 1 to 365, ignoring leap days.
    pub fn julian(day: u16) -> Result<Self, Error> {
        if day.is_within(1 ..= 365) {
            Ok(DateGenerator::FixedJulianDay(day))
        }
        else {
            Err(Error::InvalidField { field: "julian day", value: day as i64 })
        }
    }

    /// A day of the year from 0 to 365, counting leap days.
    pub fn zero_based(day: u16) -> Result<Self, Error> {
        if day.is_within(0 ..= 365) {
            Ok(DateGenerator::ZeroBasedDay(day))
        }
        else {
            Err(Error::InvalidField { field: "zero-based day", value: day as i64 })
        }
    }

    /// A fixed month and day.
    pub fn partial(month: Month, day: i8) -> Result<Self, Error> {
        check_month_day(month, day)?;
        Ok(DateGenerator::PartialDate { month, day })
    }

    /// Computes the date that this generator picks out in the given year.
    ///
    /// This fails if the year is outside the supported range, or if the
    /// generator has no date in this particular year: a fifth weekday that
    /// only occurs four times, or a leap day in a common year.
    pub fn date_in(&self, year: i64) -> Result<LocalDate, Error> {
        if !SUPPORTED_YEARS.contains(&year) {
            trace!("year {} is out of range for generator {:?}", year, self);
            return Err(Error::YearOutOfRange(year));
        }

        let found = match *self {
            DateGenerator::NthWeekdayOfMonth { week, weekday, month } => {
                nth_weekday(Year(year).month(month), week, weekday)
            }

            DateGenerator::FirstWeekdayOfMonth { weekday, month } => {
                nth_weekday(Year(year).month(month), WeekOfMonth::First, weekday)
            }

            DateGenerator::LastWeekdayOfMonth { weekday, month } => {
                let last = Year(year).month(month).last_day();
                Some(last.add_days(-(weekday.days_until(last.weekday()) as i64)))
            }

            DateGenerator::WeekdayBefore { weekday, month, day } => {
                Year(year).month(month).day(day).ok()
                    .map(|anchor| anchor.add_days(-(weekday.days_until(anchor.weekday()) as i64)))
            }

            DateGenerator::WeekdayAfter { weekday, month, day } => {
                Year(year).month(month).day(day).ok()
                    .map(|anchor| anchor.add_days(anchor.weekday().days_until(weekday) as i64))
            }

            DateGenerator::FixedJulianDay(day) => {
                let skip_leap_day = Year(year).is_leap_year() && day >= 60;
                LocalDate::yd(year, day as i64 + if skip_leap_day { 1 } else { 0 }).ok()
            }

            DateGenerator::ZeroBasedDay(day) => {
                LocalDate::yd(year, day as i64 + 1).ok()
            }

            DateGenerator::PartialDate { month, day } => {
                Year(year).month(month).day(day).ok()
            }
        };

        found.ok_or_else(|| {
            trace!("generator {:?} has no date in {}", self, year);
            Error::InvalidGenerator { generator: *self, year }
        })
    }

    /// Computes the date that this generator picks out in the given year,
    /// as a `Date` that can take part in special-value arithmetic.
    pub fn evaluate(&self, year: i64) -> Result<Date, Error> {
        self.date_in(year).map(Date::from)
    }
}

impl fmt::Display for DateGenerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DateGenerator::NthWeekdayOfMonth { week, weekday, month }  => write!(f, "{} {} of {}", week, weekday, month),
            DateGenerator::FirstWeekdayOfMonth { weekday, month }      => write!(f, "first {} of {}", weekday, month),
            DateGenerator::LastWeekdayOfMonth { weekday, month }       => write!(f, "last {} of {}", weekday, month),
            DateGenerator::WeekdayBefore { weekday, month, day }       => write!(f, "{} on or before {} {}", weekday, month, day),
            DateGenerator::WeekdayAfter { weekday, month, day }        => write!(f, "{} on or after {} {}", weekday, month, day),
            DateGenerator::FixedJulianDay(day)                         => write!(f, "julian day {}", day),
            DateGenerator::ZeroBasedDay(day)                           => write!(f, "zero-based day {}", day),
            DateGenerator::PartialDate { month, day }                  => write!(f, "{} {}", month, day),
        }
    }
}

/// Finds the given occurrence of a weekday, if the month has that many.
fn nth_weekday(year_month: YearMonth, week: WeekOfMonth, weekday: Weekday) -> Option<LocalDate> {
    let first = year_month.day(1).ok()?;
    let day = 1 + first.weekday().days_until(weekday) + 7 * week.weeks_after_first();
    year_month.day(day).ok()
}

/// Checks that a month and day pair exists in a leap year, which is as
/// lenient as it gets.
fn check_month_day(month: Month, day: i8) -> Result<(), Error> {
    if day.is_within(1 ..= month.days_in_month(true)) {
        Ok(())
    }
    else {
        Err(Error::InvalidField { field: "day of month", value: day as i64 })
    }
}


/// Something wrong with a generator, or with the year it was given.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The generator has no date in this year.
    InvalidGenerator { generator: DateGenerator, year: i64 },

    /// The year is outside `SUPPORTED_YEARS`.
    YearOutOfRange(i64),

    /// A generator was constructed with a field that is out of range.
    InvalidField { field: &'static str, value: i64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidGenerator { ref generator, year } => write!(f, "there is no {} in {}", generator, year),
            Error::YearOutOfRange(year)                     => write!(f, "year {} is outside {}..={}", year, SUPPORTED_YEARS.start(), SUPPORTED_YEARS.end()),
            Error::InvalidField { field, value }            => write!(f, "{} {} is out of range", field, value),
        }
    }
}

impl ErrorTrait for Error {
}
