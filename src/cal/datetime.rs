//! Dates, times, datetimes, months, and weekdays.

use std::cmp::{Ordering, PartialOrd};
use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::fmt::ISO;
use crate::duration::{Duration, SECONDS_IN_DAY};
use crate::util::{RangeExt, split_cycles};

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use tzrule::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// Returns a year-month, pairing this year with the given month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use tzrule::{Year, Month};
    ///
    /// let changeover = Year(2004).month(Month::October);
    /// assert_eq!(changeover.year, Year(2004));
    /// assert_eq!(changeover.day_count(), 31);
    /// ```
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth {
            year: self,
            month,
        }
    }

    /// Returns the number of days in this year.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of LocalDate::from_days_since_2000.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        // Standard leap-year calculations, performed on the remainder
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


/// A month-year pair.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use tzrule::Year;
    /// use tzrule::Month::February;
    ///
    /// assert_eq!(Year(2000).month(February).day_count(), 29);
    /// assert_eq!(Year(1900).month(February).day_count(), 28);
    /// ```
    pub fn day_count(&self) -> i8 {
        self.month.days_in_month(self.year.is_leap_year())
    }

    /// Returns a `LocalDate` based on the day of this month.
    ///
    /// This is just a short-cut for the `LocalDate::ymd` constructor.
    pub fn day(&self, day: i8) -> Result<LocalDate, Error> {
        LocalDate::ymd(self.year.0, self.month, day)
    }

    /// Returns the last day of this month.
    pub fn last_day(&self) -> LocalDate {
        let ymd = YMD { year: self.year.0, month: self.month, day: self.day_count() };
        LocalDate::from_ymd_unchecked(ymd)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;


/// Number of days between  **1st January, 1970** and **1st March, 2000**.
///
/// This might seem like an odd number to calculate, instead of using the
/// 1st of January as a reference point, but it turns out that by having the
/// reference point immediately after a possible leap-year day, the maths
/// needed to calculate the day/week/month of a day count comes out a *lot*
/// simpler!
///
/// The Gregorian calendar operates on a 400-year cycle, so the combination
/// of having it on a year that’s a multiple of 400, and having the leap
/// day at the very end of one of these cycles, means that the calculations
/// are reduced to simple division (of course, with a bit of date-shifting
/// to base a date around this reference point).
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March



/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
#[derive(Eq, Clone, Copy, Hash)]
pub struct LocalDate {
    ymd:     YMD,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use tzrule::{LocalDate, Month, Weekday, DatePiece};
    ///
    /// let date = LocalDate::ymd(2004, Month::April, 4).unwrap();
    /// assert_eq!(date.year(), 2004);
    /// assert_eq!(date.month(), Month::April);
    /// assert_eq!(date.day(), 4);
    /// assert_eq!(date.weekday(), Weekday::Sunday);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(Self::from_days_since_epoch)
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values, where the 1st of January is day 1.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use tzrule::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    ///
    /// assert!(LocalDate::yd(2015, 366).is_err());
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        if yearday.is_within(1 ..= Year(year).day_count() as i64) {
            let jan_1 = YMD { year, month: January, day: 1 };
            let days = jan_1.to_days_since_epoch()?;
            Ok(Self::from_days_since_epoch(days + yearday - 1))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Computes a local date given the number of days that have passed
    /// since **1st January, 1970**. Negative values count backwards.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use tzrule::{LocalDate, Month};
    ///
    /// let date = LocalDate::from_days_since_epoch(12512);
    /// assert_eq!(date, LocalDate::ymd(2004, Month::April, 4).unwrap());
    /// assert_eq!(date.days_since_epoch(), 12512);
    /// ```
    pub fn from_days_since_epoch(days: i64) -> Self {
        Self::from_days_since_2000(days - EPOCH_DIFFERENCE)
    }

    /// Returns the number of days between **1st January, 1970** and this
    /// date.
    pub fn days_since_epoch(&self) -> i64 {
        self.ymd.days_since_epoch_unchecked()
    }

    /// Returns the date that is the given number of days after this one.
    /// Negative values go backwards.
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch() + days)
    }

    /// Computes a LocalDate - year, month, day, and weekday - given the
    /// number of days that have passed since the **1st March, 2000**.
    fn from_days_since_2000(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // Calculate the numbers of 100-year cycles, 4-year cycles, and
        // leftover years, continually reducing the number of days left to
        // think about.
        let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this year

        // Turn all those cycles into an actual number of years.
        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Work out the month and number of days into the month by scanning
        // the time triangle, finding the month that has the correct number
        // of days elapsed at the end of it.
        // (it’s “11 - index” below because the triangle goes backwards)
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s March.
        };

        // Need to add 2 to the month in order to compensate for the EPOCH
        // being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;
        }

        Self {
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: MONTHS[month],
                day:   (month_days + 1) as i8,
            },
        }
    }

    /// Builds a date from fields that are already known to be valid.
    fn from_ymd_unchecked(ymd: YMD) -> Self {
        Self::from_days_since_epoch(ymd.days_since_epoch_unchecked())
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn weekday(&self) -> Weekday { self.weekday }

    fn yearday(&self) -> i16 {
        let leap_day = Year(self.ymd.year).is_leap_year() && self.ymd.month >= March;
        self.ymd.month.days_before_start() + self.ymd.day as i16 + if leap_day { 1 } else { 0 }
    }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self.iso())
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.iso())
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


impl LocalTime {

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight.
    pub fn from_seconds_since_midnight(seconds: i64) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0 }
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        if hour.is_within(0 ..= 23) && minute.is_within(0 ..= 59) && second.is_within(0 ..= 59) {
            Ok(Self { hour, minute, second })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Calculate the number of seconds since midnight this time is at.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self.iso())
    }
}


impl LocalDateTime {

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        // Just split the input value into days and seconds, and let
        // LocalDate and LocalTime do all the hard work.
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_epoch(days),
            time: LocalTime::from_seconds_since_midnight(secs),
        }
    }

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self {
            date,
            time,
        }
    }

    /// Creates a date-time at the given offset from the start of a day.
    /// Offsets of a day or more, or negative offsets, roll over into the
    /// neighbouring days.
    pub fn on_day_at(date: LocalDate, time_of_day: Duration) -> Self {
        Self::new(date, LocalTime::midnight()) + time_of_day
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Returns the number of seconds between **midnight, 1st January,
    /// 1970** and this date-time, treating both as being in the same zone.
    pub fn to_seconds(&self) -> i64 {
        self.date.days_since_epoch() * SECONDS_IN_DAY + self.time.to_seconds()
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self.iso())
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.iso())
    }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self::at(self.to_seconds() + duration.seconds())
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::at(self.to_seconds() - duration.seconds())
    }
}

impl Sub<LocalDateTime> for LocalDateTime {
    type Output = Duration;

    fn sub(self, other: Self) -> Duration {
        Duration::of(self.to_seconds() - other.to_seconds())
    }
}


/// A **YMD** is an implementation detail of `LocalDate`. It provides
/// helper methods relating to the construction of `LocalDate` instances.
///
/// The main difference is that while all `LocalDate` values get checked
/// for validity before they are used, there is no such check for `YMD`.
/// The interface to `LocalDate` ensures that it should be impossible to
/// create an instance of the 74th of March, for example, but you’re
/// free to create such an instance of `YMD`. For this reason, it is not
/// exposed to implementors of this library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970. Returns the number of days if this datestamp is
    /// valid; an error otherwise.
    fn to_days_since_epoch(&self) -> Result<i64, Error> {
        if self.is_valid(Year(self.year).is_leap_year()) {
            Ok(self.days_since_epoch_unchecked())
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    fn days_since_epoch_unchecked(&self) -> i64 {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = Year(self.year).leap_year_calculations();

        // Work out the number of days from the start of 1970 to now,
        // which is a multiple of the number of years...
        years * 365

            // Plus the number of days between the start of 2000 and the
            // start of 1970, to make up the difference because our
            // dates start at 2000 and day counts start at 1970...
            + 10958

            // Plus the number of leap years that have elapsed between
            // now and the start of 2000...
            + leap_days_elapsed

            // Plus the number of days in all the months leading up to
            // the current month...
            + self.month.days_before_start() as i64

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the number of days in the month so far! (Days are
            // 1-indexed, so we make them 0-indexed here)
            + (self.day - 1) as i64
    }

    /// Returns whether this datestamp is valid, which basically means
    /// whether the day is in the range allowed by the month.
    fn is_valid(&self, is_leap_year: bool) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year)
    }
}

/// Computes the weekday, given the number of days that have passed
/// since the **1st March, 2000**.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    WEEKDAYS[(days + 3).rem_euclid(7) as usize]
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "datetime field out of range")
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    pub(crate) fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use tzrule::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1 ..= 12) {
            Ok(MONTHS[month as usize - 1])
        }
        else {
            Err(Error::OutOfRange)
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

static WEEKDAYS: [Weekday; 7] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

// Sunday is Day 0, which is also how POSIX rule strings count them.
//
// Weekdays get no Ord instance because there’s no real standard as to
// whether Sunday should come before Monday, or the other way around. They
// don’t need one, as the field is ignored when comparing LocalDates.

impl Weekday {

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use tzrule::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(0 ..= 6) {
            Ok(WEEKDAYS[weekday as usize])
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns this weekday’s number, with Sunday as Day 0.
    pub fn days_from_sunday(self) -> i8 {
        self as i8
    }

    /// Returns how many days forward it is from this weekday to the next
    /// occurrence of `other`, from 0 (the same day) to 6.
    ///
    /// ```rust
    /// use tzrule::Weekday;
    /// assert_eq!(Weekday::Friday.days_until(Weekday::Sunday), 2);
    /// assert_eq!(Weekday::Sunday.days_until(Weekday::Sunday), 0);
    /// ```
    pub fn days_until(self, other: Self) -> i8 {
        (other.days_from_sunday() - self.days_from_sunday() + 7) % 7
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}


/// Misc tests that don’t seem to fit anywhere.
#[cfg(test)]
mod test {
    pub(crate) use super::{LocalDateTime, LocalDate, LocalTime, Month, Weekday, Year};
    pub(crate) use crate::cal::DatePiece;

    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016].iter() {
            assert!(LocalDate::ymd(*year, Month::February, 29).is_ok());
            assert!(LocalDate::ymd(*year + 1, Month::February, 29).is_err());
        }
        assert!(LocalDate::ymd(1600, Month::February, 29).is_ok());
        assert!(LocalDate::ymd(1601, Month::February, 29).is_err());
        assert!(LocalDate::ymd(1602, Month::February, 29).is_err());
    }

    #[test]
    fn new() {
        for year in 1400 ..= 3000 {
            for (month, too_far) in [(1, 32), (2, 30), (3, 32), (4, 31), (5, 32), (6, 31),
                                     (7, 32), (8, 32), (9, 31), (10, 32), (11, 31), (12, 32)].iter() {
                assert!(LocalDate::ymd(year, Month::from_one(*month).unwrap(), *too_far).is_err());
            }
        }
    }

    #[test]
    fn to_from_days_since_epoch() {
        for date in vec![
            LocalDate::ymd(1970, Month::January,   1).unwrap(),
            LocalDate::ymd(1400, Month::January,   1).unwrap(),
            LocalDate::ymd(1971, Month::January,   1).unwrap(),
            LocalDate::ymd(1989, Month::November, 10).unwrap(),
            LocalDate::ymd(2000, Month::February, 29).unwrap(),
            LocalDate::ymd(2000, Month::March,     1).unwrap(),
            LocalDate::ymd(2004, Month::October,  31).unwrap(),
            LocalDate::ymd(9999, Month::December, 31).unwrap(),
        ] {
            assert_eq!(date, LocalDate::from_days_since_epoch(date.days_since_epoch()));
        }
    }

    #[test]
    fn every_day_round_trips() {
        let start = LocalDate::ymd(1400, Month::January, 1).unwrap().days_since_epoch();
        let end = LocalDate::ymd(9999, Month::December, 31).unwrap().days_since_epoch();
        let mut previous = LocalDate::from_days_since_epoch(start - 1);

        for days in start ..= end {
            let date = LocalDate::from_days_since_epoch(days);
            assert!(date > previous);
            assert_eq!(date.days_since_epoch(), days);
            assert_eq!(LocalDate::ymd(date.year(), date.month(), date.day()), Ok(date));
            assert_eq!(previous.weekday().days_until(date.weekday()), 1);
            previous = date;
        }
    }

    #[test]
    fn weekdays() {
        assert_eq!(LocalDate::ymd(1970, Month::January, 1).unwrap().weekday(), Weekday::Thursday);
        assert_eq!(LocalDate::ymd(2004, Month::April,   4).unwrap().weekday(), Weekday::Sunday);
        assert_eq!(LocalDate::ymd(1400, Month::January, 1).unwrap().weekday(), Weekday::Wednesday);
    }

    #[test]
    fn yeardays() {
        assert_eq!(LocalDate::ymd(2015, Month::December, 31).unwrap().yearday(), 365);
        assert_eq!(LocalDate::ymd(2016, Month::December, 31).unwrap().yearday(), 366);
        assert_eq!(LocalDate::yd(2016, 60).unwrap(), LocalDate::ymd(2016, Month::February, 29).unwrap());
    }

    #[test]
    fn last_day_of_february() {
        assert_eq!(Year(2000).month(Month::February).last_day().day(), 29);
        assert_eq!(Year(2100).month(Month::February).last_day().day(), 28);
    }

    #[test]
    fn day_rollover() {
        let evening = LocalDateTime::new(LocalDate::ymd(2004, Month::December, 31).unwrap(),
                                         LocalTime::hms(23, 0, 0).unwrap());
        let next = evening + crate::Duration::hours(2);
        assert_eq!(next.date(), LocalDate::ymd(2005, Month::January, 1).unwrap());
        assert_eq!(next.time(), LocalTime::hms(1, 0, 0).unwrap());
        assert_eq!(next - evening, crate::Duration::hours(2));
    }

    mod debug {
        use super::*;

        #[test]
        fn recently() {
            let date = LocalDate::ymd(1600, Month::February, 28).unwrap();
            let debugged = format!("{:?}", date);

            assert_eq!(debugged, "LocalDate(1600-02-28)");
        }

        #[test]
        fn midday() {
            let time = LocalTime::hms(12, 0, 0).unwrap();
            let debugged = format!("{:?}", time);

            assert_eq!(debugged, "LocalTime(12:00:00)");
        }

        #[test]
        fn ascending() {
            let then = LocalDateTime::new(
                        LocalDate::ymd(2009, Month::February, 13).unwrap(),
                        LocalTime::hms(23, 31, 30).unwrap());
            let debugged = format!("{:?}", then);

            assert_eq!(debugged, "LocalDateTime(2009-02-13T23:31:30)");
        }
    }
}
