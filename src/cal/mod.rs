//! ISO-8601 date and time calculations, which use years, months, days,
//! hours, minutes, and seconds.

pub(crate) mod datetime;
pub(crate) mod fmt;
pub mod special;

pub use self::datetime::{Year, YearMonth, Month, Weekday, LocalDate, LocalTime, LocalDateTime, Error};
pub use self::special::{Date, DatePeriod, Days, SpecialValue};


/// The first and last years that rules can be evaluated for. Dates outside
/// this range exist as `LocalDate` values, but generators refuse them, and
/// `Date` arithmetic that strays out of it produces *not-a-date*.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i64> = 1400 ..= 9999;


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;
}
