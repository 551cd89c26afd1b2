//! Daylight-saving transition rules: a pair of generators, and the times
//! of day at which the clocks change.

use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::{LocalDateTime, DatePiece};
use crate::duration::{Duration, SECONDS_IN_DAY};
use crate::generator::{self, DateGenerator};


/// The three durations that go along with a transition rule.
///
/// Each of them has to be at least zero and less than a day long.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct AdjustmentOffsets {
    dst_length: Duration,
    dst_start_offset: Duration,
    dst_end_offset: Duration,
}

impl AdjustmentOffsets {

    /// Creates a new set of offsets: how far the clocks move, and the
    /// time of day in standard time at which daylight-saving starts and
    /// ends.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use tzrule::{AdjustmentOffsets, Duration};
    ///
    /// let us = AdjustmentOffsets::new(Duration::hours(1), Duration::hours(2), Duration::hours(2));
    /// assert!(us.is_ok());
    ///
    /// let bad = AdjustmentOffsets::new(Duration::hours(1), Duration::hours(24), Duration::hours(2));
    /// assert!(bad.is_err());
    /// ```
    pub fn new(dst_length: Duration, dst_start_offset: Duration, dst_end_offset: Duration) -> Result<Self, Error> {
        check_sub_day("daylight-saving length", dst_length)?;
        check_sub_day("start time", dst_start_offset)?;
        check_sub_day("end time", dst_end_offset)?;

        Ok(Self { dst_length, dst_start_offset, dst_end_offset })
    }

    /// How far the clocks go forward when daylight-saving starts.
    pub fn dst_length(&self) -> Duration {
        self.dst_length
    }

    /// The time of day at which daylight-saving starts.
    pub fn dst_start_offset(&self) -> Duration {
        self.dst_start_offset
    }

    /// The time of day at which daylight-saving ends.
    pub fn dst_end_offset(&self) -> Duration {
        self.dst_end_offset
    }
}

fn check_sub_day(field: &'static str, value: Duration) -> Result<(), Error> {
    if value.is_negative() || value.seconds() >= SECONDS_IN_DAY {
        debug!("rejecting {} of {}", field, value);
        Err(Error::InvalidAdjustment { field, value })
    }
    else {
        Ok(())
    }
}


/// A **transition rule** says when daylight-saving starts and ends in any
/// given year.
///
/// ### Examples
///
/// ```rust
/// use tzrule::{TransitionRule, AdjustmentOffsets, DateGenerator, Duration};
/// use tzrule::{LocalDate, LocalDateTime, LocalTime, Month, Weekday};
///
/// let offsets = AdjustmentOffsets::new(Duration::hours(1), Duration::hours(2), Duration::hours(2)).unwrap();
/// let rule = TransitionRule::new(DateGenerator::first(Weekday::Sunday, Month::April),
///                                DateGenerator::last(Weekday::Sunday, Month::October),
///                                offsets);
///
/// let summer = LocalDateTime::new(LocalDate::ymd(2004, Month::July, 4).unwrap(), LocalTime::midnight());
/// assert_eq!(rule.in_dst(summer), Ok(true));
/// ```
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct TransitionRule {
    start: DateGenerator,
    end: DateGenerator,
    adjustment: AdjustmentOffsets,
}

impl TransitionRule {

    pub fn new(start: DateGenerator, end: DateGenerator, adjustment: AdjustmentOffsets) -> Self {
        Self { start, end, adjustment }
    }

    /// The generator for the day daylight-saving starts.
    pub fn start(&self) -> DateGenerator {
        self.start
    }

    /// The generator for the day daylight-saving ends.
    pub fn end(&self) -> DateGenerator {
        self.end
    }

    pub fn adjustment(&self) -> AdjustmentOffsets {
        self.adjustment
    }

    /// Works out when daylight-saving starts and ends in the given year.
    /// Both ends of the window are in local *standard* time.
    pub fn resolve(&self, year: i64) -> Result<DstWindow, generator::Error> {
        let start = self.start.date_in(year)?;
        let end = self.end.date_in(year)?;

        let window = DstWindow {
            start: LocalDateTime::on_day_at(start, self.adjustment.dst_start_offset),
            end:   LocalDateTime::on_day_at(end, self.adjustment.dst_end_offset),
        };

        trace!("resolved daylight-saving window for {}: {:?}", year, window);
        Ok(window)
    }

    /// Works out when daylight-saving starts and ends in the given year, in
    /// UTC, for a zone with the given standard offset.
    pub fn resolve_utc(&self, year: i64, utc_offset: Duration) -> Result<DstWindow, generator::Error> {
        let local = self.resolve(year)?;

        Ok(DstWindow {
            start: local.start - utc_offset,
            end:   local.end - utc_offset,
        })
    }

    /// Returns whether daylight-saving is in effect at the given local
    /// standard time.
    ///
    /// The window is resolved again for the year of every instant passed
    /// in, so a rule that starts later in the year than it ends (as in the
    /// southern hemisphere) is handled for each year on its own.
    pub fn in_dst(&self, local: LocalDateTime) -> Result<bool, generator::Error> {
        Ok(self.resolve(local.year())?.contains(local))
    }
}

impl fmt::Display for TransitionRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} from the {} at {} until the {} at {}",
               self.adjustment.dst_length,
               self.start, self.adjustment.dst_start_offset,
               self.end, self.adjustment.dst_end_offset)
    }
}


/// The span of one year during which daylight-saving is in effect.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct DstWindow {

    /// The first instant of daylight-saving.
    pub start: LocalDateTime,

    /// The first instant *after* daylight-saving.
    pub end: LocalDateTime,
}

impl DstWindow {

    /// Whether this window starts later in the year than it ends, meaning
    /// daylight-saving runs over the new year.
    pub fn is_wraparound(&self) -> bool {
        self.start > self.end
    }

    /// Returns whether the given instant, from the same year, is within
    /// this window. The start is included and the end is not. When the
    /// start and end are the same, the window is empty.
    pub fn contains(&self, instant: LocalDateTime) -> bool {
        if self.is_wraparound() {
            instant >= self.start || instant < self.end
        }
        else {
            self.start <= instant && instant < self.end
        }
    }
}


/// Something wrong with the values making up a rule.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// One of the adjustment offsets is negative, or a day or longer.
    InvalidAdjustment { field: &'static str, value: Duration },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidAdjustment { field, value } => write!(f, "{} {} is not within a day", field, value),
        }
    }
}

impl ErrorTrait for Error {
}


#[cfg(test)]
mod test {
    pub use super::*;
    pub use crate::cal::{LocalDate, LocalTime, Month, Weekday};

    fn at(year: i64, month: Month, day: i8, hour: i8, minute: i8, second: i8) -> LocalDateTime {
        LocalDateTime::new(LocalDate::ymd(year, month, day).unwrap(),
                           LocalTime::hms(hour, minute, second).unwrap())
    }

    fn two_am() -> AdjustmentOffsets {
        AdjustmentOffsets::new(Duration::hours(1), Duration::hours(2), Duration::hours(2)).unwrap()
    }

    fn northern() -> TransitionRule {
        TransitionRule::new(DateGenerator::first(Weekday::Sunday, Month::April),
                            DateGenerator::last(Weekday::Sunday, Month::October),
                            two_am())
    }

    fn southern() -> TransitionRule {
        TransitionRule::new(DateGenerator::first(Weekday::Sunday, Month::October),
                            DateGenerator::first(Weekday::Sunday, Month::April),
                            two_am())
    }

    mod resolving {
        use super::*;

        #[test]
        fn new_york_2004() {
            let window = northern().resolve(2004).unwrap();
            assert_eq!(window.start, at(2004, Month::April, 4, 2, 0, 0));
            assert_eq!(window.end, at(2004, Month::October, 31, 2, 0, 0));
            assert!(!window.is_wraparound());
        }

        #[test]
        fn in_utc() {
            let window = northern().resolve_utc(2004, Duration::hours(-5)).unwrap();
            assert_eq!(window.start, at(2004, Month::April, 4, 7, 0, 0));
            assert_eq!(window.end, at(2004, Month::October, 31, 7, 0, 0));
        }

        #[test]
        fn southern_wraps_around() {
            assert!(southern().resolve(2004).unwrap().is_wraparound());
        }

        #[test]
        fn generator_failures_propagate() {
            let rule = TransitionRule::new(DateGenerator::nth(generator::WeekOfMonth::Fifth, Weekday::Friday, Month::February),
                                           DateGenerator::last(Weekday::Sunday, Month::October),
                                           two_am());
            assert!(rule.resolve(2004).is_ok());
            assert!(matches!(rule.resolve(2015), Err(generator::Error::InvalidGenerator { year: 2015, .. })));
        }
    }

    mod membership {
        use super::*;

        #[test]
        fn start_is_included() {
            assert_eq!(northern().in_dst(at(2004, Month::April, 4, 2, 0, 0)), Ok(true));
        }

        #[test]
        fn second_before_start() {
            assert_eq!(northern().in_dst(at(2004, Month::April, 4, 1, 59, 59)), Ok(false));
        }

        #[test]
        fn end_is_excluded() {
            assert_eq!(northern().in_dst(at(2004, Month::October, 31, 1, 59, 59)), Ok(true));
            assert_eq!(northern().in_dst(at(2004, Month::October, 31, 2, 0, 0)), Ok(false));
        }

        #[test]
        fn southern_january() {
            assert_eq!(southern().in_dst(at(2004, Month::January, 15, 12, 0, 0)), Ok(true));
            assert_eq!(southern().in_dst(at(2004, Month::December, 25, 12, 0, 0)), Ok(true));
            assert_eq!(southern().in_dst(at(2004, Month::July, 1, 12, 0, 0)), Ok(false));
        }

        #[test]
        fn empty_window() {
            let same = DateGenerator::first(Weekday::Sunday, Month::April);
            let rule = TransitionRule::new(same, same, two_am());
            assert_eq!(rule.in_dst(at(2004, Month::April, 4, 2, 0, 0)), Ok(false));
        }
    }

    mod adjustments {
        use super::*;

        #[test]
        fn negative() {
            assert_eq!(AdjustmentOffsets::new(Duration::hours(-1), Duration::hours(2), Duration::hours(2)),
                       Err(Error::InvalidAdjustment { field: "daylight-saving length", value: Duration::hours(-1) }));
        }

        #[test]
        fn a_whole_day() {
            assert!(AdjustmentOffsets::new(Duration::hours(1), Duration::hours(2), Duration::hours(24)).is_err());
            assert!(AdjustmentOffsets::new(Duration::hours(1), Duration::hms(23, 59, 59), Duration::zero()).is_ok());
        }
    }

    #[test]
    fn description() {
        assert_eq!(northern().to_string(),
                   "+01:00:00 from the first Sunday of April at +02:00:00 until the last Sunday of October at +02:00:00");
    }
}
