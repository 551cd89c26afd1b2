//! Lengths of time on the timeline.

use std::fmt;
use std::ops::{Add, Sub, Mul, Neg};

use crate::cal::fmt::ISO;


/// Number of seconds in an hour.
const SECONDS_IN_HOUR: i64 = 60 * 60;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 24 * SECONDS_IN_HOUR;


/// A **duration** is a signed length of time, irrespective of time zone or
/// calendar format, with second precision.
///
/// Durations are used for UTC offsets, for the daylight-saving shift, and
/// for the time of day at which a transition happens.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Default)]
pub struct Duration {
    seconds: i64,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds }
    }

    /// Create a new duration from hour, minute, and second components,
    /// which are simply summed together.
    ///
    /// ### Examples
    ///
    /// ```
    /// use tzrule::Duration;
    ///
    /// assert_eq!(Duration::hms(2, 30, 0), Duration::of(9000));
    /// assert_eq!(Duration::hms(-5, 0, 0), Duration::of(-18000));
    /// ```
    pub fn hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self { seconds: hours * SECONDS_IN_HOUR + minutes * 60 + seconds }
    }

    /// Create a new duration that’s the given number of hours long.
    pub fn hours(hours: i64) -> Self {
        Self::hms(hours, 0, 0)
    }

    /// Returns the total length of this duration, in seconds.
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// Returns whether this duration points backwards in time.
    pub fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// Returns the hours, minutes, and seconds portions of the *magnitude*
    /// of this duration, as a 3-element tuple. The sign is available
    /// separately through `is_negative`.
    pub fn lengths(self) -> (i64, i64, i64) {
        let magnitude = self.seconds.abs();
        (magnitude / SECONDS_IN_HOUR, magnitude / 60 % 60, magnitude % 60)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Duration({})", self.iso())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.iso())
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::of(self.seconds + rhs.seconds)
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::of(self.seconds - rhs.seconds)
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self::of(self.seconds * amount)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::of(-self.seconds)
    }
}
