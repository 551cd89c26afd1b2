//! Zones that follow a fixed standard offset, with an optional
//! daylight-saving rule on top, and conversions between wall-clock time,
//! zoned time, and UTC.

use crate::cal::{LocalDateTime, DatePiece, TimePiece, Month, Weekday, SUPPORTED_YEARS};
use crate::duration::Duration;
use crate::generator;
use crate::rule::{TransitionRule, AdjustmentOffsets};


/// The names of a zone, for both standard and daylight-saving time.
/// These are only ever carried around, never interpreted.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct ZoneNames {
    std_name: String,
    std_abbrev: String,
    dst_name: String,
    dst_abbrev: String,
}

impl ZoneNames {
    pub fn new(std_name: impl Into<String>, std_abbrev: impl Into<String>,
               dst_name: impl Into<String>, dst_abbrev: impl Into<String>) -> Self {
        Self {
            std_name:   std_name.into(),
            std_abbrev: std_abbrev.into(),
            dst_name:   dst_name.into(),
            dst_abbrev: dst_abbrev.into(),
        }
    }

    pub fn std_name(&self) -> &str { &self.std_name }
    pub fn std_abbrev(&self) -> &str { &self.std_abbrev }
    pub fn dst_name(&self) -> &str { &self.dst_name }
    pub fn dst_abbrev(&self) -> &str { &self.dst_abbrev }
}


/// A **zone descriptor** is everything needed to turn wall-clock times in
/// one place into UTC and back: the names, the standard offset from UTC,
/// and the daylight-saving rule, if the zone has one.
///
/// Descriptors can be built by hand, or parsed from POSIX-style text such
/// as `EST-05:00:00EDT+01:00:00,M4.1.0/02:00:00,M10.5.0/02:00:00`; the two
/// are interchangeable.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct ZoneDescriptor {
    names: ZoneNames,
    utc_offset: Duration,
    rule: Option<TransitionRule>,
}

impl ZoneDescriptor {

    pub fn new(names: ZoneNames, utc_offset: Duration, rule: Option<TransitionRule>) -> Self {
        Self { names, utc_offset, rule }
    }

    /// Replaces the long names of the zone, keeping the abbreviations.
    ///
    /// Descriptor text only carries the abbreviations, which parsing uses
    /// for the long names as well.
    pub fn with_long_names(mut self, std_name: impl Into<String>, dst_name: impl Into<String>) -> Self {
        self.names.std_name = std_name.into();
        self.names.dst_name = dst_name.into();
        self
    }

    pub fn names(&self) -> &ZoneNames {
        &self.names
    }

    pub fn std_zone_name(&self) -> &str {
        self.names.std_name()
    }

    pub fn std_zone_abbrev(&self) -> &str {
        self.names.std_abbrev()
    }

    pub fn dst_zone_name(&self) -> &str {
        self.names.dst_name()
    }

    pub fn dst_zone_abbrev(&self) -> &str {
        self.names.dst_abbrev()
    }

    /// The offset from UTC during standard time. Zones west of Greenwich
    /// have negative offsets.
    pub fn base_utc_offset(&self) -> Duration {
        self.utc_offset
    }

    /// Whether this zone observes daylight-saving time at all.
    pub fn has_dst(&self) -> bool {
        self.rule.is_some()
    }

    /// How far the clocks go forward for daylight-saving, which is zero for
    /// zones without it.
    pub fn dst_offset(&self) -> Duration {
        self.adjustment().map_or(Duration::zero(), |adjustment| adjustment.dst_length())
    }

    pub fn rule(&self) -> Option<TransitionRule> {
        self.rule
    }

    pub fn adjustment(&self) -> Option<AdjustmentOffsets> {
        self.rule.map(|rule| rule.adjustment())
    }

    /// The local standard time at which daylight-saving starts in the given
    /// year, or `None` for zones without it.
    pub fn dst_local_start_time(&self, year: i64) -> Result<Option<LocalDateTime>, generator::Error> {
        match self.rule {
            Some(ref rule) => Ok(Some(rule.resolve(year)?.start)),
            None           => Ok(None),
        }
    }

    /// The local standard time at which daylight-saving ends in the given
    /// year, or `None` for zones without it.
    pub fn dst_local_end_time(&self, year: i64) -> Result<Option<LocalDateTime>, generator::Error> {
        match self.rule {
            Some(ref rule) => Ok(Some(rule.resolve(year)?.end)),
            None           => Ok(None),
        }
    }

    /// Returns whether daylight-saving is in effect at the given local
    /// standard time.
    pub fn in_dst(&self, local: LocalDateTime) -> Result<bool, generator::Error> {
        match self.rule {
            Some(ref rule) => rule.in_dst(local),
            None           => Ok(false),
        }
    }

    /// Converts a wall-clock time in this zone into a zoned time.
    ///
    /// This can return 0, 1, or 2 values. A wall-clock time skipped over
    /// when the clocks go forward is impossible, and one that happens twice
    /// when they go back is ambiguous. Every other time is precise.
    ///
    /// A wall-clock time can be read as standard time if daylight-saving is
    /// not in effect at that time, and as daylight-saving time if it *is*
    /// in effect at the same time with the shift taken off.
    ///
    /// Fails with `YearOutOfRange` for wall-clock times outside the
    /// supported years. Times in the first moments of the first supported
    /// year still work, even though taking the shift off moves them back
    /// into the year before.
    pub fn convert_local(&self, wall: LocalDateTime) -> Result<LocalTimes, generator::Error> {
        let rule = match self.rule {
            Some(rule) => rule,
            None       => return Ok(LocalTimes::Precise(self.standard(wall))),
        };

        let dst_length = rule.adjustment().dst_length();
        let as_standard = !rule.in_dst(wall)?;
        let as_daylight = daylight_before(&rule, wall, wall - dst_length)?;

        Ok(match (as_standard, as_daylight) {
            (true,  false) => LocalTimes::Precise(self.standard(wall)),
            (false, true)  => LocalTimes::Precise(self.daylight(wall, dst_length)),
            (true,  true)  => {
                trace!("{:?} happens twice in {}", wall, self.std_zone_abbrev());
                LocalTimes::Ambiguous {
                    earlier: self.daylight(wall, dst_length),
                    later:   self.standard(wall),
                }
            }
            (false, false) => {
                trace!("{:?} never happens in {}", wall, self.std_zone_abbrev());
                LocalTimes::Impossible
            }
        })
    }

    /// Converts a time in UTC into a zoned time in this zone.
    ///
    /// Fails with `YearOutOfRange` when the time in standard time falls
    /// outside the supported years.
    pub fn from_utc(&self, utc: LocalDateTime) -> Result<ZonedDateTime, generator::Error> {
        let standard = utc + self.utc_offset;

        match self.rule {
            Some(rule) if rule.in_dst(standard)? => {
                let dst_length = rule.adjustment().dst_length();
                Ok(self.daylight(standard + dst_length, dst_length))
            }
            _ => Ok(self.standard(standard)),
        }
    }

    fn standard(&self, local: LocalDateTime) -> ZonedDateTime {
        ZonedDateTime { local, offset: self.utc_offset, is_dst: false }
    }

    fn daylight(&self, local: LocalDateTime, dst_length: Duration) -> ZonedDateTime {
        ZonedDateTime { local, offset: self.utc_offset + dst_length, is_dst: true }
    }
}


/// Whether daylight-saving is in effect at `shifted`, a standard time a
/// little before `wall`. When `shifted` has dropped out of the supported
/// years, the window for `wall`’s year stands in for the year before.
fn daylight_before(rule: &TransitionRule, wall: LocalDateTime, shifted: LocalDateTime) -> Result<bool, generator::Error> {
    if shifted.year() < *SUPPORTED_YEARS.start() && SUPPORTED_YEARS.contains(&wall.year()) {
        Ok(rule.resolve(wall.year())?.contains(shifted))
    }
    else {
        rule.in_dst(shifted)
    }
}


/// The result of converting a *local* time to a *zoned* time with the same
/// time components. See `ZoneDescriptor::convert_local` for more
/// information.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum LocalTimes {

    /// This local time is impossible (when a time occurs between two
    /// timespans, which should never be shown on a wall clock).
    Impossible,

    /// This local time can be defined unambiguously.
    Precise(ZonedDateTime),

    /// This local time is ambiguous (when a time overlaps two timespans,
    /// which happens twice on a wall clock rather than once).
    Ambiguous { earlier: ZonedDateTime, later: ZonedDateTime },
}

impl LocalTimes {

    /// Extracts the *precise* zoned date time, if present; **panics otherwise**.
    ///
    /// It is almost always preferable to use pattern matching on a
    /// `LocalTimes` value and handle the impossible/ambiguous cases
    /// explicitly, rather than risking a panic.
    pub fn unwrap_precise(self) -> ZonedDateTime {
        match self {
            LocalTimes::Precise(p)        => p,
            LocalTimes::Impossible        => panic!("called `LocalTimes::unwrap_precise()` on an `Impossible` value"),
            LocalTimes::Ambiguous { .. }  => panic!("called `LocalTimes::unwrap_precise()` on an `Ambiguous` value: {:?}", self),
        }
    }

    /// Returns the *precise* zoned date time, if there is exactly one.
    pub fn precise(self) -> Option<ZonedDateTime> {
        match self {
            LocalTimes::Precise(p) => Some(p),
            _                      => None,
        }
    }

    /// Returns whether this local times result is impossible (when a time
    /// occurs between two timespans, which should never be shown on a wall
    /// clock).
    pub fn is_impossible(&self) -> bool {
        matches!(*self, LocalTimes::Impossible)
    }

    /// Returns whether this local times result is ambiguous (when a time
    /// overlaps two timespans, which happens twice on a wall clock rather
    /// than once).
    pub fn is_ambiguous(&self) -> bool {
        matches!(*self, LocalTimes::Ambiguous { .. })
    }
}


/// A wall-clock time, along with the total offset from UTC in effect at
/// that time.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct ZonedDateTime {
    local: LocalDateTime,
    offset: Duration,
    is_dst: bool,
}

impl ZonedDateTime {

    /// The time as shown on a wall clock.
    pub fn local(&self) -> LocalDateTime {
        self.local
    }

    /// The *total* offset from UTC, including any daylight-saving shift.
    pub fn offset(&self) -> Duration {
        self.offset
    }

    pub fn is_dst(&self) -> bool {
        self.is_dst
    }

    pub fn to_utc(&self) -> LocalDateTime {
        self.local - self.offset
    }
}

impl DatePiece for ZonedDateTime {
    fn year(&self) -> i64 { self.local.year() }
    fn month(&self) -> Month { self.local.month() }
    fn day(&self) -> i8 { self.local.day() }
    fn yearday(&self) -> i16 { self.local.yearday() }
    fn weekday(&self) -> Weekday { self.local.weekday() }
}

impl TimePiece for ZonedDateTime {
    fn hour(&self) -> i8 { self.local.hour() }
    fn minute(&self) -> i8 { self.local.minute() }
    fn second(&self) -> i8 { self.local.second() }
}
