//! Parsing and writing POSIX-style zone descriptors, such as
//! `EST-05:00:00EDT+01:00:00,M4.1.0/02:00:00,M10.5.0/02:00:00`.
//!
//! A descriptor has the form `STD offset [DST [offset] [,start[/time],end[/time]]]`:
//!
//! - `STD` and `DST` are abbreviations, either plain ASCII letters or
//!   quoted between `<` and `>`, in which case digits, `+` and `-` are
//!   allowed as well;
//! - an offset is `[+-]h[h][:mm[:ss]]`. The standard offset is the offset
//!   from UTC, and a *missing* sign means the zone is west of UTC, so `EST5`
//!   is five hours behind. The DST offset is how far the clocks move;
//! - `start` and `end` are `Mm.w.d` (weekday `d` of week `w` of month `m`,
//!   where week 5 is the last one), `Jn` (day `n` from 1 to 365, never
//!   counting the 29th of February), or `n` (day `n` from 0 to 365, counting
//!   it). The optional `/time` is the time of day, in standard time.

use std::cell::Cell;
use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use crate::cal::fmt::zero_padded;
use crate::duration::Duration;
use crate::generator::{DateGenerator, WeekOfMonth};
use crate::cal::{Month, Weekday};
use crate::rule::{self, AdjustmentOffsets, TransitionRule};
use crate::util::RangeExt;
use crate::zone::{ZoneDescriptor, ZoneNames};


/// Parses a descriptor with the default settings.
///
/// ### Examples
///
/// ```rust
/// use tzrule::{parse_descriptor, Duration};
///
/// let zone = parse_descriptor("EST-05:00:00EDT+01:00:00,M4.1.0/02:00:00,M10.5.0/02:00:00").unwrap();
/// assert_eq!(zone.base_utc_offset(), Duration::hours(-5));
/// assert_eq!(zone.dst_offset(), Duration::hours(1));
/// assert_eq!(zone.dst_zone_abbrev(), "EDT");
/// ```
pub fn parse_descriptor(text: &str) -> Result<ZoneDescriptor, Error> {
    DescriptorParser::default().parse(text)
}

impl FromStr for ZoneDescriptor {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_descriptor(input)
    }
}


/// The settings for parsing descriptors.
///
/// The defaults refuse to guess: a descriptor that names a daylight-saving
/// zone without saying how far the clocks move is an error.
///
/// ```rust
/// use tzrule::{DescriptorParser, Duration};
///
/// let parser = DescriptorParser::new().implied_dst_length(Some(Duration::hours(1)));
/// let zone = parser.parse("EST5EDT,M3.2.0,M11.1.0").unwrap();
/// assert_eq!(zone.dst_offset(), Duration::hours(1));
/// ```
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct DescriptorParser {
    implied_dst_length: Option<Duration>,
    default_transition_time: Duration,
}

impl Default for DescriptorParser {
    fn default() -> Self {
        Self {
            implied_dst_length: None,
            default_transition_time: Duration::hours(2),
        }
    }
}

impl DescriptorParser {

    pub fn new() -> Self {
        Self::default()
    }

    /// The daylight-saving length to use when a descriptor leaves out the
    /// DST offset. With `None`, leaving it out is an error.
    pub fn implied_dst_length(self, implied_dst_length: Option<Duration>) -> Self {
        Self { implied_dst_length, ..self }
    }

    /// The time of day to use when a rule leaves out the `/time` part.
    pub fn default_transition_time(self, default_transition_time: Duration) -> Self {
        Self { default_transition_time, ..self }
    }

    /// Parses a whole descriptor.
    pub fn parse(&self, text: &str) -> Result<ZoneDescriptor, Error> {
        let parser = Parser { text: text.as_bytes(), pos: Cell::new(0), settings: self };

        parser.parse_descriptor().map_err(|e| {
            debug!("failed to parse zone descriptor {:?}: {}", text, e);
            e
        })
    }
}


/// A parser for one descriptor, positioned somewhere within it.
#[derive(Debug)]
struct Parser<'s> {
    text: &'s [u8],
    pos: Cell<usize>,
    settings: &'s DescriptorParser,
}

impl<'s> Parser<'s> {

    fn parse_descriptor(&self) -> Result<ZoneDescriptor, Error> {
        let std_abbrev = self.parse_abbreviation()?;

        let utc_offset = match self.parse_offset()? {
            (None, magnitude)       => -magnitude,  // POSIX counts westwards
            (Some(sign), magnitude) => magnitude * sign,
        };

        if self.is_done() {
            let names = ZoneNames::new(std_abbrev.clone(), std_abbrev, "", "");
            trace!("zone {} has a fixed offset of {}", names.std_abbrev(), utc_offset);
            return Ok(ZoneDescriptor::new(names, utc_offset, None));
        }

        match self.peek() {
            Some(b'<') => {},
            Some(byte) if byte.is_ascii_alphabetic() => {},
            _ => return Err(Error::TrailingInput { position: self.pos() }),
        }

        let dst_abbrev = self.parse_abbreviation()?;

        let dst_length = match self.peek() {
            None | Some(b',') => {
                self.settings.implied_dst_length
                    .ok_or(Error::MissingDstOffset { position: self.pos() })?
            }
            Some(_) => {
                let (sign, magnitude) = self.parse_offset()?;
                magnitude * sign.unwrap_or(1)
            }
        };

        match self.peek() {
            None        => return Err(Error::MissingRule { position: self.pos() }),
            Some(b',')  => { self.bump(); },
            Some(_)     => return Err(Error::TrailingInput { position: self.pos() }),
        }

        let (start, start_time) = self.parse_transition()?;

        if self.peek() != Some(b',') {
            return Err(Error::IncompleteRulePair { position: self.pos() });
        }
        self.bump();

        let (end, end_time) = self.parse_transition()?;

        if !self.is_done() {
            return Err(Error::TrailingInput { position: self.pos() });
        }

        let adjustment = AdjustmentOffsets::new(dst_length, start_time, end_time)
            .map_err(Error::InvalidAdjustment)?;

        let names = ZoneNames::new(std_abbrev.clone(), std_abbrev, dst_abbrev.clone(), dst_abbrev);
        Ok(ZoneDescriptor::new(names, utc_offset, Some(TransitionRule::new(start, end, adjustment))))
    }

    fn parse_abbreviation(&self) -> Result<String, Error> {
        let position = self.pos();

        let abbreviation = if self.peek() == Some(b'<') {
            self.bump();
            let name = self.take_while(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'-');
            if self.peek() != Some(b'>') {
                return Err(Error::InvalidAbbreviation { position });
            }
            self.bump();
            name
        }
        else {
            self.take_while(|b| b.is_ascii_alphabetic())
        };

        if abbreviation.is_empty() {
            return Err(Error::InvalidAbbreviation { position });
        }

        // Only ASCII bytes were taken, so this cannot lose anything.
        Ok(String::from_utf8_lossy(abbreviation).into_owned())
    }

    /// Parses an offset, returning its sign, if it has one, separately from
    /// its magnitude.
    fn parse_offset(&self) -> Result<(Option<i64>, Duration), Error> {
        let position = self.pos();

        let sign = match self.peek() {
            Some(b'+') => { self.bump(); Some(1) },
            Some(b'-') => { self.bump(); Some(-1) },
            _          => None,
        };

        let magnitude = self.parse_time_of_day()
            .ok_or(Error::InvalidOffsetFormat { position })?;

        Ok((sign, magnitude))
    }

    /// Parses `h[h][:mm[:ss]]`, where the hours go up to 24.
    fn parse_time_of_day(&self) -> Option<Duration> {
        let hours = self.parse_number(2).filter(|h| h.is_within(0 ..= 24))?;
        let mut minutes = 0;
        let mut seconds = 0;

        if self.peek() == Some(b':') {
            self.bump();
            minutes = self.parse_exact_digits(2).filter(|m| m.is_within(0 ..= 59))?;

            if self.peek() == Some(b':') {
                self.bump();
                seconds = self.parse_exact_digits(2).filter(|s| s.is_within(0 ..= 59))?;
            }
        }

        Some(Duration::hms(hours, minutes, seconds))
    }

    /// Parses one end of a rule: a date, and the optional time after it.
    fn parse_transition(&self) -> Result<(DateGenerator, Duration), Error> {
        let generator = self.parse_date_spec()?;

        if self.peek() != Some(b'/') {
            return Ok((generator, self.settings.default_transition_time));
        }
        self.bump();

        let position = self.pos();
        let time = self.parse_time_of_day()
            .ok_or(Error::InvalidOffsetFormat { position })?;

        Ok((generator, time))
    }

    fn parse_date_spec(&self) -> Result<DateGenerator, Error> {
        match self.peek() {
            Some(b'J') => {
                self.bump();
                let position = self.pos();
                self.parse_digit_run()
                    .filter(|day| day.is_within(1 ..= 365))
                    .and_then(|day| DateGenerator::julian(day as u16).ok())
                    .ok_or(Error::InvalidJulianDay { position })
            }

            Some(b'0' ..= b'9') => {
                let position = self.pos();
                self.parse_digit_run()
                    .filter(|day| day.is_within(0 ..= 365))
                    .and_then(|day| DateGenerator::zero_based(day as u16).ok())
                    .ok_or(Error::InvalidJulianDay { position })
            }

            Some(b'M') => {
                self.bump();
                self.parse_weekday_of_month()
            }

            _ => Err(Error::IncompleteRulePair { position: self.pos() }),
        }
    }

    /// Parses `m.w.d`, after the `M`.
    fn parse_weekday_of_month(&self) -> Result<DateGenerator, Error> {
        let position = self.pos();
        let month = self.parse_digit_run()
            .filter(|m| m.is_within(1 ..= 12))
            .and_then(|m| Month::from_one(m as i8).ok())
            .ok_or(Error::InvalidMonth { position })?;

        let position = self.pos() + 1;
        let week = self.expect_dot()
            .and_then(|_| self.parse_digit_run())
            .filter(|w| w.is_within(1 ..= 5))
            .ok_or(Error::InvalidWeekIndex { position })?;

        let position = self.pos() + 1;
        let weekday = self.expect_dot()
            .and_then(|_| self.parse_digit_run())
            .filter(|d| d.is_within(0 ..= 6))
            .and_then(|d| Weekday::from_zero(d as i8).ok())
            .ok_or(Error::InvalidWeekday { position })?;

        if week == 5 {
            Ok(DateGenerator::last(weekday, month))
        }
        else {
            let week = WeekOfMonth::from_one(week as i8)
                .map_err(|_| Error::InvalidWeekIndex { position })?;
            Ok(DateGenerator::nth(week, weekday, month))
        }
    }

    fn expect_dot(&self) -> Option<()> {
        if self.peek() == Some(b'.') {
            self.bump();
            Some(())
        }
        else {
            None
        }
    }

    /// Parses a number of between one and `max` digits.
    fn parse_number(&self, max: usize) -> Option<i64> {
        let start = self.pos();
        let mut number = 0;

        while self.pos() - start < max {
            match self.peek() {
                Some(byte) if byte.is_ascii_digit() => {
                    number = number * 10 + i64::from(byte - b'0');
                    self.bump();
                }
                _ => break,
            }
        }

        if self.pos() == start { None } else { Some(number) }
    }

    /// Parses every digit from here on as one number, so a field with too
    /// many digits is reported as that field, not the one after it.
    fn parse_digit_run(&self) -> Option<i64> {
        let digits = self.take_while(|b| b.is_ascii_digit());
        std::str::from_utf8(digits).ok()?.parse().ok()
    }

    /// Parses a number of exactly `count` digits.
    fn parse_exact_digits(&self, count: usize) -> Option<i64> {
        let start = self.pos();
        let number = self.parse_number(count)?;
        if self.pos() - start == count { Some(number) } else { None }
    }
}

/// Helper routines for moving through the text.
impl<'s> Parser<'s> {

    fn bump(&self) {
        if !self.is_done() {
            self.pos.set(self.pos() + 1);
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.get(self.pos()).copied()
    }

    fn is_done(&self) -> bool {
        self.pos() >= self.text.len()
    }

    fn pos(&self) -> usize {
        self.pos.get()
    }

    fn take_while(&self, predicate: impl Fn(u8) -> bool) -> &'s [u8] {
        let start = self.pos();
        while self.peek().map_or(false, &predicate) {
            self.bump();
        }
        &self.text[start .. self.pos()]
    }
}


impl ZoneDescriptor {

    /// Writes this descriptor out in the explicit POSIX form, with every
    /// offset and time given in full.
    ///
    /// Returns `None` when there is no way to write it: when a generator
    /// has no POSIX form (before, after, and partial dates), or when an
    /// abbreviation can’t be spelt even with quotes.
    ///
    /// Parsing the result gives back an equal descriptor, so long as the
    /// long names are the same as the abbreviations.
    ///
    /// ```rust
    /// use tzrule::parse_descriptor;
    ///
    /// let text = "EST-05:00:00EDT+01:00:00,M4.1.0/02:00:00,M10.5.0/02:00:00";
    /// assert_eq!(parse_descriptor("EST5EDT+1,M4.1.0,M10.5.0").unwrap().to_posix_string().unwrap(), text);
    /// ```
    pub fn to_posix_string(&self) -> Option<String> {
        let mut text = posix_abbreviation(self.std_zone_abbrev())?;
        text.push_str(&posix_offset(self.base_utc_offset(), true)?);

        if let Some(rule) = self.rule() {
            let adjustment = rule.adjustment();
            text.push_str(&posix_abbreviation(self.dst_zone_abbrev())?);
            text.push_str(&posix_offset(adjustment.dst_length(), true)?);
            text.push(',');
            text.push_str(&posix_date_spec(rule.start())?);
            text.push('/');
            text.push_str(&posix_offset(adjustment.dst_start_offset(), false)?);
            text.push(',');
            text.push_str(&posix_date_spec(rule.end())?);
            text.push('/');
            text.push_str(&posix_offset(adjustment.dst_end_offset(), false)?);
        }

        Some(text)
    }
}

fn posix_abbreviation(abbreviation: &str) -> Option<String> {
    if abbreviation.is_empty() {
        None
    }
    else if abbreviation.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(abbreviation.to_owned())
    }
    else if abbreviation.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'-') {
        Some(format!("<{}>", abbreviation))
    }
    else {
        None
    }
}

fn posix_offset(offset: Duration, signed: bool) -> Option<String> {
    let (hours, minutes, seconds) = offset.lengths();
    if hours > 24 || (!signed && offset.is_negative()) {
        return None;
    }

    let time = format!("{}:{}:{}", zero_padded(hours, 2), zero_padded(minutes, 2), zero_padded(seconds, 2));
    match (signed, offset.is_negative()) {
        (false, _)    => Some(time),
        (true, true)  => Some(format!("-{}", time)),
        (true, false) => Some(format!("+{}", time)),
    }
}

fn posix_date_spec(generator: DateGenerator) -> Option<String> {
    match generator {
        DateGenerator::NthWeekdayOfMonth { week, weekday, month } => {
            Some(format!("M{}.{}.{}", month as i8, week as i8, weekday.days_from_sunday()))
        }
        DateGenerator::FirstWeekdayOfMonth { weekday, month } => {
            Some(format!("M{}.1.{}", month as i8, weekday.days_from_sunday()))
        }
        DateGenerator::LastWeekdayOfMonth { weekday, month } => {
            Some(format!("M{}.5.{}", month as i8, weekday.days_from_sunday()))
        }
        DateGenerator::FixedJulianDay(day) => Some(format!("J{}", day)),
        DateGenerator::ZeroBasedDay(day)   => Some(day.to_string()),
        DateGenerator::WeekdayBefore { .. }
        | DateGenerator::WeekdayAfter { .. }
        | DateGenerator::PartialDate { .. } => None,
    }
}


/// Something wrong with a descriptor. Positions are byte offsets into
/// the text, pointing at where the problem was found.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// An abbreviation is missing, empty, or has an unclosed quote.
    InvalidAbbreviation { position: usize },

    /// An offset or a time of day is missing or malformed.
    InvalidOffsetFormat { position: usize },

    /// A month is not between 1 and 12.
    InvalidMonth { position: usize },

    /// A week is not between 1 and 5.
    InvalidWeekIndex { position: usize },

    /// A weekday is not between 0 and 6.
    InvalidWeekday { position: usize },

    /// A `Jn` day is not between 1 and 365, or an `n` day is not between
    /// 0 and 365.
    InvalidJulianDay { position: usize },

    /// A daylight-saving zone has no offset, and the parser is not set up
    /// to assume one.
    MissingDstOffset { position: usize },

    /// A daylight-saving zone has no rule for when it starts and ends.
    MissingRule { position: usize },

    /// A rule has a start but no end.
    IncompleteRulePair { position: usize },

    /// There is text left over after the descriptor.
    TrailingInput { position: usize },

    /// The times in the rule are not valid adjustment offsets.
    InvalidAdjustment(rule::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;

        match *self {
            InvalidAbbreviation { position }  => write!(f, "invalid zone abbreviation at byte {}", position),
            InvalidOffsetFormat { position }  => write!(f, "invalid offset at byte {}", position),
            InvalidMonth { position }         => write!(f, "month must be 1 to 12 at byte {}", position),
            InvalidWeekIndex { position }     => write!(f, "week must be 1 to 5 at byte {}", position),
            InvalidWeekday { position }       => write!(f, "weekday must be 0 to 6 at byte {}", position),
            InvalidJulianDay { position }     => write!(f, "invalid julian day at byte {}", position),
            MissingDstOffset { position }     => write!(f, "missing daylight-saving offset at byte {}", position),
            MissingRule { position }          => write!(f, "missing daylight-saving rule at byte {}", position),
            IncompleteRulePair { position }   => write!(f, "missing end of daylight-saving rule at byte {}", position),
            TrailingInput { position }        => write!(f, "unexpected text at byte {}", position),
            InvalidAdjustment(ref e)          => write!(f, "invalid rule: {}", e),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Error::InvalidAdjustment(ref e) => Some(e),
            _                               => None,
        }
    }
}


#[cfg(test)]
mod test {
    pub use super::*;

    fn new_york() -> ZoneDescriptor {
        let offsets = AdjustmentOffsets::new(Duration::hours(1), Duration::hours(2), Duration::hours(2)).unwrap();
        let rule = TransitionRule::new(DateGenerator::nth(WeekOfMonth::First, Weekday::Sunday, Month::April),
                                       DateGenerator::last(Weekday::Sunday, Month::October),
                                       offsets);
        ZoneDescriptor::new(ZoneNames::new("EST", "EST", "EDT", "EDT"), Duration::hours(-5), Some(rule))
    }

    mod parsing {
        use super::*;

        #[test]
        fn explicit() {
            let zone = parse_descriptor("EST-05:00:00EDT+01:00:00,M4.1.0/02:00:00,M10.5.0/02:00:00");
            assert_eq!(zone, Ok(new_york()));
        }

        #[test]
        fn short_offsets_and_default_times() {
            let zone = parse_descriptor("EST-5EDT+1,M4.1.0,M10.5.0");
            assert_eq!(zone, Ok(new_york()));
        }

        #[test]
        fn unsigned_standard_offset_is_west_of_utc() {
            // POSIX writes zones west of Greenwich without a sign.
            let zone = parse_descriptor("EST5EDT1,M4.1.0,M10.5.0").unwrap();
            assert_eq!(zone.base_utc_offset(), Duration::hours(-5));
            assert_eq!(zone, new_york());
        }

        #[test]
        fn signed_standard_offset_is_taken_as_written() {
            let zone = parse_descriptor("CET+1CEST+1,M3.5.0,M10.5.0/3").unwrap();
            assert_eq!(zone.base_utc_offset(), Duration::hours(1));
            assert_eq!(zone.adjustment().unwrap().dst_end_offset(), Duration::hours(3));
        }

        #[test]
        fn fixed_offset() {
            let zone = parse_descriptor("JST-9").unwrap();
            assert_eq!(zone.base_utc_offset(), Duration::hours(-9));
            assert!(!zone.has_dst());
            assert_eq!(zone.rule(), None);
        }

        #[test]
        fn quoted_abbreviations() {
            let zone = parse_descriptor("<+0330>-03:30<+0430>+1,J79/24,J263/23").unwrap_err();
            assert!(matches!(zone, Error::InvalidAdjustment(_)));

            let zone = parse_descriptor("<+0330>-03:30<+0430>+1,J79/0,J263/23").unwrap();
            assert_eq!(zone.std_zone_abbrev(), "+0330");
            assert_eq!(zone.dst_zone_abbrev(), "+0430");
            assert_eq!(zone.base_utc_offset(), Duration::hms(-3, -30, 0));
        }

        #[test]
        fn julian_dialects() {
            let zone = parse_descriptor("AAA3BBB1,J60/1:30,59").unwrap();
            let rule = zone.rule().unwrap();
            assert_eq!(rule.start(), DateGenerator::FixedJulianDay(60));
            assert_eq!(rule.end(), DateGenerator::ZeroBasedDay(59));
            assert_eq!(rule.adjustment().dst_start_offset(), Duration::hms(1, 30, 0));
        }

        #[test]
        fn implied_dst_length() {
            let parser = DescriptorParser::new().implied_dst_length(Some(Duration::hours(1)));
            assert_eq!(parser.parse("EST5EDT,M4.1.0,M10.5.0"), Ok(new_york()));
        }

        #[test]
        fn default_transition_time() {
            let parser = DescriptorParser::new().default_transition_time(Duration::hours(1));
            let zone = parser.parse("GMT0BST1,M3.5.0,M10.5.0").unwrap();
            assert_eq!(zone.adjustment().unwrap().dst_start_offset(), Duration::hours(1));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn bad_offset() {
            assert_eq!(parse_descriptor("ESTxx"), Err(Error::InvalidOffsetFormat { position: 5 }));
            assert_eq!(parse_descriptor("EST-5:0"), Err(Error::InvalidOffsetFormat { position: 3 }));
            assert_eq!(parse_descriptor("EST25"), Err(Error::InvalidOffsetFormat { position: 3 }));
        }

        #[test]
        fn bad_month() {
            assert_eq!(parse_descriptor("EST-05:00:00EDT+01:00:00,M13.1.0,M10.5.0"),
                       Err(Error::InvalidMonth { position: 26 }));
            assert_eq!(parse_descriptor("EST5EDT1,M123.1.0,M10.5.0"), Err(Error::InvalidMonth { position: 10 }));
            assert_eq!(parse_descriptor("EST5EDT1,M260.1.0,M10.5.0"), Err(Error::InvalidMonth { position: 10 }));
        }

        #[test]
        fn bad_week() {
            assert!(matches!(parse_descriptor("EST5EDT1,M4.6.0,M10.5.0"), Err(Error::InvalidWeekIndex { .. })));
            assert!(matches!(parse_descriptor("EST5EDT1,M4,M10.5.0"), Err(Error::InvalidWeekIndex { .. })));
            assert_eq!(parse_descriptor("EST5EDT1,M4.10.0,M10.5.0"), Err(Error::InvalidWeekIndex { position: 12 }));
        }

        #[test]
        fn bad_weekday() {
            assert_eq!(parse_descriptor("EST5EDT1,M4.1.7,M10.5.0"), Err(Error::InvalidWeekday { position: 14 }));
            assert_eq!(parse_descriptor("EST5EDT1,M4.1.16,M10.5.0"), Err(Error::InvalidWeekday { position: 14 }));
        }

        #[test]
        fn bad_julian_day() {
            assert!(matches!(parse_descriptor("EST5EDT1,J0,J300"), Err(Error::InvalidJulianDay { .. })));
            assert!(matches!(parse_descriptor("EST5EDT1,J100,366"), Err(Error::InvalidJulianDay { .. })));
            assert_eq!(parse_descriptor("EST5EDT1,J65537,J300"), Err(Error::InvalidJulianDay { position: 10 }));
        }

        #[test]
        fn missing_pieces() {
            assert_eq!(parse_descriptor(""), Err(Error::InvalidAbbreviation { position: 0 }));
            assert_eq!(parse_descriptor("<EST5"), Err(Error::InvalidAbbreviation { position: 0 }));
            assert_eq!(parse_descriptor("EST5EDT"), Err(Error::MissingDstOffset { position: 7 }));
            assert_eq!(parse_descriptor("EST5EDT1"), Err(Error::MissingRule { position: 8 }));
            assert_eq!(parse_descriptor("EST5EDT1,M4.1.0"), Err(Error::IncompleteRulePair { position: 15 }));
            assert_eq!(parse_descriptor("EST5EDT1,M4.1.0,"), Err(Error::IncompleteRulePair { position: 16 }));
        }

        #[test]
        fn trailing_input() {
            assert_eq!(parse_descriptor("EST5 "), Err(Error::TrailingInput { position: 4 }));
            assert_eq!(parse_descriptor("EST5EDT1,M4.1.0,M10.5.0x"), Err(Error::TrailingInput { position: 23 }));
        }

        #[test]
        fn adjustment_has_a_source() {
            let error = parse_descriptor("EST5EDT1,M4.1.0/24,M10.5.0").unwrap_err();
            assert!(error.source().is_some());
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn explicit_form() {
            assert_eq!(new_york().to_posix_string().as_deref(),
                       Some("EST-05:00:00EDT+01:00:00,M4.1.0/02:00:00,M10.5.0/02:00:00"));
        }

        #[test]
        fn round_trip() {
            for text in &["EST5EDT1,M4.1.0,M10.5.0", "JST-9", "<+0330>-03:30<+0430>+1,J79/0,J263/23",
                          "AAA3BBB1,J60/1:30,59", "NZST-12NZDT+1,M9.5.0,M4.1.0/3"] {
                let zone = parse_descriptor(text).unwrap();
                let rendered = zone.to_posix_string().unwrap();
                assert_eq!(parse_descriptor(&rendered), Ok(zone));
            }
        }

        #[test]
        fn no_posix_form() {
            let offsets = AdjustmentOffsets::new(Duration::hours(1), Duration::hours(2), Duration::hours(2)).unwrap();
            let rule = TransitionRule::new(DateGenerator::partial(Month::April, 1).unwrap(),
                                           DateGenerator::last(Weekday::Sunday, Month::October),
                                           offsets);
            let zone = ZoneDescriptor::new(ZoneNames::new("EST", "EST", "EDT", "EDT"), Duration::hours(-5), Some(rule));
            assert_eq!(zone.to_posix_string(), None);
        }
    }
}
