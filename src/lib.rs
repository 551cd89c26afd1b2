#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for working out when daylight-saving time starts and ends.
//!
//! Rules can be built out of date generators, or parsed from POSIX-style
//! zone descriptors, and the two give the same answers.
//!
//! # Examples
//!
//! ```
//! use tzrule::{parse_descriptor, AdjustmentOffsets, DateGenerator, Duration, TransitionRule};
//! use tzrule::{Month, Weekday, ZoneDescriptor, ZoneNames};
//!
//! let offsets = AdjustmentOffsets::new(Duration::hours(1), Duration::hours(2), Duration::hours(2)).unwrap();
//! let rule = TransitionRule::new(DateGenerator::first(Weekday::Sunday, Month::April),
//!                                DateGenerator::last(Weekday::Sunday, Month::October),
//!                                offsets);
//! let built = ZoneDescriptor::new(ZoneNames::new("Eastern Standard Time", "EST", "Eastern Daylight Time", "EDT"),
//!                                 Duration::hours(-5), Some(rule));
//!
//! let parsed = parse_descriptor("EST-05:00:00EDT+01:00:00,M4.1.0/02:00:00,M10.5.0/02:00:00").unwrap();
//!
//! assert_eq!(built.dst_local_start_time(2004), parsed.dst_local_start_time(2004));
//! assert_eq!(built.dst_local_end_time(2004), parsed.dst_local_end_time(2004));
//! ```

#[macro_use]
mod logging;

mod util;

pub mod cal;
pub use crate::cal::{Year, YearMonth, Month, Weekday, LocalDate, LocalTime, LocalDateTime};
pub use crate::cal::{Date, DatePeriod, Days, SpecialValue, DatePiece, TimePiece, SUPPORTED_YEARS};

pub mod duration;
pub use crate::duration::Duration;

pub mod generator;
pub use crate::generator::{DateGenerator, WeekOfMonth};

pub mod rule;
pub use crate::rule::{AdjustmentOffsets, TransitionRule, DstWindow};

pub mod zone;
pub use crate::zone::{ZoneNames, ZoneDescriptor, LocalTimes, ZonedDateTime};

pub mod posix;
pub use crate::posix::{parse_descriptor, DescriptorParser};

#[cfg(feature = "codec")]
pub mod codec;
