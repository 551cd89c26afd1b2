//! ISO-8601 rendering for the calendar values, used by their `Debug` and
//! `Display` impls and by the text codec.

use pad::{PadStr, Alignment};

use crate::cal::{DatePiece, TimePiece, LocalDate, LocalTime, LocalDateTime};
use crate::duration::Duration;
use crate::util::RangeExt;


pub(crate) trait ISO {
    fn iso(&self) -> String;
}

/// Renders a non-negative number with at least `width` digits.
pub(crate) fn zero_padded(number: i64, width: usize) -> String {
    number.to_string().pad(width, '0', Alignment::Right, false)
}

impl ISO for LocalDate {
    fn iso(&self) -> String {
        let year = self.year();
        let year = if year.is_within(0 ..= 9999) {
            zero_padded(year, 4)
        }
        else {
            format!("{}{}", if year < 0 { '-' } else { '+' }, zero_padded(year.abs(), 4))
        };

        format!("{}-{}-{}", year, zero_padded(self.month() as i64, 2), zero_padded(self.day() as i64, 2))
    }
}

impl ISO for LocalTime {
    fn iso(&self) -> String {
        format!("{}:{}:{}", zero_padded(self.hour() as i64, 2),
                            zero_padded(self.minute() as i64, 2),
                            zero_padded(self.second() as i64, 2))
    }
}

impl ISO for LocalDateTime {
    fn iso(&self) -> String {
        format!("{}T{}", self.date().iso(), self.time().iso())
    }
}

impl ISO for Duration {
    fn iso(&self) -> String {
        let (hours, minutes, seconds) = self.lengths();
        format!("{}{}:{}:{}", if self.is_negative() { '-' } else { '+' },
                              zero_padded(hours, 2),
                              zero_padded(minutes, 2),
                              zero_padded(seconds, 2))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::Month;

    #[test]
    fn far_far_future() {
        let date = LocalDate::ymd(10601, Month::January, 31).unwrap();
        assert_eq!(date.iso(), "+10601-01-31");
    }

    #[test]
    fn just_then() {
        let date = LocalDate::ymd(-753, Month::December, 1).unwrap();
        assert_eq!(date.iso(), "-0753-12-01");
    }

    #[test]
    fn long_durations_keep_their_digits() {
        assert_eq!(Duration::hours(100).iso(), "+100:00:00");
    }
}
