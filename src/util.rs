//! Misc stuff.

use std::ops::RangeInclusive;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given inclusive range
    /// of values.
    fn is_within(&self, range: RangeInclusive<Self>) -> bool where Self: Sized;
}

// Defined on *anything* that can be compared, though it’s only really ever
// used for the small numeric ranges of calendar fields.

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: RangeInclusive<Self>) -> bool {
        range.contains(self)
    }
}


/// Split a number of periods into a number of whole cycles, and the number
/// of periods left over that don’t fit into a cycle.
///
/// This is a division returning both the quotient and the remainder, with
/// the difference that a negative remainder gets ‘wrapped around’ to be a
/// positive value, owing to the way the modulo operator works for negative
/// values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}
