//! Lengths of calendar time and of clock time.
//!
//! These are what get added to and subtracted from dates and times with
//! the `+` and `-` operators. A date span is counted in calendar units
//! (whose length depends on where they’re applied: a month can be 28 to 31
//! days long), while a time span is counted in fixed units.

use std::ops::Neg;

use crate::cal::time::Precision;


/// A number of days, months, or years.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum DateSpan {
    Days(i64),
    Months(i64),
    Years(i64),
}

impl Neg for DateSpan {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            DateSpan::Days(n)    => DateSpan::Days(-n),
            DateSpan::Months(n)  => DateSpan::Months(-n),
            DateSpan::Years(n)   => DateSpan::Years(-n),
        }
    }
}


/// A number of hours, minutes, seconds, or fractions of a second.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum TimeSpan {
    Hours(i64),
    Minutes(i64),
    Seconds(i64),
    Milliseconds(i64),
    Microseconds(i64),
    Nanoseconds(i64),
}

impl TimeSpan {

    /// The length of this span in nanoseconds. This is wider than an `i64`
    /// because a large enough number of hours doesn’t fit in one.
    pub fn as_nanoseconds(self) -> i128 {
        let (count, unit) = self.count_and_unit();
        count as i128 * unit as i128
    }

    /// The precision of the unit this span is counted in. Hours count as
    /// minutes, because there’s no hour precision for a time to have.
    pub fn precision(self) -> Precision {
        match self {
            TimeSpan::Hours(_)         => Precision::Minutes,
            TimeSpan::Minutes(_)       => Precision::Minutes,
            TimeSpan::Seconds(_)       => Precision::Seconds,
            TimeSpan::Milliseconds(_)  => Precision::Milliseconds,
            TimeSpan::Microseconds(_)  => Precision::Microseconds,
            TimeSpan::Nanoseconds(_)   => Precision::Nanoseconds,
        }
    }

    fn count_and_unit(self) -> (i64, i64) {
        match self {
            TimeSpan::Hours(n)         => (n, 3_600_000_000_000),
            TimeSpan::Minutes(n)       => (n, 60_000_000_000),
            TimeSpan::Seconds(n)       => (n, 1_000_000_000),
            TimeSpan::Milliseconds(n)  => (n, 1_000_000),
            TimeSpan::Microseconds(n)  => (n, 1_000),
            TimeSpan::Nanoseconds(n)   => (n, 1),
        }
    }
}

impl Neg for TimeSpan {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            TimeSpan::Hours(n)         => TimeSpan::Hours(-n),
            TimeSpan::Minutes(n)       => TimeSpan::Minutes(-n),
            TimeSpan::Seconds(n)       => TimeSpan::Seconds(-n),
            TimeSpan::Milliseconds(n)  => TimeSpan::Milliseconds(-n),
            TimeSpan::Microseconds(n)  => TimeSpan::Microseconds(-n),
            TimeSpan::Nanoseconds(n)   => TimeSpan::Nanoseconds(-n),
        }
    }
}
