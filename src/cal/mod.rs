//! Calendar dates, clock times, and the two together, with the
//! year, month, day, hour, minute, and second fields that go with them.

pub(crate) mod date;
pub(crate) mod datetime;
#[cfg(feature="format")] pub(crate) mod fmt;
pub(crate) mod offset;
pub(crate) mod parse;
#[cfg(feature="serde")] mod serialize;
pub(crate) mod time;

use self::date::{Month, Weekday};


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

    /// Whether this falls on a Saturday or a Sunday.
    fn is_weekend(&self) -> bool { self.weekday().is_weekend() }

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year() % 100 }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
///
/// Fields finer than a value’s precision read as zero.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;

    /// The microsecond of the millisecond.
    fn microsecond(&self) -> i16;

    /// The nanosecond of the microsecond.
    fn nanosecond(&self) -> i16;
}
