//! Times of day, at a chosen precision.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cal::TimePiece;
use crate::cal::date::SECONDS_IN_DAY;
use crate::cal::offset::Offset;
use crate::error::{check_field, Error, Field};
use crate::instant::{Instant, NANOS_IN_SECOND};
use crate::now::{Clock, SystemClock};
use crate::span::TimeSpan;
use crate::util::split_cycles;


/// Number of nanoseconds in a minute.
const NANOS_IN_MINUTE: i64 = 60 * NANOS_IN_SECOND;

/// Number of nanoseconds in an hour.
const NANOS_IN_HOUR: i64 = 60 * NANOS_IN_MINUTE;

/// Number of nanoseconds in a day.
pub(crate) const NANOS_IN_DAY: i64 = SECONDS_IN_DAY * NANOS_IN_SECOND;

/// The fields a time can be built from, coarsest first, with the largest
/// value each accepts and the number of nanoseconds one of it is worth.
static FIELDS: [(Field, i64, i64); 6] = [
    (Field::Hour,        23, NANOS_IN_HOUR),
    (Field::Minute,      59, NANOS_IN_MINUTE),
    (Field::Second,      59, NANOS_IN_SECOND),
    (Field::Millisecond, 999, 1_000_000),
    (Field::Microsecond, 999, 1_000),
    (Field::Nanosecond,  999, 1),
];


/// The finest unit a time keeps track of.
///
/// Precisions are ordered from coarsest to finest, so the finer of two
/// precisions is the greater one.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Precision {
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl Precision {

    /// The number of nanoseconds in one unit of this precision.
    pub fn unit_nanos(self) -> i64 {
        match self {
            Precision::Minutes       => NANOS_IN_MINUTE,
            Precision::Seconds       => NANOS_IN_SECOND,
            Precision::Milliseconds  => 1_000_000,
            Precision::Microseconds  => 1_000,
            Precision::Nanoseconds   => 1,
        }
    }

    /// The number of fields, starting with the hour, needed to write a
    /// time down at this precision.
    fn field_count(self) -> usize {
        self as usize + 2
    }
}


/// A **time** is a time of day that recurs once a day, measured at a given
/// precision and paired with a fixed offset from UTC.
///
/// A time stores the nanoseconds since midnight, but only exposes as much
/// of them as its precision allows. Adding a span finer than the precision
/// builds up a remainder that can’t be seen until it spills over into a
/// whole unit: two lots of 500 milliseconds added to a time of seconds
/// precision move it along by one second, but one lot on its own leaves
/// it looking the same.
///
/// Two times are only ever equal, or ordered, if they share a precision.
/// The offset plays no part in comparisons.
#[derive(Clone, Copy)]
pub struct Time {
    nanos: i64,
    precision: Precision,
    offset: Offset,
}

impl Time {

    /// Validates each field against its range, in order from the hour
    /// down, and adds them up. The precision follows from how many fields
    /// there are.
    fn from_fields(values: &[i64], precision: Precision) -> Result<Self, Error> {
        let mut nanos = 0;

        for (&value, &(field, max, unit)) in values.iter().zip(FIELDS.iter()) {
            check_field(field, value, 0, max)?;
            nanos += value * unit;
        }

        debug_assert_eq!(values.len(), precision.field_count());
        Ok(Self { nanos, precision, offset: Offset::utc() })
    }

    /// Creates a new time from an hour and a minute, with a precision of
    /// minutes.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ```rust
    /// use civil_time::{Time, Precision, TimePiece};
    ///
    /// let time = Time::hm(23, 23).unwrap();
    /// assert_eq!(time.hour(), 23);
    /// assert_eq!(time.precision(), Precision::Minutes);
    ///
    /// assert!(Time::hm(24, 0).is_err());
    /// ```
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::from_fields(&[hour as i64, minute as i64], Precision::Minutes)
    }

    /// Creates a new time with a precision of seconds.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::from_fields(&[hour as i64, minute as i64, second as i64], Precision::Seconds)
    }

    /// Creates a new time with a precision of milliseconds.
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self, Error> {
        Self::from_fields(&[hour as i64, minute as i64, second as i64, millisecond as i64],
                          Precision::Milliseconds)
    }

    /// Creates a new time with a precision of microseconds. The
    /// microsecond field counts from 0 to 999 within the millisecond.
    pub fn hms_us(hour: i8, minute: i8, second: i8, millisecond: i16, microsecond: i16) -> Result<Self, Error> {
        Self::from_fields(&[hour as i64, minute as i64, second as i64, millisecond as i64, microsecond as i64],
                          Precision::Microseconds)
    }

    /// Creates a new time with a precision of nanoseconds. The nanosecond
    /// field counts from 0 to 999 within the microsecond.
    ///
    /// ```rust
    /// use civil_time::{Time, Field};
    ///
    /// assert!(Time::hms_ns(1, 2, 3, 4, 5, 6).is_ok());
    /// assert_eq!(Time::hms_ns(1, 2, 3, 4, 5, 1000).unwrap_err().field(), Some(Field::Nanosecond));
    /// ```
    pub fn hms_ns(hour: i8, minute: i8, second: i8, millisecond: i16, microsecond: i16, nanosecond: i16) -> Result<Self, Error> {
        Self::from_fields(&[hour as i64, minute as i64, second as i64, millisecond as i64, microsecond as i64, nanosecond as i64],
                          Precision::Nanoseconds)
    }

    /// Returns the time at midnight, UTC, at the given precision.
    pub fn midnight(precision: Precision) -> Self {
        Self { nanos: 0, precision, offset: Offset::utc() }
    }

    /// Creates a time from a span since midnight, wrapping it around if
    /// it’s a day or longer, or negative. The precision is that of the
    /// span’s unit, with hours counting as minutes.
    ///
    /// ```rust
    /// use civil_time::{Time, TimeSpan};
    ///
    /// let time = Time::since_midnight(TimeSpan::Minutes(25 * 60 + 3));
    /// assert_eq!(time, Time::hm(1, 3).unwrap());
    /// ```
    pub fn since_midnight(span: TimeSpan) -> Self {
        Self {
            nanos: wrap_day(span.as_nanoseconds()),
            precision: span.precision(),
            offset: Offset::utc(),
        }
    }

    /// Computes the time of day at the given instant, as seen from the
    /// given offset from UTC, dropping anything finer than the precision.
    pub fn from_instant(instant: Instant, offset: Offset, precision: Precision) -> Self {
        let (_, seconds) = split_cycles(instant.seconds(), SECONDS_IN_DAY);
        let (_, seconds) = split_cycles(seconds + offset.seconds(), SECONDS_IN_DAY);
        let nanos = seconds * NANOS_IN_SECOND + instant.nanoseconds() as i64;

        Self {
            nanos: nanos - nanos % precision.unit_nanos(),
            precision,
            offset,
        }
    }

    /// The current time in UTC, to the second.
    pub fn now() -> Self {
        Self::now_in(Offset::utc())
    }

    /// The current time as seen from the given offset, to the second.
    pub fn now_in(offset: Offset) -> Self {
        Self::from_instant(SystemClock.now(), offset, Precision::Seconds)
    }

    /// The current time in the system’s local time zone, to the second.
    pub fn local() -> Self {
        Self::local_with(&SystemClock)
    }

    /// The current time according to the given clock and its local
    /// offset, to the second.
    pub fn local_with<C: Clock>(clock: &C) -> Self {
        Self::from_instant(clock.now(), clock.utc_offset(), Precision::Seconds)
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Returns this time with a different offset from UTC. The clock
    /// reading stays the same.
    pub fn with_offset(self, offset: Offset) -> Self {
        Self { offset, ..self }
    }

    /// Returns this time at a different precision. Anything finer than
    /// either precision is dropped, so going finer exposes zeros rather
    /// than any remainder built up beforehand.
    ///
    /// ```rust
    /// use civil_time::{Time, Precision};
    ///
    /// let time = Time::hms(12, 34, 56).unwrap();
    /// assert_eq!(time.with_precision(Precision::Minutes), Time::hm(12, 34).unwrap());
    /// assert_eq!(time.with_precision(Precision::Milliseconds).to_string(), "12:34:56.000+00");
    /// ```
    pub fn with_precision(self, precision: Precision) -> Self {
        let nanos = self.truncated();
        Self {
            nanos: nanos - nanos % precision.unit_nanos(),
            precision,
            ..self
        }
    }

    /// The nanoseconds since midnight, without anything finer than the
    /// precision.
    pub fn nanos_since_midnight(&self) -> i64 {
        self.truncated()
    }

    fn truncated(&self) -> i64 {
        self.nanos - self.nanos % self.precision.unit_nanos()
    }

    /// Adds the span to this time, returning the wrapped-around time along
    /// with the number of days that were carried (negative if the time
    /// went backwards past midnight).
    ///
    /// ```rust
    /// use civil_time::{Time, TimeSpan};
    ///
    /// let time = Time::hm(23, 0).unwrap();
    /// assert_eq!(time.add_with_carry(TimeSpan::Hours(49)), (Time::hm(0, 0).unwrap(), 3));
    /// assert_eq!(time.add_with_carry(TimeSpan::Hours(-24)), (time, -1));
    /// ```
    pub fn add_with_carry(self, span: TimeSpan) -> (Self, i64) {
        self.add_nanos_with_carry(span.as_nanoseconds())
    }

    pub(crate) fn add_nanos_with_carry(self, nanos: i128) -> (Self, i64) {
        let total = self.nanos as i128 + nanos;
        let days = total.div_euclid(NANOS_IN_DAY as i128) as i64;
        (Self { nanos: wrap_day(total), ..self }, days)
    }

    fn add_nanos(self, nanos: i128) -> Self {
        Self {
            nanos: wrap_day(self.nanos as i128 + nanos),
            ..self
        }
    }

    fn add_span(self, span: TimeSpan) -> Self {
        self.add_nanos(span.as_nanoseconds())
    }

    fn subtract_span(self, span: TimeSpan) -> Self {
        self.add_nanos(-span.as_nanoseconds())
    }

    /// Moves this time forwards by the given number of hours, wrapping
    /// around midnight.
    ///
    /// ```rust
    /// use civil_time::{Time, TimePiece};
    ///
    /// assert_eq!(Time::hm(23, 23).unwrap().add_hours(2).hour(), 1);
    /// assert_eq!(Time::hm(23, 23).unwrap().add_hours(25), Time::hm(0, 23).unwrap());
    /// ```
    pub fn add_hours(self, hours: i64) -> Self {
        self.add_span(TimeSpan::Hours(hours))
    }

    pub fn add_minutes(self, minutes: i64) -> Self {
        self.add_span(TimeSpan::Minutes(minutes))
    }

    /// Moves this time forwards by the given number of seconds, wrapping
    /// around midnight. On a time of minutes precision, the seconds are
    /// counted up until they make a whole minute.
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.add_span(TimeSpan::Seconds(seconds))
    }

    pub fn add_milliseconds(self, milliseconds: i64) -> Self {
        self.add_span(TimeSpan::Milliseconds(milliseconds))
    }

    pub fn add_microseconds(self, microseconds: i64) -> Self {
        self.add_span(TimeSpan::Microseconds(microseconds))
    }

    pub fn add_nanoseconds(self, nanoseconds: i64) -> Self {
        self.add_span(TimeSpan::Nanoseconds(nanoseconds))
    }

    /// Moves this time backwards by the given number of hours, wrapping
    /// around to the evening before if it goes past midnight.
    pub fn subtract_hours(self, hours: i64) -> Self {
        self.subtract_span(TimeSpan::Hours(hours))
    }

    pub fn subtract_minutes(self, minutes: i64) -> Self {
        self.subtract_span(TimeSpan::Minutes(minutes))
    }

    pub fn subtract_seconds(self, seconds: i64) -> Self {
        self.subtract_span(TimeSpan::Seconds(seconds))
    }

    pub fn subtract_milliseconds(self, milliseconds: i64) -> Self {
        self.subtract_span(TimeSpan::Milliseconds(milliseconds))
    }

    pub fn subtract_microseconds(self, microseconds: i64) -> Self {
        self.subtract_span(TimeSpan::Microseconds(microseconds))
    }

    pub fn subtract_nanoseconds(self, nanoseconds: i64) -> Self {
        self.subtract_span(TimeSpan::Nanoseconds(nanoseconds))
    }

    /// Formats this time with the given function.
    pub fn format_with<F>(&self, formatter: F) -> String
    where F: Fn(&Self) -> String
    {
        formatter(self)
    }
}

/// Wraps a number of nanoseconds into a single day.
fn wrap_day(nanos: i128) -> i64 {
    nanos.rem_euclid(NANOS_IN_DAY as i128) as i64
}

impl TimePiece for Time {
    fn hour(&self) -> i8 { (self.truncated() / NANOS_IN_HOUR) as i8 }
    fn minute(&self) -> i8 { (self.truncated() / NANOS_IN_MINUTE % 60) as i8 }
    fn second(&self) -> i8 { (self.truncated() / NANOS_IN_SECOND % 60) as i8 }
    fn millisecond(&self) -> i16 { (self.truncated() / 1_000_000 % 1000) as i16 }
    fn microsecond(&self) -> i16 { (self.truncated() / 1_000 % 1000) as i16 }
    fn nanosecond(&self) -> i16 { (self.truncated() % 1000) as i16 }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.precision == other.precision && self.truncated() == other.truncated()
    }
}

impl Eq for Time {}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precision.hash(state);
        self.truncated().hash(state);
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.precision == other.precision {
            Some(self.truncated().cmp(&other.truncated()))
        }
        else {
            None
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;

        if self.precision >= Precision::Seconds {
            write!(f, ":{:02}", self.second())?;
        }
        if self.precision >= Precision::Milliseconds {
            write!(f, ".{:03}", self.millisecond())?;
        }
        if self.precision >= Precision::Microseconds {
            write!(f, ".{:03}", self.microsecond())?;
        }
        if self.precision >= Precision::Nanoseconds {
            write!(f, ".{:03}", self.nanosecond())?;
        }

        write!(f, "{}", self.offset)
    }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Time({})", self)
    }
}

/// Adds two times together as though both were spans since midnight. The
/// result has the finer of the two precisions and the left-hand offset.
impl Add<Time> for Time {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            nanos: wrap_day(self.truncated() as i128 + other.truncated() as i128),
            precision: self.precision.max(other.precision),
            offset: self.offset,
        }
    }
}

impl Sub<Time> for Time {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            nanos: wrap_day(self.truncated() as i128 - other.truncated() as i128),
            precision: self.precision.max(other.precision),
            offset: self.offset,
        }
    }
}

impl Add<TimeSpan> for Time {
    type Output = Self;

    fn add(self, span: TimeSpan) -> Self {
        self.add_span(span)
    }
}

impl Sub<TimeSpan> for Time {
    type Output = Self;

    fn sub(self, span: TimeSpan) -> Self {
        self.subtract_span(span)
    }
}

impl AddAssign<TimeSpan> for Time {
    fn add_assign(&mut self, span: TimeSpan) {
        *self = *self + span;
    }
}

impl SubAssign<TimeSpan> for Time {
    fn sub_assign(&mut self, span: TimeSpan) {
        *self = *self - span;
    }
}
