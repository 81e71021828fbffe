//! Dates and times together.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::date::{Date, Month, Weekday, SECONDS_IN_DAY};
use crate::cal::offset::Offset;
use crate::cal::time::{Precision, Time};
use crate::instant::{Instant, NANOS_IN_SECOND};
use crate::now::{Clock, SystemClock};
use crate::span::{DateSpan, TimeSpan};


/// A **date-time** is a date paired with a time of day. Time arithmetic
/// that goes past midnight, in either direction, moves the date along by
/// however many days were crossed.
///
/// Date-times compare by their dates first, then by their times, so two
/// date-times on the same day whose times have different precisions are
/// neither equal nor ordered.
#[derive(PartialEq, Eq, PartialOrd, Hash, Clone, Copy)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {

    /// Creates a new date-time from a date and a time.
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> Time {
        self.time
    }

    pub fn set_date(&mut self, date: Date) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: Time) {
        self.time = time;
    }

    /// Computes the date and time at the given instant, as seen from the
    /// given offset from UTC.
    ///
    /// ```rust
    /// use civil_time::{DateTime, Instant, Offset, Precision};
    ///
    /// let offset = Offset::of_hours(2).unwrap();
    /// let datetime = DateTime::from_instant(Instant::at(1_609_538_350), offset, Precision::Seconds);
    /// assert_eq!(datetime.to_string(), "2021-01-01T23:59:10+02");
    /// ```
    pub fn from_instant(instant: Instant, offset: Offset, precision: Precision) -> Self {
        Self {
            date: Date::from_instant(instant, offset),
            time: Time::from_instant(instant, offset, precision),
        }
    }

    /// Returns the instant this date-time refers to, taking the time’s
    /// offset from UTC into account.
    pub fn to_instant(&self) -> Instant {
        let nanos = self.time.nanos_since_midnight();
        let seconds = self.date.days_since_epoch() as i128 * SECONDS_IN_DAY as i128
                    + (nanos / NANOS_IN_SECOND) as i128
                    - self.time.offset().seconds() as i128;

        let seconds = seconds.max(i64::MIN as i128).min(i64::MAX as i128) as i64;
        Instant::at_ns(seconds, nanos % NANOS_IN_SECOND)
    }

    /// The current date and time in UTC, to the second.
    pub fn now() -> Self {
        Self::now_in(Offset::utc())
    }

    /// The current date and time as seen from the given offset, to the
    /// second.
    pub fn now_in(offset: Offset) -> Self {
        Self::from_instant(SystemClock.now(), offset, Precision::Seconds)
    }

    /// The current date and time in the system’s local time zone, to the
    /// second.
    pub fn local() -> Self {
        Self::local_with(&SystemClock)
    }

    /// The current date and time according to the given clock and its
    /// local offset, to the second.
    pub fn local_with<C: Clock>(clock: &C) -> Self {
        Self::from_instant(clock.now(), clock.utc_offset(), Precision::Seconds)
    }

    /// Moves the time along by the span, carrying any whole days that it
    /// crosses into the date.
    fn add_time(self, span: TimeSpan) -> Self {
        self.shift_time(span, span.as_nanoseconds())
    }

    fn subtract_time(self, span: TimeSpan) -> Self {
        self.shift_time(span, -span.as_nanoseconds())
    }

    fn shift_time(self, span: TimeSpan, nanos: i128) -> Self {
        let (time, days) = self.time.add_nanos_with_carry(nanos);
        if days != 0 {
            log::trace!("{:?} carried {} days into {:?}", span, days, self.date);
        }

        Self {
            date: self.date.add_days(days),
            time,
        }
    }

    /// Moves this date-time forwards by the given number of hours.
    ///
    /// ```rust
    /// use civil_time::DateTime;
    ///
    /// let datetime: DateTime = "2021-12-31T23:00+00".parse().unwrap();
    /// assert_eq!(datetime.add_hours(49).to_string(), "2022-01-03T00:00+00");
    /// assert_eq!(datetime.subtract_hours(24).to_string(), "2021-12-30T23:00+00");
    /// ```
    pub fn add_hours(self, hours: i64) -> Self {
        self.add_time(TimeSpan::Hours(hours))
    }

    pub fn add_minutes(self, minutes: i64) -> Self {
        self.add_time(TimeSpan::Minutes(minutes))
    }

    pub fn add_seconds(self, seconds: i64) -> Self {
        self.add_time(TimeSpan::Seconds(seconds))
    }

    pub fn add_milliseconds(self, milliseconds: i64) -> Self {
        self.add_time(TimeSpan::Milliseconds(milliseconds))
    }

    pub fn add_microseconds(self, microseconds: i64) -> Self {
        self.add_time(TimeSpan::Microseconds(microseconds))
    }

    pub fn add_nanoseconds(self, nanoseconds: i64) -> Self {
        self.add_time(TimeSpan::Nanoseconds(nanoseconds))
    }

    /// Moves this date-time backwards by the given number of hours,
    /// borrowing days from the date as needed.
    pub fn subtract_hours(self, hours: i64) -> Self {
        self.subtract_time(TimeSpan::Hours(hours))
    }

    pub fn subtract_minutes(self, minutes: i64) -> Self {
        self.subtract_time(TimeSpan::Minutes(minutes))
    }

    pub fn subtract_seconds(self, seconds: i64) -> Self {
        self.subtract_time(TimeSpan::Seconds(seconds))
    }

    pub fn subtract_milliseconds(self, milliseconds: i64) -> Self {
        self.subtract_time(TimeSpan::Milliseconds(milliseconds))
    }

    pub fn subtract_microseconds(self, microseconds: i64) -> Self {
        self.subtract_time(TimeSpan::Microseconds(microseconds))
    }

    pub fn subtract_nanoseconds(self, nanoseconds: i64) -> Self {
        self.subtract_time(TimeSpan::Nanoseconds(nanoseconds))
    }

    /// Moves the date along by the given number of days, leaving the time
    /// alone. The same goes for the other date methods below.
    pub fn add_days(self, days: i64) -> Self {
        Self { date: self.date.add_days(days), ..self }
    }

    pub fn add_months(self, months: i64) -> Self {
        Self { date: self.date.add_months(months), ..self }
    }

    pub fn add_years(self, years: i64) -> Self {
        Self { date: self.date.add_years(years), ..self }
    }

    pub fn subtract_days(self, days: i64) -> Self {
        Self { date: self.date.subtract_days(days), ..self }
    }

    pub fn subtract_months(self, months: i64) -> Self {
        Self { date: self.date.subtract_months(months), ..self }
    }

    pub fn subtract_years(self, years: i64) -> Self {
        Self { date: self.date.subtract_years(years), ..self }
    }

    /// Formats this date-time with the given function.
    ///
    /// ```rust
    /// use civil_time::{DateTime, DatePiece};
    ///
    /// let datetime: DateTime = "20210825T10:00+00".parse().unwrap();
    /// let text = datetime.format_with(|dt| format!("{} of {}", dt.weekday().name(), dt.month().name()));
    /// assert_eq!(text, "Wednesday of August");
    /// ```
    pub fn format_with<F>(&self, formatter: F) -> String
    where F: Fn(&Self) -> String
    {
        formatter(self)
    }
}

impl DatePiece for DateTime {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for DateTime {
    fn hour(&self) -> i8 { self.time.hour() }
    fn minute(&self) -> i8 { self.time.minute() }
    fn second(&self) -> i8 { self.time.second() }
    fn millisecond(&self) -> i16 { self.time.millisecond() }
    fn microsecond(&self) -> i16 { self.time.microsecond() }
    fn nanosecond(&self) -> i16 { self.time.nanosecond() }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DateTime({})", self)
    }
}

impl Add<DateSpan> for DateTime {
    type Output = Self;

    fn add(self, span: DateSpan) -> Self {
        Self { date: self.date + span, ..self }
    }
}

impl Sub<DateSpan> for DateTime {
    type Output = Self;

    fn sub(self, span: DateSpan) -> Self {
        Self { date: self.date - span, ..self }
    }
}

impl Add<TimeSpan> for DateTime {
    type Output = Self;

    fn add(self, span: TimeSpan) -> Self {
        self.add_time(span)
    }
}

impl Sub<TimeSpan> for DateTime {
    type Output = Self;

    fn sub(self, span: TimeSpan) -> Self {
        self.subtract_time(span)
    }
}

impl AddAssign<DateSpan> for DateTime {
    fn add_assign(&mut self, span: DateSpan) {
        *self = *self + span;
    }
}

impl SubAssign<DateSpan> for DateTime {
    fn sub_assign(&mut self, span: DateSpan) {
        *self = *self - span;
    }
}

impl AddAssign<TimeSpan> for DateTime {
    fn add_assign(&mut self, span: TimeSpan) {
        *self = *self + span;
    }
}

impl SubAssign<TimeSpan> for DateTime {
    fn sub_assign(&mut self, span: TimeSpan) {
        *self = *self - span;
    }
}
