//! Exact points on a timeline.

use std::fmt;

use crate::system::sys_time;


/// Number of nanoseconds in one second.
pub(crate) const NANOS_IN_SECOND: i64 = 1_000_000_000;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 32-bit integer of nanoseconds into that second, which
/// is always kept between 0 and 999,999,999 (so an instant just before the
/// epoch has −1 seconds and a large number of nanoseconds).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanoseconds: i32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of nanoseconds so far this
    /// second. Nanoseconds outside one second are carried into the
    /// seconds.
    pub fn at_ns(seconds: i64, nanoseconds: i64) -> Self {
        Self {
            seconds:     seconds + nanoseconds.div_euclid(NANOS_IN_SECOND),
            nanoseconds: nanoseconds.rem_euclid(NANOS_IN_SECOND) as i32,
        }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, nanoseconds) = sys_time();
        Self::at_ns(seconds, nanoseconds as i64)
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of nanoseconds into the second at this instant.
    pub fn nanoseconds(&self) -> i32 {
        self.nanoseconds
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanoseconds)
    }
}
