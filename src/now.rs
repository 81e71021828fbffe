//! Where “now” comes from.
//!
//! Every constructor that builds a value for the current moment goes
//! through a `Clock`, so the pure calendar code never calls into the OS
//! itself. The zero-argument constructors (`Date::now()`, `Time::local()`,
//! and so on) use the `SystemClock`; tests pass a `FixedClock` to the
//! `*_with` variants instead.

use crate::cal::offset::Offset;
use crate::instant::Instant;
use crate::system::sys_utc_offset;


/// A source of the current instant and of the local offset from UTC.
pub trait Clock {

    /// The current instant.
    fn now(&self) -> Instant;

    /// The local time zone’s offset from UTC, in whole hours.
    fn utc_offset(&self) -> Offset;
}


/// The operating system’s wall clock and local time zone.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn utc_offset(&self) -> Offset {
        let seconds = sys_utc_offset(Instant::now().seconds());
        Offset::of_hours_clamped(seconds / 3600)
    }
}


/// A clock that’s always stuck at the same instant, in the same offset.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct FixedClock {
    pub instant: Instant,
    pub offset: Offset,
}

impl FixedClock {
    pub fn new(instant: Instant, offset: Offset) -> Self {
        Self { instant, offset }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.instant
    }

    fn utc_offset(&self) -> Offset {
        self.offset
    }
}
