//! Fixed offsets from UTC, in whole hours.

use std::fmt;

use crate::error::{check_field, Error, Field};


/// The westernmost offset that can be represented.
pub const MIN_OFFSET_HOURS: i8 = -12;

/// The easternmost offset that can be represented.
pub const MAX_OFFSET_HOURS: i8 = 12;


/// A fixed offset from UTC, in whole hours between −12 and +12.
///
/// Only whole-hour offsets are modelled; there’s no time zone database
/// here, so daylight saving time is up to whoever supplies the offset.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Offset {
    hours: i8,
}

impl Offset {

    /// The offset of UTC itself.
    pub fn utc() -> Self {
        Self { hours: 0 }
    }

    /// Creates an offset of the given number of hours, returning an error
    /// if it’s outside −12 to +12.
    ///
    /// ```rust
    /// use civil_time::Offset;
    ///
    /// assert_eq!(Offset::of_hours(2).unwrap().hours(), 2);
    /// assert!(Offset::of_hours(13).is_err());
    /// ```
    pub fn of_hours(hours: i8) -> Result<Self, Error> {
        check_field(Field::Offset, hours as i64, MIN_OFFSET_HOURS as i64, MAX_OFFSET_HOURS as i64)?;
        Ok(Self { hours })
    }

    /// Creates an offset of the given number of hours, pulling anything
    /// outside the representable range back to its nearest end. This is
    /// only used for offsets reported by the OS, which can reach +14.
    pub(crate) fn of_hours_clamped(hours: i64) -> Self {
        let clamped = hours.max(MIN_OFFSET_HOURS as i64).min(MAX_OFFSET_HOURS as i64);
        if clamped != hours {
            log::warn!("local UTC offset of {} hours clamped to {}", hours, clamped);
        }

        Self { hours: clamped as i8 }
    }

    pub fn is_utc(self) -> bool {
        self.hours == 0
    }

    pub fn is_negative(self) -> bool {
        self.hours < 0
    }

    /// The number of hours this offset is ahead of UTC (negative if it’s
    /// behind).
    pub fn hours(self) -> i8 {
        self.hours
    }

    /// The length of this offset, in seconds.
    pub fn seconds(self) -> i64 {
        self.hours as i64 * 3600
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { '-' } else { '+' };
        write!(f, "{}{:02}", sign, self.hours.abs())
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset({})", self)
    }
}
