#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Calendar dates and clock times, with calendar-correct arithmetic.
//!
//! A `Date` is a day in the proleptic Gregorian calendar, a `Time` is a
//! time of day at a chosen precision with a fixed offset from UTC, and a
//! `DateTime` is the two together. Adding to a date moves it by days,
//! months, or years, pulling the day back to the end of the month when it
//! has to. Adding to a time wraps around midnight, and adding to a
//! date-time carries those wraps into the date.
//!
//! # Examples
//!
//! ```
//! use civil_time::{Date, DateTime, DatePiece, Time, TimeSpan, Weekday};
//!
//! let date: Date = "2024-01-31".parse().unwrap();
//! assert_eq!(date.add_months(1).to_string(), "2024-02-29");
//! assert_eq!(date.weekday(), Weekday::Wednesday);
//!
//! let time = Time::hms(23, 59, 10).unwrap();
//! assert_eq!(time + TimeSpan::Seconds(55), Time::hms(0, 0, 5).unwrap());
//!
//! let datetime: DateTime = "20210101T23:59:10+02".parse().unwrap();
//! assert_eq!(datetime.add_seconds(55).to_string(), "2021-01-02T00:00:05+02");
//! ```

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::date::{is_leap_year, Date, Month, Weekday, Year, YearMonth, MIN_YEAR};
pub use crate::cal::datetime::DateTime;
pub use crate::cal::offset::{Offset, MAX_OFFSET_HOURS, MIN_OFFSET_HOURS};
pub use crate::cal::time::{Precision, Time};

#[cfg(feature="format")]
pub use crate::cal::fmt::{DateFormat, FormatError};

mod error;
pub use crate::error::{Error, Field, ValidRange};

mod instant;
pub use crate::instant::Instant;

mod now;
pub use crate::now::{Clock, FixedClock, SystemClock};

mod span;
pub use crate::span::{DateSpan, TimeSpan};

mod system;
mod util;
