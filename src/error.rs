//! The one error type returned by every fallible constructor.

use std::fmt;

use thiserror::Error;


/// The field of a date, time, or offset that a value was supplied for.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Weekday,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
    Offset,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Field::Year         => "year",
            Field::Month        => "month",
            Field::Day          => "day",
            Field::Weekday      => "weekday",
            Field::Hour         => "hour",
            Field::Minute       => "minute",
            Field::Second       => "second",
            Field::Millisecond  => "millisecond",
            Field::Microsecond  => "microsecond",
            Field::Nanosecond   => "nanosecond",
            Field::Offset       => "offset",
        };

        f.write_str(name)
    }
}


/// The inclusive range of values a field accepts. A range without a
/// maximum is unbounded above (only years have one of these).
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct ValidRange {
    pub min: i64,
    pub max: Option<i64>,
}

impl ValidRange {
    pub(crate) fn new(min: i64, max: i64) -> Self {
        Self { min, max: Some(max) }
    }

    pub(crate) fn at_least(min: i64) -> Self {
        Self { min, max: None }
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "expected a value from {} to {}", self.min, max),
            None      => write!(f, "expected a value of at least {}", self.min),
        }
    }
}


#[derive(PartialEq, Eq, Debug, Clone, Error)]
pub enum Error {

    /// The text does not match the grammar it was parsed against: it has
    /// the wrong length, an illegal character, or a missing separator.
    #[error("invalid format {input:?}: expected {expected}")]
    InvalidFormat {
        input: String,
        expected: &'static str,
    },

    /// A field is syntactically fine but semantically out of range, such
    /// as the 31st of April or minute 60.
    #[error("bad [{field}] value {value}: {range}")]
    OutOfRange {
        field: Field,
        value: i64,
        range: ValidRange,
    },
}

impl Error {
    pub(crate) fn format(input: &str, expected: &'static str) -> Self {
        Error::InvalidFormat { input: input.to_owned(), expected }
    }

    pub(crate) fn range(field: Field, value: i64, range: ValidRange) -> Self {
        Error::OutOfRange { field, value, range }
    }

    /// Whether the text failed to match its grammar.
    pub fn is_format_error(&self) -> bool {
        matches!(*self, Error::InvalidFormat { .. })
    }

    /// Whether a field value was out of range.
    pub fn is_range_error(&self) -> bool {
        matches!(*self, Error::OutOfRange { .. })
    }

    /// The field that was out of range, if this is a range error.
    pub fn field(&self) -> Option<Field> {
        match *self {
            Error::OutOfRange { field, .. } => Some(field),
            Error::InvalidFormat { .. }     => None,
        }
    }
}


/// Checks that a value lies within the given inclusive bounds, returning
/// an `OutOfRange` error naming the field if it doesn’t.
pub(crate) fn check_field(field: Field, value: i64, min: i64, max: i64) -> Result<(), Error> {
    use crate::util::RangeExt;

    if value.is_within(min ..= max) {
        Ok(())
    }
    else {
        Err(Error::range(field, value, ValidRange::new(min, max)))
    }
}
