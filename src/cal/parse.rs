//! Reading dates and times from their fixed-width text forms.
//!
//! Every form has a template, with `D` standing for a digit and anything
//! else for itself. The text has to fit its template exactly before any
//! numbers are read from it, so a wrong length, a stray character, or a
//! missing separator always gives a format error, and only well-formed
//! text can go on to give a range error.

use std::str::FromStr;

use crate::cal::date::Date;
use crate::cal::datetime::DateTime;
use crate::cal::offset::Offset;
use crate::cal::time::Time;
use crate::error::{check_field, Error, Field};


const DATE_EXPECTED: &str = "YYYYMMDD or YYYY-MM-DD";
const TIME_EXPECTED: &str = "HH:MM[:SS[.mmm[.uuu[.nnn]]]] with an optional ±HH offset";
const DATETIME_EXPECTED: &str = "a date and a time separated by 'T'";

/// The compact and extended date forms, with where their month and day
/// start.
static DATE_TEMPLATES: [(&str, usize, usize); 2] = [
    ("DDDDDDDD",   4, 6),
    ("DDDD-DD-DD", 5, 8),
];

/// The time forms, one per precision, from minutes to nanoseconds.
static TIME_TEMPLATES: [&str; 5] = [
    "DD:DD",
    "DD:DD:DD",
    "DD:DD:DD.DDD",
    "DD:DD:DD.DDD.DDD",
    "DD:DD:DD.DDD.DDD.DDD",
];


/// Whether the input fits the template character for character.
fn fits(input: &str, template: &str) -> bool {
    input.len() == template.len()
        && input.bytes().zip(template.bytes()).all(|(c, t)| match t {
            b'D' => c.is_ascii_digit(),
            sep  => c == sep,
        })
}

/// Reads the run of ASCII digits starting at `start`. The input must have
/// already been checked against its template.
fn digits(input: &str, start: usize, len: usize) -> i64 {
    input.as_bytes()[start .. start + len]
        .iter()
        .fold(0, |n, b| n * 10 + i64::from(b - b'0'))
}

fn reject(input: &str, expected: &'static str) -> Error {
    log::debug!("rejected {:?}: expected {}", input, expected);
    Error::format(input, expected)
}


/// A date that fits one of its templates, with its numbers not yet read.
#[derive(Debug)]
struct DateText<'a> {
    text: &'a str,
    month_pos: usize,
    day_pos: usize,
}

fn match_date(input: &str) -> Result<DateText<'_>, Error> {
    let &(_, month_pos, day_pos) = DATE_TEMPLATES.iter()
        .find(|(template, _, _)| fits(input, template))
        .ok_or_else(|| reject(input, DATE_EXPECTED))?;

    Ok(DateText { text: input, month_pos, day_pos })
}

impl DateText<'_> {
    fn read(&self) -> Result<Date, Error> {
        let year  = digits(self.text, 0, 4);
        let month = digits(self.text, self.month_pos, 2);
        let day   = digits(self.text, self.day_pos, 2);

        check_field(Field::Month, month, 1, 12)?;
        Date::from_ymd(year, month as i8, day as i8)
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses a date written as `YYYYMMDD` or `YYYY-MM-DD`.
    ///
    /// ```rust
    /// use civil_time::Date;
    ///
    /// let date: Date = "2021-08-25".parse().unwrap();
    /// assert_eq!(date, "20210825".parse().unwrap());
    ///
    /// assert!("2021-8-25".parse::<Date>().unwrap_err().is_format_error());
    /// assert!("2021-02-29".parse::<Date>().unwrap_err().is_range_error());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match_date(input)?.read()
    }
}


/// A time that fits one of its templates, along with its `±HH` offset
/// if it has one, with its numbers not yet read.
#[derive(Debug)]
struct TimeText<'a> {
    text: &'a str,
    fields: usize,
    offset: Option<&'a str>,
}

fn match_time(input: &str) -> Result<TimeText<'_>, Error> {
    let (text, offset) = split_offset(input);

    if let Some(suffix) = offset {
        if !fits(&suffix[1..], "DD") {
            return Err(reject(input, TIME_EXPECTED));
        }
    }

    let fields = TIME_TEMPLATES.iter()
        .position(|template| fits(text, template))
        .ok_or_else(|| reject(input, TIME_EXPECTED))?;

    Ok(TimeText { text, fields, offset })
}

/// Splits a trailing sign and two characters off the end of a time, if
/// there are any.
fn split_offset(input: &str) -> (&str, Option<&str>) {
    let len = input.len();
    if len < 3 || !input.is_char_boundary(len - 3) {
        return (input, None);
    }

    let (text, suffix) = input.split_at(len - 3);
    match suffix.as_bytes()[0] {
        b'+' | b'-'  => (text, Some(suffix)),
        _            => (input, None),
    }
}

impl TimeText<'_> {
    fn read(&self) -> Result<Time, Error> {
        let text = self.text;
        let hour   = digits(text, 0, 2) as i8;
        let minute = digits(text, 3, 2) as i8;
        let second = || digits(text, 6, 2) as i8;
        let frac   = |n: usize| digits(text, 9 + 4 * n, 3) as i16;

        let time = match self.fields {
            0  => Time::hm(hour, minute),
            1  => Time::hms(hour, minute, second()),
            2  => Time::hms_ms(hour, minute, second(), frac(0)),
            3  => Time::hms_us(hour, minute, second(), frac(0), frac(1)),
            _  => Time::hms_ns(hour, minute, second(), frac(0), frac(1), frac(2)),
        }?;

        let offset = match self.offset {
            Some(suffix) => {
                let hours = digits(suffix, 1, 2) as i8;
                Offset::of_hours(if suffix.starts_with('-') { -hours } else { hours })?
            }
            None => Offset::utc(),
        };

        Ok(time.with_offset(offset))
    }
}

impl FromStr for Time {
    type Err = Error;

    /// Parses a time written as `HH:MM`, optionally followed by seconds
    /// and up to three groups of three fractional digits, and then an
    /// optional offset from UTC. The precision comes from how much of the
    /// time is written down.
    ///
    /// ```rust
    /// use civil_time::{Time, Precision};
    ///
    /// let time: Time = "23:59:10.250-03".parse().unwrap();
    /// assert_eq!(time.precision(), Precision::Milliseconds);
    /// assert_eq!(time.offset().hours(), -3);
    ///
    /// assert!("2a:23:23".parse::<Time>().unwrap_err().is_format_error());
    /// assert!("23:60".parse::<Time>().unwrap_err().is_range_error());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match_time(input)?.read()
    }
}


impl FromStr for DateTime {
    type Err = Error;

    /// Parses a date and a time separated by a `T`, with either date
    /// form and any time form. Both halves have to be well-formed before
    /// either is checked for range.
    ///
    /// ```rust
    /// use civil_time::{DateTime, TimePiece};
    ///
    /// let datetime: DateTime = "20210101T23:59:10+02".parse().unwrap();
    /// assert_eq!(datetime.hour(), 23);
    ///
    /// assert!("2021-01-01 23:59".parse::<DateTime>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let separator = input.find('T')
            .ok_or_else(|| reject(input, DATETIME_EXPECTED))?;

        let date = match_date(&input[.. separator])?;
        let time = match_time(&input[separator + 1 ..])?;
        Ok(DateTime::new(date.read()?, time.read()?))
    }
}
