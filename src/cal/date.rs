//! Dates, years, months, and weekdays.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cal::DatePiece;
use crate::cal::offset::Offset;
use crate::error::{check_field, Error, Field, ValidRange};
use crate::instant::Instant;
use crate::now::{Clock, SystemClock};
use crate::span::DateSpan;
use crate::util::split_cycles;

use self::Month::*;
use self::Weekday::*;


/// The earliest year a date can be constructed with. Arithmetic can still
/// move a date to before this.
pub const MIN_YEAR: i64 = 1;


/// Number of days guaranteed to be in four years, less one.
const DAYS_IN_4Y_LESS_ONE: i64 = 365 * 4;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st March, year 0** and **1st January, 1970**.
///
/// Day arithmetic is done relative to a year that starts in March, so that
/// the leap day falls at the very *end* of each year. With that shift, and
/// with year 0 being a multiple of 400, working out the year, month, and day
/// comes down to plain division by the lengths of the Gregorian cycles.
const EPOCH_DIFFERENCE: i64 = 719_468;

/// The 1st of January 1970 was a Thursday.
const EPOCH_WEEKDAY: i64 = 4;


/// Returns whether the given year is a leap year: a multiple of four,
/// unless it’s also a multiple of a hundred but not of four hundred.
///
/// ```rust
/// use civil_time::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2021));
/// ```
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_time::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.0)
    }

    /// Returns the number of days in this year.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Returns a year-month, pairing this year with the given month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_time::{Year, Month};
    ///
    /// let expiry_date = Year(2017).month(Month::February);
    /// assert_eq!(expiry_date.year, Year(2017));
    /// assert_eq!(expiry_date.month, Month::February);
    /// ```
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth {
            year: self,
            month,
        }
    }
}


/// A month-year pair.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil_time::Year;
    /// use civil_time::Month::February;
    ///
    /// assert_eq!(Year(2000).month(February).day_count(), 29);
    /// assert_eq!(Year(1900).month(February).day_count(), 28);
    /// ```
    pub fn day_count(&self) -> i8 {
        self.month.days_in_month(self.year.is_leap_year())
    }

    /// Returns a `Date` based on the day of this month.
    ///
    /// This is just a short-cut for the `Date::ymd` constructor.
    pub fn day(&self, day: i8) -> Result<Date, Error> {
        Date::ymd(self.year.0, self.month, day)
    }
}


/// A **date** is a day-long span on the timeline, in the proleptic
/// Gregorian calendar, *without a time zone*.
///
/// Dates are plain values: every arithmetic method returns a new date,
/// leaving the original alone.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Date {
    year:  i64,
    month: Month,
    day:   i8,
}

impl Date {

    /// Creates a new date from the given year, month, and day fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil_time::{Date, Month, DatePiece};
    ///
    /// let date = Date::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(Date::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        if year < MIN_YEAR {
            return Err(Error::range(Field::Year, year, ValidRange::at_least(MIN_YEAR)));
        }

        check_field(Field::Day, day as i64, 1, month.days_in_month(is_leap_year(year)) as i64)?;
        Ok(Self { year, month, day })
    }

    /// Creates a new date from a year, a month number from 1 to 12, and a
    /// day, checking all three.
    ///
    /// ```rust
    /// use civil_time::{Date, Field};
    ///
    /// assert!(Date::from_ymd(2021, 8, 25).is_ok());
    /// assert_eq!(Date::from_ymd(2021, 13, 1).unwrap_err().field(), Some(Field::Month));
    /// assert_eq!(Date::from_ymd(2021, 4, 31).unwrap_err().field(), Some(Field::Day));
    /// ```
    pub fn from_ymd(year: i64, month: i8, day: i8) -> Result<Self, Error> {
        Self::ymd(year, Month::from_one(month)?, day)
    }

    /// Creates a new date from the given year and day-of-year values.
    ///
    /// ### Examples
    ///
    /// Instantiate the 25th of September 2015 given its day-of-year (268).
    ///
    /// ```rust
    /// use civil_time::{Date, Month, DatePiece};
    ///
    /// let date = Date::yd(2015, 268).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 25);
    /// ```
    ///
    /// Remember that on leap years, the number of days in a year changes:
    ///
    /// ```rust
    /// use civil_time::{Date, Month, DatePiece};
    ///
    /// let date = Date::yd(2016, 268).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 24);  // not the 25th!
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        let jan_1 = Self::ymd(year, January, 1)?;
        check_field(Field::Day, yearday, 1, Year(year).day_count() as i64)?;
        Ok(jan_1.add_days(yearday - 1))
    }

    /// Computes a date given the number of days that have passed since the
    /// **1st of January, 1970**. Negative numbers count backwards from it.
    ///
    /// Every number of days is a valid date, so this can’t fail.
    ///
    /// ```rust
    /// use civil_time::Date;
    ///
    /// assert_eq!(Date::from_days_since_epoch(0).to_string(), "1970-01-01");
    /// assert_eq!(Date::from_days_since_epoch(-1).to_string(), "1969-12-31");
    /// ```
    pub fn from_days_since_epoch(days: i64) -> Self {
        Self::from_day_number(days as i128)
    }

    /// Computes the number of days that have passed since the **1st of
    /// January, 1970**. This is the reverse of `from_days_since_epoch`.
    ///
    /// Dates so far away that their day count doesn’t fit in an `i64` give
    /// `i64::MIN` or `i64::MAX`.
    pub fn days_since_epoch(&self) -> i64 {
        self.day_number().max(i64::MIN as i128).min(i64::MAX as i128) as i64
    }

    /// The earliest and latest dates whose year fits in an `i64`. Date
    /// arithmetic stops at these.
    const FIRST: Self = Self { year: i64::MIN, month: January, day: 1 };
    const LAST: Self = Self { year: i64::MAX, month: December, day: 31 };

    /// The day count since the epoch, wide enough for every year.
    fn day_number(&self) -> i128 {
        let month = self.month.months_from_january() as i128;

        // Shift the year to start in March.
        let (year, month_from_march) = if month >= 2 { (self.year as i128, month - 2) }
                                                else { (self.year as i128 - 1, month + 10) };

        let era = year.div_euclid(400);
        let year_of_era = year.rem_euclid(400);
        let day_of_year = (153 * month_from_march + 2) / 5 + self.day as i128 - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        era * DAYS_IN_400Y as i128 + day_of_era - EPOCH_DIFFERENCE as i128
    }

    /// The date with the given day number, or the first or last date if
    /// it lies beyond them.
    fn from_day_number(days: i128) -> Self {
        if days <= Self::FIRST.day_number() {
            return Self::FIRST;
        }
        else if days >= Self::LAST.day_number() {
            return Self::LAST;
        }

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        let shifted = days + EPOCH_DIFFERENCE as i128;
        let era = shifted.div_euclid(DAYS_IN_400Y as i128);
        let day_of_era = shifted.rem_euclid(DAYS_IN_400Y as i128) as i64;

        // Subtracting one day per four years, adding one back per hundred,
        // and subtracting one again at the very end of the era flattens
        // every year to 365 days, so one division finds the year.
        let year_of_era = (day_of_era
                         - day_of_era / DAYS_IN_4Y_LESS_ONE
                         + day_of_era / DAYS_IN_100Y
                         - day_of_era / (DAYS_IN_400Y - 1)) / 365;

        // Days since the 1st of March of that year.
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);

        // Months from March onwards alternate between 31 and 30 days in a
        // pattern that repeats every five months (153 days), which this
        // fraction captures. February is last, and gets whatever’s left.
        let month_from_march = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;

        // Turn the March-based month back into a January-based one,
        // moving January and February into the next year.
        let (month, year_shift) = if month_from_march < 10 { (month_from_march + 2, 0) }
                                                      else { (month_from_march - 10, 1) };

        Self {
            year:  (era * 400 + (year_of_era + year_shift) as i128) as i64,
            month: MONTHS[month as usize],
            day:   day as i8,
        }
    }

    /// Computes the date at the given instant, as seen from the given
    /// offset from UTC.
    pub fn from_instant(instant: Instant, offset: Offset) -> Self {
        let (days, seconds) = split_cycles(instant.seconds(), SECONDS_IN_DAY);
        let (carry, _) = split_cycles(seconds + offset.seconds(), SECONDS_IN_DAY);
        Self::from_day_number(days as i128 + carry as i128)
    }

    /// Today’s date in UTC.
    pub fn now() -> Self {
        Self::now_in(Offset::utc())
    }

    /// Today’s date as seen from the given offset from UTC.
    pub fn now_in(offset: Offset) -> Self {
        Self::from_instant(SystemClock.now(), offset)
    }

    /// Today’s date in the system’s local time zone.
    pub fn local() -> Self {
        Self::local_with(&SystemClock)
    }

    /// Today’s date according to the given clock and its local offset.
    pub fn local_with<C: Clock>(clock: &C) -> Self {
        Self::from_instant(clock.now(), clock.utc_offset())
    }

    /// Builds a date, pulling the day back to the last day of the month
    /// if the month is too short for it.
    fn clamped(year: i64, month: Month, day: i8) -> Self {
        let last_day = month.days_in_month(is_leap_year(year));
        Self { year, month, day: day.min(last_day) }
    }

    /// Moves this date forwards by the given number of days, or backwards
    /// if the number is negative.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_day_number(self.day_number() + days as i128)
    }

    /// Moves this date backwards by the given number of days.
    pub fn subtract_days(self, days: i64) -> Self {
        Self::from_day_number(self.day_number() - days as i128)
    }

    /// Moves this date forwards by the given number of months, carrying
    /// into the year as necessary. If the resulting month doesn’t have as
    /// many days as this date’s day, the last day of that month is used.
    ///
    /// ```rust
    /// use civil_time::Date;
    ///
    /// let date = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(date.add_months(1), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(date.add_months(11), Date::from_ymd(2024, 12, 31).unwrap());
    /// assert_eq!(date.add_months(13), Date::from_ymd(2025, 2, 28).unwrap());
    /// ```
    pub fn add_months(self, months: i64) -> Self {
        self.shift_months(months as i128)
    }

    /// Moves this date backwards by the given number of months, with the
    /// same end-of-month rule as `add_months`.
    pub fn subtract_months(self, months: i64) -> Self {
        self.shift_months(-(months as i128))
    }

    /// Moves this date forwards by the given number of years. The 29th of
    /// February becomes the 28th if the resulting year isn’t a leap year.
    ///
    /// ```rust
    /// use civil_time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(date.add_years(1), Date::from_ymd(2025, 2, 28).unwrap());
    /// assert_eq!(date.add_years(4), Date::from_ymd(2028, 2, 29).unwrap());
    /// ```
    pub fn add_years(self, years: i64) -> Self {
        self.shift_months(years as i128 * 12)
    }

    /// Moves this date backwards by the given number of years.
    pub fn subtract_years(self, years: i64) -> Self {
        self.shift_months(-(years as i128) * 12)
    }

    fn shift_months(self, months: i128) -> Self {
        let total = self.year as i128 * 12 + self.month.months_from_january() as i128 + months;
        let year = total.div_euclid(12);

        if year > i64::MAX as i128 {
            Self::LAST
        }
        else if year < i64::MIN as i128 {
            Self::FIRST
        }
        else {
            Self::clamped(year as i64, MONTHS[total.rem_euclid(12) as usize], self.day)
        }
    }

    /// Whether this date’s year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Formats this date with the given function.
    ///
    /// ```rust
    /// use civil_time::{Date, DatePiece};
    ///
    /// let date = Date::from_ymd(2021, 8, 25).unwrap();
    /// assert_eq!(date.format_with(|d| d.weekday().short_name().to_owned()), "Wed");
    /// ```
    pub fn format_with<F>(&self, formatter: F) -> String
    where F: Fn(&Self) -> String
    {
        formatter(self)
    }
}

impl DatePiece for Date {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }

    fn yearday(&self) -> i16 {
        let jan_1 = Self { year: self.year, month: January, day: 1 };
        (self.day_number() - jan_1.day_number() + 1) as i16
    }

    fn weekday(&self) -> Weekday {
        days_to_weekday(self.day_number())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.year >= 0 && self.year <= 9999 {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month as i8, self.day)
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", self.year, self.month as i8, self.day)
        }
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Date({})", self)
    }
}

impl Add<DateSpan> for Date {
    type Output = Self;

    fn add(self, span: DateSpan) -> Self {
        match span {
            DateSpan::Days(n)    => self.add_days(n),
            DateSpan::Months(n)  => self.add_months(n),
            DateSpan::Years(n)   => self.add_years(n),
        }
    }
}

impl Sub<DateSpan> for Date {
    type Output = Self;

    fn sub(self, span: DateSpan) -> Self {
        match span {
            DateSpan::Days(n)    => self.subtract_days(n),
            DateSpan::Months(n)  => self.subtract_months(n),
            DateSpan::Years(n)   => self.subtract_years(n),
        }
    }
}

impl AddAssign<DateSpan> for Date {
    fn add_assign(&mut self, span: DateSpan) {
        *self = *self + span;
    }
}

impl SubAssign<DateSpan> for Date {
    fn sub_assign(&mut self, span: DateSpan) {
        *self = *self - span;
    }
}


/// Computes the weekday, given the number of days that have passed
/// since the 1st of January 1970.
fn days_to_weekday(days: i128) -> Weekday {
    let weekday = (days + EPOCH_WEEKDAY as i128).rem_euclid(7);
    WEEKDAYS[weekday as usize]
}


static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

static WEEKDAYS: [Weekday; 7] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i8` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// The month’s English name.
    pub fn name(self) -> &'static str {
        match self {
            January   => "January",   February  => "February",
            March     => "March",     April     => "April",
            May       => "May",       June      => "June",
            July      => "July",      August    => "August",
            September => "September", October   => "October",
            November  => "November",  December  => "December",
        }
    }

    /// The first three letters of the month’s English name.
    pub fn short_name(self) -> &'static str {
        &self.name()[.. 3]
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use civil_time::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        check_field(Field::Month, month as i64, 1, 12)?;
        Ok(MONTHS[month as usize - 1])
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use civil_time::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        check_field(Field::Month, month as i64, 0, 11)?;
        Ok(MONTHS[month as usize])
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, as it is in C’s `tm_wday`. Weekdays don’t get an Ord
// instance because there’s no real standard as to whether Sunday should
// come before Monday, or the other way around.

impl Weekday {

    /// The number of days since the last Sunday: Sunday is 0, Monday is 1,
    /// and Saturday is 6.
    pub fn days_from_sunday(self) -> i8 {
        self as i8
    }

    /// The ISO-8601 day number: Monday is 1, and Sunday is 7.
    pub fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday => 7,
            other  => other as i8,
        }
    }

    /// Whether this is a Saturday or a Sunday.
    pub fn is_weekend(self) -> bool {
        self == Saturday || self == Sunday
    }

    /// The weekday’s English name.
    pub fn name(self) -> &'static str {
        match self {
            Sunday    => "Sunday",    Monday   => "Monday",
            Tuesday   => "Tuesday",   Wednesday => "Wednesday",
            Thursday  => "Thursday",  Friday   => "Friday",
            Saturday  => "Saturday",
        }
    }

    /// The first three letters of the weekday’s English name.
    pub fn short_name(self) -> &'static str {
        &self.name()[.. 3]
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use civil_time::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        check_field(Field::Weekday, weekday as i64, 0, 6)?;
        Ok(WEEKDAYS[weekday as usize])
    }

    /// Return the weekday based on its ISO-8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        check_field(Field::Weekday, weekday as i64, 1, 7)?;
        Ok(WEEKDAYS[weekday as usize % 7])
    }
}
