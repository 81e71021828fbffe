//! Datetime-to-string routines.

use std::fmt::Display;
use std::iter::Peekable;
use std::str::CharIndices;

use pad::{PadStr, Alignment};
use thiserror::Error;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::DateTime;


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(NumArguments),
    YearOfCentury(NumArguments),

    MonthName(bool, TextArguments),

    Day(NumArguments),
    WeekdayName(bool, TextArguments),

    Hour(NumArguments),
    Minute(NumArguments),
    Second(NumArguments),

    Offset(TextArguments),
}

impl<'a> Field<'a> {
    fn format(&self, when: &DateTime, w: &mut String) {
        match *self {
            Field::Literal(s)             => w.push_str(s),
            Field::Year(a)                => a.format(w, when.year()),
            Field::YearOfCentury(a)       => a.format(w, when.year_of_century()),
            Field::MonthName(true, a)     => a.format(w, when.month().name()),
            Field::MonthName(false, a)    => a.format(w, when.month().short_name()),
            Field::Day(a)                 => a.format(w, when.day()),
            Field::WeekdayName(true, a)   => a.format(w, when.weekday().name()),
            Field::WeekdayName(false, a)  => a.format(w, when.weekday().short_name()),
            Field::Hour(a)                => a.format(w, when.hour()),
            Field::Minute(a)              => a.format(w, when.minute()),
            Field::Second(a)              => a.format(w, when.second()),
            Field::Offset(a)              => a.format(w, &when.time().offset().to_string()),
        }
    }
}


/// A pattern for writing out date-times, such as `{:D} {_:M} {:Y}`.
///
/// Each field sits in braces, with a colon before the letter that picks
/// it: `Y` and `y` for the year and its last two digits, `M` for the
/// month, `D` for the day, `E` for the weekday, `h`, `m`, and `s` for
/// the time, and `z` for the offset from UTC. An underscore before the
/// colon picks the long name of a month or weekday. Before the colon
/// there can also be a width, an alignment of `<`, `^`, or `>`, and a `0`
/// to pad with zeroes. Write `{{` and `}}` for literal braces.
///
/// ```rust
/// use civil_time::{DateFormat, DateTime};
///
/// let datetime: DateTime = "2021-08-25T07:05:09-03".parse().unwrap();
/// let format = DateFormat::parse("{_:E} {:D} {:M} {:Y}, {>02:h}:{>02:m}{:z}").unwrap();
/// assert_eq!(format.format(&datetime), "Wednesday 25 Aug 2021, 07:05-03");
/// ```
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
}


/// A mistake in a format pattern, with the byte position it was found at.
#[derive(PartialEq, Eq, Clone, Debug, Copy, Error)]
pub enum FormatError {
    #[error("invalid character {c:?} at position {pos}")]
    InvalidChar { c: char, colon: bool, pos: Pos },

    #[error("unclosed brace opened at position {open_pos}")]
    OpenCurlyBrace { open_pos: Pos },

    #[error("unmatched closing brace at position {close_pos}")]
    CloseCurlyBrace { close_pos: Pos },

    #[error("no field between positions {open_pos} and {close_pos}")]
    MissingField { open_pos: Pos, close_pos: Pos },

    #[error("field at position {open_pos} already has an alignment of {current_alignment:?}")]
    DoubleAlignment { open_pos: Pos, current_alignment: Alignment },

    #[error("field at position {open_pos} already has a width of {current_width}")]
    DoubleWidth { open_pos: Pos, current_width: Width },
}

pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Arguments {
    pub alignment: Option<Alignment>,
    pub width:     Option<Width>,
    pub pad_char:  Option<char>,
}

impl Arguments {
    pub fn empty() -> Self {
        Self {
            alignment: None,
            width:     None,
            pad_char:  None,
        }
    }

    pub fn set_width(&mut self, width: Width) -> Self {
        self.width = Some(width);
        *self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        *self
    }

    pub fn set_pad_char(&mut self, pad_char: char) -> Self {
        self.pad_char = Some(pad_char);
        *self
    }

    pub fn update_width(&mut self, width: Width, open_pos: Pos) -> Result<(), FormatError> {
        match self.width {
            None => { self.width = Some(width); Ok(())},
            Some(existing) => Err(FormatError::DoubleWidth { open_pos, current_width: existing }),
        }
    }

    pub fn update_alignment(&mut self, alignment: Alignment, open_pos: Pos) -> Result<(), FormatError> {
        match self.alignment {
            None => { self.alignment = Some(alignment); Ok(())},
            Some(existing) => Err(FormatError::DoubleAlignment { open_pos, current_alignment: existing }),
        }
    }

    fn format(self, w: &mut String, string: &str) {
        let width     = self.width.unwrap_or(0);
        let pad_char  = self.pad_char.unwrap_or(' ');
        let alignment = self.alignment.unwrap_or(Alignment::Left);

        w.push_str(&string.pad(width, pad_char, alignment, false));
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.width.is_none() && self.pad_char.is_none()
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TextArguments(Arguments);

impl TextArguments {
    #[cfg(test)]
    fn empty() -> TextArguments {
        TextArguments(Arguments::empty())
    }

    fn format(self, w: &mut String, string: &str) {
        self.0.format(w, string)
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments(Arguments);

impl NumArguments {
    #[cfg(test)]
    fn empty() -> NumArguments {
        NumArguments(Arguments::empty())
    }

    fn format<N: Display>(self, w: &mut String, number: N) {
        self.0.format(w, &number.to_string())
    }
}

impl<'a> DateFormat<'a> {

    /// Writes out the date-time according to this pattern.
    pub fn format(&self, when: &DateTime) -> String {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, &mut buf);
        }

        buf
    }

    pub fn parse(input: &'a str) -> Result<DateFormat<'a>, FormatError> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string()?;

        Ok(DateFormat { fields: parser.fields })
    }
}


/// Splits a pattern into fields. Literal text is kept as slices of the
/// pattern, so an escaped brace becomes a one-character slice of its own.
struct FormatParser<'a> {
    input:   &'a str,
    chars:   Peekable<CharIndices<'a>>,
    fields:  Vec<Field<'a>>,
    literal: Option<Pos>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars:   input.char_indices().peekable(),
            fields:  Vec::new(),
            literal: None,
        }
    }

    /// Pushes the literal text running up to `end`, if there is any.
    fn end_literal(&mut self, end: Pos) {
        if let Some(start) = self.literal.take() {
            self.fields.push(Field::Literal(&self.input[start .. end]));
        }
    }

    fn parse_format_string(&mut self) -> Result<(), FormatError> {
        while let Some((pos, c)) = self.chars.next() {
            match c {
                '{' => {
                    self.end_literal(pos);
                    let field = self.parse_field(pos)?;
                    self.fields.push(field);
                }
                '}' => {
                    if let Some((_, '}')) = self.chars.next() {
                        self.end_literal(pos);
                        self.fields.push(Field::Literal(&self.input[pos ..= pos]));
                    }
                    else {
                        return Err(FormatError::CloseCurlyBrace { close_pos: pos });
                    }
                }
                _ => {
                    if self.literal.is_none() {
                        self.literal = Some(pos);
                    }
                }
            }
        }

        self.end_literal(self.input.len());
        Ok(())
    }

    /// Reads a field after its opening brace, up to and including the
    /// closing one.
    fn parse_field(&mut self, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        if let Some(&(pos, '{')) = self.chars.peek() {
            let _ = self.chars.next();
            return Ok(Field::Literal(&self.input[pos ..= pos]));
        }

        let mut args = Arguments::empty();
        let mut long = false;
        let mut field = None;

        loop {
            let (pos, c) = self.chars.next()
                .ok_or(FormatError::OpenCurlyBrace { open_pos })?;

            match c {
                '<'  => args.update_alignment(Alignment::Left, open_pos)?,
                '^'  => args.update_alignment(Alignment::Middle, open_pos)?,
                '>'  => args.update_alignment(Alignment::Right, open_pos)?,
                '0' if args.width.is_none() => args.pad_char = Some('0'),
                _ if c.is_ascii_digit() => {
                    let width = self.parse_width(c);
                    args.update_width(width, open_pos)?;
                }
                '_'  => long = true,
                ':'  => field = Some(self.parse_letter(long, args, open_pos)?),
                '}'  => return field.ok_or(FormatError::MissingField { open_pos, close_pos: pos }),
                _    => return Err(FormatError::InvalidChar { c, colon: false, pos }),
            }
        }
    }

    /// Reads the letter after a colon that picks which field it is.
    fn parse_letter(&mut self, long: bool, args: Arguments, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        let (pos, c) = self.chars.next()
            .ok_or(FormatError::OpenCurlyBrace { open_pos })?;

        let (num, text) = (NumArguments(args), TextArguments(args));
        let field = match c {
            'Y'  => Field::Year(num),
            'y'  => Field::YearOfCentury(num),
            'M'  => Field::MonthName(long, text),
            'D'  => Field::Day(num),
            'E'  => Field::WeekdayName(long, text),
            'h'  => Field::Hour(num),
            'm'  => Field::Minute(num),
            's'  => Field::Second(num),
            'z'  => Field::Offset(text),
            _    => return Err(FormatError::InvalidChar { c, colon: true, pos }),
        };

        Ok(field)
    }

    /// Reads the rest of a width, saturating rather than overflowing.
    fn parse_width(&mut self, first: char) -> Width {
        let mut width = first.to_digit(10).map_or(0, |d| d as Width);

        while let Some(digit) = self.chars.peek().and_then(|&(_, c)| c.to_digit(10)) {
            width = width.saturating_mul(10).saturating_add(digit as Width);
            let _ = self.chars.next();
        }

        width
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::{DateFormat, FormatError, Arguments, NumArguments, TextArguments};
    pub(crate) use super::Field::*;
    pub(crate) use pad::Alignment;

    mod parse {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(DateFormat::parse($input), $result)
                }
            };
        }

        test!(empty_string: ""                      => Ok(DateFormat { fields: vec![] }));
        test!(entirely_literal: "Date!"             => Ok(DateFormat { fields: vec![ Literal("Date!") ] }));
        test!(single_element: "{:Y}"                => Ok(DateFormat { fields: vec![ Year(NumArguments::empty()) ] }));
        test!(two_long_years: "{:Y}{:Y}"            => Ok(DateFormat { fields: vec![ Year(NumArguments::empty()), Year(NumArguments::empty()) ] }));
        test!(surrounded: "({:D})"                  => Ok(DateFormat { fields: vec![ Literal("("), Day(NumArguments::empty()), Literal(")") ] }));
        test!(a_bunch_of_elements: "{:Y}-{:M}-{:D}" => Ok(DateFormat { fields: vec![ Year(NumArguments::empty()), Literal("-"), MonthName(false, TextArguments::empty()), Literal("-"), Day(NumArguments::empty()) ] }));
        test!(offset: "{:h}{:z}"                    => Ok(DateFormat { fields: vec![ Hour(NumArguments::empty()), Offset(TextArguments::empty()) ] }));
        test!(long_weekday: "{_:E}"                 => Ok(DateFormat { fields: vec![ WeekdayName(true, TextArguments::empty()) ] }));

        test!(missing_field: "{}"                              => Err(FormatError::MissingField { open_pos: 0, close_pos: 1 }));
        test!(invalid_char: "{a}"                              => Err(FormatError::InvalidChar { c: 'a', colon: false, pos: 1 }));
        test!(invalid_char_after_colon: "{:7}"                 => Err(FormatError::InvalidChar { c: '7', colon: true, pos: 2 }));
        test!(open_curly_brace: "{"                            => Err(FormatError::OpenCurlyBrace { open_pos: 0 }));
        test!(mystery_close_brace: "}"                         => Err(FormatError::CloseCurlyBrace { close_pos: 0 }));
        test!(another_mystery_close_brace: "This is a test: }" => Err(FormatError::CloseCurlyBrace { close_pos: 16 }));

        test!(escaping_open: "{{"  => Ok(DateFormat { fields: vec![ Literal("{") ] }));
        test!(escaping_close: "}}" => Ok(DateFormat { fields: vec![ Literal("}") ] }));

        test!(escaping_middle: "The character {{ is my favourite!" => Ok(DateFormat { fields: vec![ Literal("The character "), Literal("{"), Literal(" is my favourite!") ] }));
        test!(escaping_middle_2: "It's way better than }}."        => Ok(DateFormat { fields: vec![ Literal("It's way better than "), Literal("}"), Literal(".") ] }));

        mod alignment {
            use super::*;

            test!(left:   "{<:Y}" => Ok(DateFormat { fields: vec![ Year(NumArguments(Arguments::empty().set_alignment(Alignment::Left))) ]}));
            test!(right:  "{>:Y}" => Ok(DateFormat { fields: vec![ Year(NumArguments(Arguments::empty().set_alignment(Alignment::Right))) ]}));
            test!(middle: "{^:Y}" => Ok(DateFormat { fields: vec![ Year(NumArguments(Arguments::empty().set_alignment(Alignment::Middle))) ]}));
        }

        mod alignment_fails {
            use super::*;

            test!(double_left:  "{<<:Y}" => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Left }));
            test!(double_right: "{>>:Y}" => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Right }));
            test!(left_right: "{<>:Y}"   => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Left }));
            test!(right_middle: "{>^:Y}" => Err(FormatError::DoubleAlignment { open_pos: 0, current_alignment: Alignment::Right }));
        }

        mod width {
            use super::*;

            test!(width_2: "{>2:D}"                 => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(2).set_alignment(Alignment::Right))) ] }));
            test!(width_10: "{>10:D}"               => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(10).set_alignment(Alignment::Right))) ] }));
            test!(width_10_other: "{10>:D}"         => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(10).set_alignment(Alignment::Right))) ] }));
            test!(width_123456789: "{>123456789:D}" => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_width(123456789).set_alignment(Alignment::Right))) ] }));
            test!(zero_padded: "{>02:D}"            => Ok(DateFormat { fields: vec![ Day(NumArguments(Arguments::empty().set_pad_char('0').set_width(2).set_alignment(Alignment::Right))) ] }));
            test!(double_width: "{2>3:D}"           => Err(FormatError::DoubleWidth { open_pos: 0, current_width: 2 }));
        }
    }

    mod format {
        use super::*;
        use crate::cal::datetime::DateTime;

        fn datetime() -> DateTime {
            "2021-09-04T18:07:03+05".parse().unwrap()
        }

        macro_rules! test {
            ($name: ident: $input: expr => $result: expr) => {
                #[test]
                fn $name() {
                    let format = DateFormat::parse($input).unwrap();
                    assert_eq!(format.format(&datetime()), $result)
                }
            };
        }

        test!(year: "{:Y}"                 => "2021");
        test!(year_of_century: "{:y}"      => "21");
        test!(short_month: "{:M}"          => "Sep");
        test!(long_month: "{_:M}"          => "September");
        test!(weekday: "{:E} {_:E}"        => "Sat Saturday");
        test!(padded_time: "{>02:h}:{>02:m}:{>02:s}" => "18:07:03");
        test!(unpadded_time: "{:h}:{:m}:{:s}"        => "18:7:3");
        test!(offset: "{:z}"               => "+05");
        test!(centred: "[{^9:M}]"          => "[   Sep   ]");
        test!(braces: "{{{:D}}}"           => "{4}");
    }
}
