//! Parsing and formatting of `YYYY-MM-DD` date strings.

use ixdtf::{parsers::IxdtfParser, ParseError};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{iso::IsoDate, DateError, DateResult};

/// Parses the date fields of an ISO 8601 date string.
///
/// Only the syntax is checked here; callers are expected to rebuild the date
/// and compare its canonical form against the source.
pub(crate) fn parse_ymd(source: &str) -> DateResult<IsoDate> {
    let record = IxdtfParser::from_utf8(source.as_bytes())
        .parse()
        .map_err(map_parse_error)?;

    if record.time.is_some() || record.offset.is_some() || record.tz.is_some() {
        return Err(DateError::invalid_input()
            .with_message("Date strings may not carry a time or a time zone."));
    }

    let date = record
        .date
        .ok_or_else(|| DateError::invalid_input().with_message("Missing date fields."))?;

    Ok(IsoDate::new_unchecked(date.year, date.month, date.day))
}

/// Maps an `ixdtf` `ParseError` to an invalid input `DateError`.
fn map_parse_error(err: ParseError) -> DateError {
    let message = match err {
        ParseError::InvalidMonthRange => "Month is outside valid range (1-12).",
        ParseError::InvalidDayRange => "Day is outside valid range for the given month/year.",
        ParseError::DateYear => "Invalid year format.",
        ParseError::DateMonth => "Invalid month format.",
        ParseError::DateDay => "Invalid day format.",
        ParseError::InvalidEnd => "Unexpected character at end of input.",
        _ => "Invalid date string.",
    };
    DateError::invalid_input().with_message(message)
}

/// A `Writeable` canonical date: `YYYY-MM-DD`, or `±YYYYYY-MM-DD` for years
/// outside 0..=9999.
#[derive(Debug, Clone, Copy)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.0) { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

impl_display_with_writeable!(FormattableDate);

impl From<IsoDate> for FormattableDate {
    fn from(value: IsoDate) -> Self {
        Self(value.year, value.month, value.day)
    }
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_four_digit_year(year, sink)
    } else {
        write_extended_year(year, sink)
    }
}

fn write_four_digit_year<W: core::fmt::Write + ?Sized>(
    mut y: i32,
    sink: &mut W,
) -> core::fmt::Result {
    (y / 1_000).write_to(sink)?;
    y %= 1_000;
    (y / 100).write_to(sink)?;
    y %= 100;
    (y / 10).write_to(sink)?;
    y %= 10;
    y.write_to(sink)
}

fn write_extended_year<W: core::fmt::Write + ?Sized>(y: i32, sink: &mut W) -> core::fmt::Result {
    let sign = if y < 0 { '-' } else { '+' };
    sink.write_char(sign)?;
    let abs = y.unsigned_abs();
    let mut place = 100_000;
    while place > 1 && abs < place {
        sink.write_char('0')?;
        place /= 10;
    }
    abs.write_to(sink)
}

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}
