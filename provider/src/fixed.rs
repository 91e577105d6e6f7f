//! A provider for UTC and fixed UTC offset identifiers.

use alloc::{borrow::Cow, format};

use ixdtf::{parsers::TimeZoneParser, records::UtcOffsetRecord};

use crate::{
    check_epoch_seconds,
    provider::{TimeZoneProvider, UtcOffsetSeconds},
    TimeZoneProviderError,
};

const UTC_ALIASES: [&str; 5] = ["UTC", "Etc/UTC", "GMT", "Etc/GMT", "Z"];

/// A `TimeZoneProvider` that needs no time zone data.
///
/// It understands `UTC` (and the `Etc/UTC`, `GMT`, `Etc/GMT`, `Z` aliases, in any
/// case) plus fixed offsets in the RFC 9557 `±HH[:MM[:SS]]` forms, with or
/// without separators.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedOffsetProvider;

impl FixedOffsetProvider {
    /// Parses an identifier into its fixed UTC offset.
    pub fn parse_offset(identifier: &[u8]) -> Result<UtcOffsetSeconds, TimeZoneProviderError> {
        if UTC_ALIASES
            .iter()
            .any(|alias| alias.as_bytes().eq_ignore_ascii_case(identifier))
        {
            return Ok(UtcOffsetSeconds::UTC);
        }
        let record = TimeZoneParser::from_utf8(identifier)
            .parse_offset()
            .map_err(|_| TimeZoneProviderError::UnknownIdentifier)?;
        // Offsets resolve to whole seconds.
        if record.fraction().is_some() {
            return Err(TimeZoneProviderError::UnknownIdentifier);
        }
        Ok(UtcOffsetSeconds::from_ixdtf_record(record))
    }
}

impl UtcOffsetSeconds {
    fn from_ixdtf_record(record: UtcOffsetRecord) -> Self {
        let seconds = i64::from(record.hour()) * 3600
            + i64::from(record.minute()) * 60
            + i64::from(record.second().unwrap_or(0));
        Self(seconds * record.sign() as i64)
    }
}

impl TimeZoneProvider for FixedOffsetProvider {
    fn normalize_identifier<'a>(
        &self,
        ident: &'a [u8],
    ) -> Result<Cow<'a, str>, TimeZoneProviderError> {
        let offset = Self::parse_offset(ident)?;
        if offset == UtcOffsetSeconds::UTC && !matches!(ident.first(), Some(b'+' | b'-')) {
            return Ok(Cow::Borrowed("UTC"));
        }
        let sign = if offset.0 < 0 { '-' } else { '+' };
        let abs = offset.0.unsigned_abs();
        let (hours, minutes, seconds) = (abs / 3600, (abs % 3600) / 60, abs % 60);
        if seconds == 0 {
            return Ok(Cow::Owned(format!("{sign}{hours:02}:{minutes:02}")));
        }
        Ok(Cow::Owned(format!(
            "{sign}{hours:02}:{minutes:02}:{seconds:02}"
        )))
    }

    fn get_utc_offset(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> Result<UtcOffsetSeconds, TimeZoneProviderError> {
        check_epoch_seconds(epoch_seconds)?;
        Self::parse_offset(identifier.as_bytes())
    }
}
