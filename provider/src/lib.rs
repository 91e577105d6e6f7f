//! Data providers for time zone offsets
//!
//! This crate provides the [`TimeZoneProvider`](provider::TimeZoneProvider)
//! capability used by `calendar_date` to answer one question: what is the UTC
//! offset of a named time zone at a given instant.
//!
//! Three providers are available:
//!
//!   - [`FixedOffsetProvider`](fixed::FixedOffsetProvider): `UTC` and
//!     `±HH:MM` identifiers, no data required.
//!   - `CompiledTzdbProvider`: TZif data bundled by `jiff-tzdb` (feature `tzif`).
//!   - `FsTzdbProvider`: TZif files from a zoneinfo directory (feature `tzif`).
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

pub mod fixed;
pub mod provider;

#[doc(hidden)]
pub mod utils;

#[cfg(feature = "tzif")]
pub mod compiled;
#[cfg(feature = "tzif")]
pub mod fs;
#[cfg(feature = "tzif")]
pub mod tzif;

/// Seconds in a day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// The largest absolute epoch second any provider will resolve.
///
/// This is 10^8 days on either side of the Unix epoch.
pub const MAX_EPOCH_SECONDS: i64 = SECONDS_PER_DAY * 100_000_000;

/// The error type returned by time zone providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneProviderError {
    /// The identifier does not name a time zone this provider knows.
    UnknownIdentifier,
    /// The time zone data for an identifier was malformed or unsupported.
    Tzif(&'static str),
    /// The requested instant is outside of the supported range.
    InstantOutOfRange,
}

impl fmt::Display for TimeZoneProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIdentifier => f.write_str("unknown time zone identifier"),
            Self::Tzif(msg) => write!(f, "invalid TZif data: {msg}"),
            Self::InstantOutOfRange => f.write_str("instant is outside the supported range"),
        }
    }
}

impl core::error::Error for TimeZoneProviderError {}

/// Checks that epoch seconds are within [`MAX_EPOCH_SECONDS`].
#[inline]
pub(crate) fn check_epoch_seconds(epoch_seconds: i64) -> Result<(), TimeZoneProviderError> {
    if !(-MAX_EPOCH_SECONDS..=MAX_EPOCH_SECONDS).contains(&epoch_seconds) {
        return Err(TimeZoneProviderError::InstantOutOfRange);
    }
    Ok(())
}
