//! The `TimeZoneProvider` trait.

use alloc::borrow::Cow;

use crate::TimeZoneProviderError;

/// `UtcOffsetSeconds` represents the amount of seconds we need to add to the UTC to reach the local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcOffsetSeconds(pub i64);

impl UtcOffsetSeconds {
    /// The UTC offset, zero seconds.
    pub const UTC: Self = Self(0);

    /// Returns the local epoch seconds for the given UTC epoch seconds.
    #[inline]
    #[must_use]
    pub const fn to_local_seconds(self, epoch_seconds: i64) -> i64 {
        epoch_seconds + self.0
    }
}

/// The `TimeZoneProvider` trait provides the methods a provider must
/// implement in order to resolve civil dates for named time zones.
///
/// Identifiers are opaque to callers; a provider decides which
/// identifiers it understands.
pub trait TimeZoneProvider {
    /// Returns the normalized form of `ident`, or an error if the
    /// provider does not know the identifier.
    fn normalize_identifier<'a>(
        &self,
        ident: &'a [u8],
    ) -> Result<Cow<'a, str>, TimeZoneProviderError>;

    /// Returns the UTC offset in effect for `identifier` at `epoch_seconds`.
    fn get_utc_offset(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> Result<UtcOffsetSeconds, TimeZoneProviderError>;

    /// Returns whether the provider knows `identifier`.
    fn check_identifier(&self, identifier: &str) -> bool {
        self.normalize_identifier(identifier.as_bytes()).is_ok()
    }
}

impl<T: TimeZoneProvider + ?Sized> TimeZoneProvider for &T {
    fn normalize_identifier<'a>(
        &self,
        ident: &'a [u8],
    ) -> Result<Cow<'a, str>, TimeZoneProviderError> {
        (**self).normalize_identifier(ident)
    }

    fn get_utc_offset(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> Result<UtcOffsetSeconds, TimeZoneProviderError> {
        (**self).get_utc_offset(identifier, epoch_seconds)
    }
}
