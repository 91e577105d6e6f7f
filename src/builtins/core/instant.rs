//! An implementation of a physical point in time.

use crate::{host::HostClock, time::EpochNanoseconds, DateError, DateResult};

/// A physical point in time, stored as nanoseconds since the Unix epoch.
///
/// An `Instant` is limited to 10^8 days on either side of
/// `1970-01-01T00:00:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(EpochNanoseconds);

impl From<EpochNanoseconds> for Instant {
    fn from(value: EpochNanoseconds) -> Self {
        Self(value)
    }
}

impl Instant {
    /// Create a new validated `Instant`.
    #[inline]
    pub fn try_new(nanoseconds: i128) -> DateResult<Self> {
        Ok(Self::from(EpochNanoseconds::try_from(nanoseconds)?))
    }

    /// Creates a new `Instant` from the provided Epoch Millisecond value.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> DateResult<Self> {
        let epoch_nanos = i128::from(epoch_milliseconds)
            .checked_mul(1_000_000)
            .ok_or_else(|| {
                DateError::invalid_input().with_message("Instant is outside the valid range.")
            })?;
        Self::try_new(epoch_nanos)
    }

    /// Reads the current `Instant` from a `HostClock`.
    pub fn from_clock(clock: &impl HostClock) -> DateResult<Self> {
        clock.get_host_epoch_nanoseconds().map(Self::from)
    }

    /// Returns the current system `Instant`.
    #[cfg(feature = "sys")]
    pub fn now() -> DateResult<Self> {
        Self::from_clock(&crate::SystemClock)
    }
}

// ==== Instant accessor methods ====

impl Instant {
    /// Returns the `epochMilliseconds` value for this `Instant`.
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        self.0.epoch_milliseconds()
    }

    /// Returns the whole seconds since the epoch, floored.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.0.epoch_seconds()
    }

    /// Returns the `epochNanoseconds` value for this `Instant`.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> &EpochNanoseconds {
        &self.0
    }
}

#[cfg(feature = "sys")]
impl TryFrom<web_time::SystemTime> for Instant {
    type Error = DateError;

    fn try_from(value: web_time::SystemTime) -> Result<Self, Self::Error> {
        let nanos = match value.duration_since(web_time::UNIX_EPOCH) {
            Ok(after) => after.as_nanos() as i128,
            Err(before) => -(before.duration().as_nanos() as i128),
        };
        Self::try_new(nanos)
    }
}
