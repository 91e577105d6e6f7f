use crate::{DateError, DateResult, NS_PER_DAY};

/// Max epoch nanosecond constant: 10^8 days after the epoch.
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY * 100_000_000i128;
/// Min epoch nanosecond constant: 10^8 days before the epoch.
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;

/// Nanoseconds since the Unix epoch, `1970-01-01T00:00:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochNanoseconds(pub(crate) i128);

impl TryFrom<i128> for EpochNanoseconds {
    type Error = DateError;
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        let nanos = Self(value);
        nanos.check_validity()?;
        Ok(nanos)
    }
}

impl EpochNanoseconds {
    pub fn as_i128(&self) -> i128 {
        self.0
    }

    /// Returns the whole epoch seconds, rounded towards negative infinity.
    pub fn epoch_seconds(&self) -> i64 {
        // NOTE: cast is safe as validity bounds the value well within i64.
        self.0.div_euclid(1_000_000_000) as i64
    }

    /// Returns the whole epoch milliseconds, rounded towards negative infinity.
    pub fn epoch_milliseconds(&self) -> i64 {
        self.0.div_euclid(1_000_000) as i64
    }

    pub fn check_validity(&self) -> DateResult<()> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(
                DateError::invalid_input().with_message("Instant is outside the valid range.")
            );
        }
        Ok(())
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (NS_MIN_INSTANT..=NS_MAX_INSTANT).contains(nanos)
}
