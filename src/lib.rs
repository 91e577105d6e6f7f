//! The `calendar_date` crate implements a civil calendar date: a day with no
//! time of day and no time zone attached.
//!
//! ```rust
//! use calendar_date::Date;
//!
//! let due = Date::from_numeric(2024, 1, 31).unwrap();
//! assert_eq!(due.to_ymd_string(), "2024-01-31");
//!
//! // Month arithmetic spills into the following month.
//! assert_eq!(due.add_months(1).unwrap().to_ymd_string(), "2024-03-02");
//!
//! // Setting the day of the month does not.
//! assert!(Date::from_numeric(2024, 4, 30).unwrap().with_day_of_month(31).is_err());
//! ```
//!
//! A `Date` is stored as a day number counted from 1970-01-01 together with
//! its canonical `YYYY-MM-DD` string, so dates compare and step without any
//! time zone ambiguity. Time zones only matter when a date is derived from a
//! physical [`Instant`]; that lookup is delegated to a
//! [`TimeZoneProvider`](provider::TimeZoneProvider).
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;
pub mod parsers;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;
mod epoch_nanoseconds;
mod iso;

#[doc(inline)]
pub use error::{DateError, ErrorKind};

/// The `calendar_date` result type
pub type DateResult<T> = Result<T, DateError>;

pub mod provider {
    //! Time zone providers.
    //!
    //! Re-exported from `calendar_date_provider`.
    pub use calendar_date_provider::fixed::FixedOffsetProvider;
    pub use calendar_date_provider::provider::{TimeZoneProvider, UtcOffsetSeconds};
    pub use calendar_date_provider::TimeZoneProviderError;

    #[cfg(feature = "tzdb")]
    pub use calendar_date_provider::{compiled::CompiledTzdbProvider, fs::FsTzdbProvider};
}

pub mod time {
    //! Physical time values.
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::builtins::{count_days, max, min, Date, DateSeries, Instant};

#[cfg(feature = "sys")]
pub use crate::sys::SystemClock;

/// A library specific trait for unwrapping assertions.
pub(crate) trait DateUnwrap {
    type Output;

    /// `calendar_date` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn date_unwrap(self) -> DateResult<Self::Output>;
}

impl<T> DateUnwrap for Option<T> {
    type Output = T;

    fn date_unwrap(self) -> DateResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(DateError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! date_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DateError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DateError::assert());
        }
    };
}

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: i128 = MS_PER_DAY as i128 * 1_000_000;
