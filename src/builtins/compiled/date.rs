use crate::{builtins::TZ_PROVIDER, Date, DateError, DateResult, Instant};

impl Date {
    /// Resolves the civil date of `instant` in the time zone `time_zone`.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn from_instant(instant: &Instant, time_zone: &str) -> DateResult<Self> {
        let provider = TZ_PROVIDER
            .lock()
            .map_err(|_| DateError::general("Unable to acquire lock"))?;
        Self::from_instant_with_provider(instant, time_zone, &*provider)
    }

    /// Returns the current date in `time_zone`.
    ///
    /// Enable with the `compiled_data` and `sys` feature flags.
    #[cfg(feature = "sys")]
    pub fn today(time_zone: &str) -> DateResult<Self> {
        let provider = TZ_PROVIDER
            .lock()
            .map_err(|_| DateError::general("Unable to acquire lock"))?;
        Self::today_with_provider(time_zone, &*provider, &crate::SystemClock)
    }

    /// Returns the current date in the host's time zone.
    ///
    /// Enable with the `compiled_data` and `sys` feature flags.
    #[cfg(feature = "sys")]
    pub fn today_in_system_time_zone() -> DateResult<Self> {
        let time_zone = crate::sys::get_system_timezone()?;
        Self::today(&time_zone)
    }
}
