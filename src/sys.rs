#[cfg(feature = "compiled_data")]
use alloc::string::String;

use web_time::{SystemTime, UNIX_EPOCH};

use crate::host::HostClock;
use crate::time::EpochNanoseconds;
use crate::{DateError, DateResult};

/// A host clock that reads the current time from the operating system.
///
/// This implementation is backed by [`web_time::SystemTime`], which is
/// [`std::time::SystemTime`] outside of wasm.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

/// Returns the IANA identifier of the host's time zone.
#[cfg(feature = "compiled_data")]
#[inline]
pub(crate) fn get_system_timezone() -> DateResult<String> {
    iana_time_zone::get_timezone()
        .map_err(|_| DateError::general("Error fetching system time zone"))
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> DateResult<EpochNanoseconds> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| DateError::general("Error fetching system time"))
        .and_then(|d| EpochNanoseconds::try_from(d.as_nanos() as i128))
}
