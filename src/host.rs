//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use crate::{time::EpochNanoseconds, DateResult};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds>;
}

impl<T: HostClock + ?Sized> HostClock for &T {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        (**self).get_host_epoch_nanoseconds()
    }
}

// Implement empty providers

/// The unit clock is stopped at the Unix epoch.
impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        Ok(EpochNanoseconds::default())
    }
}
