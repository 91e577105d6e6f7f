//! A provider backed by the TZif data bundled in `jiff-tzdb`.

use alloc::{borrow::Cow, collections::BTreeMap, string::String};
use core::cell::RefCell;

use crate::{
    check_epoch_seconds,
    provider::{TimeZoneProvider, UtcOffsetSeconds},
    tzif::Tzif,
    TimeZoneProviderError,
};

/// A `TimeZoneProvider` that resolves identifiers against the IANA time
/// zone database compiled into the binary by `jiff-tzdb`.
///
/// Parsed TZif data is cached per canonical identifier.
#[derive(Debug, Default)]
pub struct CompiledTzdbProvider {
    cache: RefCell<BTreeMap<String, Tzif>>,
}

impl CompiledTzdbProvider {
    /// Returns the canonical identifier and raw TZif bytes for `identifier`.
    fn lookup(identifier: &str) -> Result<(&'static str, &'static [u8]), TimeZoneProviderError> {
        jiff_tzdb::get(identifier).ok_or(TimeZoneProviderError::UnknownIdentifier)
    }

    fn with_tzif<T>(
        &self,
        identifier: &str,
        f: impl FnOnce(&Tzif) -> Result<T, TimeZoneProviderError>,
    ) -> Result<T, TimeZoneProviderError> {
        let (canonical, data) = Self::lookup(identifier)?;
        if let Some(tzif) = self.cache.borrow().get(canonical) {
            return f(tzif);
        }

        #[cfg(feature = "log")]
        log::debug!("loading bundled TZif data for {canonical}");

        let tzif = Tzif::from_bytes(data)?;
        let result = f(&tzif);
        self.cache.borrow_mut().insert(canonical.into(), tzif);
        result
    }
}

impl TimeZoneProvider for CompiledTzdbProvider {
    fn normalize_identifier<'a>(
        &self,
        ident: &'a [u8],
    ) -> Result<Cow<'a, str>, TimeZoneProviderError> {
        let ident =
            core::str::from_utf8(ident).map_err(|_| TimeZoneProviderError::UnknownIdentifier)?;
        Self::lookup(ident).map(|(canonical, _)| Cow::Borrowed(canonical))
    }

    fn get_utc_offset(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> Result<UtcOffsetSeconds, TimeZoneProviderError> {
        check_epoch_seconds(epoch_seconds)?;
        self.with_tzif(identifier, |tzif| tzif.get(epoch_seconds))
    }
}
