//! A provider that reads TZif files from a zoneinfo directory.

use std::path::{Component, Path, PathBuf};

use alloc::{borrow::Cow, collections::BTreeMap, string::String};
use core::cell::RefCell;

use crate::{
    check_epoch_seconds,
    provider::{TimeZoneProvider, UtcOffsetSeconds},
    tzif::Tzif,
    TimeZoneProviderError,
};

const UNIX_ZONEINFO_DIR: &str = "/usr/share/zoneinfo/";

/// A `TimeZoneProvider` backed by the host's compiled zoneinfo files.
///
/// Identifiers are relative paths below the zoneinfo directory, so lookups
/// are case-sensitive on case-sensitive file systems.
#[derive(Debug)]
pub struct FsTzdbProvider {
    path: PathBuf,
    cache: RefCell<BTreeMap<String, Tzif>>,
}

impl Default for FsTzdbProvider {
    fn default() -> Self {
        Self::new(PathBuf::from(UNIX_ZONEINFO_DIR))
    }
}

impl FsTzdbProvider {
    /// Creates a provider reading from the zoneinfo directory at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: RefCell::default(),
        }
    }

    /// Returns the path of the TZif file for `identifier`.
    ///
    /// Identifiers that are empty, absolute, or that contain anything other
    /// than plain path segments are rejected so lookups stay inside the
    /// zoneinfo directory.
    fn tzif_path(&self, identifier: &str) -> Result<PathBuf, TimeZoneProviderError> {
        let relative = Path::new(identifier);
        let is_plain = !identifier.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !is_plain {
            #[cfg(feature = "log")]
            log::warn!("rejecting time zone identifier {identifier:?}");
            return Err(TimeZoneProviderError::UnknownIdentifier);
        }
        let path = self.path.join(relative);
        if !path.is_file() {
            return Err(TimeZoneProviderError::UnknownIdentifier);
        }
        Ok(path)
    }

    fn with_tzif<T>(
        &self,
        identifier: &str,
        f: impl FnOnce(&Tzif) -> Result<T, TimeZoneProviderError>,
    ) -> Result<T, TimeZoneProviderError> {
        if let Some(tzif) = self.cache.borrow().get(identifier) {
            return f(tzif);
        }
        let path = self.tzif_path(identifier)?;

        #[cfg(feature = "log")]
        log::debug!("loading TZif file {}", path.display());

        let tzif = Tzif::from_path(&path)?;
        let result = f(&tzif);
        self.cache.borrow_mut().insert(identifier.into(), tzif);
        result
    }
}

impl TimeZoneProvider for FsTzdbProvider {
    fn normalize_identifier<'a>(
        &self,
        ident: &'a [u8],
    ) -> Result<Cow<'a, str>, TimeZoneProviderError> {
        let ident =
            core::str::from_utf8(ident).map_err(|_| TimeZoneProviderError::UnknownIdentifier)?;
        if self.cache.borrow().contains_key(ident) {
            return Ok(Cow::Borrowed(ident));
        }
        self.tzif_path(ident).map(|_| Cow::Borrowed(ident))
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
