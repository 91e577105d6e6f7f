//! Calendar math on ISO year/month/day triples.
//!
//! Everything here works on epoch days, the signed count of days since
//! 1970-01-01. Validation happens by comparing a balanced result against the
//! fields it was built from; no month-length checks are hand coded.

use calendar_date_provider::utils;

use crate::{DateError, DateResult};

/// The earliest supported year.
pub(crate) const MIN_ISO_YEAR: i32 = -271_821;
/// The latest supported year.
pub(crate) const MAX_ISO_YEAR: i32 = 275_760;

/// Epoch days of `-271821-01-01`.
pub(crate) const MIN_EPOCH_DAYS: i32 =
    utils::epoch_days_from_gregorian_date(MIN_ISO_YEAR, 1, 1) as i32;
/// Epoch days of `+275760-12-31`.
pub(crate) const MAX_EPOCH_DAYS: i32 =
    utils::epoch_days_from_gregorian_date(MAX_ISO_YEAR, 12, 31) as i32;

/// An ISO 8601 calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Resolves the date for a count of epoch days.
    pub(crate) const fn from_epoch_days(epoch_days: i32) -> Self {
        let (year, month, day) = utils::ymd_from_epoch_days(epoch_days);
        Self::new_unchecked(year, month, day)
    }

    pub(crate) const fn is_leap_year(self) -> bool {
        utils::is_leap(self.year)
    }

    pub(crate) const fn days_in_month(self) -> u8 {
        utils::iso_days_in_month(self.year, self.month)
    }
}

/// Balances a year, a month and a day into epoch days.
///
/// `month` is 1-based but may lie outside 1..=12, rolling the year over.
/// `day` is added to the first of the balanced month, so out of range days
/// spill into neighbouring months instead of failing.
pub(crate) fn balance(year: i64, month: i64, day: i64) -> DateResult<i32> {
    let months = year
        .checked_mul(12)
        .and_then(|m| m.checked_add(month))
        .and_then(|m| m.checked_sub(1))
        .ok_or_else(out_of_range)?;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) + 1;
    if !(i64::from(MIN_ISO_YEAR)..=i64::from(MAX_ISO_YEAR)).contains(&year) {
        return Err(out_of_range());
    }
    let first = utils::epoch_days_from_gregorian_date(year as i32, month as u8, 1);
    let epoch_days = day
        .checked_sub(1)
        .and_then(|offset| first.checked_add(offset))
        .ok_or_else(out_of_range)?;
    check_epoch_days(epoch_days)
}

/// Checks that `epoch_days` falls within the supported years.
pub(crate) fn check_epoch_days(epoch_days: i64) -> DateResult<i32> {
    if !(i64::from(MIN_EPOCH_DAYS)..=i64::from(MAX_EPOCH_DAYS)).contains(&epoch_days) {
        return Err(out_of_range());
    }
    Ok(epoch_days as i32)
}

fn out_of_range() -> DateError {
    DateError::invalid_input().with_message("Date is outside the supported range.")
}

#[cfg(test)]
mod tests {
    use super::{balance, check_epoch_days, IsoDate, MAX_EPOCH_DAYS, MIN_EPOCH_DAYS};
    use calendar_date_provider::utils;
    use crate::ErrorKind;

    #[test]
    fn range_constants() {
        assert_eq!(
            IsoDate::from_epoch_days(MIN_EPOCH_DAYS),
            IsoDate::new_unchecked(-271_821, 1, 1)
        );
        assert_eq!(
            IsoDate::from_epoch_days(MAX_EPOCH_DAYS),
            IsoDate::new_unchecked(275_760, 12, 31)
        );
        // 275760-09-13 is exactly 10^8 days after the epoch.
        assert_eq!(
            utils::epoch_days_from_gregorian_date(275_760, 9, 13),
            100_000_000
        );
    }

    #[test]
    fn balance_rolls_months_and_days() {
        assert_eq!(balance(2024, 1, 1).unwrap(), 19_723);
        // Month 13 is January of the next year.
        assert_eq!(balance(2023, 13, 1).unwrap(), 19_723);
        // Month 0 is December of the previous year.
        assert_eq!(
            IsoDate::from_epoch_days(balance(2024, 0, 15).unwrap()),
            IsoDate::new_unchecked(2023, 12, 15)
        );
        // February 31st spills into March.
        assert_eq!(
            IsoDate::from_epoch_days(balance(2024, 2, 31).unwrap()),
            IsoDate::new_unchecked(2024, 3, 2)
        );
        // Day 0 is the last day of the previous month.
        assert_eq!(
            IsoDate::from_epoch_days(balance(2024, 3, 0).unwrap()),
            IsoDate::new_unchecked(2024, 2, 29)
        );
    }

    #[test]
    fn balance_rejects_out_of_range() {
        let err = balance(275_761, 1, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(balance(275_760, 12, 32).is_err());
        assert!(balance(-271_821, 1, 0).is_err());
        assert!(balance(i64::MAX, 1, 1).is_err());
        assert!(balance(2024, i64::MIN, 1).is_err());
        assert!(balance(2024, 1, i64::MIN).is_err());
    }

    #[test]
    fn epoch_day_limits() {
        assert!(check_epoch_days(i64::from(MAX_EPOCH_DAYS)).is_ok());
        assert!(check_epoch_days(i64::from(MAX_EPOCH_DAYS) + 1).is_err());
        assert!(check_epoch_days(i64::from(MIN_EPOCH_DAYS)).is_ok());
        assert!(check_epoch_days(i64::from(MIN_EPOCH_DAYS) - 1).is_err());
    }

    #[test]
    fn month_lengths() {
        assert_eq!(IsoDate::new_unchecked(2024, 2, 1).days_in_month(), 29);
        assert_eq!(IsoDate::new_unchecked(2023, 2, 1).days_in_month(), 28);
        assert_eq!(IsoDate::new_unchecked(2023, 4, 1).days_in_month(), 30);
        assert!(IsoDate::new_unchecked(2000, 1, 1).is_leap_year());
        assert!(!IsoDate::new_unchecked(1900, 1, 1).is_leap_year());
    }
}
