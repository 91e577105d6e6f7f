//! UTC offset resolution from TZif data.
//!
//! `TZif` stands for Time zone information format and is laid out by
//! [RFC 8536][rfc8536] and the [tzdata manual][tzif-manual]. Parsing is
//! done by the `tzif` [crate][tzif-crate]; this module only answers which
//! offset is in effect at a given UTC instant.
//!
//! [rfc8536]: https://datatracker.ietf.org/doc/html/rfc8536
//! [tzif-manual]: https://man7.org/linux/man-pages/man5/tzfile.5.html
//! [tzif-crate]: https://docs.rs/tzif/latest/tzif/

use std::path::Path;

use combine::Parser;

use tzif::data::{
    posix::{PosixTzString, TransitionDate, TransitionDay},
    time::Seconds,
    tzif::{DataBlock, TzifData},
};

use crate::{provider::UtcOffsetSeconds, utils, TimeZoneProviderError, SECONDS_PER_DAY};

/// The parts of a parsed TZif file needed for offset lookups.
///
/// Only version 2+ data blocks are used; the version 1 block holds 32-bit
/// transition times which the v2 block supersedes.
#[derive(Debug, Clone)]
pub struct Tzif {
    data_block2: Option<DataBlock>,
    footer: Option<PosixTzString>,
}

impl From<TzifData> for Tzif {
    fn from(value: TzifData) -> Self {
        let TzifData {
            data_block2,
            footer,
            ..
        } = value;
        Self {
            data_block2,
            footer,
        }
    }
}

impl Tzif {
    /// Parses TZif data from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TimeZoneProviderError> {
        let Ok((parse_result, _)) = tzif::parse::tzif::tzif().parse(data) else {
            return Err(TimeZoneProviderError::Tzif("ill-formed TZif data"));
        };
        Ok(Self::from(parse_result))
    }

    /// Reads and parses a TZif file.
    pub fn from_path(path: &Path) -> Result<Self, TimeZoneProviderError> {
        tzif::parse_tzif_file(path)
            .map(Into::into)
            .map_err(|_| TimeZoneProviderError::Tzif("unable to read TZif file"))
    }

    pub fn posix_tz_string(&self) -> Option<&PosixTzString> {
        self.footer.as_ref()
    }

    fn data_block2(&self) -> Result<&DataBlock, TimeZoneProviderError> {
        self.data_block2
            .as_ref()
            .ok_or(TimeZoneProviderError::Tzif("only TZif v2+ is supported"))
    }

    /// Returns the UTC offset in effect at `epoch_seconds`.
    pub fn get(&self, epoch_seconds: i64) -> Result<UtcOffsetSeconds, TimeZoneProviderError> {
        let db = self.data_block2()?;

        match db.transition_times.binary_search(&Seconds(epoch_seconds)) {
            // A transition takes effect at its own instant.
            Ok(idx) => offset_after_transition(db, idx),
            // <https://datatracker.ietf.org/doc/html/rfc8536#section-3.2>
            // If there are no transitions, local time for all timestamps is specified by the TZ
            // string in the footer if present and nonempty; otherwise, it is
            // specified by time type 0.
            Err(_) if db.transition_times.is_empty() => match self.posix_tz_string() {
                Some(posix_tz_string) => Ok(resolve_posix_tz_string_for_epoch_seconds(
                    posix_tz_string,
                    epoch_seconds,
                )),
                None => first_local_time_type(db),
            },
            // Timestamps before the first transition use time type 0.
            Err(0) => first_local_time_type(db),
            Err(idx) if idx >= db.transition_times.len() => {
                // The instant is beyond the last transition, so the time zone
                // is resolved with the POSIX tz string if there is one.
                match self.posix_tz_string() {
                    Some(posix_tz_string) => Ok(resolve_posix_tz_string_for_epoch_seconds(
                        posix_tz_string,
                        epoch_seconds,
                    )),
                    None => offset_after_transition(db, idx - 1),
                }
            }
            Err(idx) => offset_after_transition(db, idx - 1),
        }
    }
}

#[inline]
fn offset_after_transition(
    db: &DataBlock,
    idx: usize,
) -> Result<UtcOffsetSeconds, TimeZoneProviderError> {
    // NOTE: Transition type can be empty. If no transition_type exists,
    // then use 0 as the default index of local_time_type_records.
    let type_idx = db.transition_types.get(idx).copied().unwrap_or(0);
    db.local_time_type_records
        .get(type_idx)
        .map(|record| UtcOffsetSeconds(record.utoff.0))
        .ok_or(TimeZoneProviderError::Tzif("transition type out of bounds"))
}

#[inline]
fn first_local_time_type(db: &DataBlock) -> Result<UtcOffsetSeconds, TimeZoneProviderError> {
    db.local_time_type_records
        .first()
        .map(|record| UtcOffsetSeconds(record.utoff.0))
        .ok_or(TimeZoneProviderError::Tzif("no local time types"))
}

/// Resolve the footer of a TZif file for UTC epoch seconds.
///
/// POSIX offsets are "seconds to add to reach UTC", so they are negated.
fn resolve_posix_tz_string_for_epoch_seconds(
    posix_tz_string: &PosixTzString,
    seconds: i64,
) -> UtcOffsetSeconds {
    let std_offset = UtcOffsetSeconds(-posix_tz_string.std_info.offset.0);
    let Some(dst_variant) = &posix_tz_string.dst_info else {
        // Regardless of the time, there is one variant and we can return it.
        return std_offset;
    };
    let dst_offset = UtcOffsetSeconds(-dst_variant.variant_info.offset.0);

    // Rules are evaluated for the year in local standard time.
    let local_days = utils::epoch_seconds_to_epoch_days(std_offset.to_local_seconds(seconds));
    let (year, _, _) = utils::ymd_from_epoch_days(local_days as i32);

    // The start is written in standard time and the end in daylight time.
    let dst_start = transition_seconds_for_year(year, &dst_variant.start_date, std_offset);
    let dst_end = transition_seconds_for_year(year, &dst_variant.end_date, dst_offset);

    let in_dst = if dst_start <= dst_end {
        dst_start <= seconds && seconds < dst_end
    } else {
        // Southern hemisphere: DST spans the new year.
        seconds < dst_end || dst_start <= seconds
    };

    if in_dst {
        dst_offset
    } else {
        std_offset
    }
}

/// Returns the UTC epoch seconds at which `transition_date` occurs in `year`.
fn transition_seconds_for_year(
    year: i32,
    transition_date: &TransitionDate,
    offset: UtcOffsetSeconds,
) -> i64 {
    let year_epoch_days = utils::epoch_days_for_year(year);
    let is_leap = utils::is_leap(year);

    // Zero-based day of the year of the transition.
    let days = match transition_date.day {
        // Jn: 1..=365, February 29th is never counted.
        TransitionDay::NoLeap(day) if day > 59 && is_leap => i64::from(day),
        TransitionDay::NoLeap(day) => i64::from(day) - 1,
        // n: 0..=365, February 29th is counted.
        TransitionDay::WithLeap(day) => i64::from(day),
        // Mm.w.d: day d (0 = Sunday) of week w (5 = last) of month m.
        TransitionDay::Mwd(month, week, day) => {
            let month = month.clamp(1, 12) as u8;
            let days_to_month = i64::from(utils::days_before_month(month, is_leap));
            let days_in_month = i64::from(utils::iso_days_in_month(year, month));
            let first_weekday =
                i64::from(utils::epoch_days_to_day_of_week(year_epoch_days + days_to_month));
            let mut day_of_month =
                (i64::from(day) - first_weekday).rem_euclid(7) + (i64::from(week) - 1) * 7;
            // Week 5 means the last such weekday, which may be the fourth.
            while day_of_month >= days_in_month {
                day_of_month -= 7;
            }
            days_to_month + day_of_month
        }
    };

    // Transition time is in local time, so the offset is removed to reach UTC.
    (year_epoch_days + days) * SECONDS_PER_DAY + transition_date.time.0 - offset.0
}
