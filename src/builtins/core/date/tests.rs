use alloc::{string::ToString, vec::Vec};

use super::{count_days, max, min, Date};
use crate::{
    host::HostClock, provider::FixedOffsetProvider, time::EpochNanoseconds, DateResult,
    ErrorKind, Instant, MS_PER_DAY,
};

fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_numeric(year, month, day).unwrap()
}

fn ymd(source: &str) -> Date {
    Date::from_ymd(source).unwrap()
}

#[test]
fn epoch_is_day_zero() {
    let epoch = date(1970, 1, 1);
    assert_eq!(epoch.epoch_days(), 0);
    assert_eq!(epoch.epoch_milliseconds(), 0);
    assert_eq!(epoch.as_str(), "1970-01-01");
    assert_eq!(date(1969, 12, 31).epoch_days(), -1);
    assert_eq!(date(2024, 3, 15).epoch_days(), 19_797);
}

#[test]
fn from_epoch_milliseconds() {
    for n in [-1_000_000, -1, 0, 1, 19_797, 2_000_000] {
        let date = Date::from_epoch_milliseconds(MS_PER_DAY * n).unwrap();
        assert_eq!(i64::from(date.epoch_days()), n);
        assert_eq!(date.epoch_milliseconds(), MS_PER_DAY * n);
    }
    for ms in [1, -1, MS_PER_DAY / 2, MS_PER_DAY * 10 + 999] {
        let err = Date::from_epoch_milliseconds(ms).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{ms}");
    }
}

#[test]
fn from_epoch_days_range() {
    assert_eq!(
        Date::from_epoch_days(100_000_000).unwrap().as_str(),
        "+275760-09-13"
    );
    assert_eq!(
        Date::from_epoch_days(-100_000_000).unwrap().as_str(),
        "-271821-04-20"
    );
    assert!(Date::from_epoch_days(i64::from(i32::MAX)).is_err());
    assert!(Date::from_epoch_days(i64::MIN).is_err());
}

#[test]
fn from_numeric_round_trips_components() {
    let d = date(2024, 2, 29);
    assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
    assert_eq!(d.to_ymd_string(), "2024-02-29");
}

#[test]
fn from_numeric_rejects_invalid_components() {
    for (year, month, day) in [
        (2024, 13, 1),
        (2024, 0, 1),
        (2024, 1, 0),
        (2024, 1, 32),
        (2023, 2, 29),
        (2024, 4, 31),
        (275_761, 1, 1),
        (-271_822, 12, 31),
    ] {
        let err = Date::from_numeric(year, month, day).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::InvalidInput,
            "{year}-{month}-{day}"
        );
    }
}

#[test]
fn from_ymd_requires_canonical_strings() {
    assert_eq!(ymd("2024-03-15"), date(2024, 3, 15));
    assert_eq!(ymd("0000-01-01").year(), 0);
    assert_eq!(ymd("-000044-03-15").year(), -44);
    assert_eq!(ymd("+010000-01-01").year(), 10_000);

    for source in [
        "2024-02-30",
        "2023-02-29",
        "2024-3-15",
        "20240315",
        "2024-03-15T00:00",
        "2024-03-15Z",
        "+002024-03-15",
        " 2024-03-15",
        "2024-03-15 ",
        "",
    ] {
        let err = Date::from_ymd(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{source:?}");
    }
}

#[test]
fn string_round_trip() {
    for (year, month, day) in [
        (1970, 1, 1),
        (2024, 2, 29),
        (1, 1, 1),
        (9999, 12, 31),
        (-1, 6, 30),
        (275_760, 12, 31),
        (-271_821, 1, 1),
    ] {
        let original = date(year, month, day);
        let parsed = Date::from_ymd(&original.to_ymd_string()).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.as_str(), original.as_str());
    }
}

#[test]
fn from_str_and_display() {
    let parsed: Date = "2024-03-15".parse().unwrap();
    assert_eq!(parsed.to_string(), "2024-03-15");
    assert_eq!(Date::try_from("2024-03-15").unwrap(), parsed);
    assert_eq!(alloc::format!("{parsed:?}"), "Date(\"2024-03-15\")");
    assert!("2024-3-15".parse::<Date>().is_err());
}

#[test]
fn add_days_round_trip() {
    let start = date(2024, 3, 15);
    for n in [-1_000_000, -366, -1, 0, 1, 29, 365, 1_000_000] {
        let moved = start.add_days(n).unwrap();
        assert!(moved.add_days(-n).unwrap().is_same(&start), "{n}");
        assert_eq!(i64::from(moved.epoch_days() - start.epoch_days()), n);
    }
    assert_eq!(date(2024, 2, 28).add_days(1).unwrap().as_str(), "2024-02-29");
    assert_eq!(date(2023, 12, 31).tomorrow().unwrap().as_str(), "2024-01-01");
    assert_eq!(date(2024, 1, 1).yesterday().unwrap().as_str(), "2023-12-31");
}

#[test]
fn add_days_out_of_range() {
    let last = date(275_760, 12, 31);
    assert_eq!(last.add_days(1).unwrap_err().kind(), ErrorKind::InvalidInput);
    assert!(last.add_days(i64::MAX).is_err());
    assert!(date(-271_821, 1, 1).yesterday().is_err());
}

#[test]
fn add_months_spills_forward() {
    assert_eq!(date(2024, 1, 31).add_months(1).unwrap().as_str(), "2024-03-02");
    assert_eq!(date(2023, 1, 31).add_months(1).unwrap().as_str(), "2023-03-03");
    assert_eq!(date(2024, 3, 31).add_months(1).unwrap().as_str(), "2024-05-01");
    assert_eq!(date(2024, 1, 15).add_months(1).unwrap().as_str(), "2024-02-15");
}

#[test]
fn add_months_rolls_years() {
    assert_eq!(date(2024, 11, 15).add_months(3).unwrap().as_str(), "2025-02-15");
    assert_eq!(date(2024, 1, 15).add_months(-1).unwrap().as_str(), "2023-12-15");
    assert_eq!(date(2024, 1, 15).add_months(-25).unwrap().as_str(), "2021-12-15");
    assert_eq!(date(2024, 2, 29).add_months(12).unwrap().as_str(), "2025-03-01");
    assert_eq!(date(2024, 5, 5).add_months(0).unwrap(), date(2024, 5, 5));
    assert!(date(275_760, 12, 1).add_months(1).is_err());
    assert!(date(2024, 1, 1).add_months(i64::MAX).is_err());
}

#[test]
fn with_day_of_month_is_strict() {
    let april = date(2024, 4, 30);
    assert_eq!(april.with_day_of_month(1).unwrap().as_str(), "2024-04-01");
    assert_eq!(april.with_day_of_month(15).unwrap().as_str(), "2024-04-15");
    assert_eq!(
        april.with_day_of_month(31).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
    assert!(date(2024, 2, 10).with_day_of_month(30).is_err());
    assert!(date(2024, 2, 10).with_day_of_month(0).is_err());
    assert_eq!(
        date(2024, 2, 10).with_day_of_month(29).unwrap().as_str(),
        "2024-02-29"
    );
    assert!(date(2023, 2, 10).with_day_of_month(29).is_err());
    // 2024-01-31 has a 31st, April does not.
    assert!(date(2024, 1, 31).with_day_of_month(31).is_ok());
}

#[test]
fn month_boundaries() {
    assert_eq!(date(2024, 2, 1).last_of_month().unwrap().as_str(), "2024-02-29");
    assert_eq!(date(2023, 2, 1).last_of_month().unwrap().as_str(), "2023-02-28");
    assert_eq!(date(2024, 4, 17).last_of_month().unwrap().as_str(), "2024-04-30");
    assert_eq!(date(2024, 12, 31).last_of_month().unwrap().as_str(), "2024-12-31");
    assert_eq!(date(2024, 1, 31).first_of_month().unwrap().as_str(), "2024-01-01");
    assert_eq!(
        date(2024, 1, 31).first_of_next_month().unwrap().as_str(),
        "2024-02-01"
    );
    assert_eq!(
        date(2024, 12, 15).first_of_next_month().unwrap().as_str(),
        "2025-01-01"
    );
    assert_eq!(
        date(-271_821, 1, 1).first_of_month().unwrap(),
        date(-271_821, 1, 1)
    );
}

#[test]
fn first_of_month_for_every_month() {
    let mut current = date(2023, 1, 1);
    let end = date(2025, 1, 1);
    while current.is_before(&end) {
        let first = current.first_of_month().unwrap();
        assert_eq!(first.day(), 1);
        assert_eq!(first.month(), current.month());
        let last = current.last_of_month().unwrap();
        assert_eq!(last.day(), current.days_in_month());
        assert_eq!(last.tomorrow().unwrap(), current.first_of_next_month().unwrap());
        current = current.tomorrow().unwrap();
    }
}

#[test]
fn accessors() {
    let d = date(2024, 3, 15);
    assert_eq!(d.day_of_week(), 5);
    assert_eq!(date(1970, 1, 1).day_of_week(), 4);
    assert_eq!(date(2024, 3, 17).day_of_week(), 7);
    assert_eq!(date(2024, 3, 18).day_of_week(), 1);
    assert_eq!(d.days_in_month(), 31);
    assert_eq!(d.days_in_year(), 366);
    assert!(d.in_leap_year());
    assert_eq!(date(2100, 6, 1).days_in_year(), 365);
    assert!(!date(2100, 6, 1).in_leap_year());
}

#[test]
fn comparisons_are_exclusive() {
    let dates = [
        date(2024, 3, 14),
        date(2024, 3, 15),
        date(2024, 3, 16),
        date(1900, 1, 1),
    ];
    for a in &dates {
        for b in &dates {
            let holds = [a.is_before(b), a.is_same(b), a.is_after(b)];
            assert_eq!(holds.iter().filter(|h| **h).count(), 1, "{a} {b}");
            assert_eq!(a.is_same_or_before(b), !a.is_after(b));
            assert_eq!(a.is_same_or_after(b), !a.is_before(b));
            assert_eq!(a.cmp(b), a.epoch_days().cmp(&b.epoch_days()));
        }
    }
}

#[test]
fn min_and_max() {
    let a = date(2024, 3, 14);
    let b = date(2024, 3, 15);
    for (x, y) in [(a, b), (b, a), (a, a)] {
        let lo = min(x, y);
        let hi = max(x, y);
        assert!(lo.is_same_or_before(&hi));
        assert!((lo == x && hi == y) || (lo == y && hi == x));
    }
    assert_eq!(min(a, b), a);
    assert_eq!(max(a, b), b);
}

#[test]
fn count_days_is_inclusive() {
    let d = date(2024, 3, 15);
    assert_eq!(count_days(&d, &d).unwrap(), 1);
    assert_eq!(count_days(&date(2024, 2, 1), &date(2024, 2, 29)).unwrap(), 29);
    assert_eq!(count_days(&date(2023, 1, 1), &date(2023, 12, 31)).unwrap(), 365);

    let err = count_days(&d.tomorrow().unwrap(), &d).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn series_until() {
    let start = date(2024, 2, 27);
    let end = date(2024, 3, 2);
    let series = start.series_until(&end);
    assert_eq!(series.len(), count_days(&start, &end).unwrap() as usize);
    let days: Vec<_> = series.map(|d| d.to_ymd_string()).collect();
    assert_eq!(
        days,
        ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
    );

    let reversed: Vec<_> = start.series_until(&end).rev().collect();
    assert_eq!(reversed.first(), Some(&end));
    assert_eq!(reversed.last(), Some(&start));

    assert_eq!(end.series_until(&start).count(), 0);
    assert_eq!(start.series_until(&start).count(), 1);
}

#[test]
fn hashing_follows_the_day_number() {
    use core::hash::{Hash, Hasher};

    #[derive(Default)]
    struct Collect(Vec<u8>);

    impl Hasher for Collect {
        fn finish(&self) -> u64 {
            0
        }
        fn write(&mut self, bytes: &[u8]) {
            self.0.extend_from_slice(bytes);
        }
    }

    let mut a = Collect::default();
    let mut b = Collect::default();
    ymd("2024-03-15").hash(&mut a);
    date(2024, 3, 15).hash(&mut b);
    assert_eq!(a.0, b.0);
}

struct FixedClock(i128);

impl HostClock for FixedClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        EpochNanoseconds::try_from(self.0)
    }
}

#[test]
fn from_instant_with_fixed_offsets() {
    // 2024-03-15T23:30:00Z
    let instant = Instant::from_epoch_milliseconds(1_710_545_400_000).unwrap();
    let provider = FixedOffsetProvider;
    let in_zone = |tz| {
        Date::from_instant_with_provider(&instant, tz, &provider)
            .unwrap()
            .to_ymd_string()
    };
    assert_eq!(in_zone("UTC"), "2024-03-15");
    assert_eq!(in_zone("+02:00"), "2024-03-16");
    assert_eq!(in_zone("+00:30"), "2024-03-16");
    assert_eq!(in_zone("+00:29"), "2024-03-15");
    assert_eq!(in_zone("-12:00"), "2024-03-15");

    let err = Date::from_instant_with_provider(&instant, "Europe/Helsinki", &provider)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TimeZone);
}

#[test]
fn from_instant_before_the_epoch() {
    // 1969-12-31T23:59:59.999Z
    let instant = Instant::from_epoch_milliseconds(-1).unwrap();
    let date = Date::from_instant_with_provider(&instant, "UTC", &FixedOffsetProvider).unwrap();
    assert_eq!(date.as_str(), "1969-12-31");
}

#[test]
fn today_reads_the_clock() {
    let provider = FixedOffsetProvider;
    assert_eq!(
        Date::today_with_provider("UTC", &provider, &()).unwrap(),
        date(1970, 1, 1)
    );
    assert_eq!(
        Date::today_with_provider("-01:00", &provider, &()).unwrap(),
        date(1969, 12, 31)
    );
    // 2024-03-15T23:30:00Z
    let clock = FixedClock(1_710_545_400_000_000_000);
    assert_eq!(
        Date::today_with_provider("+02:00", &provider, &clock).unwrap(),
        date(2024, 3, 16)
    );
}

#[cfg(feature = "tzdb")]
#[test]
fn from_instant_with_compiled_data() {
    use crate::provider::CompiledTzdbProvider;

    let provider = CompiledTzdbProvider::default();
    // 2024-03-15T23:30:00Z
    let instant = Instant::from_epoch_milliseconds(1_710_545_400_000).unwrap();
    let helsinki = Date::from_instant_with_provider(&instant, "Europe/Helsinki", &provider);
    assert_eq!(helsinki.unwrap().as_str(), "2024-03-16");
    let utc = Date::from_instant_with_provider(&instant, "UTC", &provider);
    assert_eq!(utc.unwrap().as_str(), "2024-03-15");
    let cet = Date::from_instant_with_provider(&instant, "CET", &provider);
    assert_eq!(cet.unwrap().as_str(), "2024-03-16");
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_the_canonical_string() {
    let d = date(2024, 3, 15);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-03-15\"");
    let back: Date = serde_json::from_str("\"2024-03-15\"").unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"2024-02-30\"").is_err());
    assert!(serde_json::from_str::<Date>("19797").is_err());
}
