use crate::scan::{TimestampCache, TimestampMs, parse_timestamp};

// 2006-01-02T15:04:05Z
const REFERENCE_MS: i64 = 1_136_214_245_000;

#[test]
fn parses_iso_timestamp_with_millis() {
    let line = "[ns_server:info,2006-01-02T15:04:05.123,ns_1@127.0.0.1]Started rebalancing bucket default";

    assert_eq!(parse_timestamp(line), Some(TimestampMs(REFERENCE_MS + 123)));
}

#[test]
fn truncates_sub_millisecond_digits() {
    let line = "a,2006-01-02 15:04:05.123999,b";

    assert_eq!(parse_timestamp(line), Some(TimestampMs(REFERENCE_MS + 123)));
}

#[test]
fn parses_asctime_with_padded_day() {
    let line = "a, Mon Jan  2 15:04:05 2006 ,b";

    assert_eq!(parse_timestamp(line), Some(TimestampMs(REFERENCE_MS)));
}

#[test]
fn ignores_a_wrong_weekday() {
    let line = "a,Fri Jan 2 15:04:05 2006,b";

    assert_eq!(parse_timestamp(line), Some(TimestampMs(REFERENCE_MS)));
}

#[test]
fn honors_explicit_offset() {
    let line = "a,2006-01-02T16:04:05+01:00,b";

    assert_eq!(parse_timestamp(line), Some(TimestampMs(REFERENCE_MS)));
}

#[test]
fn parses_month_first_slash_dates() {
    let line = "a,01/02/2006 15:04:05,b";

    assert_eq!(parse_timestamp(line), Some(TimestampMs(REFERENCE_MS)));
}

#[test]
fn date_only_is_midnight() {
    let line = "a,2006-01-02,b";

    assert_eq!(
        parse_timestamp(line),
        Some(TimestampMs(REFERENCE_MS - (15 * 3600 + 4 * 60 + 5) * 1000))
    );
}

#[test]
fn missing_second_field_is_none() {
    assert_eq!(parse_timestamp("Started rebalancing bucket default"), None);
}

#[test]
fn garbage_field_is_none() {
    assert_eq!(parse_timestamp("a,not a date at all,b"), None);
    assert_eq!(parse_timestamp("a,   ,b"), None);
}

#[test]
fn cache_parses_each_distinct_line_once() {
    let mut cache = TimestampCache::new();
    let line = "a,2006-01-02T15:04:05,b";

    let first = cache.get(line);
    let second = cache.get(line);

    assert_eq!(first, Some(TimestampMs(REFERENCE_MS)));
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn cache_remembers_failures() {
    let mut cache = TimestampCache::new();

    assert_eq!(cache.get("no timestamp here"), None);
    assert_eq!(cache.get("no timestamp here"), None);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn minutes_without_seconds() {
    let minute = REFERENCE_MS - 5_000;

    assert_eq!(parse_timestamp("a,2006-01-02 15:04,b"), Some(TimestampMs(minute)));
    assert_eq!(parse_timestamp("a,2006-01-02T15:04,b"), Some(TimestampMs(minute)));
    assert_eq!(parse_timestamp("a,2006/01/02 15:04,b"), Some(TimestampMs(minute)));
}

#[test]
fn trailing_utc_zone_word() {
    assert_eq!(
        parse_timestamp("a,2006-01-02 15:04:05 UTC,b"),
        Some(TimestampMs(REFERENCE_MS))
    );
    assert_eq!(
        parse_timestamp("a,2006-01-02 15:04:05 GMT,b"),
        Some(TimestampMs(REFERENCE_MS))
    );
    assert_eq!(
        parse_timestamp("a,2006-01-02 15:04:05Z,b"),
        Some(TimestampMs(REFERENCE_MS))
    );
}

#[test]
fn unix_date_command_order() {
    let line = "a,Mon Jan 2 15:04:05 UTC 2006,b";

    assert_eq!(parse_timestamp(line), Some(TimestampMs(REFERENCE_MS)));
}

#[test]
fn compact_iso_basic_format() {
    assert_eq!(
        parse_timestamp("a,20060102T150405,b"),
        Some(TimestampMs(REFERENCE_MS))
    );
    assert_eq!(
        parse_timestamp("a,20060102T150405Z,b"),
        Some(TimestampMs(REFERENCE_MS))
    );
}

#[test]
fn full_month_names() {
    assert_eq!(
        parse_timestamp("a,2 January 2006 15:04:05,b"),
        Some(TimestampMs(REFERENCE_MS))
    );
    assert_eq!(
        parse_timestamp("a,January 2 2006 15:04:05,b"),
        Some(TimestampMs(REFERENCE_MS))
    );
    assert_eq!(
        parse_timestamp("a,Monday January 2 15:04:05 2006,b"),
        Some(TimestampMs(REFERENCE_MS))
    );
}

#[test]
fn zulu_suffix_with_millis() {
    assert_eq!(
        parse_timestamp("a,2006-01-02T15:04:05.123Z,b"),
        Some(TimestampMs(REFERENCE_MS + 123))
    );
}
