//! Regression tests for local-midnight anchoring across timezone shapes:
//! zero offset, fixed positive/negative offsets, half- and quarter-hour
//! offsets, and DST-observing zones on dates adjacent to transitions.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use solar_geometry::time::{local_midnight, local_minutes_from_midnight, parse_timezone};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Asserts the wall-clock-equality contract: the returned instant reads as
/// 00:00:00 in `tz` on the same local date as `approximate`.
fn assert_anchors_to_midnight<Z: TimeZone>(approximate: DateTime<Utc>, tz: &Z) {
    let midnight = local_midnight(approximate, tz);
    let local = midnight.with_timezone(tz).naive_local();

    assert_eq!(
        local.time(),
        NaiveTime::MIN,
        "expected 00:00:00 local, got {local}"
    );
    assert_eq!(
        local.date(),
        approximate.with_timezone(tz).date_naive(),
        "anchored to the wrong local date"
    );
}

#[test]
fn zero_offset_midnight_is_utc_midnight() {
    // 15:30 UTC on a given date anchors to 00:00:00 UTC of that same date.
    let midnight = local_midnight(utc(2025, 3, 7, 15, 30, 0), &Utc);
    assert_eq!(midnight, utc(2025, 3, 7, 0, 0, 0));
}

#[test]
fn negative_fixed_offset_midnight_follows_utc_midnight() {
    // UTC-5: local midnight of day D is D 05:00:00 UTC.
    let eastern = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
    let midnight = local_midnight(utc(2025, 12, 15, 12, 0, 0), &eastern);
    assert_eq!(midnight, utc(2025, 12, 15, 5, 0, 0));
}

#[test]
fn representative_iana_zones_anchor_correctly() {
    let zones = [
        parse_timezone("UTC"),
        parse_timezone("America/New_York"),
        parse_timezone("America/Santiago"),
        parse_timezone("Europe/London"),
        parse_timezone("Asia/Kolkata"),    // +05:30
        parse_timezone("Asia/Kathmandu"),  // +05:45
        parse_timezone("Asia/Tokyo"),
        parse_timezone("Pacific/Kiritimati"), // +14:00
    ];

    let instants = [
        utc(2025, 1, 15, 0, 30, 0),
        utc(2025, 6, 21, 12, 0, 0),
        utc(2025, 9, 3, 23, 45, 0),
    ];

    for tz in zones {
        for instant in instants {
            assert_anchors_to_midnight(instant, &tz);
        }
    }
}

#[test]
fn dst_spring_forward_day_still_has_midnight() {
    // New York springs forward at 02:00 on 2024-03-10; midnight itself exists.
    let new_york = parse_timezone("America/New_York");
    for instant in [
        utc(2024, 3, 9, 18, 0, 0),
        utc(2024, 3, 10, 12, 0, 0),
        utc(2024, 3, 11, 12, 0, 0),
    ] {
        assert_anchors_to_midnight(instant, &new_york);
    }

    // EST still applies at midnight on the transition day itself.
    let midnight = local_midnight(utc(2024, 3, 10, 12, 0, 0), &new_york);
    assert_eq!(midnight, utc(2024, 3, 10, 5, 0, 0));
}

#[test]
fn dst_fall_back_day_anchors_before_the_repeated_hour() {
    // New York falls back at 02:00 on 2024-11-03; midnight is unambiguous
    // (the repeated hour is 01:00-02:00) and EDT still applies.
    let new_york = parse_timezone("America/New_York");
    for instant in [
        utc(2024, 11, 2, 18, 0, 0),
        utc(2024, 11, 3, 12, 0, 0),
        utc(2024, 11, 4, 12, 0, 0),
    ] {
        assert_anchors_to_midnight(instant, &new_york);
    }

    let midnight = local_midnight(utc(2024, 11, 3, 12, 0, 0), &new_york);
    assert_eq!(midnight, utc(2024, 11, 3, 4, 0, 0));
}

#[test]
fn southern_hemisphere_dst_dates_adjacent_to_transition() {
    // Sydney leaves DST on 2024-04-07 and re-enters on 2024-10-06.
    let sydney = parse_timezone("Australia/Sydney");
    for instant in [
        utc(2024, 4, 6, 12, 0, 0),
        utc(2024, 4, 7, 12, 0, 0),
        utc(2024, 10, 5, 12, 0, 0),
        utc(2024, 10, 6, 12, 0, 0),
    ] {
        assert_anchors_to_midnight(instant, &sydney);
    }
}

#[test]
fn anchoring_is_idempotent() {
    let zones = [
        parse_timezone("UTC"),
        parse_timezone("America/New_York"),
        parse_timezone("Asia/Kathmandu"),
        parse_timezone("Pacific/Kiritimati"),
    ];
    for tz in zones {
        let anchored = local_midnight(utc(2025, 7, 9, 16, 20, 0), &tz);
        assert_eq!(
            local_midnight(anchored, &tz),
            anchored,
            "re-anchoring moved the instant in {tz:?}"
        );
    }
}

#[test]
fn instants_near_local_midnight_anchor_to_their_own_date() {
    let tokyo = parse_timezone("Asia/Tokyo");

    // 23:59 local on July 9th.
    let just_before = utc(2025, 7, 9, 14, 59, 0);
    let midnight = local_midnight(just_before, &tokyo);
    assert_eq!(midnight, utc(2025, 7, 8, 15, 0, 0));

    // 00:00:30 local on July 10th.
    let just_after = utc(2025, 7, 9, 15, 0, 30);
    let midnight = local_midnight(just_after, &tokyo);
    assert_eq!(midnight, utc(2025, 7, 9, 15, 0, 0));
}

#[test]
fn minutes_from_midnight_agrees_with_anchor() {
    let kolkata = parse_timezone("Asia/Kolkata");
    let midnight = local_midnight(utc(2025, 2, 14, 9, 0, 0), &kolkata);

    assert_eq!(local_minutes_from_midnight(midnight, &kolkata), 0);
    assert_eq!(
        local_minutes_from_midnight(midnight + chrono::Duration::minutes(90), &kolkata),
        90
    );
    assert_eq!(
        local_minutes_from_midnight(midnight + chrono::Duration::hours(23), &kolkata),
        23 * 60
    );
}

#[test]
fn unknown_identifier_falls_back_to_utc() {
    assert_eq!(parse_timezone("Not/AZone"), Tz::UTC);
    assert_eq!(parse_timezone("garbage"), Tz::UTC);

    // The fallback zone is fully usable by the solver.
    let midnight = local_midnight(utc(2025, 5, 5, 15, 30, 0), &parse_timezone("Not/AZone"));
    assert_eq!(midnight, utc(2025, 5, 5, 0, 0, 0));
}
