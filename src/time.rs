//! Local wall-clock anchoring and timezone handling.
//!
//! The centerpiece is [`local_midnight`], a small fixed-point iteration that
//! finds the absolute instant of 00:00:00 wall-clock time in an arbitrary
//! timezone, used to anchor 24-hour visualization windows. Formatting helpers
//! and the timezone-resolver capability live here too.

use crate::types::GeoCoordinate;
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use log::warn;

/// Iteration cap for the midnight solver. Timezone offsets are
/// piecewise-constant, so the correction step converges immediately except
/// around a DST transition; three rounds settle those too.
const MAX_MIDNIGHT_ITERATIONS: usize = 3;

/// Convergence tolerance for the midnight solver, sub-second.
const MIDNIGHT_TOLERANCE_MILLIS: i64 = 1_000;

/// Finds the absolute instant of local midnight for the calendar date that
/// `approximate` falls on in `tz`.
///
/// The returned instant `T` satisfies: formatting `T` in `tz` yields the same
/// wall-clock date as `approximate` observed in `tz`, at 00:00:00.
///
/// The algorithm is a bounded fixed-point iteration, not a generic root
/// finder: starting from the target date read naively as a zero-offset
/// timestamp, each round observes the guess's actual wall-clock fields in
/// `tz` and adds the difference between the target and the observation,
/// both expressed as naive zero-offset timestamps where calendar arithmetic
/// is linear. Near a fall-back transition any instant within the repeated
/// hour that reads as the target date at 00:00:00 is acceptable; the solver
/// does not disambiguate.
///
/// Invalid timezone identifiers are handled upstream by the resolver
/// collaborator (see [`parse_timezone`]); the solver treats its zone as
/// trusted input.
///
/// # Example
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use solar_geometry::time::local_midnight;
///
/// // UTC-5: local midnight is five hours after UTC midnight.
/// let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
/// let noon = Utc.with_ymd_and_hms(2025, 12, 15, 12, 0, 0).unwrap();
/// assert_eq!(
///     local_midnight(noon, &eastern),
///     Utc.with_ymd_and_hms(2025, 12, 15, 5, 0, 0).unwrap()
/// );
/// ```
pub fn local_midnight<Z: TimeZone>(approximate: DateTime<Utc>, tz: &Z) -> DateTime<Utc> {
    let target = approximate
        .with_timezone(tz)
        .date_naive()
        .and_time(NaiveTime::MIN);

    // Initial guess: the target wall-clock fields read as if zero-offset.
    let mut guess = target.and_utc();

    for _ in 0..MAX_MIDNIGHT_ITERATIONS {
        let observed = guess.with_timezone(tz).naive_local();
        let correction = target.signed_duration_since(observed);
        if correction.num_milliseconds().abs() < MIDNIGHT_TOLERANCE_MILLIS {
            break;
        }
        guess += correction;
    }

    guess
}

/// Maps a geographic coordinate to an IANA timezone.
///
/// Implementations must not fail: when the lookup cannot determine a zone
/// they fall back to [`Tz::UTC`] and emit a non-fatal advisory, so downstream
/// consumers (the midnight solver in particular) always receive a valid zone.
pub trait TimezoneResolver {
    /// Resolves the timezone covering `coordinate`.
    fn resolve(&self, coordinate: GeoCoordinate) -> Tz;
}

/// Parses an IANA timezone identifier, falling back to UTC.
///
/// Unrecognized identifiers log a warning and yield [`Tz::UTC`]; callers are
/// never handed an error, matching the resolver contract.
#[must_use]
pub fn parse_timezone(identifier: &str) -> Tz {
    identifier.parse().unwrap_or_else(|_| {
        warn!("unrecognized timezone identifier {identifier:?}, falling back to UTC");
        Tz::UTC
    })
}

/// The wall-clock fields of `instant` as observed in `tz`.
#[must_use]
pub fn local_fields<Z: TimeZone>(instant: DateTime<Utc>, tz: &Z) -> NaiveDateTime {
    instant.with_timezone(tz).naive_local()
}

/// Formats `instant` as local `HH:MM` (or `HH:MM:SS`) wall-clock text in `tz`.
#[must_use]
pub fn format_local_time<Z: TimeZone>(
    instant: DateTime<Utc>,
    tz: &Z,
    include_seconds: bool,
) -> String {
    let local = instant.with_timezone(tz).naive_local();
    if include_seconds {
        local.format("%H:%M:%S").to_string()
    } else {
        local.format("%H:%M").to_string()
    }
}

/// Minutes elapsed since local midnight in `tz`, [0, 1440).
#[must_use]
pub fn local_minutes_from_midnight<Z: TimeZone>(instant: DateTime<Utc>, tz: &Z) -> u32 {
    let local = instant.with_timezone(tz).time();
    local.hour() * 60 + local.minute()
}
