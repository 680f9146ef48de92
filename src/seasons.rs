//! Season and apsis event resolution.
//!
//! Enriches the provider's raw equinox/solstice instants with derived orbital
//! geometry and nearest-location lookups, and locates perihelion/aphelion with
//! a deliberately coarse day-precision scan.

use crate::catalog::{nearest_locations, WORLD_CITIES};
use crate::ephemeris::{Body, Ephemeris};
use crate::transform::{heliocentric_longitude, sub_solar_longitude};
use crate::types::{ApsisPair, SeasonEvent, SeasonSet};
use crate::{Error, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// How many catalog locations each season event is enriched with.
const NEAREST_LOCATION_COUNT: usize = 3;

/// Half-width of the apsis scan window, in whole days.
const APSIS_WINDOW_DAYS: i64 = 10;

/// Which end of the distance curve an apsis scan retains.
#[derive(Clone, Copy)]
enum Extremum {
    Minimum,
    Maximum,
}

/// Resolves the four seasonal milestones of `year`, enriched with geometry.
///
/// Makes one provider season search, then independently derives per event:
/// heliocentric distance (norm of the raw vector), heliocentric longitude,
/// sub-solar longitude, and the three catalog locations nearest the sub-solar
/// point.
///
/// # Errors
/// Returns [`Error::EphemerisRange`] when the provider cannot resolve `year`;
/// there is no local fallback.
pub fn resolve_seasons<E: Ephemeris + ?Sized>(ephemeris: &E, year: i32) -> Result<SeasonSet> {
    let instants = ephemeris.search_seasons(year)?;
    Ok(SeasonSet::new(
        enrich(ephemeris, instants.march_equinox()),
        enrich(ephemeris, instants.june_solstice()),
        enrich(ephemeris, instants.september_equinox()),
        enrich(ephemeris, instants.december_solstice()),
    ))
}

fn enrich<E: Ephemeris + ?Sized>(ephemeris: &E, timestamp: DateTime<Utc>) -> SeasonEvent {
    let distance = ephemeris
        .heliocentric_vector(Body::Earth, timestamp)
        .magnitude();
    let sub_solar = sub_solar_longitude(ephemeris, timestamp);
    SeasonEvent::new(
        timestamp,
        distance,
        heliocentric_longitude(ephemeris, timestamp),
        sub_solar,
        nearest_locations(WORLD_CITIES, sub_solar, NEAREST_LOCATION_COUNT),
    )
}

/// Resolves perihelion and aphelion timestamps for `year`, to the nearest day.
///
/// Perihelion is scanned in a ±10-day window around January 4th, aphelion
/// around July 4th: 21 whole-day samples each, retaining the minimum
/// (perihelion) or maximum (aphelion) heliocentric distance. True apsis
/// instants vary by at most a few days around these anchors, so the bounded
/// scan always brackets the extremum; its result is day-precision only and is
/// deliberately not refined further.
///
/// # Errors
/// Returns [`Error::InvalidDate`] only when `year` falls outside chrono's
/// representable calendar range; within it the scan cannot fail.
pub fn resolve_apsis<E: Ephemeris + ?Sized>(ephemeris: &E, year: i32) -> Result<ApsisPair> {
    let perihelion = scan_extremum(ephemeris, year, 1, 4, Extremum::Minimum)?;
    let aphelion = scan_extremum(ephemeris, year, 7, 4, Extremum::Maximum)?;
    Ok(ApsisPair::new(perihelion, aphelion))
}

fn scan_extremum<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    year: i32,
    month: u32,
    day: u32,
    extremum: Extremum,
) -> Result<DateTime<Utc>> {
    let anchor = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::invalid_date("apsis anchor outside representable calendar range"))?
        .and_time(NaiveTime::MIN)
        .and_utc();

    let mut best_instant = anchor;
    let mut best_distance = ephemeris
        .heliocentric_vector(Body::Earth, anchor)
        .magnitude();

    for offset in -APSIS_WINDOW_DAYS..=APSIS_WINDOW_DAYS {
        if offset == 0 {
            continue;
        }
        let sample = anchor + Duration::days(offset);
        let distance = ephemeris
            .heliocentric_vector(Body::Earth, sample)
            .magnitude();
        let better = match extremum {
            Extremum::Minimum => distance < best_distance,
            Extremum::Maximum => distance > best_distance,
        };
        if better {
            best_distance = distance;
            best_instant = sample;
        }
    }

    Ok(best_instant)
}
