//! Coordinate and geometry transforms.
//!
//! Pure reductions of raw ephemeris output into the quantities visualization
//! front-ends plot: the ecliptic-frame orbital position, heliocentric and
//! sub-solar longitudes, and the observer's horizontal sun position.

use crate::ephemeris::{Body, Ephemeris, RiseSetDirection};
use crate::math::{normalize_degrees_0_to_360, normalize_degrees_signed_180};
use crate::types::{GeoCoordinate, HorizontalPosition, SunTimes, Vector3};
use chrono::{DateTime, Utc};

/// Mean obliquity of the ecliptic at J2000, in degrees.
pub const MEAN_OBLIQUITY_DEG: f64 = 23.4392911;

/// Earth's heliocentric position rotated into the ecliptic frame, in AU.
///
/// Takes the provider's equatorial heliocentric vector and rotates it about
/// the frame's x axis (toward the vernal equinox) by the mean obliquity, so
/// the ecliptic plane becomes the xy reference plane and Earth's orbital
/// motion is planar in the output. The sign convention is verified against the
/// longitude of perihelion in the test suite; rotation preserves magnitude.
pub fn ecliptic_earth_position<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    instant: DateTime<Utc>,
) -> Vector3 {
    let v = ephemeris.heliocentric_vector(Body::Earth, instant);
    let (sin_e, cos_e) = MEAN_OBLIQUITY_DEG.to_radians().sin_cos();
    Vector3::new(v.x, v.y * cos_e + v.z * sin_e, -v.y * sin_e + v.z * cos_e)
}

/// Earth's heliocentric longitude in degrees, [0, 360).
///
/// `atan2(y, x)` of the raw heliocentric vector, with negative results
/// shifted by +360.
pub fn heliocentric_longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    instant: DateTime<Utc>,
) -> f64 {
    let v = ephemeris.heliocentric_vector(Body::Earth, instant);
    let mut longitude = v.y.atan2(v.x).to_degrees();
    if longitude < 0.0 {
        longitude += 360.0;
    }
    longitude
}

/// Geographic longitude of the sub-solar point in degrees, [-180, 180].
///
/// At the sub-solar point the hour angle is zero, so the geographic longitude
/// equals the Sun's right ascension minus Greenwich apparent sidereal time,
/// both converted from hour-angle units to degrees.
pub fn sub_solar_longitude<E: Ephemeris + ?Sized>(ephemeris: &E, instant: DateTime<Utc>) -> f64 {
    let sun = ephemeris.equatorial(Body::Sun, instant, GeoCoordinate::ORIGIN);
    let gast = ephemeris.sidereal_time(instant);
    normalize_degrees_signed_180((sun.right_ascension() - gast) * 15.0)
}

/// The Sun's horizontal position for an observer.
///
/// Direct delegation to the provider's equatorial and equatorial→horizontal
/// transforms; no independent computation.
pub fn horizon_position<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    instant: DateTime<Utc>,
    observer: GeoCoordinate,
) -> HorizontalPosition {
    let equatorial = ephemeris.equatorial(Body::Sun, instant, observer);
    ephemeris.horizontal(instant, observer, equatorial)
}

/// Sunrise and sunset instants for an observer, searched forward from `instant`.
///
/// Either event may be absent (polar day or polar night); absence is a valid
/// outcome, not an error.
pub fn sun_times<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    instant: DateTime<Utc>,
    observer: GeoCoordinate,
) -> SunTimes {
    let sunrise = ephemeris.search_rise_set(Body::Sun, observer, RiseSetDirection::Rise, instant);
    let sunset = ephemeris.search_rise_set(Body::Sun, observer, RiseSetDirection::Set, instant);
    SunTimes::new(sunrise, sunset)
}

/// Earth's rotation angle in radians, [0, 2π), from Greenwich apparent sidereal time.
pub fn earth_rotation_angle<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    instant: DateTime<Utc>,
) -> f64 {
    normalize_degrees_0_to_360(ephemeris.sidereal_time(instant) * 15.0).to_radians()
}
