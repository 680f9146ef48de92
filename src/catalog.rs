//! Static named-location catalog and the longitude proximity matcher.

use crate::math::circular_longitude_distance;
use crate::types::NamedLocation;

/// Built-in catalog of named locations, ordered west to east.
///
/// Loaded once, never mutated; shared read-only by all callers. The order is
/// significant: it breaks ties in [`nearest_locations`].
pub static WORLD_CITIES: &[NamedLocation] = &[
    NamedLocation::new("Honolulu", 21.3069, -157.8583),
    NamedLocation::new("Anchorage", 61.2181, -149.9003),
    NamedLocation::new("Los Angeles", 34.0522, -118.2437),
    NamedLocation::new("Denver", 39.7392, -104.9903),
    NamedLocation::new("Mexico City", 19.4326, -99.1332),
    NamedLocation::new("Chicago", 41.8781, -87.6298),
    NamedLocation::new("New York", 40.7128, -74.0060),
    NamedLocation::new("Santiago", -33.4489, -70.6693),
    NamedLocation::new("Halifax", 44.6488, -63.5752),
    NamedLocation::new("Rio de Janeiro", -22.9068, -43.1729),
    NamedLocation::new("Reykjavik", 64.1466, -21.9426),
    NamedLocation::new("London", 51.5074, -0.1278),
    NamedLocation::new("Paris", 48.8566, 2.3522),
    NamedLocation::new("Lagos", 6.5244, 3.3792),
    NamedLocation::new("Istanbul", 41.0082, 28.9784),
    NamedLocation::new("Cairo", 30.0444, 31.2357),
    NamedLocation::new("Nairobi", -1.2921, 36.8219),
    NamedLocation::new("Moscow", 55.7558, 37.6173),
    NamedLocation::new("Dubai", 25.2048, 55.2708),
    NamedLocation::new("Karachi", 24.8607, 67.0011),
    NamedLocation::new("Delhi", 28.6139, 77.2090),
    NamedLocation::new("Bangkok", 13.7563, 100.5018),
    NamedLocation::new("Singapore", 1.3521, 103.8198),
    NamedLocation::new("Beijing", 39.9042, 116.4074),
    NamedLocation::new("Tokyo", 35.6762, 139.6503),
    NamedLocation::new("Sydney", -33.8688, 151.2093),
    NamedLocation::new("Auckland", -36.8485, 174.7633),
    NamedLocation::new("Suva", -18.1416, 178.4419),
];

/// Ranks catalog entries by circular longitude distance to `target_longitude`.
///
/// Returns the `count` closest entries, nearest first. Ties keep catalog
/// order (the sort is stable). Latitude is ignored: the matcher models
/// hour-of-day proximity ("which named places are near local solar noon"),
/// which depends only on longitude.
///
/// # Example
/// ```
/// # use solar_geometry::catalog::{nearest_locations, WORLD_CITIES};
/// let near_greenwich = nearest_locations(WORLD_CITIES, 0.0, 3);
/// assert_eq!(near_greenwich.len(), 3);
/// assert_eq!(near_greenwich[0].name(), "London");
/// ```
#[must_use]
pub fn nearest_locations(
    catalog: &[NamedLocation],
    target_longitude: f64,
    count: usize,
) -> Vec<NamedLocation> {
    let mut ranked = catalog.to_vec();
    ranked.sort_by(|a, b| {
        let da = circular_longitude_distance(a.longitude(), target_longitude);
        let db = circular_longitude_distance(b.longitude(), target_longitude);
        da.partial_cmp(&db).unwrap_or(core::cmp::Ordering::Equal)
    });
    ranked.truncate(count);
    ranked
}
