//! Core data types for solar geometry derivations.

use crate::error::check_coordinates;
use crate::Result;
use chrono::{DateTime, Utc};

/// A validated geographic coordinate.
///
/// Latitude is restricted to [-90, +90] degrees and longitude to [-180, +180]
/// degrees; construction rejects anything else so the transform layer never
/// sees out-of-range observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north.
    latitude: f64,
    /// Longitude in degrees, positive east.
    longitude: f64,
}

impl GeoCoordinate {
    /// The reference observer at 0°N 0°E (equator, prime meridian).
    pub const ORIGIN: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Creates a new coordinate from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    ///
    /// # Example
    /// ```
    /// # use solar_geometry::GeoCoordinate;
    /// let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
    /// assert_eq!(london.latitude(), 51.5074);
    ///
    /// assert!(GeoCoordinate::new(95.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A right-handed Cartesian vector at astronomical-unit scale.
///
/// For heliocentric vectors the magnitude is the heliocentric distance in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    /// X component in AU.
    pub x: f64,
    /// Y component in AU.
    pub y: f64,
    /// Z component in AU.
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// An equatorial sky position as returned by the ephemeris provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in hour-angle units, [0, 24).
    right_ascension: f64,
    /// Declination in degrees, [-90, +90].
    declination: f64,
}

impl EquatorialPosition {
    /// Creates an equatorial position from right ascension (hours) and declination (degrees).
    #[must_use]
    pub const fn new(right_ascension: f64, declination: f64) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    /// Gets the right ascension in hour-angle units.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }
}

/// A horizontal sky position for a specific observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    /// Azimuth in degrees (0° = North, increasing clockwise).
    azimuth: f64,
    /// Altitude above the horizon in degrees (negative below).
    altitude: f64,
}

impl HorizontalPosition {
    /// Creates a horizontal position from azimuth and altitude in degrees.
    #[must_use]
    pub const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Gets the azimuth in degrees (0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude above the horizon in degrees.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Checks if the position is above the horizon.
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// A named place drawn from the static location catalog.
///
/// Catalog entries are trusted load-time data; no validation is applied at
/// construction so the catalog can be built in `static` context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedLocation {
    /// Display name of the place.
    name: &'static str,
    /// Latitude in degrees.
    latitude: f64,
    /// Longitude in degrees.
    longitude: f64,
}

impl NamedLocation {
    /// Creates a catalog entry.
    #[must_use]
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }

    /// Gets the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A seasonal milestone enriched with derived orbital geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonEvent {
    timestamp: DateTime<Utc>,
    heliocentric_distance: f64,
    heliocentric_longitude: f64,
    sub_solar_longitude: f64,
    nearest: Vec<NamedLocation>,
}

impl SeasonEvent {
    pub(crate) fn new(
        timestamp: DateTime<Utc>,
        heliocentric_distance: f64,
        heliocentric_longitude: f64,
        sub_solar_longitude: f64,
        nearest: Vec<NamedLocation>,
    ) -> Self {
        Self {
            timestamp,
            heliocentric_distance,
            heliocentric_longitude,
            sub_solar_longitude,
            nearest,
        }
    }

    /// Gets the instant of the event.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Gets Earth's heliocentric distance at the event, in AU.
    #[must_use]
    pub const fn heliocentric_distance(&self) -> f64 {
        self.heliocentric_distance
    }

    /// Gets Earth's heliocentric longitude at the event, in degrees [0, 360).
    #[must_use]
    pub const fn heliocentric_longitude(&self) -> f64 {
        self.heliocentric_longitude
    }

    /// Gets the sub-solar geographic longitude at the event, in degrees [-180, 180].
    #[must_use]
    pub const fn sub_solar_longitude(&self) -> f64 {
        self.sub_solar_longitude
    }

    /// Gets the catalog locations nearest the sub-solar longitude, closest first.
    #[must_use]
    pub fn nearest_locations(&self) -> &[NamedLocation] {
        &self.nearest
    }
}

/// The four seasonal milestones of a year, in calendar order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSet {
    march_equinox: SeasonEvent,
    june_solstice: SeasonEvent,
    september_equinox: SeasonEvent,
    december_solstice: SeasonEvent,
}

impl SeasonSet {
    pub(crate) fn new(
        march_equinox: SeasonEvent,
        june_solstice: SeasonEvent,
        september_equinox: SeasonEvent,
        december_solstice: SeasonEvent,
    ) -> Self {
        Self {
            march_equinox,
            june_solstice,
            september_equinox,
            december_solstice,
        }
    }

    /// Gets the March equinox event.
    #[must_use]
    pub const fn march_equinox(&self) -> &SeasonEvent {
        &self.march_equinox
    }

    /// Gets the June solstice event.
    #[must_use]
    pub const fn june_solstice(&self) -> &SeasonEvent {
        &self.june_solstice
    }

    /// Gets the September equinox event.
    #[must_use]
    pub const fn september_equinox(&self) -> &SeasonEvent {
        &self.september_equinox
    }

    /// Gets the December solstice event.
    #[must_use]
    pub const fn december_solstice(&self) -> &SeasonEvent {
        &self.december_solstice
    }

    /// Gets the four events in calendar order.
    #[must_use]
    pub const fn events(&self) -> [&SeasonEvent; 4] {
        [
            &self.march_equinox,
            &self.june_solstice,
            &self.september_equinox,
            &self.december_solstice,
        ]
    }
}

/// Perihelion and aphelion timestamps for a year, correct to the nearest day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApsisPair {
    perihelion: DateTime<Utc>,
    aphelion: DateTime<Utc>,
}

impl ApsisPair {
    pub(crate) const fn new(perihelion: DateTime<Utc>, aphelion: DateTime<Utc>) -> Self {
        Self {
            perihelion,
            aphelion,
        }
    }

    /// Gets the perihelion timestamp (closest approach to the Sun).
    #[must_use]
    pub const fn perihelion(&self) -> DateTime<Utc> {
        self.perihelion
    }

    /// Gets the aphelion timestamp (farthest distance from the Sun).
    #[must_use]
    pub const fn aphelion(&self) -> DateTime<Utc> {
        self.aphelion
    }
}

/// Sunrise and sunset instants for a day, where they exist.
///
/// Absent values are valid outcomes (polar day or polar night), not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    sunrise: Option<DateTime<Utc>>,
    sunset: Option<DateTime<Utc>>,
}

impl SunTimes {
    pub(crate) const fn new(sunrise: Option<DateTime<Utc>>, sunset: Option<DateTime<Utc>>) -> Self {
        Self { sunrise, sunset }
    }

    /// Gets the sunrise instant, if one was found within the search horizon.
    #[must_use]
    pub const fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.sunrise
    }

    /// Gets the sunset instant, if one was found within the search horizon.
    #[must_use]
    pub const fn sunset(&self) -> Option<DateTime<Utc>> {
        self.sunset
    }
}
