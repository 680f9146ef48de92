//! Injected ephemeris capability.
//!
//! The crate never computes orbital mechanics itself; everything that needs a
//! celestial position goes through the [`Ephemeris`] trait. Production callers
//! back it with a real calculation engine, test suites with deterministic
//! stubs.

use crate::types::{EquatorialPosition, GeoCoordinate, HorizontalPosition, Vector3};
use crate::Result;
use chrono::{DateTime, Utc};

/// Celestial bodies the core asks the provider about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    /// The Sun.
    Sun,
    /// The Earth.
    Earth,
}

/// Direction of a rise/set search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetDirection {
    /// Search for the body ascending through the horizon.
    Rise,
    /// Search for the body descending through the horizon.
    Set,
}

/// Raw equinox/solstice instants for one year, as found by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonInstants {
    march_equinox: DateTime<Utc>,
    june_solstice: DateTime<Utc>,
    september_equinox: DateTime<Utc>,
    december_solstice: DateTime<Utc>,
}

impl SeasonInstants {
    /// Creates the set of raw season instants.
    #[must_use]
    pub const fn new(
        march_equinox: DateTime<Utc>,
        june_solstice: DateTime<Utc>,
        september_equinox: DateTime<Utc>,
        december_solstice: DateTime<Utc>,
    ) -> Self {
        Self {
            march_equinox,
            june_solstice,
            september_equinox,
            december_solstice,
        }
    }

    /// Gets the March equinox instant.
    #[must_use]
    pub const fn march_equinox(&self) -> DateTime<Utc> {
        self.march_equinox
    }

    /// Gets the June solstice instant.
    #[must_use]
    pub const fn june_solstice(&self) -> DateTime<Utc> {
        self.june_solstice
    }

    /// Gets the September equinox instant.
    #[must_use]
    pub const fn september_equinox(&self) -> DateTime<Utc> {
        self.september_equinox
    }

    /// Gets the December solstice instant.
    #[must_use]
    pub const fn december_solstice(&self) -> DateTime<Utc> {
        self.december_solstice
    }
}

/// Celestial ephemeris provider.
///
/// All methods are same-process calls expected to be pure for a given instant,
/// so derivations built on top of them stay deterministic and safe to invoke
/// concurrently.
pub trait Ephemeris {
    /// Heliocentric position of `body` in the provider's equatorial frame, in AU.
    fn heliocentric_vector(&self, body: Body, instant: DateTime<Utc>) -> Vector3;

    /// Apparent equatorial coordinates of `body` for an observer.
    fn equatorial(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        observer: GeoCoordinate,
    ) -> EquatorialPosition;

    /// Transforms equatorial coordinates into the observer's horizontal frame.
    fn horizontal(
        &self,
        instant: DateTime<Utc>,
        observer: GeoCoordinate,
        equatorial: EquatorialPosition,
    ) -> HorizontalPosition;

    /// Greenwich apparent sidereal time in hours, [0, 24).
    fn sidereal_time(&self, instant: DateTime<Utc>) -> f64;

    /// Searches forward from `from` for the next rise or set of `body`.
    ///
    /// `None` means no event exists within the provider's search horizon
    /// (e.g. polar day or polar night) and is a valid outcome, not a failure.
    fn search_rise_set(
        &self,
        body: Body,
        observer: GeoCoordinate,
        direction: RiseSetDirection,
        from: DateTime<Utc>,
    ) -> Option<DateTime<Utc>>;

    /// Finds the four equinox/solstice instants of `year`.
    ///
    /// # Errors
    /// Returns [`EphemerisRange`](crate::Error::EphemerisRange) when `year` is
    /// outside the provider's supported span.
    fn search_seasons(&self, year: i32) -> Result<SeasonInstants>;
}
