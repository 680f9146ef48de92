//! # Solar Geometry Library
//!
//! Apparent solar/Earth geometry for visualization front-ends: orbit plots,
//! sky views, sunrise/sunset panels, and seasonal-milestone timelines.
//!
//! This crate is the geometric derivation layer between a celestial ephemeris
//! provider and the screen. It contains:
//!
//! - **Coordinate & geometry transforms** ([`transform`]): rotation of raw
//!   equatorial heliocentric vectors into the ecliptic frame, heliocentric
//!   longitude, sub-solar longitude, and horizontal sun position.
//! - **Proximity matcher** ([`catalog`]): ranks a static set of named
//!   locations by circular longitude distance, modeling "which places are near
//!   local solar noon".
//! - **Season/apsis resolver** ([`seasons`]): enriches the provider's
//!   equinox/solstice instants with derived geometry and finds
//!   perihelion/aphelion with a coarse day-precision scan.
//! - **Local-midnight solver** ([`time`]): a bounded fixed-point iteration
//!   that anchors 24-hour windows to local midnight in any IANA timezone,
//!   daylight-saving transitions included.
//!
//! Orbital mechanics itself is out of scope: everything celestial goes
//! through the [`Ephemeris`] trait, so production callers can plug in a real
//! calculation engine while tests run against deterministic stubs.
//!
//! All operations are pure, synchronous, and bounded; nothing holds mutable
//! shared state, so every function is safe to call concurrently.
//!
//! ## Quick Start
//!
//! ### Anchoring a day window to local midnight
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use chrono_tz::America::New_York;
//! use solar_geometry::time::local_midnight;
//!
//! let noon_utc = Utc.with_ymd_and_hms(2025, 12, 15, 12, 0, 0).unwrap();
//! let midnight = local_midnight(noon_utc, &New_York);
//!
//! // Midnight in New York (UTC-5 in December) is 05:00 UTC.
//! assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 12, 15, 5, 0, 0).unwrap());
//! ```
//!
//! ### Ranking places near local solar noon
//! ```rust
//! use solar_geometry::catalog::{nearest_locations, WORLD_CITIES};
//!
//! // Sub-solar longitude of ~139°E puts Tokyo at local solar noon.
//! let nearest = nearest_locations(WORLD_CITIES, 139.0, 3);
//! assert_eq!(nearest[0].name(), "Tokyo");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp // Exact comparisons of fixed constants in tests
)]

// Public API exports
pub use crate::ephemeris::{Body, Ephemeris, RiseSetDirection, SeasonInstants};
pub use crate::error::{Error, Result};
pub use crate::types::{
    ApsisPair, EquatorialPosition, GeoCoordinate, HorizontalPosition, NamedLocation, SeasonEvent,
    SeasonSet, SunTimes, Vector3,
};

// Core modules
pub mod error;
pub mod types;

// Capability seams
pub mod ephemeris;

// Derivation modules
pub mod catalog;
pub mod seasons;
pub mod time;
pub mod transform;

// Internal modules
mod math;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{nearest_locations, WORLD_CITIES};

    #[test]
    fn test_season_event_nearest_count_matches_catalog_query() {
        // The resolver asks for three locations; the matcher must honor that
        // for any sub-solar longitude.
        for lon in [-180.0, -67.3, 0.0, 12.5, 179.9] {
            assert_eq!(nearest_locations(WORLD_CITIES, lon, 3).len(), 3);
        }
    }

    #[test]
    fn test_public_types_are_constructible() {
        let coord = GeoCoordinate::new(51.5074, -0.1278).unwrap();
        assert!(coord.latitude() > 0.0);

        let vector = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(vector.magnitude(), 1.0);

        let equatorial = EquatorialPosition::new(12.0, -23.5);
        assert_eq!(equatorial.right_ascension(), 12.0);

        let horizontal = HorizontalPosition::new(180.0, 45.0);
        assert!(horizontal.is_above_horizon());
    }
}
