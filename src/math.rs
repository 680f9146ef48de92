//! Angle arithmetic shared by the transform and catalog layers.

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Normalizes an angle in degrees to the range [-180, 180] by repeated ±360 adjustment.
pub fn normalize_degrees_signed_180(degrees: f64) -> f64 {
    let mut normalized = degrees;
    while normalized > 180.0 {
        normalized -= 360.0;
    }
    while normalized < -180.0 {
        normalized += 360.0;
    }
    normalized
}

/// Circular distance between two longitudes in degrees, in [0, 180].
///
/// Inputs are expected to be normalized longitudes in [-180, 180].
pub fn circular_longitude_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}
