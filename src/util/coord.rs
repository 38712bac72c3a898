use crate::core::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::util::error::OlcError;
use geo_types::Point;

/// A WGS84 position where `x` is longitude and `y` is latitude, in degrees.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

/// Clamps a latitude into [-90, 90].
pub fn clip_latitude(lat: f64) -> f64 {
    lat.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Wraps a longitude into [-180, 180).
///
/// Values already in range are returned bit for bit, so cell edges survive.
pub fn normalize_longitude(lng: f64) -> f64 {
    if (-LONGITUDE_MAX..LONGITUDE_MAX).contains(&lng) {
        return lng;
    }
    let wrapped = (lng + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX;
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= LONGITUDE_MAX {
        -LONGITUDE_MAX
    } else {
        wrapped
    }
}

/// Rejects NaN and infinite inputs, which no amount of clipping can place on the grid.
pub fn ensure_finite(lat: f64, lng: f64) -> Result<(), OlcError> {
    if lat.is_finite() && lng.is_finite() {
        Ok(())
    } else {
        Err(OlcError::InvalidCoordinate(lat, lng))
    }
}

/// Absolute longitude difference, measured the short way round the antimeridian.
pub fn longitude_distance(a: f64, b: f64) -> f64 {
    let d = (normalize_longitude(a) - normalize_longitude(b)).abs();
    d.min(2.0 * LONGITUDE_MAX - d)
}
