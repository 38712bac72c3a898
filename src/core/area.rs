use crate::core::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::util::coord::{Coordinate, normalize_longitude};
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The rectangle a code denotes, in WGS84 degrees.
///
/// A `CodeArea` is never stored; it is always re-derived from a code by
/// [`decode`](crate::decode). `code_length` is the number of significant
/// digits the area was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeArea {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(south: f64, west: f64, north: f64, east: f64, code_length: usize) -> Self {
        Self {
            south,
            west,
            north,
            east,
            code_length,
        }
    }

    /// Latitude of the centre, never above 90.
    pub fn center_lat(&self) -> f64 {
        (self.south + (self.north - self.south) / 2.0).min(LATITUDE_MAX)
    }

    /// Longitude of the centre, never above 180.
    pub fn center_lng(&self) -> f64 {
        (self.west + (self.east - self.west) / 2.0).min(LONGITUDE_MAX)
    }

    /// Centre as a `Point` with `x` = longitude, `y` = latitude.
    pub fn center(&self) -> Point<f64> {
        Point::new(self.center_lng(), self.center_lat())
    }

    /// Height of the area in degrees of latitude.
    pub fn lat_size(&self) -> f64 {
        self.north - self.south
    }

    /// Width of the area in degrees of longitude.
    pub fn lng_size(&self) -> f64 {
        self.east - self.west
    }

    /// True if the point lies in the half-open rectangle `[south, north) x [west, east)`.
    ///
    /// The northern edge is closed when it is the pole, since latitude 90 is
    /// encoded into the topmost cell. Longitude is normalised before testing.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let lat = coord.y();
        let lng = normalize_longitude(coord.x());
        let below_north = lat < self.north || (self.north >= LATITUDE_MAX && lat <= LATITUDE_MAX);
        lat >= self.south && below_north && lng >= self.west && lng < self.east
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    /// Converts the area to a closed polygon, suitable for GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}
