use crate::api::codec::{decode, encode, recover_nearest, shorten};
use crate::core::area::CodeArea;
use crate::util::coord::Coordinate;
use crate::util::error::OlcError;
use geo_types::{Point, Polygon};
use serde::{Deserialize, Serialize};

/// A full area code together with the rectangle it denotes.
///
/// # Example
///
/// ```
/// use olc_rs::CodeCell;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// // Coordinates are (longitude, latitude)
/// let cell = CodeCell::from_wgs84(&(2.7821875, 20.3700625), 10)?;
/// assert_eq!(cell.code, "7FG49QCJ+2V");
///
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeCell {
    /// Upper case full code
    pub code: String,
    /// Decoded bounds of `code`
    pub area: CodeArea,
}

impl CodeCell {
    /// Create a CodeCell from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use olc_rs::CodeCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), olc_rs::OlcError> {
    /// // From tuple
    /// let cell = CodeCell::from_wgs84(&(8.524997, 47.365590), 10)?;
    /// // From Point
    /// let same = CodeCell::from_wgs84(&Point::new(8.524997, 47.365590), 10)?;
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, code_length: usize) -> Result<Self, OlcError> {
        let code = encode(coord.y(), coord.x(), code_length)?;
        let area = decode(&code)?;
        Ok(Self { code, area })
    }

    /// Create a CodeCell from a full code string, in any case.
    pub fn from_code(code: &str) -> Result<Self, OlcError> {
        let area = decode(code)?;
        Ok(Self {
            code: code.to_ascii_uppercase(),
            area,
        })
    }

    /// Create a CodeCell from a short code and a nearby reference point.
    pub fn recover(short_code: &str, reference: &impl Coordinate) -> Result<Self, OlcError> {
        let code = recover_nearest(short_code, reference.y(), reference.x())?;
        Self::from_code(&code)
    }

    /// Returns this cell's code with as many leading digits removed as
    /// `reference` allows.
    pub fn shortened(&self, reference: &impl Coordinate) -> Result<String, OlcError> {
        shorten(&self.code, reference.y(), reference.x())
    }

    /// Returns the centre of the cell as a `Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        self.area.center()
    }

    /// Number of significant digits in the code.
    pub fn code_length(&self) -> usize {
        self.area.code_length
    }

    /// Converts this cell to a rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.area.to_polygon()
    }
}
