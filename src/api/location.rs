//! Filling the missing half of a location record.
//!
//! Records arrive as JSON objects carrying an area code, a latitude and
//! longitude pair, or both. [`enrich_location`] decodes the code into
//! coordinates, or encodes the coordinates into a code, so that stored
//! records always carry both.

use crate::api::codec::{decode, encode, recover_nearest};
use crate::core::constants::DEFAULT_CODE_LENGTH;
use crate::core::validate::{is_full, is_short};
use crate::util::coord::Coordinate;
use crate::util::error::OlcError;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Field names and options for [`enrich_location`].
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFields {
    pub code_field: String,
    pub lat_field: String,
    pub lng_field: String,
    /// (longitude, latitude) used to recover short codes
    pub reference: Option<(f64, f64)>,
    /// Length of codes generated from coordinates
    pub code_length: usize,
}

impl Default for LocationFields {
    fn default() -> Self {
        Self {
            code_field: "gmaps_plus_code".to_string(),
            lat_field: "latitud".to_string(),
            lng_field: "longitud".to_string(),
            reference: None,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl LocationFields {
    /// Create config with custom field names.
    ///
    /// # Example
    /// ```
    /// use olc_rs::LocationFields;
    ///
    /// let fields = LocationFields::new("plus_code", "lat", "lng")
    ///     .reference(&(-70.6693, -33.4489))
    ///     .code_length(11);
    /// ```
    pub fn new(
        code_field: impl Into<String>,
        lat_field: impl Into<String>,
        lng_field: impl Into<String>,
    ) -> Self {
        Self {
            code_field: code_field.into(),
            lat_field: lat_field.into(),
            lng_field: lng_field.into(),
            ..Self::default()
        }
    }

    /// Reference point for recovering short codes.
    pub fn reference(mut self, coord: &impl Coordinate) -> Self {
        self.reference = Some((coord.x(), coord.y()));
        self
    }

    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }
}

/// What [`enrich_location`] added to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOutcome {
    /// Latitude and longitude were derived from the code
    CoordinatesFilled,
    /// The code was derived from latitude and longitude
    CodeFilled,
    /// Nothing could be added
    Unchanged,
}

/// Returns a copy of `record` with coordinates decoded from its code, or a
/// code encoded from its coordinates.
///
/// A code takes precedence over coordinates. Short codes are recovered
/// against the configured reference point. Coordinates may be JSON numbers
/// or numeric strings. Unusable fields are logged and left as they are.
///
/// # Example
/// ```
/// use olc_rs::{LocationFields, LocationOutcome, enrich_location};
/// use serde_json::json;
///
/// let record = json!({ "latitud": 20.3700625, "longitud": 2.7821875 });
/// let record = record.as_object().unwrap();
///
/// let (enriched, outcome) = enrich_location(record, &LocationFields::default());
/// assert_eq!(outcome, LocationOutcome::CodeFilled);
/// assert_eq!(enriched["gmaps_plus_code"], "7FG49QCJ+2V");
/// ```
pub fn enrich_location(
    record: &Map<String, Value>,
    fields: &LocationFields,
) -> (Map<String, Value>, LocationOutcome) {
    let mut enriched = record.clone();

    if let Some(code) = read_code(record, &fields.code_field) {
        match code_to_coordinates(&code, fields) {
            Ok((lat, lng)) => {
                debug!(code = %code, lat, lng, "coordinates decoded from code");
                enriched.insert(fields.lat_field.clone(), Value::from(lat));
                enriched.insert(fields.lng_field.clone(), Value::from(lng));
                return (enriched, LocationOutcome::CoordinatesFilled);
            }
            Err(e) => {
                warn!(code = %code, error = %e, "could not decode location code");
                return (enriched, LocationOutcome::Unchanged);
            }
        }
    }

    let lat = read_number(record, &fields.lat_field);
    let lng = read_number(record, &fields.lng_field);
    if let (Some(lat), Some(lng)) = (lat, lng) {
        match encode(lat, lng, fields.code_length) {
            Ok(code) => {
                debug!(code = %code, lat, lng, "code encoded from coordinates");
                enriched.insert(fields.code_field.clone(), Value::from(code));
                return (enriched, LocationOutcome::CodeFilled);
            }
            Err(e) => warn!(lat, lng, error = %e, "could not encode location coordinates"),
        }
    }

    (enriched, LocationOutcome::Unchanged)
}

fn code_to_coordinates(code: &str, fields: &LocationFields) -> Result<(f64, f64), OlcError> {
    let full = if is_short(code) {
        let (ref_lng, ref_lat) = fields
            .reference
            .ok_or_else(|| OlcError::NotRecoverable(code.to_string()))?;
        recover_nearest(code, ref_lat, ref_lng)?
    } else if is_full(code) {
        code.to_string()
    } else {
        return Err(OlcError::InvalidCode(code.to_string()));
    };

    let area = decode(&full)?;
    Ok((area.center_lat(), area.center_lng()))
}

/// Trimmed, upper cased code; empty strings count as absent.
fn read_code(record: &Map<String, Value>, field: &str) -> Option<String> {
    let code = record.get(field)?.as_str()?.trim();
    (!code.is_empty()).then(|| code.to_ascii_uppercase())
}

fn read_number(record: &Map<String, Value>, field: &str) -> Option<f64> {
    match record.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_full_code_fills_coordinates() {
        let record = object(json!({ "gmaps_plus_code": " 7fg49qcj+2v ", "name": "lote 4" }));
        let (enriched, outcome) = enrich_location(&record, &LocationFields::default());

        assert_eq!(outcome, LocationOutcome::CoordinatesFilled);
        let lat = enriched["latitud"].as_f64().unwrap_or_default();
        let lng = enriched["longitud"].as_f64().unwrap_or_default();
        assert!((lat - 20.3700625).abs() < 1e-9);
        assert!((lng - 2.7821875).abs() < 1e-9);
        assert_eq!(enriched["name"], "lote 4");
    }

    #[test]
    fn test_short_code_uses_reference() {
        let record = object(json!({ "gmaps_plus_code": "CJ+2V" }));
        let fields = LocationFields::default().reference(&(2.78, 20.37));
        let (enriched, outcome) = enrich_location(&record, &fields);

        assert_eq!(outcome, LocationOutcome::CoordinatesFilled);
        assert!(enriched.contains_key("latitud"));
    }

    #[test]
    fn test_short_code_without_reference_is_left_alone() {
        let record = object(json!({ "gmaps_plus_code": "CJ+2V" }));
        let (enriched, outcome) = enrich_location(&record, &LocationFields::default());

        assert_eq!(outcome, LocationOutcome::Unchanged);
        assert_eq!(enriched, record);
    }

    #[test]
    fn test_coordinates_fill_code() {
        let record = object(json!({ "lat": "47.365590", "lng": 8.524997 }));
        let fields = LocationFields::new("code", "lat", "lng");
        let (enriched, outcome) = enrich_location(&record, &fields);

        assert_eq!(outcome, LocationOutcome::CodeFilled);
        assert_eq!(enriched["code"], "8FVC9G8F+6X");
    }

    #[test]
    fn test_code_length_option() {
        let record = object(json!({ "latitud": 20.375, "longitud": 2.775 }));
        let fields = LocationFields::default().code_length(6);
        let (enriched, _) = enrich_location(&record, &fields);

        assert_eq!(enriched["gmaps_plus_code"], "7FG49Q00+");
    }

    #[test]
    fn test_invalid_inputs_unchanged() {
        let fields = LocationFields::default();
        for record in [
            json!({ "gmaps_plus_code": "not a code", "latitud": 1.0, "longitud": 2.0 }),
            json!({ "latitud": "north", "longitud": 2.0 }),
            json!({ "gmaps_plus_code": "" }),
            json!({}),
        ] {
            let record = object(record);
            let (enriched, outcome) = enrich_location(&record, &fields);
            assert_eq!(outcome, LocationOutcome::Unchanged);
            assert_eq!(enriched, record);
        }
    }
}
