//! # olc-rs
//!
//! Encode latitude/longitude pairs into Open Location Code area codes
//! ("plus codes"), decode them back into rectangles, and shorten or recover
//! codes relative to a nearby reference point.
//!
//! ### 1. Free functions - the codec itself
//!
//! ```
//! use olc_rs::{decode, encode, is_short, is_valid, recover_nearest, shorten};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let code = encode(20.3700625, 2.7821875, 10)?;
//! assert_eq!(code, "7FG49QCJ+2V");
//! assert!(is_valid(&code));
//!
//! let area = decode(&code)?;
//! println!("{} {}", area.center_lat(), area.center_lng());
//!
//! let short = shorten(&code, 20.37, 2.78)?;
//! assert!(is_short(&short));
//! assert_eq!(recover_nearest(&short, 20.37, 2.78)?, code);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `CodeCell` - a code with its area
//!
//! ```
//! use olc_rs::CodeCell;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let cell = CodeCell::from_wgs84(&point! { x: 8.524997, y: 47.365590 }, 10)?;
//! println!("{}", cell.code);
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `enrich_location` - JSON records
//!
//! Fill in coordinates from a code, or a code from coordinates:
//!
//! ```
//! use olc_rs::{LocationFields, enrich_location};
//! use serde_json::json;
//!
//! let record = json!({ "gmaps_plus_code": "7FG49QCJ+2V" });
//! let (enriched, _) = enrich_location(record.as_object().unwrap(), &LocationFields::default());
//! assert!(enriched.contains_key("latitud"));
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    CodeCell, LocationFields, LocationOutcome, decode, encode, encode_default, enrich_location,
    recover_nearest, shorten, try_shorten,
};
pub use crate::core::{
    CODE_ALPHABET, CodeArea, DEFAULT_CODE_LENGTH, MAX_DIGIT_COUNT, PADDING_CHARACTER,
    PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION, digit_symbol, digit_value, is_full,
    is_short, is_valid,
};
pub use crate::util::{Coordinate, OlcError, clip_latitude, normalize_longitude};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), OlcError> {
        let code = encode(20.3700625, 2.7821875, 10)?;
        assert_eq!(code, "7FG49QCJ+2V");
        assert!(is_valid(&code));
        assert!(!is_short(&code));

        let area = decode(&code)?;
        assert!(area.contains(&(2.7821875, 20.3700625)));

        let short = shorten(&code, 20.37, 2.78)?;
        assert_eq!(short, "CJ+2V");
        assert!(is_short(&short));
        assert_eq!(recover_nearest(&short, 20.37, 2.78)?, code);
        Ok(())
    }

    #[test]
    fn test_reference_vectors() -> Result<(), OlcError> {
        assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
        assert!(is_valid("7FG49Q00+"));
        assert!(!is_valid("invalid"));
        assert!(is_short("CJ+2V"));
        assert!(!is_short("7FG49QCJ+2V"));
        Ok(())
    }

    #[test]
    fn test_recover_from_a_moved_reference() -> Result<(), OlcError> {
        // Shortened in one place, recovered from a point about 1.5km away.
        let code = encode(-33.4489, -70.6693, 10)?;
        let short = shorten(&code, -33.45, -70.67)?;
        assert_eq!(short.len(), code.len() - 6);
        assert_eq!(recover_nearest(&short, -33.46, -70.66)?, code);
        Ok(())
    }

    #[test]
    fn test_cell_matches_free_functions() -> Result<(), OlcError> {
        let pt = point! { x: 8.524997, y: 47.365590 };
        let cell = CodeCell::from_wgs84(&pt, 11)?;

        assert_eq!(cell.code, encode(47.365590, 8.524997, 11)?);
        assert_eq!(cell.area, decode(&cell.code)?);
        assert!(cell.area.contains(&pt));
        Ok(())
    }

    #[test]
    fn test_every_length_round_trips() -> Result<(), OlcError> {
        let (lat, lng) = (-41.2730625, 174.7859375);
        let mut previous: Option<CodeArea> = None;

        for length in [2, 4, 6, 8, 10, 11, 12, 13, 14, 15] {
            let area = decode(&encode(lat, lng, length)?)?;
            assert!(area.contains(&(lng, lat)));
            if let Some(coarser) = previous {
                assert!(area.lat_size() < coarser.lat_size());
                assert!(area.south >= coarser.south && area.north <= coarser.north);
            }
            previous = Some(area);
        }
        Ok(())
    }

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CodeArea>();
        assert_send_sync::<CodeCell>();
        assert_send_sync::<LocationFields>();
        assert_send_sync::<OlcError>();
    }
}
