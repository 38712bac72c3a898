use crate::core::alphabet::digit_value;
use crate::core::area::CodeArea;
use crate::core::constants::{
    DEFAULT_CODE_LENGTH, LATITUDE_MAX, PADDING_CHARACTER, PAIR_RESOLUTIONS, SEPARATOR,
    SEPARATOR_POSITION, SHORTEN_PREFIX_LENGTHS, SHORTEN_SAFETY_FACTOR,
};
use crate::core::grid::{digits_to_area, integers_to_code, point_to_integers, validate_code_length};
use crate::core::validate::{is_full, is_short};
use crate::util::coord::{clip_latitude, ensure_finite, longitude_distance, normalize_longitude};
use crate::util::error::OlcError;
use tracing::debug;

/// Latitude and longitude offsets, in prefix cells, tried by [`recover_nearest`].
/// The unshifted cell comes first on each axis so it wins ties.
const NEIGHBOUR_OFFSETS: [f64; 3] = [0.0, -1.0, 1.0];

/// Encodes a coordinate into a code with `code_length` significant digits.
///
/// Latitude is clipped to [-90, 90] and longitude wrapped into [-180, 180).
/// Valid lengths are 2, 4, 6, 8 and 10 through 15.
///
/// # Example
/// ```
/// use olc_rs::encode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
/// assert_eq!(encode(20.3700625, 2.7821875, 10)?, "7FG49QCJ+2V");
/// # Ok(())
/// # }
/// ```
pub fn encode(lat: f64, lng: f64, code_length: usize) -> Result<String, OlcError> {
    ensure_finite(lat, lng)?;
    validate_code_length(code_length)?;

    let (lat_val, lng_val) = point_to_integers(clip_latitude(lat), normalize_longitude(lng));
    Ok(integers_to_code(lat_val, lng_val, code_length))
}

/// Encodes a coordinate at the default 10 digit precision (roughly 14m).
pub fn encode_default(lat: f64, lng: f64) -> Result<String, OlcError> {
    encode(lat, lng, DEFAULT_CODE_LENGTH)
}

/// Decodes a full code into the area it denotes.
///
/// Short codes must go through [`recover_nearest`] first.
///
/// # Example
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("7FG49QCJ+2V")?;
/// assert!((area.center_lat() - 20.3700625).abs() < 1e-9);
/// assert!((area.center_lng() - 2.7821875).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
pub fn decode(code: &str) -> Result<CodeArea, OlcError> {
    if is_short(code) {
        return Err(OlcError::ShortCodeDecodeRejected(code.to_string()));
    }
    if !is_full(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }

    let digits: Vec<u8> = code.chars().filter_map(digit_value).collect();
    Ok(digits_to_area(&digits))
}

/// Removes as many leading digits as the reference point makes redundant.
///
/// Returns the code unchanged (upper cased) when nothing can be removed
/// safely, including for padded codes. See [`try_shorten`] for the rules.
pub fn shorten(code: &str, ref_lat: f64, ref_lng: f64) -> Result<String, OlcError> {
    match try_shorten(code, ref_lat, ref_lng) {
        Err(OlcError::UnshortenableCode(original)) => Ok(original),
        other => other,
    }
}

/// Like [`shorten`], but reports `UnshortenableCode` instead of returning
/// the code unchanged.
///
/// Dropping 6, 4 or 2 digits is tried in that order. A prefix of `n` digits
/// denotes a cell `resolution` degrees wide; it is dropped only when the
/// reference point lies within `0.3 * resolution` of the code's centre on
/// both axes. [`recover_nearest`] tolerates up to half a cell, which leaves
/// margin for the reference point to move a little between the two calls.
///
/// # Example
/// ```
/// use olc_rs::try_shorten;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(try_shorten("7FG49QCJ+2V", 20.37, 2.78)?, "CJ+2V");
/// assert!(try_shorten("7FG49QCJ+2V", -33.45, -70.67).is_err());
/// # Ok(())
/// # }
/// ```
pub fn try_shorten(code: &str, ref_lat: f64, ref_lng: f64) -> Result<String, OlcError> {
    ensure_finite(ref_lat, ref_lng)?;
    if !is_full(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }

    let code = code.to_ascii_uppercase();
    if code.contains(PADDING_CHARACTER) {
        debug!(code = %code, "padded codes are never shortened");
        return Err(OlcError::UnshortenableCode(code));
    }

    let area = decode(&code)?;
    let lat_range = (area.center_lat() - clip_latitude(ref_lat)).abs();
    let lng_range = longitude_distance(area.center_lng(), ref_lng);
    let range = lat_range.max(lng_range);

    for removed in SHORTEN_PREFIX_LENGTHS {
        let resolution = PAIR_RESOLUTIONS[removed / 2 - 1];
        if range < resolution * SHORTEN_SAFETY_FACTOR {
            debug!(code = %code, removed, range, "shortened code");
            return Ok(code[removed..].to_string());
        }
    }

    debug!(code = %code, range, "reference point too far to shorten");
    Err(OlcError::UnshortenableCode(code))
}

/// Rebuilds a full code from a short code and a nearby reference point.
///
/// The missing prefix is taken from the reference point's own cell and
/// from the neighbouring prefix cells one step north, south, east and west
/// (diagonals included). Of these candidates, the one whose centre is
/// nearest to the reference point is returned. Longitude distance is
/// measured across the antimeridian, and ties keep the reference point's
/// own cell.
///
/// # Example
/// ```
/// use olc_rs::recover_nearest;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// assert_eq!(recover_nearest("CJ+2V", 20.37, 2.78)?, "7FG49QCJ+2V");
/// # Ok(())
/// # }
/// ```
pub fn recover_nearest(short_code: &str, ref_lat: f64, ref_lng: f64) -> Result<String, OlcError> {
    if !is_short(short_code) {
        return Err(OlcError::NotRecoverable(short_code.to_string()));
    }
    ensure_finite(ref_lat, ref_lng)?;

    let short_code = short_code.to_ascii_uppercase();
    let ref_lat = clip_latitude(ref_lat);
    let ref_lng = normalize_longitude(ref_lng);

    let separator = short_code
        .find(SEPARATOR)
        .ok_or_else(|| OlcError::NotRecoverable(short_code.clone()))?;
    let prefix_length = SEPARATOR_POSITION - separator;
    let resolution = PAIR_RESOLUTIONS[prefix_length / 2 - 1];

    let mut best: Option<(String, f64)> = None;
    for lat_offset in NEIGHBOUR_OFFSETS {
        let lat = ref_lat + lat_offset * resolution;
        if !(-LATITUDE_MAX..=LATITUDE_MAX).contains(&lat) {
            continue;
        }
        for lng_offset in NEIGHBOUR_OFFSETS {
            let lng = ref_lng + lng_offset * resolution;
            let prefix_source = encode(lat, lng, DEFAULT_CODE_LENGTH)?;
            let candidate = format!("{}{}", &prefix_source[..prefix_length], short_code);

            let Ok(area) = decode(&candidate) else {
                continue;
            };
            let d_lat = area.center_lat() - ref_lat;
            let d_lng = longitude_distance(area.center_lng(), ref_lng);
            let distance = d_lat.hypot(d_lng);
            debug!(candidate = %candidate, distance, "recovery candidate");

            if best.as_ref().is_none_or(|(_, d)| distance < *d) {
                best = Some((candidate, distance));
            }
        }
    }

    best.map(|(code, _)| code)
        .ok_or(OlcError::NotRecoverable(short_code))
}
