use crate::core::alphabet::symbol_for;
use crate::core::area::CodeArea;
use crate::core::constants::{
    ENCODING_BASE, GRID_CODE_LENGTH, GRID_COLUMNS, GRID_ROWS, LAT_INTEGER_MULTIPLIER,
    LAT_MSP_VALUE, LATITUDE_MAX, LNG_INTEGER_MULTIPLIER, LNG_MSP_VALUE, LONGITUDE_MAX,
    MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
use crate::util::error::OlcError;

/// Checks that a code length can be produced by the encoder.
///
/// Lengths below 10 fall inside the pair section and must be even.
pub fn validate_code_length(code_length: usize) -> Result<(), OlcError> {
    if !(2..=MAX_DIGIT_COUNT).contains(&code_length)
        || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Err(OlcError::InvalidCodeLength(code_length));
    }
    Ok(())
}

/// Converts a clipped latitude and normalised longitude to integer offsets
/// from the south-west corner of the grid, in units of the finest cell.
///
/// Latitude 90 is pulled down into the topmost cell so the result decodes.
pub fn point_to_integers(lat: f64, lng: f64) -> (i64, i64) {
    let lat_max = 2 * LATITUDE_MAX as i64 * LAT_INTEGER_MULTIPLIER;
    let lng_max = 2 * LONGITUDE_MAX as i64 * LNG_INTEGER_MULTIPLIER;

    // Round at 1e-6 units first so values like 2.775 do not fall a unit short.
    // Points within that margin below a cell edge land in the cell above.
    let lat_val = (((lat + LATITUDE_MAX) * LAT_INTEGER_MULTIPLIER as f64 * 1e6).round() / 1e6)
        .floor() as i64;
    let lng_val = (((lng + LONGITUDE_MAX) * LNG_INTEGER_MULTIPLIER as f64 * 1e6).round() / 1e6)
        .floor() as i64;

    (lat_val.clamp(0, lat_max - 1), lng_val.rem_euclid(lng_max))
}

/// Builds a code of `code_length` digits from integer offsets.
///
/// The length must already have passed [`validate_code_length`].
pub fn integers_to_code(mut lat_val: i64, mut lng_val: i64, code_length: usize) -> String {
    let mut reversed: Vec<char> = Vec::with_capacity(MAX_DIGIT_COUNT + 1);

    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let row = lat_val % GRID_ROWS;
            let col = lng_val % GRID_COLUMNS;
            reversed.push(symbol_for(row * GRID_COLUMNS + col));
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }

    for i in 0..PAIR_CODE_LENGTH / 2 {
        reversed.push(symbol_for(lng_val % ENCODING_BASE));
        reversed.push(symbol_for(lat_val % ENCODING_BASE));
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
        if i == 0 {
            reversed.push(SEPARATOR);
        }
    }

    let mut code: Vec<char> = reversed.into_iter().rev().collect();
    if code_length < SEPARATOR_POSITION {
        for c in &mut code[code_length..SEPARATOR_POSITION] {
            *c = PADDING_CHARACTER;
        }
    }
    code.truncate((SEPARATOR_POSITION + 1).max(code_length + 1));
    code.into_iter().collect()
}

/// Accumulates the bounds of a sequence of digit values.
///
/// The first 10 digits alternate latitude and longitude in base 20; the
/// remaining ones each pick a row and column of a 5x4 grid. Digits beyond
/// the 15th add no precision and are ignored.
pub fn digits_to_area(digits: &[u8]) -> CodeArea {
    let digit_count = digits.len().min(MAX_DIGIT_COUNT);
    let pair_count = digit_count.min(PAIR_CODE_LENGTH);

    let mut lat_val = -(LATITUDE_MAX as i64) * LAT_INTEGER_MULTIPLIER;
    let mut lng_val = -(LONGITUDE_MAX as i64) * LNG_INTEGER_MULTIPLIER;
    let mut lat_place = LAT_MSP_VALUE;
    let mut lng_place = LNG_MSP_VALUE;

    for pair in digits[..pair_count].chunks(2) {
        lat_place /= ENCODING_BASE;
        lng_place /= ENCODING_BASE;
        lat_val += i64::from(pair[0]) * lat_place;
        if let Some(&lng_digit) = pair.get(1) {
            lng_val += i64::from(lng_digit) * lng_place;
        }
    }

    for &digit in &digits[pair_count..digit_count] {
        lat_place /= GRID_ROWS;
        lng_place /= GRID_COLUMNS;
        let digit = i64::from(digit);
        lat_val += (digit / GRID_COLUMNS) * lat_place;
        lng_val += (digit % GRID_COLUMNS) * lng_place;
    }

    let lat_mult = LAT_INTEGER_MULTIPLIER as f64;
    let lng_mult = LNG_INTEGER_MULTIPLIER as f64;
    CodeArea::new(
        lat_val as f64 / lat_mult,
        lng_val as f64 / lng_mult,
        (lat_val + lat_place) as f64 / lat_mult,
        (lng_val + lng_place) as f64 / lng_mult,
        digit_count,
    )
}
