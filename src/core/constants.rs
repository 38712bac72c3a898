/// The 20 symbols used as digits, in value order
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Number base of the pair section
pub const ENCODING_BASE: i64 = 20;

/// Marks the end of the 8 digit area prefix
pub const SEPARATOR: char = '+';

/// Index of the separator in a full code
pub const SEPARATOR_POSITION: usize = 8;

/// Pads codes with fewer than 8 digits up to the separator
pub const PADDING_CHARACTER: char = '0';

/// Digits covered by the base 20 pair section
pub const PAIR_CODE_LENGTH: usize = 10;

/// Digits covered by the 5x4 grid section
pub const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

/// Maximum number of significant digits in a code
pub const MAX_DIGIT_COUNT: usize = 15;

/// Number of latitude rows in each grid refinement step
pub const GRID_ROWS: i64 = 5;

/// Number of longitude columns in each grid refinement step
pub const GRID_COLUMNS: i64 = 4;

pub const LATITUDE_MAX: f64 = 90.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// Size of the finest pair cell, in units of the finest pair digit (20^3)
const PAIR_PRECISION: i64 = 8000;

/// Integer units per degree of latitude at full (15 digit) precision
pub const LAT_INTEGER_MULTIPLIER: i64 = PAIR_PRECISION * GRID_ROWS.pow(GRID_CODE_LENGTH as u32);

/// Integer units per degree of longitude at full (15 digit) precision
pub const LNG_INTEGER_MULTIPLIER: i64 =
    PAIR_PRECISION * GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);

/// Integer size of the whole 400 degree global cell on the latitude axis
pub const LAT_MSP_VALUE: i64 = LAT_INTEGER_MULTIPLIER * ENCODING_BASE * ENCODING_BASE;

/// Integer size of the whole 400 degree global cell on the longitude axis
pub const LNG_MSP_VALUE: i64 = LNG_INTEGER_MULTIPLIER * ENCODING_BASE * ENCODING_BASE;

/// Cell size in degrees for each digit pair (1..=5)
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Code length used when the caller does not ask for one
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Fraction of a removed prefix cell the reference point may drift from a
/// code's centre before that prefix can no longer be dropped
pub const SHORTEN_SAFETY_FACTOR: f64 = 0.3;

/// Number of leading digits `shorten` tries to drop, most aggressive first
pub const SHORTEN_PREFIX_LENGTHS: [usize; 3] = [6, 4, 2];
