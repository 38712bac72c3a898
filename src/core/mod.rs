pub mod alphabet;
pub mod area;
pub mod constants;
pub mod grid;
pub mod validate;

pub use alphabet::{digit_symbol, digit_value};
pub use area::CodeArea;
pub use constants::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    SEPARATOR, SEPARATOR_POSITION,
};
pub use grid::{digits_to_area, integers_to_code, point_to_integers, validate_code_length};
pub use validate::{is_full, is_short, is_valid};
