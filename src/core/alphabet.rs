use crate::core::constants::{CODE_ALPHABET, PADDING_CHARACTER, SEPARATOR};

const ALPHABET_BYTES: &[u8] = CODE_ALPHABET.as_bytes();

/// ASCII lookup from symbol to digit value, -1 for anything outside the alphabet.
/// Lower case symbols map to the same value as their upper case form.
static DIGIT_TABLE: [i8; 128] = build_digit_table();

const fn build_digit_table() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET_BYTES.len() {
        let b = ALPHABET_BYTES[i];
        table[b as usize] = i as i8;
        table[b.to_ascii_lowercase() as usize] = i as i8;
        i += 1;
    }
    table
}

/// Returns the digit value (0-19) of an alphabet symbol, ignoring case.
pub fn digit_value(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    u8::try_from(DIGIT_TABLE[symbol as usize]).ok()
}

/// Returns the alphabet symbol for a digit value, or `None` above 19.
pub fn digit_symbol(value: u8) -> Option<char> {
    ALPHABET_BYTES.get(value as usize).map(|&b| b as char)
}

/// Symbol for a value already reduced modulo the encoding base.
pub(crate) fn symbol_for(value: i64) -> char {
    ALPHABET_BYTES[value.rem_euclid(ALPHABET_BYTES.len() as i64) as usize] as char
}

pub fn is_code_symbol(c: char) -> bool {
    digit_value(c).is_some()
}

/// True for any character that may legally appear in a code.
pub fn is_code_character(c: char) -> bool {
    c == SEPARATOR || c == PADDING_CHARACTER || is_code_symbol(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('2', Some(0) ; "first")]
    #[test_case('9', Some(7) ; "last numeral")]
    #[test_case('C', Some(8) ; "upper c")]
    #[test_case('c', Some(8) ; "lower c")]
    #[test_case('X', Some(19) ; "upper x")]
    #[test_case('x', Some(19) ; "lower x")]
    #[test_case('A', None ; "vowel")]
    #[test_case('0', None ; "padding")]
    #[test_case('+', None ; "separator")]
    #[test_case('é', None ; "non ascii")]
    fn test_digit_value(symbol: char, expected: Option<u8>) {
        assert_eq!(digit_value(symbol), expected);
    }

    #[test]
    fn test_symbol_and_value_agree() {
        for (i, c) in CODE_ALPHABET.chars().enumerate() {
            assert_eq!(digit_symbol(i as u8), Some(c));
            assert_eq!(digit_value(c), Some(i as u8));
        }
        assert_eq!(digit_symbol(20), None);
    }

    #[test]
    fn test_code_characters() {
        assert!(is_code_character('+'));
        assert!(is_code_character('0'));
        assert!(is_code_character('v'));
        assert!(!is_code_character('1'));
        assert!(!is_code_character(' '));
    }
}
