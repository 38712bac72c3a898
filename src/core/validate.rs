use crate::core::alphabet::{digit_value, is_code_character};
use crate::core::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
};

/// Returns true if `code` is a syntactically valid full or short code.
///
/// Case is ignored. The separator must appear exactly once, at an even
/// position between 2 and 8. Padding may only follow at least two digits,
/// must run unbroken up to the separator, and is only allowed in full-length
/// codes with nothing after the separator. A single digit after the
/// separator is never valid.
///
/// # Example
/// ```
/// use olc_rs::is_valid;
///
/// assert!(is_valid("7FG49Q00+"));
/// assert!(is_valid("CJ+2V"));
/// assert!(!is_valid("invalid"));
/// ```
pub fn is_valid(code: &str) -> bool {
    if !code.chars().all(is_code_character) {
        return false;
    }

    // All characters are ASCII from here on, so byte offsets are char offsets.
    let Some(separator) = code.find(SEPARATOR) else {
        return false;
    };
    if code.rfind(SEPARATOR) != Some(separator) {
        return false;
    }
    if !(2..=SEPARATOR_POSITION).contains(&separator) || separator % 2 != 0 {
        return false;
    }

    let (head, tail) = (&code[..separator], &code[separator + 1..]);
    if tail.len() == 1 || tail.contains(PADDING_CHARACTER) {
        return false;
    }

    if let Some(padding) = head.find(PADDING_CHARACTER) {
        if separator < SEPARATOR_POSITION || padding == 0 || padding % 2 != 0 {
            return false;
        }
        if !head[padding..].chars().all(|c| c == PADDING_CHARACTER) {
            return false;
        }
        if !tail.is_empty() {
            return false;
        }
    }

    true
}

/// Returns true if `code` is valid and has had leading digits removed.
///
/// # Example
/// ```
/// use olc_rs::is_short;
///
/// assert!(is_short("CJ+2V"));
/// assert!(!is_short("7FG49QCJ+2V"));
/// ```
pub fn is_short(code: &str) -> bool {
    is_valid(code) && code.find(SEPARATOR).is_some_and(|s| s < SEPARATOR_POSITION)
}

/// Returns true if `code` is a valid full code whose leading digits fall on the globe.
///
/// The first latitude digit can only reach 8 (160 degrees above the south
/// pole) and the first longitude digit only 17.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let mut chars = code.chars();
    let first_lat = chars.next().and_then(digit_value);
    let first_lng = chars.next().and_then(digit_value);
    match (first_lat, first_lng) {
        (Some(lat), Some(lng)) => {
            let base = ENCODING_BASE as f64;
            f64::from(lat) * base < 2.0 * LATITUDE_MAX
                && f64::from(lng) * base < 2.0 * LONGITUDE_MAX
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("7FG49Q00+", true ; "padded full")]
    #[test_case("7FG49QCJ+2V", true ; "full")]
    #[test_case("7fg49qcj+2v", true ; "lower case")]
    #[test_case("7FG49QCJ+", true ; "nothing after separator")]
    #[test_case("7FG49QCJ+2VXXXXXXX", true ; "beyond max digits")]
    #[test_case("CJ+2V", true ; "short")]
    #[test_case("QCJ+2V", false ; "odd separator")]
    #[test_case("9QCJ+2V", true ; "short four removed")]
    #[test_case("invalid", false ; "no separator")]
    #[test_case("", false ; "empty")]
    #[test_case("+", false ; "separator only")]
    #[test_case("+2V", false ; "separator at zero")]
    #[test_case("7FG49QCJ2V", false ; "missing separator")]
    #[test_case("7FG49QCJ+2V+", false ; "two separators")]
    #[test_case("7FG49QCJC+2V", false ; "separator after eight")]
    #[test_case("7FG49QCJ+2", false ; "single trailing digit")]
    #[test_case("7FG49QCA+2V", false ; "illegal letter")]
    #[test_case("7FG49QCJ+2V ", false ; "trailing space")]
    #[test_case("7FG49Q0J+", false ; "broken padding")]
    #[test_case("7FG49Q00+2V", false ; "digits after padding")]
    #[test_case("7FG49000+", false ; "odd padding start")]
    #[test_case("00000000+", false ; "padding at start")]
    #[test_case("7F000000+", true ; "two digits padded")]
    #[test_case("7FG400+", false ; "padding in short code")]
    #[test_case("7FG49QCJ+0V", false ; "padding after separator")]
    #[test_case("7FG49QCJ+2é", false ; "non ascii")]
    fn test_is_valid(code: &str, expected: bool) {
        assert_eq!(is_valid(code), expected);
    }

    #[test_case("CJ+2V", true)]
    #[test_case("9QCJ+2V", true)]
    #[test_case("G49QCJ+2V", true)]
    #[test_case("49QCJ+2V", false)]
    #[test_case("7FG49QCJ+2V", false)]
    #[test_case("7FG49Q00+", false)]
    #[test_case("CJ2V", false)]
    fn test_is_short(code: &str, expected: bool) {
        assert_eq!(is_short(code), expected);
    }

    #[test_case("7FG49QCJ+2V", true)]
    #[test_case("CFX2X2X2+X2", true ; "top row")]
    #[test_case("CVX2X2X2+X2", true ; "last longitude column")]
    #[test_case("F2X2X2X2+X2", false ; "latitude digit out of range")]
    #[test_case("CWX2X2X2+X2", false ; "longitude digit out of range")]
    #[test_case("CJ+2V", false)]
    fn test_is_full(code: &str, expected: bool) {
        assert_eq!(is_full(code), expected);
    }

    #[test]
    fn test_predicates_are_repeatable() {
        for code in ["7FG49QCJ+2V", "CJ+2V", "nope", "7FG49Q00+"] {
            assert_eq!(is_valid(code), is_valid(code));
            assert_eq!(is_short(code), is_short(code));
        }
    }
}
