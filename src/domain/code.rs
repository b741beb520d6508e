//! Structural validation of carrier shipment codes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern every valid shipment code must match: two upper-case letters,
/// nine digits, two upper-case letters.
const ORDER_CODE_PATTERN: &str = "^[A-Z]{2}[0-9]{9}[A-Z]{2}$";

/// Return true when `code` is a well-formed shipment code.
///
/// The check is purely structural; it says nothing about whether the carrier
/// knows the code. Codes are matched verbatim, with no trimming or case folding.
///
/// ```
/// assert!(correios_sro::is_valid_order_code("AB123456789CD"));
/// assert!(!correios_sro::is_valid_order_code("AB12345678CD"));
/// ```
pub fn is_valid_order_code(code: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(ORDER_CODE_PATTERN).expect("valid regex"));
    RE.is_match(code)
}

#[cfg(test)]
mod tests {
    //! Unit tests for shipment-code validation.

    use rstest::rstest;

    use super::is_valid_order_code;

    #[rstest]
    #[case("AB123456789CD", true)]
    #[case("QJ987654321BR", true)]
    #[case("AB12345678CD", false)] // only 8 digits
    #[case("AB1234567890CD", false)] // 10 digits
    #[case("ab123456789cd", false)] // lower-case prefix/suffix
    #[case("A1123456789CD", false)]
    #[case("AB123456789C", false)]
    #[case(" AB123456789CD", false)] // padding is not normalised away
    #[case("AB123456789CD ", false)]
    #[case("", false)]
    fn matches_two_letters_nine_digits_two_letters(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_valid_order_code(code), expected);
    }
}
