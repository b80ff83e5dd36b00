//! Common utility functions.
use crate::field::FieldValue;

/// Converts string into unsigned number.
///
/// Signs, spaces and empty input are rejected.
pub(crate) fn parse_digital_value(input: &str) -> Option<FieldValue> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        input.parse::<FieldValue>().ok()
    }
}

/// Converts string with mnemonic value representation into its position in `values`.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<FieldValue> {
    if input.is_empty() {
        None
    } else {
        values
            .iter()
            .position(|&x| x.eq_ignore_ascii_case(input))
            .map(|i| i as FieldValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Some(0))]
    #[case("5", Some(5))]
    #[case("07", Some(7))]
    #[case("59", Some(59))]
    #[case("1234567", Some(1_234_567))]
    #[case("", None)]
    #[case("abc", None)]
    #[case("-1", None)]
    #[case("+1", None)]
    #[case("1.5", None)]
    #[case(" 1", None)]
    #[case("99999999999", None)]
    fn parse_digital_value_cases(#[case] input: &str, #[case] expected: Option<FieldValue>) {
        assert_eq!(parse_digital_value(input), expected, "input = {input}");
    }

    #[test]
    fn parse_string_value_regular() {
        let test_array = &["JAN", "FEB", "MAR", "APR"];

        assert_eq!(parse_string_value("JAN", test_array), Some(0));
        assert_eq!(parse_string_value("feb", test_array), Some(1));
        assert_eq!(parse_string_value("Mar", test_array), Some(2));
        assert_eq!(parse_string_value("aPr", test_array), Some(3));
    }

    #[test]
    fn parse_string_value_unknown() {
        let test_array = &["MON", "TUE"];

        assert_eq!(parse_string_value("", test_array), None);
        assert_eq!(parse_string_value("WED", test_array), None);
        assert_eq!(parse_string_value("MONDAY", test_array), None);
        assert_eq!(parse_string_value("MO", test_array), None);
        assert_eq!(parse_string_value("MON", &[]), None);
    }
}
