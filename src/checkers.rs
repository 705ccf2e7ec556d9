/// Parse a base-10 integer literal.
/// Accepts an optional leading '+' or '-' followed by ASCII digits only.
/// Returns None for empty input, embedded characters (e.g. "23-about") or overflow.
pub fn parse_integer(value: &str) -> Option<i64> {
    let digits = value
        .strip_prefix('-')
        .or_else(|| value.strip_prefix('+'))
        .unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("100"), Some(100));
        assert_eq!(parse_integer("-5"), Some(-5));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("007"), Some(7));
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("9223372036854775807"), Some(i64::MAX));

        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("+-1"), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("23-about"), None);
        assert_eq!(parse_integer("hello_world-53"), None);
        assert_eq!(parse_integer("x100"), None);
        assert_eq!(parse_integer(" 1"), None);
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer("9223372036854775808"), None); // Out of range
    }
}
