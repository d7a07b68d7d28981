//! Dotted-quad text to four bytes.

/// Value returned for anything that is not a valid dotted-quad.
pub const ZERO_QUAD: [u8; 4] = [0; 4];

/// Parses `a.b.c.d` into four bytes.
///
/// Exactly four `.`-separated parts, each a decimal integer in `0..=255`
/// (surrounding whitespace and a leading sign are tolerated). Anything else
/// yields [`ZERO_QUAD`].
pub fn parse_dotted_quad(text: &str) -> [u8; 4] {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return ZERO_QUAD;
    }

    let mut out = ZERO_QUAD;
    for (slot, part) in out.iter_mut().zip(parts) {
        match part.trim().parse::<i32>() {
            Ok(v) if (0..=255).contains(&v) => *slot = v as u8,
            _ => return ZERO_QUAD,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_address() {
        assert_eq!(parse_dotted_quad("192.168.1.1"), [192, 168, 1, 1]);
        assert_eq!(parse_dotted_quad("0.0.0.0"), ZERO_QUAD);
        assert_eq!(parse_dotted_quad("255.255.255.255"), [255; 4]);
    }

    #[test]
    fn wrong_segment_count_is_zero() {
        assert_eq!(parse_dotted_quad("192.168.1"), ZERO_QUAD);
        assert_eq!(parse_dotted_quad("1.2.3.4.5"), ZERO_QUAD);
        assert_eq!(parse_dotted_quad(""), ZERO_QUAD);
    }

    #[test]
    fn out_of_range_is_zero() {
        assert_eq!(parse_dotted_quad("192.168.1.256"), ZERO_QUAD);
        assert_eq!(parse_dotted_quad("-1.2.3.4"), ZERO_QUAD);
        assert_eq!(parse_dotted_quad("99999999999.1.1.1"), ZERO_QUAD);
    }

    #[test]
    fn non_numeric_is_zero() {
        assert_eq!(parse_dotted_quad("invalid-ip"), ZERO_QUAD);
        assert_eq!(parse_dotted_quad("a.b.c.d"), ZERO_QUAD);
        assert_eq!(parse_dotted_quad("1..2.3"), ZERO_QUAD);
    }

    #[test]
    fn tolerates_padding_and_sign() {
        assert_eq!(parse_dotted_quad(" 10.0.0.1 "), [10, 0, 0, 1]);
        assert_eq!(parse_dotted_quad("+10.0.0.1"), [10, 0, 0, 1]);
    }

    #[test]
    fn mac_text_never_parses() {
        assert_eq!(parse_dotted_quad("00-00-00-00-00-00"), ZERO_QUAD);
        assert_eq!(parse_dotted_quad("A1B2C3D4E5F6"), ZERO_QUAD);
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse_dotted_quad("172.16.254.3");
        let text = first.map(|b| b.to_string()).join(".");
        assert_eq!(parse_dotted_quad(&text), first);
    }
}
