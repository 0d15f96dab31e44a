// Exact decimal conversion for price and quantity strings.
// Values keep the scale they were transmitted with, so "0.00010000"
// encodes back to "0.00010000".

use rust_decimal::Decimal;

use super::error::ConversionError;

/// Parses a plain decimal string (`[-]digits[.digits]`).
///
/// Exponent notation, digit separators and empty strings are rejected, as
/// is anything with more fractional digits than `Decimal` can hold exactly.
pub fn decode_decimal(field: &str, raw: &str) -> Result<Decimal, ConversionError> {
    let malformed = || ConversionError::MalformedNumber {
        field: field.to_string(),
        raw: raw.to_string(),
    };

    if !is_plain_decimal(raw) {
        return Err(malformed());
    }

    Decimal::from_str_exact(raw).map_err(|_| malformed())
}

/// Canonical wire form: the decimal text at its stored scale.
pub fn encode_decimal(value: &Decimal) -> String {
    value.to_string()
}

fn is_plain_decimal(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_preserves_transmitted_scale() {
        let value = decode_decimal("price", "0.00010000").unwrap();
        assert_eq!(value, dec!(0.0001));
        assert_eq!(value.scale(), 8);
        assert_eq!(encode_decimal(&value), "0.00010000");
    }

    #[test]
    fn test_decode_plain_forms() {
        assert_eq!(decode_decimal("origQty", "1.5").unwrap(), dec!(1.5));
        assert_eq!(decode_decimal("origQty", "25000").unwrap(), dec!(25000));
        assert_eq!(decode_decimal("stopPrice", "0").unwrap(), Decimal::ZERO);
        assert_eq!(decode_decimal("price", "-2.50").unwrap(), dec!(-2.5));
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        for raw in ["", "abc", "1.2.3", "1e5", "1_000", ".5", "5.", "-", " 1", "NaN"] {
            let err = decode_decimal("price", raw).unwrap_err();
            assert_eq!(
                err,
                ConversionError::MalformedNumber {
                    field: "price".to_string(),
                    raw: raw.to_string(),
                },
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_decode_rejects_unrepresentable_precision() {
        let raw = "0.00000000000000000000000000001";
        assert!(decode_decimal("price", raw).is_err());
    }
}
