use num_traits::Num as _;

use super::{
    Num,
    base::NumberBase,
    error::ConvertError,
};

/// Parse a bare digit string (no prefix, no sign, no separators) in `base`.
pub fn parse(s: &str, base: NumberBase) -> Option<Num> {
    parse_strict(s, base).ok()
}

/// Like [`parse`] but reports why the text was refused.
pub fn parse_strict(s: &str, base: NumberBase) -> Result<Num, ConvertError> {
    if s.is_empty() {
        return Err(ConvertError::Empty);
    }
    // from_str_radix also takes '+' and '_', which are not digits here
    if let Some((position, digit)) = s.chars().enumerate().find(|(_, c)| !base.accepts(*c)) {
        return Err(ConvertError::InvalidDigit { digit, position, base });
    }
    Num::from_str_radix(s, base.place_value()).map_err(|_| ConvertError::Empty)
}

/// Split a `0b`/`0o`/`0x` prefix off `s`. Unprefixed text is decimal.
pub fn detect(s: &str) -> (NumberBase, &str) {
    let s = s.trim();
    if s.len() > 2 && s.is_char_boundary(2) {
        let (prefix, rest) = s.split_at(2);
        for base in [NumberBase::Binary, NumberBase::Octal, NumberBase::Hexadecimal] {
            if prefix.eq_ignore_ascii_case(base.prefix()) {
                return (base, rest);
            }
        }
    }
    (NumberBase::Decimal, s)
}

/// Canonical rendering: no prefix, no leading zeros, uppercase hex.
pub fn fmt(n: &Num, base: NumberBase) -> String {
    match base {
        NumberBase::Binary => format!("{n:b}"),
        NumberBase::Octal => format!("{n:o}"),
        NumberBase::Decimal => format!("{n}"),
        NumberBase::Hexadecimal => format!("{n:X}"),
    }
}

/// Uppercase hex, verbatim for every other base.
pub fn canonical_text(s: &str, base: NumberBase) -> String {
    match base {
        NumberBase::Hexadecimal => s.to_ascii_uppercase(),
        _ => s.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    #[test]
    fn fmt_test() {
        let n = Num::from(125u32);
        assert_eq!(fmt(&n, NumberBase::Binary), "1111101");
        assert_eq!(fmt(&n, NumberBase::Octal), "175");
        assert_eq!(fmt(&n, NumberBase::Decimal), "125");
        assert_eq!(fmt(&n, NumberBase::Hexadecimal), "7D");
        assert_eq!(fmt(&Num::from(0u32), NumberBase::Hexadecimal), "0");
    }

    #[test]
    fn parse_test() {
        assert_eq!(parse("7d", NumberBase::Hexadecimal), Some(Num::from(125u32)));
        assert_eq!(parse("0017", NumberBase::Octal), Some(Num::from(15u32)));
        assert_eq!(parse("", NumberBase::Decimal), None);
        assert_eq!(parse("+1", NumberBase::Decimal), None);
        assert_eq!(parse("1_0", NumberBase::Binary), None);
        assert_eq!(parse("-5", NumberBase::Decimal), None);
    }

    #[test]
    fn parse_strict_reports_first_bad_digit() {
        assert_eq!(
            parse_strict("1012", NumberBase::Binary),
            Err(ConvertError::InvalidDigit { digit: '2', position: 3, base: NumberBase::Binary })
        );
        assert_eq!(
            parse_strict("7G8", NumberBase::Hexadecimal),
            Err(ConvertError::InvalidDigit { digit: 'G', position: 1, base: NumberBase::Hexadecimal })
        );
        assert_eq!(parse_strict("", NumberBase::Octal), Err(ConvertError::Empty));
    }

    #[test]
    fn parse_beyond_u64() {
        let n = parse("FFFFFFFFFFFFFFFFFF", NumberBase::Hexadecimal).unwrap();
        assert_eq!(fmt(&n, NumberBase::Decimal), "4722366482869645213695");
    }

    #[test]
    fn detect_test() {
        assert_eq!(detect("0x7d"), (NumberBase::Hexadecimal, "7d"));
        assert_eq!(detect("0B101"), (NumberBase::Binary, "101"));
        assert_eq!(detect("0o17"), (NumberBase::Octal, "17"));
        assert_eq!(detect(" 125 "), (NumberBase::Decimal, "125"));
        assert_eq!(detect("0x"), (NumberBase::Decimal, "0x"));
        assert_eq!(detect("0"), (NumberBase::Decimal, "0"));
    }

    proptest! {
        #[test]
        fn round_trip_u128(n in any::<u128>()) {
            let n = Num::from(n);
            for base in NumberBase::ALL {
                prop_assert_eq!(parse(&fmt(&n, base), base), Some(n.clone()));
            }
        }

        #[test]
        fn round_trip_big(digits in proptest::collection::vec(any::<u32>(), 0..12)) {
            let n = BigUint::new(digits);
            for base in NumberBase::ALL {
                prop_assert_eq!(parse(&fmt(&n, base), base), Some(n.clone()));
            }
        }

        #[test]
        fn rendering_has_no_leading_zero(n in 1u64..=u64::MAX) {
            let n = Num::from(n);
            for base in NumberBase::ALL {
                prop_assert!(!fmt(&n, base).starts_with('0'));
            }
        }
    }
}
