//! Locale-independent conversion of the leading numeric part of a token.
//!
//! Both functions skip leading whitespace, read the longest numeric prefix and
//! ignore whatever follows it, so `"42px"` reads as 42. A token without a
//! numeric prefix, or whose prefix does not fit the target type, yields `None`.

fn skip_space(s: &str) -> &str {
    s.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r'])
}

fn digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}

fn sign_len(b: &[u8]) -> usize {
    usize::from(matches!(b.first(), Some(b'+' | b'-')))
}

/// Read a base-10 integer prefix
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = skip_space(s);
    let b = s.as_bytes();
    let start = sign_len(b);
    let n = digits(&b[start..]);
    if n == 0 {
        return None;
    }
    s[..start + n].parse().ok()
}

/// Read a decimal floating-point prefix, including `inf`, `infinity` and `nan`
pub(crate) fn leading_float(s: &str) -> Option<f64> {
    let s = skip_space(s);
    let b = s.as_bytes();
    let start = sign_len(b);
    let negative = b.first() == Some(&b'-');

    let rest = &b[start..];
    for word in ["infinity", "inf"] {
        if rest
            .get(..word.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(word.as_bytes()))
        {
            return Some(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }
    }
    if rest
        .get(..3)
        .is_some_and(|p| p.eq_ignore_ascii_case(b"nan"))
    {
        return Some(f64::NAN);
    }

    let mut end = start;
    let int = digits(&b[end..]);
    end += int;
    let mut frac = 0;
    if b.get(end) == Some(&b'.') {
        frac = digits(&b[end + 1..]);
        if int > 0 || frac > 0 {
            end += 1 + frac;
        }
    }
    if int == 0 && frac == 0 {
        return None;
    }

    // An exponent only counts when it has digits: "1e" reads as 1
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let exp = end + 1 + sign_len(&b[end + 1..]);
        let n = digits(&b[exp..]);
        if n > 0 {
            end = exp + n;
        }
    }

    let value: f64 = s[..end].parse().ok()?;
    // Out of range, the way strtod reports ERANGE
    if value.is_infinite() {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("42", Some(42))]
    #[case::negative("-17", Some(-17))]
    #[case::plus("+8", Some(8))]
    #[case::leading_space("  \t9", Some(9))]
    #[case::trailing_text("42px", Some(42))]
    #[case::stops_at_point("3.99", Some(3))]
    #[case::no_hex("0x1f", Some(0))]
    #[case::letters("abc", None)]
    #[case::empty("", None)]
    #[case::sign_only("-", None)]
    #[case::space_after_sign("- 4", None)]
    #[case::overflow("99999999999999999999", None)]
    fn test_leading_int(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(leading_int(input), expected);
    }

    #[rstest]
    #[case::plain("69.420", Some(69.420))]
    #[case::integer("3", Some(3.0))]
    #[case::trailing_point("5.", Some(5.0))]
    #[case::leading_point(".5", Some(0.5))]
    #[case::negative("-2.5", Some(-2.5))]
    #[case::exponent("1e3", Some(1000.0))]
    #[case::signed_exponent("2.5E-1x", Some(0.25))]
    #[case::dangling_exponent("1e", Some(1.0))]
    #[case::dangling_signed_exponent("7e+", Some(7.0))]
    #[case::trailing_text("1.5kg", Some(1.5))]
    #[case::leading_space(" 4", Some(4.0))]
    #[case::letters("notanumber", None)]
    #[case::lone_point(".", None)]
    #[case::empty("", None)]
    #[case::overflow("1e999", None)]
    fn test_leading_float(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(leading_float(input), expected);
    }

    #[test]
    fn test_leading_float_specials() {
        assert_eq!(leading_float("inf"), Some(f64::INFINITY));
        assert_eq!(leading_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(leading_float("INFx"), Some(f64::INFINITY));
        assert!(leading_float("nan").is_some_and(f64::is_nan));
        assert!(leading_float("NaN(1)").is_some_and(f64::is_nan));
    }
}
