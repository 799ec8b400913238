use crate::domain::model::SENTINEL;
use crate::utils::error::{LookupError, Result};

/// Truncating remainder of `a` by `b`, or `-1` when `b` is zero.
///
/// The sign of a non-zero result follows `a`, as with Rust's `%`.
/// `-1` is also a legitimate remainder for negative `a`; use
/// [`checked_modulo`] when the two cases must be told apart.
pub fn modulo(a: i64, b: i64) -> i64 {
    checked_modulo(a, b).unwrap_or(SENTINEL)
}

/// Like [`modulo`] but reports a zero divisor as an error.
pub fn checked_modulo(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(LookupError::DivisionByZero);
    }

    // i64::MIN % -1 overflows with `%`; the exact answer is 0.
    Ok(a.wrapping_rem(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_equal_operands() {
        assert_eq!(modulo(7, 7), 0);
    }

    #[test]
    fn test_modulo_table() {
        let cases = [
            (1, 2, 1, "a < b"),
            (31, 9, 4, "a > b"),
            (10, 0, -1, "divisor is zero"),
            (8, 2, 0, "exact division"),
        ];

        for (a, b, want, desc) in cases {
            assert_eq!(modulo(a, b), want, "{}", desc);
        }
    }

    #[test]
    fn test_zero_divisor_is_sentinel_for_any_dividend() {
        for a in [i64::MIN, -10, -1, 0, 1, 10, i64::MAX] {
            assert_eq!(modulo(a, 0), SENTINEL);
        }
    }

    #[test]
    fn test_negative_operands_truncate() {
        assert_eq!(modulo(-7, 3), -1);
        assert_eq!(modulo(7, -3), 1);
        assert_eq!(modulo(-7, -3), -1);
    }

    #[test]
    fn test_min_by_minus_one_does_not_overflow() {
        assert_eq!(modulo(i64::MIN, -1), 0);
    }

    #[test]
    fn test_checked_modulo_reports_zero_divisor() {
        assert!(matches!(
            checked_modulo(10, 0),
            Err(LookupError::DivisionByZero)
        ));
        assert_eq!(checked_modulo(31, 9).unwrap(), 4);
    }
}
