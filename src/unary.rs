//! Single-variant unary operations

use crate::apply::apply_operator;
use crate::combinators::neg;

/// `s[i] = -s[i]`
pub fn negate(s: &mut [f64]) -> &mut [f64] {
    apply_operator(s, neg)
}

/// `s[i] = |s[i]|`
///
/// # Examples
///
/// ```
/// use slicemath::{absolute, negate};
///
/// let mut s = [-1.0, -2.0, -3.0];
/// assert_eq!(absolute(&mut s), &[1.0, 2.0, 3.0]);
/// assert_eq!(negate(&mut s), &[-1.0, -2.0, -3.0]);
/// ```
pub fn absolute(s: &mut [f64]) -> &mut [f64] {
    apply_operator(s, f64::abs)
}

/// `s[i] = value / s[i]`
///
/// Zero elements become ±infinity (or NaN when `value` is zero too).
pub fn reciprocal_scale(s: &mut [f64], value: f64) -> &mut [f64] {
    apply_operator(s, |x| value / x)
}

/// Reverses the element order in place
///
/// Swaps `i` with `len - 1 - i` for every `i < len / 2`; no extra allocation.
///
/// # Examples
///
/// ```
/// use slicemath::reverse;
///
/// let mut s = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(reverse(&mut s), &[4.0, 3.0, 2.0, 1.0]);
/// ```
pub fn reverse(s: &mut [f64]) -> &mut [f64] {
    let len = s.len();
    for i in 0..len / 2 {
        s.swap(i, len - 1 - i);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate() {
        let mut s = [1.0, -2.0, 0.0];
        negate(&mut s);
        assert_eq!(s, [-1.0, 2.0, -0.0]);
        assert!(s[2].is_sign_negative());
    }

    #[test]
    fn test_absolute_then_negate() {
        let mut s = [-1.0, -2.0, -3.0];
        absolute(&mut s);
        assert_eq!(s, [1.0, 2.0, 3.0]);
        negate(&mut s);
        assert_eq!(s, [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_reciprocal_scale() {
        let mut s = [1.0, 2.0, 4.0];
        reciprocal_scale(&mut s, 8.0);
        assert_eq!(s, [8.0, 4.0, 2.0]);
    }

    #[test]
    fn test_reciprocal_scale_of_zero() {
        let mut s = [0.0, -0.0];
        reciprocal_scale(&mut s, 1.0);
        assert_eq!(s, [f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_reverse_even() {
        let mut s = [1.0, 2.0, 3.0, 4.0];
        reverse(&mut s);
        assert_eq!(s, [4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_reverse_odd_keeps_middle() {
        let mut s = [1.0, 2.0, 3.0];
        reverse(&mut s);
        assert_eq!(s, [3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_reverse_trivial() {
        let mut empty: [f64; 0] = [];
        assert!(reverse(&mut empty).is_empty());
        let mut one = [7.0];
        assert_eq!(reverse(&mut one), &[7.0]);
    }
}
