//! Elementwise maximum and minimum
//!
//! Comparison goes through [`max`] and [`min`] from the combinators: a NaN
//! on either side makes the result NaN (unless the other side is the winning
//! infinity), and `+0.0` ranks above `-0.0`.

use crate::combinators::{max, min};
use crate::operand::{combine, combine_unchecked, Indexed, Producer};
use crate::Result;

/// `s[i] = max(s[i], v1[i])`
///
/// # Examples
///
/// ```
/// use slicemath::max_vector;
///
/// let mut s = [3.0, 1.0, 2.0];
/// max_vector(&mut s, &[2.0, 2.0, 2.0]).unwrap();
/// assert_eq!(s, [3.0, 2.0, 2.0]);
/// ```
///
/// # Errors
///
/// Returns [`SliceMathError::SizeMismatch`](crate::SliceMathError::SizeMismatch)
/// if `v1` is shorter than `s`.
pub fn max_vector<'a>(s: &'a mut [f64], v1: &[f64]) -> Result<&'a mut [f64]> {
    combine(s, v1, max)
}

/// `s[i] = max(s[i], value)`, i.e. clamps from below
pub fn max_scalar(s: &mut [f64], value: f64) -> &mut [f64] {
    combine_unchecked(s, value, max)
}

/// `s[i] = max(s[i], o(i))`
pub fn max_producer<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize) -> f64,
{
    combine_unchecked(s, Producer(o), max)
}

/// `s[i] = max(s[i], o(i, s[i]))`
pub fn max_indexed<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize, f64) -> f64,
{
    combine_unchecked(s, Indexed(o), max)
}

/// `s[i] = min(s[i], v1[i])`
///
/// # Errors
///
/// Returns [`SliceMathError::SizeMismatch`](crate::SliceMathError::SizeMismatch)
/// if `v1` is shorter than `s`.
pub fn min_vector<'a>(s: &'a mut [f64], v1: &[f64]) -> Result<&'a mut [f64]> {
    combine(s, v1, min)
}

/// `s[i] = min(s[i], value)`, i.e. clamps from above
pub fn min_scalar(s: &mut [f64], value: f64) -> &mut [f64] {
    combine_unchecked(s, value, min)
}

/// `s[i] = min(s[i], o(i))`
pub fn min_producer<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize) -> f64,
{
    combine_unchecked(s, Producer(o), min)
}

/// `s[i] = min(s[i], o(i, s[i]))`
pub fn min_indexed<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize, f64) -> f64,
{
    combine_unchecked(s, Indexed(o), min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SliceMathError;

    #[test]
    fn test_max_vector() {
        let mut s = [3.0, 1.0, 2.0];
        max_vector(&mut s, &[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(s, [3.0, 2.0, 2.0]);
    }

    #[test]
    fn test_min_vector() {
        let mut s = [3.0, 1.0, 2.0];
        min_vector(&mut s, &[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(s, [2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_extrema_size_mismatch() {
        let mut s = [1.0, 2.0, 3.0];
        let err = SliceMathError::SizeMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(max_vector(&mut s, &[0.0, 0.0]).unwrap_err(), err);
        assert_eq!(min_vector(&mut s, &[0.0, 0.0]).unwrap_err(), err);
        assert_eq!(s, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_scalar_clamps() {
        let mut s = [-5.0, 0.0, 5.0];
        max_scalar(min_scalar(&mut s, 1.0), -1.0);
        assert_eq!(s, [-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_producer_and_indexed() {
        let mut s = [0.0, 5.0, 0.0];
        max_producer(&mut s, |i| i as f64);
        assert_eq!(s, [0.0, 5.0, 2.0]);
        min_producer(&mut s, |_| 3.0);
        assert_eq!(s, [0.0, 3.0, 2.0]);

        let mut s = [1.0, -2.0, 3.0];
        max_indexed(&mut s, |_, x| -x);
        assert_eq!(s, [1.0, 2.0, 3.0]);
        min_indexed(&mut s, |i, _| i as f64);
        assert_eq!(s, [0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_nan_operand_propagates() {
        let mut s = [1.0, f64::NAN];
        max_scalar(&mut s, f64::NAN);
        assert!(s.iter().all(|x| x.is_nan()));

        let mut s = [f64::NAN];
        min_scalar(&mut s, 4.0);
        assert!(s[0].is_nan());

        let mut s = [2.0, 3.0];
        max_vector(&mut s, &[f64::NAN, 1.0]).unwrap();
        assert!(s[0].is_nan());
        assert_eq!(s[1], 3.0);

        let mut s = [2.0, 3.0];
        min_producer(&mut s, |i| if i == 1 { f64::NAN } else { 0.0 });
        assert_eq!(s[0], 0.0);
        assert!(s[1].is_nan());
    }

    #[test]
    fn test_winning_infinity_beats_nan() {
        let mut s = [f64::NAN];
        max_scalar(&mut s, f64::INFINITY);
        assert_eq!(s, [f64::INFINITY]);

        let mut s = [f64::NAN];
        min_indexed(&mut s, |_, _| f64::NEG_INFINITY);
        assert_eq!(s, [f64::NEG_INFINITY]);
    }

    #[test]
    fn test_signed_zero_ordering() {
        let mut s = [-0.0, 0.0];
        max_vector(&mut s, &[0.0, -0.0]).unwrap();
        assert!(s.iter().all(|x| *x == 0.0 && x.is_sign_positive()));

        let mut s = [-0.0, 0.0];
        min_vector(&mut s, &[0.0, -0.0]).unwrap();
        assert!(s.iter().all(|x| *x == 0.0 && x.is_sign_negative()));
    }
}
