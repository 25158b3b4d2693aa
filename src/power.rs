//! Powers, exponentials and logarithms
//!
//! `pow_*` raises each element (the base) to the right-hand operand (the
//! exponent). Out-of-domain inputs such as `ln(-1.0)` or `(-8.0).powf(1.0 / 3.0)`
//! produce NaN as IEEE-754 prescribes; they are not reported as errors.

use crate::apply::apply_operator;
use crate::operand::{combine, combine_unchecked, Indexed, Producer};
use crate::Result;

/// `s[i] = s[i] ^ v1[i]`
///
/// # Errors
///
/// Returns [`SliceMathError::SizeMismatch`](crate::SliceMathError::SizeMismatch)
/// if `v1` is shorter than `s`.
pub fn pow_vector<'a>(s: &'a mut [f64], v1: &[f64]) -> Result<&'a mut [f64]> {
    combine(s, v1, f64::powf)
}

/// `s[i] = s[i] ^ value`
///
/// # Examples
///
/// ```
/// use slicemath::pow_scalar;
///
/// let mut s = [2.0, 3.0, 4.0];
/// pow_scalar(&mut s, 2.0);
/// assert_eq!(s, [4.0, 9.0, 16.0]);
/// ```
pub fn pow_scalar(s: &mut [f64], value: f64) -> &mut [f64] {
    combine_unchecked(s, value, f64::powf)
}

/// `s[i] = s[i] ^ o(i)`
pub fn pow_producer<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize) -> f64,
{
    combine_unchecked(s, Producer(o), f64::powf)
}

/// `s[i] = s[i] ^ o(i, s[i])`
pub fn pow_indexed<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize, f64) -> f64,
{
    combine_unchecked(s, Indexed(o), f64::powf)
}

/// `s[i] = base ^ s[i]`
///
/// # Examples
///
/// ```
/// use slicemath::exponentiate;
///
/// let mut s = [0.0, 1.0, 10.0];
/// exponentiate(&mut s, 2.0);
/// assert_eq!(s, [1.0, 2.0, 1024.0]);
/// ```
pub fn exponentiate(s: &mut [f64], base: f64) -> &mut [f64] {
    apply_operator(s, |x| base.powf(x))
}

/// `s[i] = e ^ s[i]`
pub fn natural_exp(s: &mut [f64]) -> &mut [f64] {
    apply_operator(s, f64::exp)
}

/// `s[i] = ln(s[i])`
pub fn natural_log(s: &mut [f64]) -> &mut [f64] {
    apply_operator(s, f64::ln)
}
