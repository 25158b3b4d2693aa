//! Elementwise addition, subtraction, multiplication and division
//!
//! Each family has four variants selected by suffix:
//!
//! | Suffix | Right-hand operand at `i` |
//! |---|---|
//! | `_vector` | `v1[i]`, requires `v1.len() >= s.len()` |
//! | `_scalar` | `value` |
//! | `_producer` | `o(i)` |
//! | `_indexed` | `o(i, s[i])`, with `s[i]` read before the update |
//!
//! Division follows IEEE-754: dividing by zero yields infinity or NaN rather
//! than an error.

use crate::combinators::{div, minus, plus, times};
use crate::operand::{combine, combine_unchecked, Indexed, Producer};
use crate::Result;

// Addition

/// `s[i] = s[i] + v1[i]`
///
/// # Examples
///
/// ```
/// use slicemath::plus_vector;
///
/// let mut s = [1.0, 2.0, 3.0];
/// plus_vector(&mut s, &[10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(s, [11.0, 22.0, 33.0]);
/// ```
///
/// # Errors
///
/// Returns [`SliceMathError::SizeMismatch`](crate::SliceMathError::SizeMismatch)
/// if `v1` is shorter than `s`.
pub fn plus_vector<'a>(s: &'a mut [f64], v1: &[f64]) -> Result<&'a mut [f64]> {
    combine(s, v1, plus)
}

/// `s[i] = s[i] + value`
pub fn plus_scalar(s: &mut [f64], value: f64) -> &mut [f64] {
    combine_unchecked(s, value, plus)
}

/// `s[i] = s[i] + o(i)`
pub fn plus_producer<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize) -> f64,
{
    combine_unchecked(s, Producer(o), plus)
}

/// `s[i] = s[i] + o(i, s[i])`
pub fn plus_indexed<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize, f64) -> f64,
{
    combine_unchecked(s, Indexed(o), plus)
}

// Subtraction

/// `s[i] = s[i] - v1[i]`
pub fn minus_vector<'a>(s: &'a mut [f64], v1: &[f64]) -> Result<&'a mut [f64]> {
    combine(s, v1, minus)
}

/// `s[i] = s[i] - value`
pub fn minus_scalar(s: &mut [f64], value: f64) -> &mut [f64] {
    combine_unchecked(s, value, minus)
}

/// `s[i] = s[i] - o(i)`
pub fn minus_producer<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize) -> f64,
{
    combine_unchecked(s, Producer(o), minus)
}

/// `s[i] = s[i] - o(i, s[i])`
///
/// # Examples
///
/// ```
/// use slicemath::minus_indexed;
///
/// // Subtracting half of each value from itself
/// let mut s = [2.0, 4.0, 6.0];
/// minus_indexed(&mut s, |_, x| x / 2.0);
/// assert_eq!(s, [1.0, 2.0, 3.0]);
/// ```
pub fn minus_indexed<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize, f64) -> f64,
{
    combine_unchecked(s, Indexed(o), minus)
}

// Multiplication

/// `s[i] = s[i] * v1[i]`
pub fn times_vector<'a>(s: &'a mut [f64], v1: &[f64]) -> Result<&'a mut [f64]> {
    combine(s, v1, times)
}

/// `s[i] = s[i] * value`
///
/// # Examples
///
/// ```
/// use slicemath::times_scalar;
///
/// let mut s = [1.5, -2.0];
/// assert_eq!(times_scalar(&mut s, 2.0), &[3.0, -4.0]);
/// ```
pub fn times_scalar(s: &mut [f64], value: f64) -> &mut [f64] {
    combine_unchecked(s, value, times)
}

/// `s[i] = s[i] * o(i)`
pub fn times_producer<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize) -> f64,
{
    combine_unchecked(s, Producer(o), times)
}

/// `s[i] = s[i] * o(i, s[i])`
pub fn times_indexed<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize, f64) -> f64,
{
    combine_unchecked(s, Indexed(o), times)
}

// Division

/// `s[i] = s[i] / v1[i]`
///
/// # Errors
///
/// Returns [`SliceMathError::SizeMismatch`](crate::SliceMathError::SizeMismatch)
/// if `v1` is shorter than `s`.
pub fn div_vector<'a>(s: &'a mut [f64], v1: &[f64]) -> Result<&'a mut [f64]> {
    combine(s, v1, div)
}

/// `s[i] = s[i] / value`
pub fn div_scalar(s: &mut [f64], value: f64) -> &mut [f64] {
    combine_unchecked(s, value, div)
}

/// `s[i] = s[i] / o(i)`
pub fn div_producer<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize) -> f64,
{
    combine_unchecked(s, Producer(o), div)
}

/// `s[i] = s[i] / o(i, s[i])`
pub fn div_indexed<F>(s: &mut [f64], o: F) -> &mut [f64]
where
    F: FnMut(usize, f64) -> f64,
{
    combine_unchecked(s, Indexed(o), div)
}
