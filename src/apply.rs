//! Generic application primitives, fills and masked fills
//!
//! These are the building blocks for everything that overwrites a vector
//! without combining it with a right-hand operand.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::combinators::coerce_int;
use crate::operand::ensure_len;
use crate::Result;

/// Overwrites every element with `producer(i)`
///
/// # Examples
///
/// ```
/// use slicemath::apply;
///
/// let mut s = [0.0; 3];
/// apply(&mut s, |i| (i * i) as f64);
/// assert_eq!(s, [0.0, 1.0, 4.0]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = s.len())))]
pub fn apply<F>(s: &mut [f64], mut producer: F) -> &mut [f64]
where
    F: FnMut(usize) -> f64,
{
    for (i, x) in s.iter_mut().enumerate() {
        *x = producer(i);
    }
    s
}

/// Overwrites every element with `op(s[i])`
///
/// # Examples
///
/// ```
/// use slicemath::apply_operator;
///
/// let mut s = [1.0, 4.0, 9.0];
/// apply_operator(&mut s, f64::sqrt);
/// assert_eq!(s, [1.0, 2.0, 3.0]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = s.len())))]
pub fn apply_operator<F>(s: &mut [f64], mut op: F) -> &mut [f64]
where
    F: FnMut(f64) -> f64,
{
    for x in s.iter_mut() {
        *x = op(*x);
    }
    s
}

/// Overwrites every element with `op(i, s[i])`
///
/// # Examples
///
/// ```
/// use slicemath::apply_indexed_operator;
///
/// let mut s = [10.0, 10.0, 10.0];
/// apply_indexed_operator(&mut s, |i, x| x * i as f64);
/// assert_eq!(s, [0.0, 10.0, 20.0]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = s.len())))]
pub fn apply_indexed_operator<F>(s: &mut [f64], mut op: F) -> &mut [f64]
where
    F: FnMut(usize, f64) -> f64,
{
    for (i, x) in s.iter_mut().enumerate() {
        *x = op(i, *x);
    }
    s
}

/// Fills the vector with its own index sequence `0, 1, 2, ...`
///
/// # Examples
///
/// ```
/// use slicemath::identity;
///
/// let mut s = [7.0; 4];
/// assert_eq!(identity(&mut s), &[0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn identity(s: &mut [f64]) -> &mut [f64] {
    apply(s, coerce_int)
}

/// Sets every element to `value`
pub fn fill_scalar(s: &mut [f64], value: f64) -> &mut [f64] {
    s.fill(value);
    s
}

/// Copies `src[i]` into `dst[i]` for every index of `dst`
///
/// # Errors
///
/// Returns [`SliceMathError::SizeMismatch`](crate::SliceMathError::SizeMismatch)
/// if `src` is shorter than `dst`; `dst` is left untouched.
pub fn fill_vector<'a>(dst: &'a mut [f64], src: &[f64]) -> Result<&'a mut [f64]> {
    ensure_len(dst.len(), src.len())?;
    dst.copy_from_slice(&src[..dst.len()]);
    Ok(dst)
}

/// Sets `s[i] = value` wherever `predicate(i)` holds
///
/// # Examples
///
/// ```
/// use slicemath::fill_scalar_masked;
///
/// let mut s = [0.0; 4];
/// fill_scalar_masked(&mut s, 9.0, |i| i % 2 == 0);
/// assert_eq!(s, [9.0, 0.0, 9.0, 0.0]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = s.len())))]
pub fn fill_scalar_masked<P>(s: &mut [f64], value: f64, mut predicate: P) -> &mut [f64]
where
    P: FnMut(usize) -> bool,
{
    for (i, x) in s.iter_mut().enumerate() {
        if predicate(i) {
            *x = value;
        }
    }
    s
}

/// Sets `dst[i] = src[i]` wherever `predicate(i)` holds
///
/// # Errors
///
/// Returns [`SliceMathError::SizeMismatch`](crate::SliceMathError::SizeMismatch)
/// if `src` is shorter than `dst`, before the predicate is consulted.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = dst.len())))]
pub fn fill_vector_masked<'a, P>(
    dst: &'a mut [f64],
    src: &[f64],
    mut predicate: P,
) -> Result<&'a mut [f64]>
where
    P: FnMut(usize) -> bool,
{
    ensure_len(dst.len(), src.len())?;
    for (i, (x, &y)) in dst.iter_mut().zip(src).enumerate() {
        if predicate(i) {
            *x = y;
        }
    }
    Ok(dst)
}

/// Feeds every element to `consumer` in ascending order without modifying it
///
/// # Examples
///
/// ```
/// use slicemath::visit;
///
/// let mut total = 0.0;
/// visit(&[1.0, 2.0, 3.0], |x| total += x);
/// assert_eq!(total, 6.0);
/// ```
pub fn visit<F>(s: &[f64], mut consumer: F)
where
    F: FnMut(f64),
{
    for &x in s {
        consumer(x);
    }
}

/// Feeds every `(index, element)` pair to `consumer` in ascending order
pub fn visit_indexed<F>(s: &[f64], mut consumer: F)
where
    F: FnMut(usize, f64),
{
    for (i, &x) in s.iter().enumerate() {
        consumer(i, x);
    }
}
