//! Right-hand operand sources and the shared per-element loop
//!
//! Each binary family (`plus`, `minus`, `times`, `div`, `pow`, `max`, `min`)
//! comes in four variants that differ only in where the right-hand value for
//! index `i` comes from. [`Operand`] captures that difference; [`combine`] is
//! the single loop all of them run through, so bounds checking, iteration
//! order and aliasing behave identically across the whole family.
//!
//! | Operand | Right-hand value at `i` |
//! |---|---|
//! | `f64` | the scalar itself |
//! | `&[f64]` | `v1[i]` (length checked up front) |
//! | [`Producer`] | `o(i)` |
//! | [`Indexed`] | `o(i, s[i])` with the pre-update `s[i]` |

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::combinators::{IndexFn, IndexedOp};
use crate::{Result, SliceMathError};

/// Source of the right-hand value for each index of a binary operation
pub trait Operand {
    /// Value to combine with `current`, the element at `index` before update
    fn value_at(&mut self, index: usize, current: f64) -> f64;

    /// Checks that this operand can supply a value for every index below `len`
    fn ensure_covers(&self, _len: usize) -> Result<()> {
        Ok(())
    }
}

impl Operand for f64 {
    #[inline]
    fn value_at(&mut self, _index: usize, _current: f64) -> f64 {
        *self
    }
}

impl Operand for &[f64] {
    #[inline]
    fn value_at(&mut self, index: usize, _current: f64) -> f64 {
        self[index]
    }

    fn ensure_covers(&self, len: usize) -> Result<()> {
        ensure_len(len, self.len())
    }
}

/// Index-producer used as an operand: right-hand value is `o(i)`
#[derive(Debug, Clone, Copy)]
pub struct Producer<F>(pub F);

impl<F: IndexFn> Operand for Producer<F> {
    #[inline]
    fn value_at(&mut self, index: usize, _current: f64) -> f64 {
        (self.0)(index)
    }
}

/// Indexed-operator used as an operand: right-hand value is `o(i, s[i])`
#[derive(Debug, Clone, Copy)]
pub struct Indexed<F>(pub F);

impl<F: IndexedOp> Operand for Indexed<F> {
    #[inline]
    fn value_at(&mut self, index: usize, current: f64) -> f64 {
        (self.0)(index, current)
    }
}

/// Fails with [`SliceMathError::SizeMismatch`] when `actual < expected`
///
/// # Examples
///
/// ```
/// use slicemath::{ensure_len, SliceMathError};
///
/// assert!(ensure_len(3, 5).is_ok());
/// assert_eq!(
///     ensure_len(3, 2),
///     Err(SliceMathError::SizeMismatch { expected: 3, actual: 2 })
/// );
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "debug", err))]
pub fn ensure_len(expected: usize, actual: usize) -> Result<()> {
    if actual < expected {
        return Err(SliceMathError::SizeMismatch { expected, actual });
    }
    Ok(())
}

/// Applies `s[i] = reduce(s[i], rhs(i))` for every index, in ascending order
///
/// The operand's length requirement is checked before any element is written,
/// so on error `s` is left untouched.
///
/// # Examples
///
/// ```
/// use slicemath::{combine, Indexed};
///
/// let mut s = [1.0, 2.0, 3.0];
/// let v1 = [1.0, 1.0, 1.0];
/// combine(&mut s, &v1[..], |a, b| a * 10.0 + b).unwrap();
/// assert_eq!(s, [11.0, 21.0, 31.0]);
///
/// combine(&mut s, Indexed(|i: usize, x: f64| x + i as f64), |a, b| b - a).unwrap();
/// assert_eq!(s, [0.0, 1.0, 2.0]);
/// ```
///
/// # Errors
///
/// Returns [`SliceMathError::SizeMismatch`] if a slice operand is shorter than `s`.
pub fn combine<R, F>(s: &mut [f64], rhs: R, reduce: F) -> Result<&mut [f64]>
where
    R: Operand,
    F: Fn(f64, f64) -> f64,
{
    rhs.ensure_covers(s.len())?;
    Ok(combine_unchecked(s, rhs, reduce))
}

/// Loop shared by every binary variant; callers own the length check
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = s.len())))]
pub(crate) fn combine_unchecked<R, F>(s: &mut [f64], mut rhs: R, reduce: F) -> &mut [f64]
where
    R: Operand,
    F: Fn(f64, f64) -> f64,
{
    for (i, x) in s.iter_mut().enumerate() {
        let right = rhs.value_at(i, *x);
        *x = reduce(*x, right);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{constant, plus, times};

    #[test]
    fn test_ensure_len() {
        assert!(ensure_len(0, 0).is_ok());
        assert!(ensure_len(2, 2).is_ok());
        assert!(ensure_len(2, 3).is_ok());
        assert_eq!(
            ensure_len(4, 1),
            Err(SliceMathError::SizeMismatch {
                expected: 4,
                actual: 1
            })
        );
    }

    #[test]
    fn test_scalar_operand() {
        let mut s = [1.0, 2.0];
        combine(&mut s, 3.0, plus).unwrap();
        assert_eq!(s, [4.0, 5.0]);
    }

    #[test]
    fn test_slice_operand_longer_is_accepted() {
        let mut s = [1.0, 2.0];
        let v1 = [2.0, 3.0, 100.0];
        combine(&mut s, &v1[..], times).unwrap();
        assert_eq!(s, [2.0, 6.0]);
    }

    #[test]
    fn test_slice_operand_shorter_leaves_input_untouched() {
        let mut s = [1.0, 2.0, 3.0];
        let v1 = [9.0, 9.0];
        let result = combine(&mut s, &v1[..], plus);
        assert_eq!(
            result.unwrap_err(),
            SliceMathError::SizeMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(s, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_producer_operand() {
        let mut s = [1.0, 1.0, 1.0];
        combine(&mut s, Producer(|i: usize| i as f64), plus).unwrap();
        assert_eq!(s, [1.0, 2.0, 3.0]);

        combine(&mut s, Producer(constant(2.0)), times).unwrap();
        assert_eq!(s, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_indexed_operand_sees_pre_update_value() {
        let mut s = [1.0, 2.0, 3.0];
        let mut seen = Vec::new();
        combine(
            &mut s,
            Indexed(|i: usize, x: f64| {
                seen.push((i, x));
                x
            }),
            plus,
        )
        .unwrap();
        assert_eq!(s, [2.0, 4.0, 6.0]);
        assert_eq!(seen, vec![(0, 1.0), (1, 2.0), (2, 3.0)]);
    }

    #[test]
    fn test_producer_called_once_per_index_in_order() {
        let mut order = Vec::new();
        let mut s = [0.0; 4];
        combine(
            &mut s,
            Producer(|i: usize| {
                order.push(i);
                0.0
            }),
            plus,
        )
        .unwrap();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_vector() {
        let mut s: [f64; 0] = [];
        let v1: [f64; 0] = [];
        assert!(combine(&mut s, &v1[..], plus).unwrap().is_empty());
    }
}
