//! Function-value shapes and ready-made producers/operators
//!
//! Every elementwise operation in this crate is expressed in terms of four
//! closure shapes:
//!
//! | Shape | Signature | Used by |
//! |---|---|---|
//! | index-producer ([`IndexFn`]) | `FnMut(usize) -> f64` | `apply`, `*_producer` variants |
//! | value-operator | `FnMut(f64) -> f64` | `apply_operator` |
//! | indexed-operator ([`IndexedOp`]) | `FnMut(usize, f64) -> f64` | `apply_indexed_operator`, `*_indexed` variants |
//! | reduce-operator | `Fn(f64, f64) -> f64` | [`combine`](crate::operand::combine) |
//!
//! Masked fills additionally take a caller-supplied predicate
//! `FnMut(usize) -> bool`, and `visit`/`visit_indexed` take read-only
//! consumers. Public functions spell these out as plain `Fn*` bounds so closure
//! argument types are inferred at the call site; the two named traits bound the
//! [`Operand`](crate::operand::Operand) wrappers, where closures arrive already
//! typed. Producers and operators are taken as `FnMut`: they are
//! expected to be pure, but a stateful closure (a counter, say) is accepted and
//! is called exactly once per index in ascending order.
//!
//! # Examples
//!
//! ```
//! use slicemath::combinators::{constant, get, plus};
//! use slicemath::{apply, combine, Producer};
//!
//! let lookup = [1.0, 2.0, 3.0];
//! let mut s = [0.0; 3];
//! apply(&mut s, get(&lookup));
//! combine(&mut s, Producer(constant(10.0)), plus).unwrap();
//! assert_eq!(s, [11.0, 12.0, 13.0]);
//! ```

/// Index-producer: `index -> value`
pub trait IndexFn: FnMut(usize) -> f64 {}
impl<F: FnMut(usize) -> f64> IndexFn for F {}

/// Indexed-operator: `(index, value) -> value`
pub trait IndexedOp: FnMut(usize, f64) -> f64 {}
impl<F: FnMut(usize, f64) -> f64> IndexedOp for F {}

/// Producer that ignores the index and always yields `value`
///
/// # Examples
///
/// ```
/// use slicemath::combinators::constant;
///
/// let c = constant(2.5);
/// assert_eq!(c(0), 2.5);
/// assert_eq!(c(1000), 2.5);
/// ```
pub fn constant(value: f64) -> impl Fn(usize) -> f64 + Copy {
    move |_| value
}

/// Producer yielding `values[index]`
///
/// Borrows `values` without copying. Indexing past its end panics, so it must
/// be at least as long as any vector it is combined with.
///
/// # Examples
///
/// ```
/// use slicemath::combinators::get;
///
/// let values = [4.0, 5.0];
/// let f = get(&values);
/// assert_eq!(f(1), 5.0);
/// ```
pub fn get(values: &[f64]) -> impl Fn(usize) -> f64 + Copy + '_ {
    move |i| values[i]
}

/// Producer yielding `values[index]` converted to `f64`
///
/// # Examples
///
/// ```
/// use slicemath::combinators::coerce_ints;
///
/// let ints = [3_i64, -7];
/// let f = coerce_ints(&ints);
/// assert_eq!(f(1), -7.0);
/// ```
pub fn coerce_ints(values: &[i64]) -> impl Fn(usize) -> f64 + Copy + '_ {
    move |i| values[i] as f64
}

/// Converts an index to `f64`; as a producer it yields the index sequence
#[inline]
pub fn coerce_int(index: usize) -> f64 {
    index as f64
}

/// `left + right`
#[inline]
pub fn plus(left: f64, right: f64) -> f64 {
    left + right
}

/// `left - right`
#[inline]
pub fn minus(left: f64, right: f64) -> f64 {
    left - right
}

/// `left * right`
#[inline]
pub fn times(left: f64, right: f64) -> f64 {
    left * right
}

/// `left / right` (IEEE-754: dividing by zero yields ±inf or NaN)
#[inline]
pub fn div(left: f64, right: f64) -> f64 {
    left / right
}

/// `-value`
#[inline]
pub fn neg(value: f64) -> f64 {
    -value
}

/// Larger of `left` and `right`
///
/// `+inf` wins over everything, then NaN in either operand yields NaN, and
/// `+0.0` ranks above `-0.0`.
///
/// # Examples
///
/// ```
/// use slicemath::combinators::max;
///
/// assert_eq!(max(1.0, 2.0), 2.0);
/// assert!(max(1.0, f64::NAN).is_nan());
/// assert_eq!(max(f64::NAN, f64::INFINITY), f64::INFINITY);
/// assert!(max(-0.0, 0.0).is_sign_positive());
/// ```
#[inline]
pub fn max(left: f64, right: f64) -> f64 {
    if left == f64::INFINITY || right == f64::INFINITY {
        return f64::INFINITY;
    }
    if left.is_nan() || right.is_nan() {
        return f64::NAN;
    }
    if left == right {
        return if left.is_sign_negative() { right } else { left };
    }
    if left > right {
        left
    } else {
        right
    }
}

/// Smaller of `left` and `right`
///
/// `-inf` wins over everything, then NaN in either operand yields NaN, and
/// `-0.0` ranks below `+0.0`.
#[inline]
pub fn min(left: f64, right: f64) -> f64 {
    if left == f64::NEG_INFINITY || right == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if left.is_nan() || right.is_nan() {
        return f64::NAN;
    }
    if left == right {
        return if left.is_sign_negative() { left } else { right };
    }
    if left < right {
        left
    } else {
        right
    }
}
