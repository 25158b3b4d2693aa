//! Method-call syntax for every operation
//!
//! [`ElementwiseExt`] is implemented for `[f64]`, so anything that derefs to a
//! mutable slice (arrays, `Vec<f64>`, `Box<[f64]>`) can be piped through a chain
//! of operations:
//!
//! ```
//! use slicemath::ElementwiseExt;
//!
//! let mut s = vec![1.0, 2.0, 3.0, 4.0];
//! s.plus_scalar(1.0).times_scalar(2.0).reverse_elements();
//! assert_eq!(s, [10.0, 8.0, 6.0, 4.0]);
//!
//! // Vector-operand variants return a Result, so chains continue after `?`
//! fn shift(s: &mut [f64], by: &[f64]) -> slicemath::Result<()> {
//!     s.minus_vector(by)?.absolute();
//!     Ok(())
//! }
//! let mut t = [1.0, 2.0];
//! shift(&mut t, &[3.0, 3.0]).unwrap();
//! assert_eq!(t, [2.0, 1.0]);
//! assert!(shift(&mut t, &[1.0]).is_err());
//! ```

use crate::{apply, arith, extrema, power, unary, Result};

/// In-place elementwise operations as methods on `[f64]`
pub trait ElementwiseExt {
    /// See [`apply`](crate::apply::apply)
    fn apply_with<F: FnMut(usize) -> f64>(&mut self, producer: F) -> &mut [f64];

    /// See [`apply_operator`](crate::apply::apply_operator)
    fn apply_operator<F: FnMut(f64) -> f64>(&mut self, op: F) -> &mut [f64];

    /// See [`apply_indexed_operator`](crate::apply::apply_indexed_operator)
    fn apply_indexed_operator<F: FnMut(usize, f64) -> f64>(&mut self, op: F) -> &mut [f64];

    /// See [`identity`](crate::apply::identity)
    fn identity(&mut self) -> &mut [f64];

    /// See [`fill_scalar`](crate::apply::fill_scalar)
    fn fill_scalar(&mut self, value: f64) -> &mut [f64];

    /// See [`fill_vector`](crate::apply::fill_vector)
    fn fill_vector(&mut self, src: &[f64]) -> Result<&mut [f64]>;

    /// See [`fill_scalar_masked`](crate::apply::fill_scalar_masked)
    fn fill_scalar_masked<P: FnMut(usize) -> bool>(
        &mut self,
        value: f64,
        predicate: P,
    ) -> &mut [f64];

    /// See [`fill_vector_masked`](crate::apply::fill_vector_masked)
    fn fill_vector_masked<P: FnMut(usize) -> bool>(
        &mut self,
        src: &[f64],
        predicate: P,
    ) -> Result<&mut [f64]>;

    /// See [`plus_vector`](crate::arith::plus_vector)
    fn plus_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]>;

    /// See [`plus_scalar`](crate::arith::plus_scalar)
    fn plus_scalar(&mut self, value: f64) -> &mut [f64];

    /// See [`plus_producer`](crate::arith::plus_producer)
    fn plus_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`plus_indexed`](crate::arith::plus_indexed)
    fn plus_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`minus_vector`](crate::arith::minus_vector)
    fn minus_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]>;

    /// See [`minus_scalar`](crate::arith::minus_scalar)
    fn minus_scalar(&mut self, value: f64) -> &mut [f64];

    /// See [`minus_producer`](crate::arith::minus_producer)
    fn minus_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`minus_indexed`](crate::arith::minus_indexed)
    fn minus_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`times_vector`](crate::arith::times_vector)
    fn times_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]>;

    /// See [`times_scalar`](crate::arith::times_scalar)
    fn times_scalar(&mut self, value: f64) -> &mut [f64];

    /// See [`times_producer`](crate::arith::times_producer)
    fn times_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`times_indexed`](crate::arith::times_indexed)
    fn times_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`div_vector`](crate::arith::div_vector)
    fn div_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]>;

    /// See [`div_scalar`](crate::arith::div_scalar)
    fn div_scalar(&mut self, value: f64) -> &mut [f64];

    /// See [`div_producer`](crate::arith::div_producer)
    fn div_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`div_indexed`](crate::arith::div_indexed)
    fn div_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`pow_vector`](crate::power::pow_vector)
    fn pow_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]>;

    /// See [`pow_scalar`](crate::power::pow_scalar)
    fn pow_scalar(&mut self, value: f64) -> &mut [f64];

    /// See [`pow_producer`](crate::power::pow_producer)
    fn pow_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`pow_indexed`](crate::power::pow_indexed)
    fn pow_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`max_vector`](crate::extrema::max_vector)
    fn max_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]>;

    /// See [`max_scalar`](crate::extrema::max_scalar)
    fn max_scalar(&mut self, value: f64) -> &mut [f64];

    /// See [`max_producer`](crate::extrema::max_producer)
    fn max_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`max_indexed`](crate::extrema::max_indexed)
    fn max_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`min_vector`](crate::extrema::min_vector)
    fn min_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]>;

    /// See [`min_scalar`](crate::extrema::min_scalar)
    fn min_scalar(&mut self, value: f64) -> &mut [f64];

    /// See [`min_producer`](crate::extrema::min_producer)
    fn min_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`min_indexed`](crate::extrema::min_indexed)
    fn min_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64];

    /// See [`negate`](crate::unary::negate)
    fn negate(&mut self) -> &mut [f64];

    /// See [`absolute`](crate::unary::absolute)
    fn absolute(&mut self) -> &mut [f64];

    /// See [`reciprocal_scale`](crate::unary::reciprocal_scale)
    fn reciprocal_scale(&mut self, value: f64) -> &mut [f64];

    /// See [`reverse`](crate::unary::reverse)
    ///
    /// Named apart from the inherent `<[T]>::reverse`, which would shadow it
    /// and return `()`.
    fn reverse_elements(&mut self) -> &mut [f64];

    /// See [`natural_log`](crate::power::natural_log)
    fn natural_log(&mut self) -> &mut [f64];

    /// See [`natural_exp`](crate::power::natural_exp)
    fn natural_exp(&mut self) -> &mut [f64];

    /// See [`exponentiate`](crate::power::exponentiate)
    fn exponentiate(&mut self, base: f64) -> &mut [f64];
}

impl ElementwiseExt for [f64] {
    fn apply_with<F: FnMut(usize) -> f64>(&mut self, producer: F) -> &mut [f64] {
        apply::apply(self, producer)
    }

    fn apply_operator<F: FnMut(f64) -> f64>(&mut self, op: F) -> &mut [f64] {
        apply::apply_operator(self, op)
    }

    fn apply_indexed_operator<F: FnMut(usize, f64) -> f64>(&mut self, op: F) -> &mut [f64] {
        apply::apply_indexed_operator(self, op)
    }

    fn identity(&mut self) -> &mut [f64] {
        apply::identity(self)
    }

    fn fill_scalar(&mut self, value: f64) -> &mut [f64] {
        apply::fill_scalar(self, value)
    }

    fn fill_vector(&mut self, src: &[f64]) -> Result<&mut [f64]> {
        apply::fill_vector(self, src)
    }

    fn fill_scalar_masked<P: FnMut(usize) -> bool>(
        &mut self,
        value: f64,
        predicate: P,
    ) -> &mut [f64] {
        apply::fill_scalar_masked(self, value, predicate)
    }

    fn fill_vector_masked<P: FnMut(usize) -> bool>(
        &mut self,
        src: &[f64],
        predicate: P,
    ) -> Result<&mut [f64]> {
        apply::fill_vector_masked(self, src, predicate)
    }

    fn plus_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]> {
        arith::plus_vector(self, v1)
    }

    fn plus_scalar(&mut self, value: f64) -> &mut [f64] {
        arith::plus_scalar(self, value)
    }

    fn plus_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64] {
        arith::plus_producer(self, o)
    }

    fn plus_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64] {
        arith::plus_indexed(self, o)
    }

    fn minus_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]> {
        arith::minus_vector(self, v1)
    }

    fn minus_scalar(&mut self, value: f64) -> &mut [f64] {
        arith::minus_scalar(self, value)
    }

    fn minus_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64] {
        arith::minus_producer(self, o)
    }

    fn minus_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64] {
        arith::minus_indexed(self, o)
    }

    fn times_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]> {
        arith::times_vector(self, v1)
    }

    fn times_scalar(&mut self, value: f64) -> &mut [f64] {
        arith::times_scalar(self, value)
    }

    fn times_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64] {
        arith::times_producer(self, o)
    }

    fn times_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64] {
        arith::times_indexed(self, o)
    }

    fn div_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]> {
        arith::div_vector(self, v1)
    }

    fn div_scalar(&mut self, value: f64) -> &mut [f64] {
        arith::div_scalar(self, value)
    }

    fn div_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64] {
        arith::div_producer(self, o)
    }

    fn div_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64] {
        arith::div_indexed(self, o)
    }

    fn pow_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]> {
        power::pow_vector(self, v1)
    }

    fn pow_scalar(&mut self, value: f64) -> &mut [f64] {
        power::pow_scalar(self, value)
    }

    fn pow_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64] {
        power::pow_producer(self, o)
    }

    fn pow_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64] {
        power::pow_indexed(self, o)
    }

    fn max_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]> {
        extrema::max_vector(self, v1)
    }

    fn max_scalar(&mut self, value: f64) -> &mut [f64] {
        extrema::max_scalar(self, value)
    }

    fn max_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64] {
        extrema::max_producer(self, o)
    }

    fn max_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64] {
        extrema::max_indexed(self, o)
    }

    fn min_vector(&mut self, v1: &[f64]) -> Result<&mut [f64]> {
        extrema::min_vector(self, v1)
    }

    fn min_scalar(&mut self, value: f64) -> &mut [f64] {
        extrema::min_scalar(self, value)
    }

    fn min_producer<F: FnMut(usize) -> f64>(&mut self, o: F) -> &mut [f64] {
        extrema::min_producer(self, o)
    }

    fn min_indexed<F: FnMut(usize, f64) -> f64>(&mut self, o: F) -> &mut [f64] {
        extrema::min_indexed(self, o)
    }

    fn negate(&mut self) -> &mut [f64] {
        unary::negate(self)
    }

    fn absolute(&mut self) -> &mut [f64] {
        unary::absolute(self)
    }

    fn reciprocal_scale(&mut self, value: f64) -> &mut [f64] {
        unary::reciprocal_scale(self, value)
    }

    fn reverse_elements(&mut self) -> &mut [f64] {
        unary::reverse(self)
    }

    fn natural_log(&mut self) -> &mut [f64] {
        power::natural_log(self)
    }

    fn natural_exp(&mut self) -> &mut [f64] {
        power::natural_exp(self)
    }

    fn exponentiate(&mut self, base: f64) -> &mut [f64] {
        power::exponentiate(self, base)
    }
}
