//! slicemath: In-place Elementwise Operations over `f64` Slices
//!
//! **slicemath** rewrites caller-owned `&mut [f64]` buffers element by element.
//! Every operation is built from four closure shapes (see [`combinators`]):
//!
//! 1. **Index-producer** `usize -> f64`
//! 2. **Value-operator** `f64 -> f64`
//! 3. **Indexed-operator** `(usize, f64) -> f64`
//! 4. **Reduce-operator** `(f64, f64) -> f64`
//!
//! # Design Principles
//!
//! - **No allocation**: every operation mutates its input and returns the same
//!   slice, so calls nest or chain
//! - **One loop per family**: the `_vector`, `_scalar`, `_producer` and
//!   `_indexed` variants of `plus`, `minus`, `times`, `div`, `pow`, `max` and
//!   `min` all run through [`combine`], so bounds policy and iteration order are
//!   identical everywhere
//! - **Never truncate**: a right-hand slice shorter than the target is a
//!   [`SliceMathError::SizeMismatch`], reported before any element is written
//! - **IEEE-754 for everything else**: division by zero, `ln` of negatives and
//!   similar produce infinities or NaN, not errors
//!
//! # Quick Start
//!
//! ```rust
//! use slicemath::{plus_vector, pow_scalar, reverse, ElementwiseExt};
//!
//! let mut s = [1.0, 2.0, 3.0];
//! plus_vector(&mut s, &[10.0, 20.0, 30.0]).unwrap();
//! assert_eq!(s, [11.0, 22.0, 33.0]);
//!
//! let mut t = [2.0, 3.0, 4.0];
//! reverse(pow_scalar(&mut t, 2.0));
//! assert_eq!(t, [16.0, 9.0, 4.0]);
//!
//! // Same operations as methods
//! let mut u = vec![-1.0, -2.0, -3.0];
//! u.absolute().times_scalar(2.0);
//! assert_eq!(u, [2.0, 4.0, 6.0]);
//! ```
//!
//! # Features
//!
//! - `tracing`: emit spans from the elementwise loops and length checks via the
//!   [`tracing`](https://docs.rs/tracing) crate

pub mod apply;
pub mod arith;
pub mod combinators;
pub mod error;
pub mod ext;
pub mod extrema;
pub mod operand;
pub mod power;
pub mod tolerance;
pub mod unary;

pub use apply::{
    apply, apply_indexed_operator, apply_operator, fill_scalar, fill_scalar_masked, fill_vector,
    fill_vector_masked, identity, visit, visit_indexed,
};
pub use arith::{
    div_indexed, div_producer, div_scalar, div_vector, minus_indexed, minus_producer,
    minus_scalar, minus_vector, plus_indexed, plus_producer, plus_scalar, plus_vector,
    times_indexed, times_producer, times_scalar, times_vector,
};
pub use error::{Result, SliceMathError};
pub use ext::ElementwiseExt;
pub use extrema::{
    max_indexed, max_producer, max_scalar, max_vector, min_indexed, min_producer, min_scalar,
    min_vector,
};
pub use operand::{combine, ensure_len, Indexed, Operand, Producer};
pub use power::{
    exponentiate, natural_exp, natural_log, pow_indexed, pow_producer, pow_scalar, pow_vector,
};
pub use tolerance::Tolerance;
pub use unary::{absolute, negate, reciprocal_scale, reverse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_reexports_compose() {
        let mut s = [0.0; 4];
        identity(&mut s);
        plus_scalar(&mut s, 1.0);
        reverse(&mut s);
        assert_eq!(s, [4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_nested_calls_return_same_buffer() {
        let mut s = [1.0, 2.0, 3.0];
        let ptr = s.as_ptr();
        let out = negate(absolute(times_scalar(&mut s, 2.0)));
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out, &[-2.0, -4.0, -6.0]);
    }
}
