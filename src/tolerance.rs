//! Approximate floating-point comparison
//!
//! Chained elementwise operations accumulate rounding error, so checks such as
//! "`times_scalar` followed by `div_scalar` restores the input" only hold up to
//! a tolerance. [`Tolerance`] bundles the absolute and relative bounds used for
//! those comparisons.
//!
//! # Examples
//!
//! ```
//! use slicemath::tolerance::Tolerance;
//!
//! let tol = Tolerance::new().with_absolute(1e-9).with_relative(1e-12);
//! assert!(tol.approx_eq(0.1 + 0.2, 0.3));
//! assert!(!Tolerance::strict().approx_eq(0.1 + 0.2, 0.3));
//! ```

/// Absolute and relative bounds for approximate equality
///
/// Two values `a` and `b` compare equal when
/// `|a - b| <= max(absolute, relative * max(|a|, |b|))`.
/// NaN compares equal to NaN, and infinities compare equal only to the same
/// infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute bound
    pub absolute: f64,
    /// Bound relative to the larger magnitude of the two operands
    pub relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new()
    }
}

impl Tolerance {
    /// Default tolerance
    #[must_use]
    pub const fn new() -> Self {
        Self {
            absolute: 1e-12,
            relative: 1e-9,
        }
    }

    /// Exact comparison (bit-level equality apart from `0.0 == -0.0` and NaN)
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Loose tolerance for long operation chains
    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            absolute: 1e-6,
            relative: 1e-6,
        }
    }

    /// Set the absolute bound (negative values are treated as zero)
    #[must_use]
    pub fn with_absolute(mut self, absolute: f64) -> Self {
        self.absolute = absolute.max(0.0);
        self
    }

    /// Set the relative bound (negative values are treated as zero)
    #[must_use]
    pub fn with_relative(mut self, relative: f64) -> Self {
        self.relative = relative.max(0.0);
        self
    }

    /// Whether `a` and `b` are equal within this tolerance
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return a.is_nan() && b.is_nan();
        }
        if a == b {
            return true;
        }
        if a.is_infinite() || b.is_infinite() {
            return false;
        }
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.absolute.max(self.relative * scale)
    }

    /// Whether two slices have equal length and are elementwise approximately equal
    pub fn slices_approx_eq(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.approx_eq(x, y))
    }
}
