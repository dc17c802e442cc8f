// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tolerant comparisons of real values.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Whether `value` is zero within [`f64::EPSILON`].
///
/// This is an absolute test. It is used for degeneracy checks (zero-length
/// segments, collinearity) where the operands are already differences of
/// coordinates.
#[inline]
pub fn is_epsilon_zero(value: f64) -> bool {
    value.abs() <= f64::EPSILON
}

/// An epsilon appropriate for comparing numbers of the magnitude of `value`.
#[inline]
pub fn epsilon_for_value(value: f64) -> f64 {
    (value.abs() * 1e-10).max(f64::EPSILON)
}

/// Whether two values are equal, relative to the larger of the two.
///
/// Infinite values compare exactly.
pub fn is_epsilon_equal(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= epsilon_for_value(a.abs().max(b.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert!(is_epsilon_zero(0.0));
        assert!(is_epsilon_zero(-f64::EPSILON));
        assert!(!is_epsilon_zero(1e-10));
    }

    #[test]
    fn relative_equality() {
        assert!(is_epsilon_equal(1e12, 1e12 + 1.0));
        assert!(!is_epsilon_equal(1.0, 1.0 + 1e-6));
        assert!(is_epsilon_equal(f64::INFINITY, f64::INFINITY));
        assert!(!is_epsilon_equal(f64::INFINITY, 1e308));
    }
}
