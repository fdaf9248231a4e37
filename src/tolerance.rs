//! Tolerant comparisons of squared magnitudes.
//!
//! Every predicate in [`crate::collision`] reduces to "is this squared distance less
//! than that squared threshold". Grid sweeps build positions as `min + inc * i`, so a
//! position meant to sit exactly on a boundary is usually off by a few ulps. The
//! comparisons here treat values within a relative [`SQUARED_EPSILON`] of each other as
//! equal, and equal is never "less".

use crate::{Point3, Real};

/// Relative tolerance on non-squared quantities (distances, radii, half-extents).
pub const EPSILON: f64 = 0.0001;

/// Relative tolerance on squared quantities: `(1 + EPSILON)^2 - 1`.
pub const SQUARED_EPSILON: f64 = (1.0 + EPSILON) * (1.0 + EPSILON) - 1.0;

#[inline]
fn margin<T: Real>(a: T, b: T) -> T {
    nalgebra::convert::<f64, T>(SQUARED_EPSILON) * a.abs().max(b.abs())
}

/// Returns true if `a` and `b` differ by at most [`SQUARED_EPSILON`] relative to the
/// larger magnitude of the two.
///
/// # Examples
/// ```
/// use geocollide::tolerance::tolerant_eq;
///
/// assert!(tolerant_eq(25.0, 25.000_000_1));
/// assert!(!tolerant_eq(25.0, 25.1));
/// assert!(tolerant_eq(0.0, 0.0));
/// ```
#[inline]
pub fn tolerant_eq<T: Real>(a: T, b: T) -> bool {
    (a - b).abs() <= margin(a, b)
}

/// Returns true if `a < b` by more than the tolerance.
///
/// # Examples
/// ```
/// use geocollide::tolerance::tolerant_less;
///
/// assert!(tolerant_less(9.0, 25.0));
/// assert!(!tolerant_less(25.0, 25.0));
/// assert!(!tolerant_less(24.999_999, 25.0));
/// ```
#[inline]
pub fn tolerant_less<T: Real>(a: T, b: T) -> bool {
    a < b && !tolerant_eq(a, b)
}

/// Returns true if `a < b` or the two are equal within the tolerance.
#[inline]
pub fn tolerant_less_eq<T: Real>(a: T, b: T) -> bool {
    a < b || tolerant_eq(a, b)
}

/// Distance comparisons between two positions, routed through [`tolerant_less`] on
/// squared quantities so no square root is ever taken.
pub trait DistanceCompare<T: Real> {
    /// Returns true if the distance to `other` is less than `threshold`.
    fn is_distance_less_than(&self, other: &Self, threshold: T) -> bool;

    /// Returns true if the distance to `other` is at most `threshold`.
    fn is_distance_less_than_or_equal(&self, other: &Self, threshold: T) -> bool;

    /// Returns true if the distance to `other` is greater than `threshold`.
    fn is_distance_greater_than(&self, other: &Self, threshold: T) -> bool {
        !self.is_distance_less_than_or_equal(other, threshold)
    }
}

impl<T: Real> DistanceCompare<T> for Point3<T> {
    fn is_distance_less_than(&self, other: &Self, threshold: T) -> bool {
        tolerant_less((self - other).norm_squared(), threshold * threshold)
    }

    fn is_distance_less_than_or_equal(&self, other: &Self, threshold: T) -> bool {
        tolerant_less_eq((self - other).norm_squared(), threshold * threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::{tolerant_eq, tolerant_less, tolerant_less_eq, DistanceCompare};
    use crate::Point3;

    #[test]
    fn test_equal_values_are_not_less() {
        assert!(tolerant_eq(4.0, 4.0));
        assert!(!tolerant_less(4.0, 4.0));
        assert!(tolerant_less_eq(4.0, 4.0));
    }

    #[test]
    fn test_rounding_noise_counts_as_equal() {
        // 0.1 * 3 is 0.30000000000000004.
        let swept = 0.1_f64 * 3.0;
        assert!(tolerant_eq(swept * swept, 0.09));
        assert!(!tolerant_less(0.09, swept * swept));
        assert!(!tolerant_less(swept * swept, 0.09));
    }

    #[test]
    fn test_tolerance_is_relative() {
        // Tiny magnitudes are still distinguishable.
        assert!(tolerant_less(1.0e-10, 2.0e-10));
        // Large magnitudes absorb proportionally larger noise.
        assert!(tolerant_eq(1.0e10, 1.0e10 + 1.0));
    }

    #[test]
    fn test_zero_threshold() {
        assert!(!tolerant_less(0.0, 0.0));
        assert!(!tolerant_less(1.0, 0.0));
        assert!(tolerant_less_eq(0.0, 0.0));
    }

    #[test]
    fn test_distance_compare() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        let on_surface = Point3::new(3.0, 4.0, 0.0);

        assert!(!origin.is_distance_less_than(&on_surface, 5.0));
        assert!(origin.is_distance_less_than_or_equal(&on_surface, 5.0));
        assert!(!origin.is_distance_greater_than(&on_surface, 5.0));

        assert!(origin.is_distance_less_than(&on_surface, 5.1));
        assert!(origin.is_distance_greater_than(&on_surface, 4.9));
    }

    #[test]
    fn test_distance_compare_f32() {
        let a = Point3::new(1.0_f32, 1.0, 1.0);
        let b = Point3::new(2.0_f32, 1.0, 1.0);
        assert!(a.is_distance_less_than(&b, 1.5));
        assert!(!a.is_distance_less_than(&b, 1.0));
    }
}
