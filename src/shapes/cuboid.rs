//! This module defines an axis-aligned Cuboid given by its center and half-extents.

use crate::axis::Axis;
use crate::tolerance::tolerant_less;
use crate::{Point3, Real, Vector3};

/// An axis-aligned box spanning `center - half_extents` to `center + half_extents`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cuboid<T: Real> {
    /// Center of the cuboid
    pub center: Point3<T>,
    /// Half the side length along each axis
    pub half_extents: Vector3<T>,
}

impl<T: Real> Cuboid<T> {
    /// Creates a [`Cuboid`] from its center and half-extents.
    ///
    /// # Panics
    /// Panics, in debug mode, if any half-extent is negative.
    pub fn new(center: Point3<T>, half_extents: Vector3<T>) -> Self {
        debug_assert!(
            half_extents.iter().all(|h| *h >= T::zero()),
            "cuboid half-extents must not be negative"
        );
        Cuboid {
            center,
            half_extents,
        }
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Point3<T> {
        self.center - self.half_extents
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Point3<T> {
        self.center + self.half_extents
    }

    /// Returns the point in or on this [`Cuboid`] closest to `point`.
    ///
    /// Each coordinate at or beyond a face is clamped onto that face; coordinates
    /// strictly between the faces are kept.
    ///
    /// # Examples
    /// ```
    /// use geocollide::shapes::Cuboid;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let cuboid = Cuboid::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 2.0));
    ///
    /// assert_eq!(cuboid.closest_point(&Point3::new(10.0, 1.0, -3.0)), Point3::new(2.0, 1.0, -2.0));
    /// ```
    pub fn closest_point(&self, point: &Point3<T>) -> Point3<T> {
        let min = self.min();
        let max = self.max();
        let mut closest = *point;
        for axis in Axis::ALL {
            let i = axis.index();
            if point[i] <= min[i] {
                closest[i] = min[i];
            } else if point[i] >= max[i] {
                closest[i] = max[i];
            }
        }
        closest
    }

    /// Returns true if `point` lies strictly inside this [`Cuboid`].
    /// A point on any face is outside, so a zero-size cuboid contains nothing.
    pub fn contains(&self, point: &Point3<T>) -> bool {
        Axis::ALL.iter().all(|axis| {
            let i = axis.index();
            let offset = point[i] - self.center[i];
            tolerant_less(offset * offset, self.half_extents[i] * self.half_extents[i])
        })
    }

    /// Returns true if this [`Cuboid`] overlaps `other`. Cuboids sharing a face do not
    /// overlap.
    ///
    /// # Examples
    /// ```
    /// use geocollide::shapes::Cuboid;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let half = Vector3::new(2.0, 2.0, 2.0);
    /// let a = Cuboid::new(Point3::new(0.0, 0.0, 0.0), half);
    ///
    /// assert!(a.intersects_cuboid(&Cuboid::new(Point3::new(3.0, 0.0, 0.0), half)));
    /// assert!(!a.intersects_cuboid(&Cuboid::new(Point3::new(4.0, 0.0, 0.0), half)));
    /// ```
    pub fn intersects_cuboid(&self, other: &Cuboid<T>) -> bool {
        // Separated on an axis iff `min2 >= max1 || min1 >= max2`, which is the distance
        // between the centers reaching the summed half-extents.
        Axis::ALL.iter().all(|axis| {
            let i = axis.index();
            let offset = self.center[i] - other.center[i];
            let reach = self.half_extents[i] + other.half_extents[i];
            tolerant_less(offset * offset, reach * reach)
        })
    }
}
