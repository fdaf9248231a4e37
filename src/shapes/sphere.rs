//! This module defines a Sphere and its containment and overlap tests.

use crate::shapes::Cuboid;
use crate::tolerance::DistanceCompare;
use crate::{Point3, Real};

/// A representation of a Sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<T: Real> {
    /// Center of the sphere
    pub center: Point3<T>,
    /// Radius of the sphere
    pub radius: T,
}

impl<T: Real> Sphere<T> {
    /// Creates a [`Sphere`] centered on a given point with a radius.
    ///
    /// # Panics
    /// Panics, in debug mode, if the radius is negative.
    ///
    /// # Examples
    /// ```
    /// use geocollide::shapes::Sphere;
    /// use nalgebra::Point3;
    ///
    /// let sphere = Sphere::new(Point3::new(1.0, 1.0, 1.0), 1.0);
    /// assert_eq!(sphere.center, Point3::new(1.0, 1.0, 1.0));
    /// assert_eq!(sphere.radius, 1.0)
    /// ```
    pub fn new(center: Point3<T>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "sphere radius must not be negative");
        Sphere { center, radius }
    }

    /// Returns true if `point` lies strictly inside this [`Sphere`].
    /// A point on the surface is outside.
    ///
    /// # Examples
    /// ```
    /// use geocollide::shapes::Sphere;
    /// use nalgebra::Point3;
    ///
    /// let sphere = Sphere::new(Point3::new(0.0, 0.0, 0.0), 5.0);
    ///
    /// assert!(sphere.contains(&Point3::new(3.0, 0.0, 0.0)));
    /// assert!(!sphere.contains(&Point3::new(5.0, 0.0, 0.0)));
    /// ```
    pub fn contains(&self, point: &Point3<T>) -> bool {
        self.center.is_distance_less_than(point, self.radius)
    }

    /// Returns true if this [`Sphere`] overlaps `other`. Touching spheres do not overlap.
    pub fn intersects_sphere(&self, other: &Sphere<T>) -> bool {
        self.center
            .is_distance_less_than(&other.center, self.radius + other.radius)
    }

    /// Returns true if this [`Sphere`] overlaps the [`Cuboid`].
    ///
    /// The center is clamped onto the cuboid per axis and the clamped point is tested
    /// for containment, so a sphere which only touches a face does not overlap.
    ///
    /// # Examples
    /// ```
    /// use geocollide::shapes::{Cuboid, Sphere};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let cuboid = Cuboid::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 2.0));
    ///
    /// assert!(Sphere::new(Point3::new(2.5, 0.0, 0.0), 1.0).intersects_cuboid(&cuboid));
    /// assert!(!Sphere::new(Point3::new(3.0, 0.0, 0.0), 1.0).intersects_cuboid(&cuboid));
    /// ```
    pub fn intersects_cuboid(&self, cuboid: &Cuboid<T>) -> bool {
        self.contains(&cuboid.closest_point(&self.center))
    }
}
