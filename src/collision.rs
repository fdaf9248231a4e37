//! Collision predicates between points, spheres and cuboids.
//!
//! The five free functions are the plain entry points used by the grading harness.
//! Each one is a thin wrapper over the [`Intersects`] implementation for the
//! corresponding shape pair.

use crate::shapes::{Cuboid, Shape, Sphere};
use crate::{Point3, Real, Vector3};

/// A trait implemented by shapes which can be tested for overlap with a `Rhs` shape.
///
/// Every implementation is symmetric: `a.intersects(&b) == b.intersects(&a)` where both
/// directions are implemented. Touching shapes never intersect.
///
/// # Examples
/// ```
/// use geocollide::collision::Intersects;
/// use geocollide::shapes::{Cuboid, Sphere};
/// use nalgebra::{Point3, Vector3};
///
/// let sphere = Sphere::new(Point3::new(2.5, 0.0, 0.0), 1.0);
/// let cuboid = Cuboid::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 2.0, 2.0));
///
/// assert!(sphere.intersects(&cuboid));
/// assert!(cuboid.intersects(&sphere));
/// ```
pub trait Intersects<Rhs: ?Sized> {
    /// Returns true if `self` and `other` overlap.
    fn intersects(&self, other: &Rhs) -> bool;
}

impl<T: Real> Intersects<Sphere<T>> for Point3<T> {
    fn intersects(&self, sphere: &Sphere<T>) -> bool {
        sphere.contains(self)
    }
}

impl<T: Real> Intersects<Point3<T>> for Sphere<T> {
    fn intersects(&self, point: &Point3<T>) -> bool {
        self.contains(point)
    }
}

impl<T: Real> Intersects<Sphere<T>> for Sphere<T> {
    fn intersects(&self, other: &Sphere<T>) -> bool {
        self.intersects_sphere(other)
    }
}

impl<T: Real> Intersects<Cuboid<T>> for Point3<T> {
    fn intersects(&self, cuboid: &Cuboid<T>) -> bool {
        cuboid.contains(self)
    }
}

impl<T: Real> Intersects<Point3<T>> for Cuboid<T> {
    fn intersects(&self, point: &Point3<T>) -> bool {
        self.contains(point)
    }
}

impl<T: Real> Intersects<Cuboid<T>> for Cuboid<T> {
    fn intersects(&self, other: &Cuboid<T>) -> bool {
        self.intersects_cuboid(other)
    }
}

impl<T: Real> Intersects<Cuboid<T>> for Sphere<T> {
    fn intersects(&self, cuboid: &Cuboid<T>) -> bool {
        self.intersects_cuboid(cuboid)
    }
}

impl<T: Real> Intersects<Sphere<T>> for Cuboid<T> {
    fn intersects(&self, sphere: &Sphere<T>) -> bool {
        sphere.intersects_cuboid(self)
    }
}

/// Dispatches to the pairwise implementations. Two points never intersect, they have no
/// extent.
impl<T: Real> Intersects<Shape<T>> for Shape<T> {
    fn intersects(&self, other: &Shape<T>) -> bool {
        match (self, other) {
            (Shape::Point(_), Shape::Point(_)) => false,
            (Shape::Point(a), Shape::Sphere(b)) => a.intersects(b),
            (Shape::Point(a), Shape::Cuboid(b)) => a.intersects(b),
            (Shape::Sphere(a), Shape::Point(b)) => a.intersects(b),
            (Shape::Sphere(a), Shape::Sphere(b)) => a.intersects(b),
            (Shape::Sphere(a), Shape::Cuboid(b)) => a.intersects(b),
            (Shape::Cuboid(a), Shape::Point(b)) => a.intersects(b),
            (Shape::Cuboid(a), Shape::Sphere(b)) => a.intersects(b),
            (Shape::Cuboid(a), Shape::Cuboid(b)) => a.intersects(b),
        }
    }
}

/// Returns true if `point` is strictly inside the sphere at `center` with `radius`.
///
/// # Panics
/// Panics, in debug mode, if the radius is negative.
pub fn point_in_sphere<T: Real>(point: &Point3<T>, center: &Point3<T>, radius: T) -> bool {
    point.intersects(&Sphere::new(*center, radius))
}

/// Returns true if the two spheres overlap, i.e. their centers are closer than the sum
/// of their radii.
///
/// # Panics
/// Panics, in debug mode, if either radius is negative.
///
/// # Examples
/// ```
/// use geocollide::collision::sphere_vs_sphere;
/// use nalgebra::Point3;
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(4.0, 0.0, 0.0);
///
/// assert!(sphere_vs_sphere(&a, 2.5, &b, 2.0));
/// assert!(!sphere_vs_sphere(&a, 2.0, &b, 2.0));
/// ```
pub fn sphere_vs_sphere<T: Real>(
    center1: &Point3<T>,
    radius1: T,
    center2: &Point3<T>,
    radius2: T,
) -> bool {
    Sphere::new(*center1, radius1).intersects(&Sphere::new(*center2, radius2))
}

/// Returns true if `point` is strictly inside the cuboid at `center` with `half_extents`
/// on every axis.
///
/// # Panics
/// Panics, in debug mode, if any half-extent is negative.
pub fn point_in_cuboid<T: Real>(
    point: &Point3<T>,
    center: &Point3<T>,
    half_extents: &Vector3<T>,
) -> bool {
    point.intersects(&Cuboid::new(*center, *half_extents))
}

/// Returns true if the two cuboids overlap on all three axes.
///
/// # Panics
/// Panics, in debug mode, if any half-extent is negative.
pub fn cuboid_vs_cuboid<T: Real>(
    center1: &Point3<T>,
    half_extents1: &Vector3<T>,
    center2: &Point3<T>,
    half_extents2: &Vector3<T>,
) -> bool {
    Cuboid::new(*center1, *half_extents1).intersects(&Cuboid::new(*center2, *half_extents2))
}

/// Returns true if the sphere overlaps the cuboid.
///
/// The sphere center is clamped onto the cuboid per axis (a coordinate equal to a face
/// clamps onto that face) and the clamped point must lie strictly inside the sphere.
///
/// # Panics
/// Panics, in debug mode, if the radius or any half-extent is negative.
pub fn sphere_vs_cuboid<T: Real>(
    sphere_center: &Point3<T>,
    radius: T,
    cuboid_center: &Point3<T>,
    half_extents: &Vector3<T>,
) -> bool {
    Sphere::new(*sphere_center, radius).intersects(&Cuboid::new(*cuboid_center, *half_extents))
}
