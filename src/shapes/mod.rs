//! Primitive shapes: [`Sphere`] and axis-aligned [`Cuboid`].
//!
//! Points need no type of their own, a [`crate::Point3`] is used directly.

mod cuboid;
mod sphere;

pub use self::cuboid::*;
pub use self::sphere::*;

use crate::{Point3, Real};

/// Any of the shapes a collision predicate accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape<T: Real> {
    /// A single position.
    Point(Point3<T>),
    /// A solid ball.
    Sphere(Sphere<T>),
    /// A solid axis-aligned box.
    Cuboid(Cuboid<T>),
}
