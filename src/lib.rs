//! A crate which exports tolerant collision predicates over points, spheres and
//! axis-aligned cuboids, together with a harness that grades those predicates
//! against expected results read from a text fixture.
//!
//! ## About
//!
//! The predicates are small, pure functions. Every distance comparison is done on
//! squared magnitudes through one shared tolerant "less than" (see [`tolerance`]),
//! so shapes which merely touch are consistently reported as *not* colliding, even
//! after the rounding a grid sweep accumulates.
//!
//! The grading side reads a fixture describing five groups of trials
//! (point/sphere, sphere/sphere, point/cuboid, cuboid/cuboid, sphere/cuboid),
//! sweeps a grid of positions for every trial, and scores the predicates with a
//! confusion matrix per trial.
//!
//! ## Example
//!
//! ```
//! use geocollide::collision::{point_in_sphere, sphere_vs_cuboid};
//! use nalgebra::{Point3, Vector3};
//!
//! let center = Point3::new(0.0, 0.0, 0.0);
//! assert!(point_in_sphere(&Point3::new(3.0, 0.0, 0.0), &center, 5.0));
//! assert!(!point_in_sphere(&Point3::new(5.0, 0.0, 0.0), &center, 5.0));
//!
//! let half_extents = Vector3::new(2.0, 2.0, 2.0);
//! assert!(!sphere_vs_cuboid(&Point3::new(10.0, 0.0, 0.0), 1.0, &center, &half_extents));
//! ```
//!
//! ## Features
//!
//! - `rayon` (default **enabled**) - grades the trials of a group in parallel
//! - `serde` (default **disabled**) - adds `Serialize` and `Deserialize` implementations for
//!   the shapes, scores and reports
//!

use nalgebra::RealField;

/// Scalar type accepted by the predicates. Implemented for `f32` and `f64`.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

/// Point math type used by this crate. Type alias for [`nalgebra::Point3`].
pub type Point3<T> = nalgebra::Point3<T>;

/// Vector math type used by this crate. Type alias for [`nalgebra::Vector3`].
pub type Vector3<T> = nalgebra::Vector3<T>;

pub mod axis;
pub mod collision;
pub mod fixture;
pub mod grading;
pub mod shapes;
pub mod tolerance;

#[cfg(test)]
mod testbase;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
