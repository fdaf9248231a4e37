//! Axis enum for walking three-dimensional positions one component at a time.

use std::fmt::{Display, Formatter, Result};

/// An `Axis` in a three-dimensional coordinate system.
/// Used to access `Vector3`/`Point3` components via index.
///
/// # Examples
/// ```
/// use geocollide::axis::Axis;
/// use nalgebra::Point3;
///
/// let position = Point3::new(1.0, 2.0, 42.0);
///
/// assert_eq!(position[Axis::Z.index()], 42.0);
/// assert_eq!(Axis::Y.to_string(), "y");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Index of the X axis.
    X = 0,

    /// Index of the Y axis.
    Y = 1,

    /// Index of the Z axis.
    Z = 2,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index of this axis.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Display implementation for `Axis`.
impl Display for Axis {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            }
        )
    }
}
