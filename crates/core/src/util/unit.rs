//! 2D primitives used for cartesian (pixel/world space) math. Nothing in the
//! hex coordinate system needs these, they only come into play when a cell
//! has to be placed on a plane, e.g. for rendering.

use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in 2D cartesian space. The cell at cube coordinate `(0, 0, 0)` is
/// centered on `(0, 0)`. Left is negative x, right is positive x. Down is
/// positive y, up is negative y.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the vector that translates the origin to this point
    pub fn to_vector(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance between two points
    pub fn distance_to(self, other: Point2) -> f64 {
        (other - self).length()
    }
}

impl ops::Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

// The difference between two points is the vector from rhs to lhs
impl ops::Sub<Point2> for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A vector in 2D space. See [Point2] for a description of the coordinate
/// space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "<{}, {}>", x, y)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        nalgebra::Vector2::from(self).norm()
    }

    /// Scale this vector to a length of 1. The zero vector has no direction,
    /// so normalizing it produces NaN components.
    pub fn normalize(self) -> Self {
        nalgebra::Vector2::from(self).normalize().into()
    }

    /// Get the vector rotated 90 degrees from this one, with the same length
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(other: Vector2) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}

/// An integer version of [Point2], for callers that work on a pixel grid
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct IntPoint2 {
    pub x: i32,
    pub y: i32,
}

impl IntPoint2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl ops::Add<IntVector2> for IntPoint2 {
    type Output = IntPoint2;

    fn add(self, rhs: IntVector2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// An integer version of [Vector2]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Into,
    Neg,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "<{}, {}>", x, y)]
pub struct IntVector2 {
    pub x: i32,
    pub y: i32,
}

impl IntVector2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_normalize() {
        let v = Vector2::new(3.0, 4.0);
        assert_approx_eq!(v.length(), 5.0);
        let normal = v.normalize();
        assert_approx_eq!(normal.length(), 1.0);
        assert_approx_eq!(normal.x, 0.6);
        assert_approx_eq!(normal.y, 0.8);
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector2::new(2.0, 1.0);
        let perp = v.perpendicular();
        assert_eq!(perp, Vector2::new(-1.0, 2.0));
        // Dot product of perpendicular vectors is zero
        assert_approx_eq!(v.x * perp.x + v.y * perp.y, 0.0);
        assert_approx_eq!(perp.length(), v.length());
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert_eq!(b - a, Vector2::new(3.0, 4.0));
        assert_eq!(a + (b - a), b);
        assert_approx_eq!(a.distance_to(b), 5.0);
        assert_eq!(
            IntPoint2::new(1, -1) + IntVector2::new(2, 3),
            IntPoint2::new(3, 2)
        );
    }
}
