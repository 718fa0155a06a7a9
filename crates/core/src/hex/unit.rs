//! This sub-module contains the basic types that make up the hex coordinate
//! systems. See the parent module documentation for an overview of how the
//! systems relate to each other.

use crate::{
    error::{Capability, HexGridError},
    hex::convert,
};
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{cmp, ops};
use strum::{EnumIter, IntoEnumIterator};

/// The canonical coordinate of a hex cell. Each coordinate has an x, y, and z
/// component, and **for every coordinate `x + y + z = 0`**. Every other
/// coordinate system in this crate is derived from this one.
///
/// See this page for info on how the cube coordinate system works:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
///
/// ## Implementation
///
/// Since x+y+z=0 for all coordinates, this struct only stores x and y and
/// derives z as needed. That way it's impossible to construct a coordinate
/// that breaks the invariant, and we save a third of the memory.
///
/// Components must stay within `±`[Self::MAX_COMPONENT], so that the derived
/// component and differences between coordinates always fit in an `i32`.
/// [Self::new] enforces this. The unchecked `const` constructors don't.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct CubeCoordinate {
    x: i32,
    y: i32,
}

impl CubeCoordinate {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Largest magnitude allowed for any one component
    pub const MAX_COMPONENT: i32 = i32::MAX / 2;

    /// Construct a coordinate from all three components. Returns an error if
    /// the components don't fall on the plane `x + y + z = 0`, or if any of
    /// them is out of range (see [Self::MAX_COMPONENT]).
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, HexGridError> {
        if [x, y, z]
            .iter()
            .any(|c| c.unsigned_abs() > Self::MAX_COMPONENT.unsigned_abs())
        {
            return Err(HexGridError::invalid_argument(
                "cube",
                format!(
                    "({x}, {y}, {z}) has a component outside of ±{}",
                    Self::MAX_COMPONENT
                ),
            ));
        }
        // Summed wide so the check itself can't overflow
        if i64::from(x) + i64::from(y) + i64::from(z) != 0 {
            return Err(HexGridError::invalid_argument(
                "cube",
                format!("({x}, {y}, {z}) must be on the plane x+y+z=0"),
            ));
        }
        Ok(Self::new_xy(x, y))
    }

    /// Construct a new coordinate with the given x and y. Since x+y+z=0 for
    /// all coordinates, we can derive z from x & y.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a new coordinate with the given x and z. Since x+y+z=0 for
    /// all coordinates, we can derive y from x & z.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a new coordinate with the given y and z. Since x+y+z=0 for
    /// all coordinates, we can derive x from y & z.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    /// Derived from x and y. Only defined for coordinates within the
    /// supported range, see [Self::MAX_COMPONENT].
    pub fn z(self) -> i32 {
        -(self.x + self.y)
    }

    /// Get the coordinate of the cell adjacent to this one in the given
    /// direction
    pub fn adjacent(self, direction: HexDirection) -> CubeCoordinate {
        self + direction.to_vector()
    }

    /// Get an iterator of all the coordinates directly adjacent to this one.
    /// The iterator will always contain exactly 6 values, in the clockwise
    /// order of [HexDirection].
    pub fn adjacents(self) -> impl Iterator<Item = CubeCoordinate> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// steps it takes to get from one to the other. 0 if the coordinates are
    /// equal, 1 if the cells are adjacent, 2 if there is 1 cell between them,
    /// etc.
    pub fn distance_to(self, other: CubeCoordinate) -> usize {
        convert::distance(self, other)
    }

    /// Get every coordinate within `radius` steps of this one (inclusive),
    /// sweeping x then y. This forms a larger hexagon made of `3r²+3r+1`
    /// cells.
    pub fn within_radius(
        self,
        radius: u32,
    ) -> impl Iterator<Item = CubeCoordinate> {
        let r = radius as i32;
        (-r..=r).flat_map(move |x| {
            // If we just do [-r,r] for y as well, then we end up with a
            // diamond pattern instead of a super hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let y_min = cmp::max(-r, -x - r);
            let y_max = cmp::min(r, -x + r);
            (y_min..=y_max).map(move |y| self + HexVector::new(x, y))
        })
    }

    /// Get all the cells on the straight line between this cell and another,
    /// including both endpoints. The line always has `distance + 1` cells and
    /// each one is adjacent to the previous.
    pub fn line_to(self, other: CubeCoordinate) -> Vec<CubeCoordinate> {
        let steps = self.distance_to(other);
        if steps == 0 {
            return vec![self];
        }

        // Nudge both endpoints by a hair (staying on the plane), so points
        // that land exactly on a cell boundary always round the same way
        let nudge = FractionalCube::new(1e-6, 1e-6, -2e-6);
        let start = FractionalCube::from(self) + nudge;
        let end = FractionalCube::from(other) + nudge;
        (0..=steps)
            .map(|i| start.lerp(end, i as f64 / steps as f64).round())
            .collect()
    }
}

impl ops::Add<HexVector> for CubeCoordinate {
    type Output = CubeCoordinate;

    fn add(self, rhs: HexVector) -> Self::Output {
        Self::new_xy(self.x + rhs.x, self.y + rhs.y)
    }
}

// The difference between two coordinates is the vector from rhs to lhs
impl ops::Sub<CubeCoordinate> for CubeCoordinate {
    type Output = HexVector;

    fn sub(self, rhs: CubeCoordinate) -> Self::Output {
        HexVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A vector in the cube coordinate system, i.e. a translation between two
/// cells. Like [CubeCoordinate], only x and y are stored so every vector keeps
/// x+y+z=0, which means adding a vector to a valid coordinate always produces
/// another valid coordinate.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    SubAssign,
)]
#[display(fmt = "<{}, {}, {}>", "self.x()", "self.y()", "self.z()")]
pub struct HexVector {
    x: i32,
    y: i32,
}

impl HexVector {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    pub fn z(self) -> i32 {
        -(self.x + self.y)
    }
}

/// A cube coordinate with float components. This is an unvalidated,
/// intermediate value: it can point anywhere in space (including off the
/// plane `x + y + z = 0`), and should be rounded back to a [CubeCoordinate]
/// before it's used to address a cell.
#[derive(Copy, Clone, Debug, PartialEq, Display, Add, Sub, Mul)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct FractionalCube {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FractionalCube {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation between this point and another. `t = 0` gives
    /// `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: FractionalCube, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Snap to the nearest valid cube coordinate. See [convert::round_cube].
    pub fn round(self) -> CubeCoordinate {
        convert::round_cube(self)
    }
}

impl From<CubeCoordinate> for FractionalCube {
    fn from(cube: CubeCoordinate) -> Self {
        Self::new(cube.x().into(), cube.y().into(), cube.z().into())
    }
}

/// A two-component projection of a cube coordinate: `q = x` and `r = z`. The
/// dropped `y` can always be recovered as `-q - r`, so nothing is lost.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", q, r)]
pub struct AxialCoordinate {
    pub q: i32,
    pub r: i32,
}

impl AxialCoordinate {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

/// A row/column coordinate, which makes it easy to store a rectangular grid
/// in a 2D array. Every other row (or column) is shoved over by half a cell,
/// which one depends on the [OffsetEncoding]. An offset coordinate is only
/// meaningful alongside its encoding.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "[{}, {}]", col, row)]
pub struct OffsetCoordinate {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoordinate {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// The two supported layouts for [OffsetCoordinate]s.
///
/// https://www.redblobgames.com/grids/hexagons/#coordinates-offset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetEncoding {
    /// Even columns are shoved down by half a cell. Used for flat-topped cells.
    EvenQ,
    /// Even rows are shoved right by half a cell. Used for pointy-topped cells.
    EvenR,
}

/// How each hexagon sits on the cartesian plane
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// A vertex points straight up, and rows of cells are horizontal
    PointyTop,
    /// A side faces straight up, and columns of cells are vertical
    FlatTop,
}

impl Orientation {
    pub fn from_pointy_top(pointy_top: bool) -> Self {
        if pointy_top {
            Self::PointyTop
        } else {
            Self::FlatTop
        }
    }

    pub fn is_pointy_top(self) -> bool {
        self == Self::PointyTop
    }

    /// The offset coordinate layout that lines up with this orientation
    pub fn offset_encoding(self) -> OffsetEncoding {
        match self {
            Self::PointyTop => OffsetEncoding::EvenR,
            Self::FlatTop => OffsetEncoding::EvenQ,
        }
    }

    /// Angle (in degrees) of corner 0 of a hexagon in this orientation
    pub fn corner_angle_offset(self) -> f64 {
        match self {
            Self::PointyTop => 30.0,
            Self::FlatTop => 0.0,
        }
    }

    /// Check whether a grid with this orientation can do the given thing.
    /// Anything that returns `false` here will fail with
    /// [HexGridError::NotSupported] if you try it anyway.
    pub fn supports(self, capability: Capability) -> bool {
        match capability {
            Capability::CartesianConversion => self.is_pointy_top(),
            Capability::CircularPopulation => false,
        }
    }
}

/// A trait that denotes any data type that has a singular assigned position
/// in a hex grid.
pub trait HasHexPosition {
    fn position(&self) -> CubeCoordinate;
}

/// The 6 directions in which cells can line up side-to-side. Each one points
/// from the center of a cell to the center of a neighbor.
///
/// The names describe a pointy-topped layout, where y grows downward. The
/// underlying vectors are the same for flat-topped grids, so the names are
/// just labels there.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HexDirection {
    /// East
    E,
    /// Southeast
    SE,
    /// Southwest
    SW,
    /// West
    W,
    /// Northwest
    NW,
    /// Northeast
    NE,
}

impl HexDirection {
    /// All directions in clockwise order, starting at east
    pub const CLOCKWISE: &'static [Self] =
        &[Self::E, Self::SE, Self::SW, Self::W, Self::NW, Self::NE];

    /// Get the index of this direction within [Self::CLOCKWISE]
    pub fn clockwise_index(self) -> usize {
        match self {
            Self::E => 0,
            Self::SE => 1,
            Self::SW => 2,
            Self::W => 3,
            Self::NW => 4,
            Self::NE => 5,
        }
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        let clockwise = Self::CLOCKWISE;
        clockwise[(self.clockwise_index() + clockwise.len() / 2)
            % clockwise.len()]
    }

    /// Get a vector that would move a coordinate one cell in this direction
    pub fn to_vector(self) -> HexVector {
        match self {
            Self::E => HexVector::new(1, -1),
            Self::SE => HexVector::new(0, -1),
            Self::SW => HexVector::new(-1, 0),
            Self::W => HexVector::new(-1, 1),
            Self::NW => HexVector::new(0, 1),
            Self::NE => HexVector::new(1, 0),
        }
    }
}
