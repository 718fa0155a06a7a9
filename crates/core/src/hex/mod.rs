//! This module holds the hex coordinate systems and the math that converts
//! between them.
//!
//! ## Coordinate Systems
//!
//! A cell in a hex grid can be addressed four different ways. All of them
//! follow [Amit Patel's guide](https://www.redblobgames.com/grids/hexagons/).
//!
//! ### Cube
//!
//! [CubeCoordinate] is the canonical system. Each coordinate has three integer
//! components (`x`, `y`, and `z`), and **for every cell `x + y + z = 0`**.
//! Cells live on the diagonal plane of a 3D integer grid, which makes
//! distances, directions and rounding simple. Everything else is derived
//! from cube coordinates.
//!
//! ### Axial
//!
//! [AxialCoordinate] drops the redundant `y` component: `q = x`, `r = z`.
//! Nothing is lost, since `y = -q - r`.
//!
//! ### Offset
//!
//! [OffsetCoordinate] is a column/row pair, which is the natural fit for
//! storing a rectangular grid. Since hexagons don't stack in straight columns,
//! every other row (pointy-topped, [OffsetEncoding::EvenR]) or column
//! (flat-topped, [OffsetEncoding::EvenQ]) is shoved over by half a cell. An
//! offset coordinate only makes sense alongside its encoding.
//!
//! ### Cartesian
//!
//! A [Point2] in the plane, used for rendering and for picking cells by
//! position. The center of cell `(0, 0, 0)` is at `(0, 0)`, x grows to the
//! right and y grows downward:
//!
//! +-------------------+
//! |        -y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        +y         |
//! +-------------------+
//!
//! Converting to and from cartesian space depends on the size of each cell
//! and on the [Orientation] of the grid, so those conversions live on
//! [HexagonGrid](crate::HexagonGrid). Only pointy-topped grids support them.

pub mod convert;
pub mod polygon;
mod unit;

pub use self::unit::*;
use crate::util::unit::Point2;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// A set of cube coordinates
pub type CubeSet = HashSet<CubeCoordinate, FnvBuildHasher>;
/// An ORDERED map of cube coordinates to some `T`. This has some extra memory
/// overhead, so we should only use it when we actually need the ordering.
pub type CubeIndexMap<T> = IndexMap<CubeCoordinate, T, FnvBuildHasher>;
/// A map of offset coordinates to some `T`
pub type OffsetMap<T> = HashMap<OffsetCoordinate, T, FnvBuildHasher>;

/// A position on the cartesian plane. This is just an alias, to make it clear
/// which coordinate system a [Point2] belongs to.
pub type CartesianCoordinate = Point2;
