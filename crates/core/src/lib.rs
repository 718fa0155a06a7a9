//! Hexgrid is a coordinate engine for hexagonal grids. It models a finite
//! grid of hexagonal cells and converts between the coordinate systems used
//! to address them: cube, axial, offset, and cartesian. See [hex] for an
//! overview of each system.
//!
//! ```
//! use hexgrid::{GridConfig, HexagonGrid, Point2};
//!
//! let config = GridConfig::default();
//! let grid = HexagonGrid::from_config(config).unwrap();
//! let cell = grid.cell_at(Point2::new(40.0, 30.0)).unwrap().unwrap();
//! println!("{}", cell.coordinate());
//! // From here you can draw the cell's polygon, find its neighbors, etc.
//! ```
//!
//! See [GridConfig] for details on how a grid can be customized.

pub mod config;
mod error;
pub mod grid;
pub mod hex;
mod util;

pub use crate::{
    config::{GridConfig, GridShape},
    error::{Capability, HexGridError},
    grid::{
        cell::{Cell, WalkableCell},
        store::CellStore,
        GridAxes, HexagonGrid,
    },
    hex::{
        AxialCoordinate, CartesianCoordinate, CubeCoordinate, FractionalCube,
        HasHexPosition, HexDirection, HexVector, OffsetCoordinate,
        OffsetEncoding, Orientation,
    },
    util::unit::{IntPoint2, IntVector2, Point2, Vector2},
};
