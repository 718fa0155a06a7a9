use crate::hex::{CubeCoordinate, HasHexPosition};
use serde::Serialize;

/// A grid is made up of cells. Each cell is a single hexagon with a fixed
/// position, plus a couple of attributes that pathfinding cares about.
///
/// Cells can't be constructed directly, they're only made while a
/// [HexagonGrid](crate::HexagonGrid) is being populated. A cell's position
/// can never change, but its traversal attributes can be modified through the
/// grid's `_mut` accessors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cell {
    /// Location of this cell in the grid. Every cell in a grid has a unique
    /// coordinate.
    coordinate: CubeCoordinate,

    /// Cost of moving into this cell, for weighted search
    cost: f64,

    /// Impassable cells can't be moved into at all, regardless of cost
    impassable: bool,
}

impl Cell {
    /// Cost of every cell when a grid is first populated
    pub const DEFAULT_COST: f64 = 1.0;

    pub(crate) fn new(coordinate: CubeCoordinate) -> Self {
        Self {
            coordinate,
            cost: Self::DEFAULT_COST,
            impassable: false,
        }
    }

    pub fn coordinate(&self) -> CubeCoordinate {
        self.coordinate
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    pub fn is_impassable(&self) -> bool {
        self.impassable
    }

    pub fn set_impassable(&mut self, impassable: bool) {
        self.impassable = impassable;
    }
}

impl HasHexPosition for Cell {
    fn position(&self) -> CubeCoordinate {
        self.coordinate
    }
}

/// The interface that search algorithms (BFS, Dijkstra, A*, etc.) need from a
/// cell. They don't care about any of the coordinate math, just where a cell
/// is and whether/how expensively it can be walked through.
pub trait WalkableCell: HasHexPosition {
    fn cost(&self) -> f64;

    fn is_impassable(&self) -> bool;
}

impl WalkableCell for Cell {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn is_impassable(&self) -> bool {
        self.impassable
    }
}
