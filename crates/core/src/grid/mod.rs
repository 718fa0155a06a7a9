pub mod cell;
pub mod store;

use crate::{
    config::{GridConfig, GridShape},
    error::{Capability, HexGridError},
    grid::{cell::Cell, store::CellStore},
    hex::{
        convert, polygon, AxialCoordinate, CubeCoordinate, OffsetCoordinate,
        OffsetEncoding, Orientation,
    },
    timed,
    util::unit::{Point2, Vector2},
};
use anyhow::Context;
use log::{debug, info, warn};
use serde::Serialize;
use validator::Validate;

/// Upper bound on how many cells we reserve space for up front. Larger grids
/// still work, they just grow their storage as they populate.
const MAX_PREALLOCATED_CELLS: usize = 1 << 16;

/// The three axes of a grid, measured on the hexagon of the origin cell.
/// Each axis runs between a pair of opposite corners:
///
/// - R: corner 3 to corner 0
/// - G: corner 5 to corner 2
/// - B: corner 1 to corner 4
///
/// These only depend on the grid's size and orientation, so they're computed
/// once when the grid is created and never change.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GridAxes {
    /// Full-length axes. Each one is as long as the hexagon is wide
    /// (`2 * size`).
    pub r: Vector2,
    pub g: Vector2,
    pub b: Vector2,

    /// The same axes, normalized to length 1
    pub r_normal: Vector2,
    pub g_normal: Vector2,
    pub b_normal: Vector2,

    /// Perpendiculars of [Self::r_normal] and [Self::b_normal]
    pub r_perpendicular: Vector2,
    pub b_perpendicular: Vector2,
}

impl GridAxes {
    fn from_polygon(corners: &[Point2; 6]) -> Self {
        let r = corners[0] - corners[3];
        let g = corners[2] - corners[5];
        let b = corners[4] - corners[1];
        let r_normal = r.normalize();
        let g_normal = g.normalize();
        let b_normal = b.normalize();
        Self {
            r,
            g,
            b,
            r_normal,
            g_normal,
            b_normal,
            r_perpendicular: r_normal.perpendicular(),
            b_perpendicular: b_normal.perpendicular(),
        }
    }
}

/// A grid of hexagonal cells. The grid owns all of its cells, and handles
/// conversion between the different coordinate systems (see [crate::hex]) for
/// its particular cell size and orientation.
///
/// A grid is fully populated when it's created, and cells can never be added
/// or removed after that. Only the traversal attributes of each cell (cost
/// and impassability) can be changed.
///
/// ```
/// use hexgrid::{HexagonGrid, OffsetCoordinate, Orientation};
///
/// let grid =
///     HexagonGrid::new_rectangular(10, Orientation::PointyTop, 3, 2).unwrap();
/// assert_eq!(grid.len(), 6);
/// let cell = grid.cell_by_offset(OffsetCoordinate::new(2, 1)).unwrap();
/// let polygon = grid.polygon_for_cube(cell.coordinate()).unwrap();
/// assert_eq!(polygon.len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct HexagonGrid {
    /// Side length of each hexagon, which is also the distance from the
    /// center of a cell to any of its corners
    size: u32,
    orientation: Orientation,
    axes: GridAxes,
    /// Distance covered by one step along a row (pointy) or column (flat)
    step_size: f64,
    /// Corners of the hexagon of the origin cell. Every other cell's polygon
    /// is this one, translated.
    origin_polygon: [Point2; 6],
    cells: CellStore,
}

impl HexagonGrid {
    /// Largest width or height of a rectangular grid. This keeps every cube
    /// coordinate in the grid within `±`[CubeCoordinate::MAX_COMPONENT].
    pub const MAX_DIMENSION: u32 =
        (CubeCoordinate::MAX_COMPONENT / 2).unsigned_abs();

    /// Create a grid with no cells yet. Everything derived from size and
    /// orientation is computed here and cached for the grid's lifetime.
    fn new_empty(
        size: u32,
        orientation: Orientation,
        capacity: usize,
    ) -> Result<Self, HexGridError> {
        if size == 0 {
            return Err(HexGridError::invalid_argument(
                "size",
                "cell size must be greater than 0",
            ));
        }

        let origin_polygon = polygon::hex_polygon(size.into(), orientation);
        let axes = GridAxes::from_polygon(&origin_polygon);
        let step_size = 1.5 * f64::from(size);
        debug!(
            "Created {:?} grid with size {}, step size {}, axes {:?}",
            orientation, size, step_size, axes
        );

        Ok(Self {
            size,
            orientation,
            axes,
            step_size,
            origin_polygon,
            cells: CellStore::with_capacity(capacity),
        })
    }

    /// Create a rectangular grid of `width` columns and `height` rows. Cells
    /// are laid out with the offset encoding that matches the orientation, so
    /// the cell at offset `(col, row)` exists for every `col < width` and
    /// `row < height`. Returns an error if `size` is 0, or if either dimension
    /// is larger than [Self::MAX_DIMENSION].
    pub fn new_rectangular(
        size: u32,
        orientation: Orientation,
        width: u32,
        height: u32,
    ) -> Result<Self, HexGridError> {
        let cols = Self::check_dimension("width", width)?;
        let rows = Self::check_dimension("height", height)?;
        let capacity = (width as usize)
            .saturating_mul(height as usize)
            .min(MAX_PREALLOCATED_CELLS);
        let mut grid = Self::new_empty(size, orientation, capacity)?;
        timed!(
            "Rectangular grid population",
            log::Level::Info,
            grid.populate_rectangular(cols, rows)
        )?;
        info!(
            "Populated {}x{} rectangular grid with {} cells",
            width,
            height,
            grid.len()
        );
        Ok(grid)
    }

    /// Create a circular grid. **Not supported**, this always returns
    /// [HexGridError::NotSupported], regardless of the arguments.
    pub fn new_circular(
        size: u32,
        orientation: Orientation,
        radius: u32,
    ) -> Result<Self, HexGridError> {
        warn!(
            "Requested circular {:?} grid (size {}, radius {}), which is not \
            supported",
            orientation, size, radius
        );
        Err(HexGridError::NotSupported(Capability::CircularPopulation))
    }

    /// Create a grid from a config. The config is validated first, and any
    /// validation errors are returned as [validator::ValidationErrors]. Errors
    /// from grid construction come back as [HexGridError].
    pub fn from_config(config: GridConfig) -> anyhow::Result<Self> {
        info!("Creating grid with config {:?}", config);
        config.validate().context("invalid grid config")?;

        let grid = match config.shape {
            GridShape::Rectangular { width, height } => Self::new_rectangular(
                config.size,
                config.orientation,
                width,
                height,
            ),
            GridShape::Circular { radius } => {
                Self::new_circular(config.size, config.orientation, radius)
            }
        };
        grid.context("error creating grid")
    }

    fn check_dimension(
        name: &'static str,
        value: u32,
    ) -> Result<i32, HexGridError> {
        if value > Self::MAX_DIMENSION {
            return Err(HexGridError::invalid_argument(
                name,
                format!(
                    "{} is larger than the maximum of {}",
                    value,
                    Self::MAX_DIMENSION
                ),
            ));
        }
        i32::try_from(value).map_err(|_| {
            HexGridError::invalid_argument(name, format!("{value} overflows"))
        })
    }

    fn populate_rectangular(
        &mut self,
        cols: i32,
        rows: i32,
    ) -> Result<(), HexGridError> {
        for col in 0..cols {
            for row in 0..rows {
                let offset = OffsetCoordinate::new(col, row);
                let cube = self.offset_to_cube(offset);
                self.cells.insert(Cell::new(cube), offset)?;
            }
        }
        Ok(())
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn axes(&self) -> &GridAxes {
        &self.axes
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// The offset encoding this grid uses, based on its orientation
    pub fn offset_encoding(&self) -> OffsetEncoding {
        self.orientation.offset_encoding()
    }

    /// Check whether this grid can do the given thing. See [Capability].
    pub fn supports(&self, capability: Capability) -> bool {
        self.orientation.supports(capability)
    }

    /// Corners of the origin cell's hexagon
    pub fn origin_polygon(&self) -> &[Point2; 6] {
        &self.origin_polygon
    }

    pub fn cube_to_axial(cube: CubeCoordinate) -> AxialCoordinate {
        convert::cube_to_axial(cube)
    }

    pub fn axial_to_cube(axial: AxialCoordinate) -> CubeCoordinate {
        convert::axial_to_cube(axial)
    }

    /// Convert a cube coordinate to an offset coordinate, using this grid's
    /// offset encoding
    pub fn cube_to_offset(&self, cube: CubeCoordinate) -> OffsetCoordinate {
        convert::cube_to_offset(cube, self.offset_encoding())
    }

    /// Convert an offset coordinate to a cube coordinate, using this grid's
    /// offset encoding
    pub fn offset_to_cube(&self, offset: OffsetCoordinate) -> CubeCoordinate {
        convert::offset_to_cube(offset, self.offset_encoding())
    }

    fn ensure_cartesian(&self) -> Result<(), HexGridError> {
        if self.supports(Capability::CartesianConversion) {
            Ok(())
        } else {
            warn!(
                "Cartesian conversion requested on {:?} grid",
                self.orientation
            );
            Err(HexGridError::NotSupported(Capability::CartesianConversion))
        }
    }

    /// Get the position of a cell's center on the plane. Only supported for
    /// pointy-topped grids.
    pub fn cube_to_cartesian(
        &self,
        cube: CubeCoordinate,
    ) -> Result<Point2, HexGridError> {
        self.ensure_cartesian()?;
        Ok(convert::cube_to_cartesian_pointy(cube, self.size.into()))
    }

    /// Find the coordinate of the cell that contains a point on the plane.
    /// Only supported for pointy-topped grids.
    ///
    /// The result is always a valid cube coordinate, but a point that sits
    /// right on the boundary between two cells could resolve to either one.
    /// Returns an error if the point isn't finite, or is so far away that its
    /// coordinate would be out of range (see [CubeCoordinate::MAX_COMPONENT]).
    pub fn cartesian_to_cube(
        &self,
        point: Point2,
    ) -> Result<CubeCoordinate, HexGridError> {
        self.ensure_cartesian()?;
        if !(point.x.is_finite() && point.y.is_finite()) {
            return Err(HexGridError::invalid_argument(
                "point",
                format!("{point} is not finite"),
            ));
        }

        let fractional =
            convert::cartesian_to_fractional_pointy(point, self.size.into());
        let limit = f64::from(CubeCoordinate::MAX_COMPONENT);
        if [fractional.x, fractional.y, fractional.z]
            .iter()
            .any(|component| component.abs() > limit)
        {
            return Err(HexGridError::invalid_argument(
                "point",
                format!("{point} is too far from the origin"),
            ));
        }
        Ok(convert::round_cube(fractional))
    }

    pub fn cell_by_cube(&self, cube: CubeCoordinate) -> Option<&Cell> {
        self.cells.by_cube(cube)
    }

    pub fn cell_by_cube_mut(
        &mut self,
        cube: CubeCoordinate,
    ) -> Option<&mut Cell> {
        self.cells.by_cube_mut(cube)
    }

    pub fn cell_by_offset(&self, offset: OffsetCoordinate) -> Option<&Cell> {
        self.cells.by_offset(offset)
    }

    pub fn cell_by_offset_mut(
        &mut self,
        offset: OffsetCoordinate,
    ) -> Option<&mut Cell> {
        self.cells.by_offset_mut(offset)
    }

    /// Get the cell that contains a point on the plane. Returns `Ok(None)` if
    /// the point falls outside the grid. See [Self::cartesian_to_cube] for a
    /// caveat about points on cell boundaries.
    pub fn cell_at(
        &self,
        point: Point2,
    ) -> Result<Option<&Cell>, HexGridError> {
        let cube = self.cartesian_to_cube(point)?;
        Ok(self.cell_by_cube(cube))
    }

    /// Iterate over all cells in the grid, in the order they were created
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate mutably over all cells in the grid, in the order they were
    /// created
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Get the number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get all cells directly adjacent to the given coordinate. Neighbors that
    /// fall outside the grid are skipped, so this yields anywhere from 0 to 6
    /// cells. The coordinate itself doesn't have to be in the grid.
    pub fn neighbors(
        &self,
        cube: CubeCoordinate,
    ) -> impl Iterator<Item = &Cell> + '_ {
        cube.adjacents().filter_map(move |adj| self.cell_by_cube(adj))
    }

    /// Get the hexagon for the cell at the given coordinate, in cartesian
    /// space. The cell doesn't have to be in the grid. Only supported for
    /// pointy-topped grids.
    pub fn polygon_for_cube(
        &self,
        cube: CubeCoordinate,
    ) -> Result<Vec<Point2>, HexGridError> {
        let center = self.cube_to_cartesian(cube)?;
        Ok(polygon::offset_polygon(
            &self.origin_polygon,
            center.to_vector(),
        ))
    }

    /// Get the hexagon for the cell that contains a point on the plane. See
    /// [Self::cartesian_to_cube] for a caveat about points on cell
    /// boundaries.
    pub fn polygon_for_cartesian(
        &self,
        point: Point2,
    ) -> Result<Vec<Point2>, HexGridError> {
        let cube = self.cartesian_to_cube(point)?;
        self.polygon_for_cube(cube)
    }

    /// Number of steps between two cells. See [convert::distance].
    pub fn distance_between(
        &self,
        a: CubeCoordinate,
        b: CubeCoordinate,
    ) -> usize {
        convert::distance(a, b)
    }
}
