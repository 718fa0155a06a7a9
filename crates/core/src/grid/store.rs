use crate::{
    error::HexGridError,
    grid::cell::Cell,
    hex::{CubeCoordinate, CubeIndexMap, OffsetCoordinate, OffsetMap},
};
use fnv::FnvBuildHasher;

/// Storage for the cells of a grid, indexed two ways at once: by cube
/// coordinate and by offset coordinate. The cube index is an ordered map, so
/// it doubles as the list of all cells in insertion order. The offset index
/// points into that list.
///
/// The two indexes are always kept in lock step. Every cell is in both or in
/// neither. Cells can be added but never removed.
#[derive(Clone, Debug, Default)]
pub struct CellStore {
    /// Every cell, keyed by cube coordinate, in insertion order
    cells: CubeIndexMap<Cell>,
    /// Position of each cell within `cells`, keyed by offset coordinate
    offset_index: OffsetMap<usize>,
}

impl CellStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: CubeIndexMap::with_capacity_and_hasher(
                capacity,
                FnvBuildHasher::default(),
            ),
            offset_index: OffsetMap::with_capacity_and_hasher(
                capacity,
                FnvBuildHasher::default(),
            ),
        }
    }

    /// Add a new cell to the store, under both its cube coordinate and the
    /// given offset coordinate. Returns an error if either key is already
    /// taken, in which case the store is left untouched.
    pub fn insert(
        &mut self,
        cell: Cell,
        offset: OffsetCoordinate,
    ) -> Result<(), HexGridError> {
        let cube = cell.coordinate();
        // Check both keys up front, so we never end up with a cell in one
        // index but not the other
        if self.cells.contains_key(&cube)
            || self.offset_index.contains_key(&offset)
        {
            return Err(HexGridError::DuplicateCell { cube, offset });
        }

        let (index, _) = self.cells.insert_full(cube, cell);
        self.offset_index.insert(offset, index);
        debug_assert_eq!(self.cells.len(), self.offset_index.len());
        Ok(())
    }

    pub fn by_cube(&self, cube: CubeCoordinate) -> Option<&Cell> {
        self.cells.get(&cube)
    }

    pub fn by_cube_mut(&mut self, cube: CubeCoordinate) -> Option<&mut Cell> {
        self.cells.get_mut(&cube)
    }

    pub fn by_offset(&self, offset: OffsetCoordinate) -> Option<&Cell> {
        let index = *self.offset_index.get(&offset)?;
        self.cells.get_index(index).map(|(_, cell)| cell)
    }

    pub fn by_offset_mut(
        &mut self,
        offset: OffsetCoordinate,
    ) -> Option<&mut Cell> {
        let index = *self.offset_index.get(&offset)?;
        self.cells.get_index_mut(index).map(|(_, cell)| cell)
    }

    /// Iterate over all cells, in the order they were inserted
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Iterate mutably over all cells, in the order they were inserted
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.values_mut()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
