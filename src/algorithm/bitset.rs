use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset marking visited maze cells
///
/// Indexed by the row-major cell index from `CellLayout::index`.
/// Provides O(1) membership testing with one bit per cell.
#[derive(Clone, Debug)]
pub struct CellBitset {
    bits: BitVec,
}

impl CellBitset {
    /// Create a bitset with no cells marked
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
        }
    }

    /// Mark a cell, returning `true` if it was not marked before
    ///
    /// Indices past the end are ignored and return `false`.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.bits.len() || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test cell membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Count marked cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Total number of cells tracked
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Test if every cell is marked
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Test if no cells are marked
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for CellBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} cells", self.count(), self.capacity())
    }
}
