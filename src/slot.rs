//! Slot coordinates and cubie identities.
//!
//! A slot is one of the fixed positions of the grid, addressed by
//! `(layer, row, column)`. Layer runs along the vertical (Y) axis, row along
//! depth (Z) and column along the horizontal (X) axis.

use crate::error::PuzzleError;

/// Identity of one physical sub-cube.
///
/// Cubie `n` starts in the slot whose flat index is `n`.
pub type CubieId = u8;

/// A fixed position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub layer: usize,
    pub row: usize,
    pub column: usize,
}

impl Slot {
    pub const fn new(layer: usize, row: usize, column: usize) -> Self {
        Self { layer, row, column }
    }

    /// Returns this slot unchanged if every coordinate lies in `0..DIM`.
    pub fn checked<const DIM: usize>(self) -> Result<Self, PuzzleError> {
        if self.layer < DIM && self.row < DIM && self.column < DIM {
            Ok(self)
        } else {
            Err(PuzzleError::InvalidSlot {
                layer: self.layer,
                row: self.row,
                column: self.column,
            })
        }
    }
}

/// Converts a slot to a linear cell index.
///
/// Index order is layer-major: `idx = layer * DIM * DIM + row * DIM + column`,
/// which is also the identity mapping from slots to cubies.
#[inline(always)]
pub const fn slot_to_idx<const DIM: usize>(slot: Slot) -> usize {
    slot.layer * DIM * DIM + slot.row * DIM + slot.column
}

/// Converts a linear cell index to a slot.
#[inline(always)]
pub const fn idx_to_slot<const DIM: usize>(cell_index: usize) -> Slot {
    Slot {
        layer: cell_index / (DIM * DIM),
        row: (cell_index / DIM) % DIM,
        column: cell_index % DIM,
    }
}

/// Standard cube constants.
pub const RUBIK_DIM: usize = 3;
pub const RUBIK_GRID_SIZE: usize = 27;
/// Number of slots in one rotatable section.
pub const RUBIK_SECTION_SIZE: usize = RUBIK_DIM * RUBIK_DIM;
