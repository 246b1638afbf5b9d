//! The position grid: which cubie occupies which slot.
//!
//! Generic over grid dimension (`DIM`) and total slot count
//! (`GRID_SIZE = DIM^3`). The grid is a flat array indexed by
//! [`slot_to_idx`], where each cell holds the identity of the cubie currently
//! in that slot. Between commands the array is always a permutation of
//! `0..GRID_SIZE`.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::PuzzleError;
use crate::slot::{idx_to_slot, slot_to_idx, CubieId, Slot};

/// Mapping from slots to cubie identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionGrid<const DIM: usize, const GRID_SIZE: usize> {
    cells: [CubieId; GRID_SIZE],
}

impl<const DIM: usize, const GRID_SIZE: usize> Default for PositionGrid<DIM, GRID_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const DIM: usize, const GRID_SIZE: usize> PositionGrid<DIM, GRID_SIZE> {
    /// Evaluated when `new` is instantiated, so bad parameters fail the build.
    const VALID_SIZE: () = {
        assert!(DIM * DIM * DIM == GRID_SIZE, "GRID_SIZE must equal DIM^3");
        assert!(
            GRID_SIZE <= CubieId::MAX as usize + 1,
            "GRID_SIZE must fit in CubieId"
        );
    };

    /// Creates a grid with every cubie in its home slot.
    ///
    /// Mismatched parameters are rejected at compile time:
    ///
    /// ```compile_fail
    /// let grid = rubik::grid::PositionGrid::<3, 26>::new();
    /// ```
    pub const fn new() -> Self {
        let () = Self::VALID_SIZE;

        let mut cells = [0; GRID_SIZE];
        let mut i = 0;
        while i < GRID_SIZE {
            cells[i] = i as CubieId;
            i += 1;
        }
        Self { cells }
    }

    /// Returns the cubie in `slot`.
    pub fn get(&self, slot: Slot) -> Result<CubieId, PuzzleError> {
        let slot = slot.checked::<DIM>()?;
        Ok(self.cells[slot_to_idx::<DIM>(slot)])
    }

    /// Puts `cubie` into `slot`.
    ///
    /// A single write breaks the permutation until the displaced cubie is
    /// written elsewhere; rotations go through [`Self::apply_permutation`].
    pub fn set(&mut self, slot: Slot, cubie: CubieId) -> Result<(), PuzzleError> {
        let slot = slot.checked::<DIM>()?;
        self.cells[slot_to_idx::<DIM>(slot)] = cubie;
        Ok(())
    }

    /// Writes `values[k]` into `slots[k]` for every `k` at once.
    ///
    /// All writes land in a staging copy that replaces the grid only after
    /// every slot was validated, so a failure leaves the grid untouched.
    pub fn apply_permutation(
        &mut self,
        slots: &[Slot],
        values: &[CubieId],
    ) -> Result<(), PuzzleError> {
        if slots.len() != values.len() {
            return Err(PuzzleError::LengthMismatch {
                slots: slots.len(),
                values: values.len(),
            });
        }

        let mut staged = self.clone();
        for (&slot, &cubie) in slots.iter().zip(values) {
            staged.set(slot, cubie)?;
        }
        *self = staged;
        Ok(())
    }

    /// Cubie identities in slot index order.
    pub fn cubies(&self) -> &[CubieId; GRID_SIZE] {
        &self.cells
    }

    /// Finds the slot currently holding `cubie`.
    pub fn slot_of(&self, cubie: CubieId) -> Option<Slot> {
        self.cells
            .iter()
            .position(|&c| c == cubie)
            .map(idx_to_slot::<DIM>)
    }

    /// Iterates over `(slot, cubie)` pairs in slot index order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, CubieId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cubie)| (idx_to_slot::<DIM>(idx), cubie))
    }

    /// Checks that every cubie identity appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let distinct: FxHashSet<CubieId> = self.cells.iter().copied().collect();
        distinct.len() == GRID_SIZE && self.cells.iter().all(|&c| (c as usize) < GRID_SIZE)
    }

    /// Returns `true` if every cubie is in its home slot.
    pub fn is_identity(&self) -> bool {
        *self == Self::new()
    }
}

/// Formats a grid as a human-readable string.
///
/// Displays the DIM layers side by side, one line per row, with the cubie
/// id at each column.
pub fn format_grid<const DIM: usize, const GRID_SIZE: usize>(
    grid: &PositionGrid<DIM, GRID_SIZE>,
) -> String {
    // two digits per cubie plus a separating space
    let block_width = DIM * 3 - 1;
    let mut output = String::new();

    // header: layer 0, layer 1, ..., layer DIM-1
    let mut line = String::new();
    for layer in 0..DIM {
        if layer > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!(
            "{:<width$}",
            format!("layer {layer}"),
            width = block_width
        ));
    }
    output.push_str(line.trim_end());
    output.push('\n');

    for row in 0..DIM {
        line.clear();
        for layer in 0..DIM {
            if layer > 0 {
                line.push_str("  ");
            }
            for column in 0..DIM {
                if column > 0 {
                    line.push(' ');
                }
                let cubie = grid.cells[slot_to_idx::<DIM>(Slot::new(layer, row, column))];
                line.push_str(&format!("{cubie:>2}"));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

impl<const DIM: usize, const GRID_SIZE: usize> fmt::Display for PositionGrid<DIM, GRID_SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_grid(self))
    }
}
