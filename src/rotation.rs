//! Quarter turns of one section.
//!
//! A turn reads the section's local `DIM x DIM` matrix of cubies, rotates it
//! with one of two fixed formulas and writes it back in a single
//! [`PositionGrid::apply_permutation`] call. With `n = DIM - 1`:
//!
//! - `P`: `new[i][j] = old[j][n - i]`
//! - `Q`: `new[i][j] = old[n - j][i]`
//!
//! `P` and `Q` are inverses and each has order four. Which one a move uses
//! depends on the section type, since the local `(i, j)` axes have different
//! handedness relative to the rotation axis. In every case a forward turn
//! is a +90 degree right-handed rotation about the positive section axis.

use log::debug;

use crate::error::PuzzleError;
use crate::grid::PositionGrid;
use crate::section::{select, SectionType};
use crate::slot::CubieId;

/// One of the two quarter-turn formulas over the local matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// `new[i][j] = old[j][n - i]`
    P,
    /// `new[i][j] = old[n - j][i]`
    Q,
}

impl Turn {
    /// Formula used for a move of `section` in the given direction.
    pub const fn for_section(section: SectionType, forward: bool) -> Self {
        match (section, forward) {
            (SectionType::Layer, true) => Self::P,
            (SectionType::Layer, false) => Self::Q,
            (SectionType::HorizontalCross, true) => Self::Q,
            (SectionType::HorizontalCross, false) => Self::P,
            (SectionType::VerticalCross, true) => Self::P,
            (SectionType::VerticalCross, false) => Self::Q,
        }
    }

    pub const fn inverse(self) -> Self {
        match self {
            Self::P => Self::Q,
            Self::Q => Self::P,
        }
    }

    /// Rotates a local matrix by a quarter turn.
    pub fn apply<T: Copy, const DIM: usize>(self, old: &[[T; DIM]; DIM]) -> [[T; DIM]; DIM] {
        let n = DIM - 1;
        std::array::from_fn(|i| {
            std::array::from_fn(|j| match self {
                Self::P => old[j][n - i],
                Self::Q => old[n - j][i],
            })
        })
    }
}

/// Applies a quarter turn of section `(section, index)` to `grid`.
pub fn rotate<const DIM: usize, const GRID_SIZE: usize>(
    grid: &mut PositionGrid<DIM, GRID_SIZE>,
    section: SectionType,
    index: usize,
    forward: bool,
) -> Result<(), PuzzleError> {
    let selected = select::<DIM>(section, index)?;

    let mut old = [[0 as CubieId; DIM]; DIM];
    for (i, row) in old.iter_mut().enumerate() {
        for (j, cubie) in row.iter_mut().enumerate() {
            *cubie = grid.get(selected.slot(i, j))?;
        }
    }

    let turn = Turn::for_section(section, forward);
    let new = turn.apply(&old);
    let values: Vec<CubieId> = new.iter().flatten().copied().collect();

    // slots() and the flattened matrix share the same row-major (i, j) order
    grid.apply_permutation(&selected.slots(), &values)?;

    debug!("rotated {section:?} {index} {} using {turn:?}", direction(forward));
    Ok(())
}

pub(crate) fn direction(forward: bool) -> &'static str {
    if forward {
        "forward"
    } else {
        "backward"
    }
}
