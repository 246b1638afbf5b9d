//! Section selection: which slots make up a rotatable section.
//!
//! A section is addressed by its type and an index along the fixed axis.
//! Its slots are laid out in a `DIM x DIM` local matrix `(i, j)`:
//!
//! | Type              | Fixed axis       | Local i | Local j |
//! |-------------------|------------------|---------|---------|
//! | `Layer`           | layer = index    | row     | column  |
//! | `HorizontalCross` | row = index      | layer   | column  |
//! | `VerticalCross`   | column = index   | layer   | row     |
//!
//! Every other module addresses sections through [`SectionType::slot`], so
//! this table is the only place the axis mapping is written down.

use rustc_hash::FxHashSet;

use crate::error::PuzzleError;
use crate::geometry::Axis;
use crate::slot::Slot;

/// The three kinds of rotatable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionType {
    /// Fixed layer (vertical level), rotates about Y.
    #[default]
    Layer,
    /// Fixed row (depth), rotates about Z.
    HorizontalCross,
    /// Fixed column, rotates about X.
    VerticalCross,
}

impl SectionType {
    /// All section types in ring order.
    pub const ALL: [Self; 3] = [Self::Layer, Self::HorizontalCross, Self::VerticalCross];

    /// Next type in the ring `Layer -> HorizontalCross -> VerticalCross -> Layer`.
    pub const fn next(self) -> Self {
        match self {
            Self::Layer => Self::HorizontalCross,
            Self::HorizontalCross => Self::VerticalCross,
            Self::VerticalCross => Self::Layer,
        }
    }

    /// Previous type in the ring.
    pub const fn previous(self) -> Self {
        match self {
            Self::Layer => Self::VerticalCross,
            Self::HorizontalCross => Self::Layer,
            Self::VerticalCross => Self::HorizontalCross,
        }
    }

    /// Steps along the ring in either direction.
    pub const fn cycle(self, forward: bool) -> Self {
        if forward {
            self.next()
        } else {
            self.previous()
        }
    }

    /// Slot at local coordinate `(i, j)` of the section with fixed value `fixed`.
    #[inline(always)]
    pub const fn slot(self, fixed: usize, i: usize, j: usize) -> Slot {
        match self {
            Self::Layer => Slot::new(fixed, i, j),
            Self::HorizontalCross => Slot::new(i, fixed, j),
            Self::VerticalCross => Slot::new(i, j, fixed),
        }
    }

    /// Coordinate of `slot` along this type's fixed axis.
    pub const fn fixed_value(self, slot: Slot) -> usize {
        match self {
            Self::Layer => slot.layer,
            Self::HorizontalCross => slot.row,
            Self::VerticalCross => slot.column,
        }
    }

    /// Axis the section rotates about.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Layer => Axis::Y,
            Self::HorizontalCross => Axis::Z,
            Self::VerticalCross => Axis::X,
        }
    }
}

/// The currently chosen rotatable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionState {
    pub section: SectionType,
    pub index: usize,
}

impl SelectionState {
    pub const fn new(section: SectionType, index: usize) -> Self {
        Self { section, index }
    }

    /// Moves the index by `delta`, wrapping modulo `DIM`.
    pub fn change_index<const DIM: usize>(&mut self, delta: isize) {
        let dim = DIM as isize;
        self.index = (self.index as isize + delta).rem_euclid(dim) as usize;
    }

    /// Switches to the next or previous section type, keeping the index.
    pub fn switch_type(&mut self, forward: bool) {
        self.section = self.section.cycle(forward);
    }

    /// Slots of the selected section.
    ///
    /// The index is taken modulo `DIM`, which is a no-op for any state
    /// reached through [`Self::change_index`].
    pub fn section<const DIM: usize>(&self) -> Section<DIM> {
        Section::build(self.section, self.index % DIM)
    }
}

/// The slots of one section, in local `(i, j)` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<const DIM: usize> {
    pub section: SectionType,
    /// Value of the fixed axis shared by every slot in the section.
    pub fixed: usize,
    local: [[Slot; DIM]; DIM],
}

impl<const DIM: usize> Section<DIM> {
    fn build(section: SectionType, fixed: usize) -> Self {
        let local = std::array::from_fn(|i| std::array::from_fn(|j| section.slot(fixed, i, j)));
        Self {
            section,
            fixed,
            local,
        }
    }

    /// Slot at local coordinate `(i, j)`.
    #[inline]
    pub fn slot(&self, i: usize, j: usize) -> Slot {
        self.local[i][j]
    }

    /// The local slot matrix.
    pub fn local(&self) -> &[[Slot; DIM]; DIM] {
        &self.local
    }

    /// All slots, row-major over `(i, j)`.
    pub fn slots(&self) -> Vec<Slot> {
        self.local.iter().flatten().copied().collect()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.section.fixed_value(slot) == self.fixed && slot.checked::<DIM>().is_ok()
    }
}

/// Produces the slots of the section `(section, index)`.
pub fn select<const DIM: usize>(
    section: SectionType,
    index: usize,
) -> Result<Section<DIM>, PuzzleError> {
    if index >= DIM {
        return Err(PuzzleError::InvalidIndex { index });
    }

    Ok(Section::build(section, index))
}

/// Counts the distinct slots in a section.
pub fn distinct_slots<const DIM: usize>(section: &Section<DIM>) -> usize {
    section.slots().into_iter().collect::<FxHashSet<Slot>>().len()
}
