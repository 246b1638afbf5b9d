//! World-space placement of cubies and section rotations.
//!
//! World coordinates map `x -> column`, `y -> layer`, `z -> row`, scaled by
//! the cubie edge length. Positions are cubie centres. All rotations are
//! right-handed about the positive axis.

use crate::section::SectionType;
use crate::slot::Slot;

/// A point in world space.
pub type Point = (f32, f32, f32);

/// A world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const fn unit_vector(self) -> Point {
        match self {
            Axis::X => (1.0, 0.0, 0.0),
            Axis::Y => (0.0, 1.0, 0.0),
            Axis::Z => (0.0, 0.0, 1.0),
        }
    }
}

/// Rotation of a section about the axis line through `pivot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRotation {
    pub axis: Axis,
    pub pivot: Point,
    pub angle_degrees: f32,
}

impl SectionRotation {
    /// Rotates `point` about the axis line through the pivot.
    pub fn apply(&self, point: Point) -> Point {
        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        let (x, y, z) = (
            point.0 - self.pivot.0,
            point.1 - self.pivot.1,
            point.2 - self.pivot.2,
        );

        let (rx, ry, rz) = match self.axis {
            Axis::X => (x, y * cos - z * sin, y * sin + z * cos),
            Axis::Y => (x * cos + z * sin, y, -x * sin + z * cos),
            Axis::Z => (x * cos - y * sin, x * sin + y * cos, z),
        };

        (rx + self.pivot.0, ry + self.pivot.1, rz + self.pivot.2)
    }
}

/// Centre of the cubie in `slot`.
pub fn slot_position(slot: Slot, edge_length: f32) -> Point {
    (
        slot.column as f32 * edge_length,
        slot.layer as f32 * edge_length,
        slot.row as f32 * edge_length,
    )
}

/// A point on the centre line of section `(section, index)`.
///
/// The fixed axis sits at the section's own coordinate; the two free axes
/// sit at the middle of the grid.
pub fn section_pivot<const DIM: usize>(
    section: SectionType,
    index: usize,
    edge_length: f32,
) -> Point {
    let middle = (DIM - 1) as f32 / 2.0 * edge_length;
    let fixed = index as f32 * edge_length;
    match section.axis() {
        Axis::X => (fixed, middle, middle),
        Axis::Y => (middle, fixed, middle),
        Axis::Z => (middle, middle, fixed),
    }
}
