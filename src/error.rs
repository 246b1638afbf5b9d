//! Error type shared by the rotation engine and its controller.

use thiserror::Error;

/// Errors produced by puzzle commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A slot coordinate outside the grid. Always a caller bug.
    #[error("slot ({layer}, {row}, {column}) is outside the grid")]
    InvalidSlot {
        layer: usize,
        row: usize,
        column: usize,
    },
    /// A permutation write with a different number of slots and values.
    #[error("{slots} slots but {values} values")]
    LengthMismatch { slots: usize, values: usize },
    /// A section index outside the grid.
    #[error("section index {index} is outside the grid")]
    InvalidIndex { index: usize },
    /// A command arrived while a rotation is still animating.
    #[error("a rotation is still animating")]
    Busy,
    /// A configuration value that would stall or break the animation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// A move string that does not follow the notation.
    #[error("invalid move {0:?}: expected e.g. L0+, H1-, V2+")]
    InvalidMove(String),
}
