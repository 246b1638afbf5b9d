//! Rubik's Cube Rotation Engine
//!
//! Tracks which cubie occupies which slot of an N x N x N cube, selects
//! rotatable sections, applies quarter turns and drives their animation.

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod notation;
pub mod rotation;
pub mod section;
pub mod slot;

use animation::AnimationPhase;
use controller::{CubieFrame, PuzzleController};
use error::PuzzleError;
use notation::Move;
use section::SelectionState;

/// Trait that erases compile-time grid parameters for dynamic dispatch.
///
/// Both const generics (`DIM`, `GRID_SIZE`) are hidden behind the vtable, so
/// input handling and rendering can drive any cube size without turbofish.
pub trait PuzzleOps {
    fn rotate_selected_section(&mut self, forward: bool) -> Result<(), PuzzleError>;
    fn change_selected_index(&mut self, delta: isize) -> Result<(), PuzzleError>;
    fn switch_selection_type(&mut self, forward: bool) -> Result<(), PuzzleError>;
    fn tick(&mut self) -> AnimationPhase;
    fn apply_move(&mut self, mv: Move) -> Result<(), PuzzleError>;
    fn frames(&self) -> Vec<CubieFrame>;
    fn selection(&self) -> SelectionState;
    fn is_animating(&self) -> bool;
    fn format_grid(&self) -> String;
    fn dim(&self) -> usize;
}

impl<const DIM: usize, const GRID_SIZE: usize> PuzzleOps for PuzzleController<DIM, GRID_SIZE> {
    fn rotate_selected_section(&mut self, forward: bool) -> Result<(), PuzzleError> {
        PuzzleController::rotate_selected_section(self, forward)
    }

    fn change_selected_index(&mut self, delta: isize) -> Result<(), PuzzleError> {
        PuzzleController::change_selected_index(self, delta)
    }

    fn switch_selection_type(&mut self, forward: bool) -> Result<(), PuzzleError> {
        PuzzleController::switch_selection_type(self, forward)
    }

    fn tick(&mut self) -> AnimationPhase {
        PuzzleController::tick(self)
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), PuzzleError> {
        PuzzleController::apply_move(self, mv)
    }

    fn frames(&self) -> Vec<CubieFrame> {
        PuzzleController::frames(self)
    }

    fn selection(&self) -> SelectionState {
        PuzzleController::selection(self)
    }

    fn is_animating(&self) -> bool {
        PuzzleController::is_animating(self)
    }

    fn format_grid(&self) -> String {
        grid::format_grid(self.grid())
    }

    fn dim(&self) -> usize {
        DIM
    }
}
