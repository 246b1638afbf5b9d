//! The puzzle controller: single owner of grid, selection and animation.
//!
//! Commands arrive from input handling between ticks. A rotation commits the
//! new grid immediately and then arms the animation, so later commands
//! always see the logical state even while the turn is still on screen.

use log::debug;
use rustc_hash::FxHashSet;

use crate::animation::{AnimationController, AnimationPhase};
use crate::config::PuzzleConfig;
use crate::error::PuzzleError;
use crate::geometry::{slot_position, Point, SectionRotation};
use crate::grid::PositionGrid;
use crate::notation::Move;
use crate::rotation::{direction, rotate};
use crate::section::{select, Section, SelectionState};
use crate::slot::{CubieId, Slot, RUBIK_DIM, RUBIK_GRID_SIZE};

/// What the renderer needs to draw one cubie for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubieFrame {
    pub cubie: CubieId,
    /// Slot the cubie occupies in the logical grid.
    pub slot: Slot,
    /// Centre of that slot in world space.
    pub position: Point,
    /// Extra transform while the cubie's section is turning. The angle is
    /// `current - target`, not the animation's current angle, since
    /// `position` is already the new slot.
    pub rotation: Option<SectionRotation>,
    /// Whether the cubie sits in one of the selected slots.
    pub selected: bool,
}

impl CubieFrame {
    /// Position after applying the animation transform, if any.
    pub fn animated_position(&self) -> Point {
        match &self.rotation {
            Some(rotation) => rotation.apply(self.position),
            None => self.position,
        }
    }
}

/// Owns the whole puzzle state and exposes the command surface.
#[derive(Debug, Clone)]
pub struct PuzzleController<const DIM: usize, const GRID_SIZE: usize> {
    grid: PositionGrid<DIM, GRID_SIZE>,
    selection: SelectionState,
    /// Cubies currently in the selected slots.
    highlighted: FxHashSet<CubieId>,
    animation: AnimationController,
    config: PuzzleConfig,
}

/// Controller for the standard 3x3x3 cube.
pub type RubikController = PuzzleController<RUBIK_DIM, RUBIK_GRID_SIZE>;

impl<const DIM: usize, const GRID_SIZE: usize> Default for PuzzleController<DIM, GRID_SIZE> {
    fn default() -> Self {
        let mut controller = Self {
            grid: PositionGrid::new(),
            selection: SelectionState::default(),
            highlighted: FxHashSet::default(),
            animation: AnimationController::new(),
            config: PuzzleConfig::default(),
        };
        controller.refresh_selection();
        controller
    }
}

impl<const DIM: usize, const GRID_SIZE: usize> PuzzleController<DIM, GRID_SIZE> {
    /// Creates a solved puzzle with layer 0 selected.
    pub fn new(config: PuzzleConfig) -> Result<Self, PuzzleError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn grid(&self) -> &PositionGrid<DIM, GRID_SIZE> {
        &self.grid
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    /// Slots of the current selection, recomputed on every call.
    pub fn selected_section(&self) -> Section<DIM> {
        self.selection.section::<DIM>()
    }

    fn ensure_idle(&self, command: &str) -> Result<(), PuzzleError> {
        if self.is_animating() {
            debug!("ignoring {command} while animating");
            return Err(PuzzleError::Busy);
        }
        Ok(())
    }

    fn refresh_selection(&mut self) {
        let section = self.selected_section();
        self.highlighted.clear();
        for slot in section.slots() {
            if let Ok(cubie) = self.grid.get(slot) {
                self.highlighted.insert(cubie);
            }
        }
    }

    /// Moves the selection index by `delta`, wrapping around the grid.
    pub fn change_selected_index(&mut self, delta: isize) -> Result<(), PuzzleError> {
        self.ensure_idle("index change")?;
        self.selection.change_index::<DIM>(delta);
        self.refresh_selection();
        debug!("selected {:?}", self.selection);
        Ok(())
    }

    /// Cycles the selected section type, keeping the index.
    pub fn switch_selection_type(&mut self, forward: bool) -> Result<(), PuzzleError> {
        self.ensure_idle("type switch")?;
        self.selection.switch_type(forward);
        self.refresh_selection();
        debug!("selected {:?}", self.selection);
        Ok(())
    }

    /// Selects an explicit section.
    pub fn set_selection(&mut self, selection: SelectionState) -> Result<(), PuzzleError> {
        self.ensure_idle("selection")?;
        select::<DIM>(selection.section, selection.index)?;
        self.selection = selection;
        self.refresh_selection();
        Ok(())
    }

    /// Turns the selected section a quarter turn and starts its animation.
    ///
    /// On [`PuzzleError::Busy`] neither the grid nor the animation changes.
    pub fn rotate_selected_section(&mut self, forward: bool) -> Result<(), PuzzleError> {
        self.ensure_idle("rotation")?;
        let SelectionState { section, index } = self.selection;

        rotate(&mut self.grid, section, index, forward)?;
        self.animation
            .arm::<DIM>(section, index, forward, &self.config)?;
        debug!(
            "animating {section:?} {index} {} over {} ticks",
            direction(forward),
            self.config.ticks_per_turn()
        );
        Ok(())
    }

    /// Advances the animation by one step.
    ///
    /// When a turn finishes, the highlighted cubies are recomputed from the
    /// same selected slots, which may now hold different cubies.
    pub fn tick(&mut self) -> AnimationPhase {
        let was_animating = self.is_animating();
        let phase = self.animation.tick();
        if was_animating && phase == AnimationPhase::Idle {
            self.refresh_selection();
            debug!("rotation finished");
        }
        phase
    }

    /// Ticks until no animation is running. Returns the number of ticks.
    pub fn finish_animation(&mut self) -> usize {
        let mut ticks = 0;
        while self.is_animating() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Selects the move's section, turns it and runs the animation to the end.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), PuzzleError> {
        self.set_selection(SelectionState::new(mv.section, mv.index))?;
        self.rotate_selected_section(mv.forward)?;
        self.finish_animation();
        Ok(())
    }

    /// Whether `cubie` is currently highlighted.
    pub fn is_selected(&self, cubie: CubieId) -> bool {
        self.highlighted.contains(&cubie)
    }

    /// Per-cubie output for the current frame, in slot order.
    pub fn frames(&self) -> Vec<CubieFrame> {
        let turning = self.animation.state();

        self.grid
            .iter()
            .map(|(slot, cubie)| {
                let rotation = turning
                    .filter(|state| state.section.fixed_value(slot) == state.index)
                    .map(|state| state.rotation());
                CubieFrame {
                    cubie,
                    slot,
                    position: slot_position(slot, self.config.edge_length),
                    rotation,
                    selected: self.is_selected(cubie),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionType;

    fn layer_zero(controller: &RubikController) -> [[CubieId; 3]; 3] {
        let section = select::<3>(SectionType::Layer, 0).unwrap();
        std::array::from_fn(|i| {
            std::array::from_fn(|j| controller.grid().get(section.slot(i, j)).unwrap())
        })
    }

    #[test]
    fn test_new_controller_selects_layer_zero() {
        let controller = RubikController::default();
        assert_eq!(controller.selection(), SelectionState::new(SectionType::Layer, 0));
        for cubie in 0..27 {
            assert_eq!(controller.is_selected(cubie), cubie < 9, "cubie {cubie}");
        }
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_rotation_commits_before_animation_ends() {
        let mut controller = RubikController::default();
        controller.rotate_selected_section(true).unwrap();

        assert!(controller.is_animating());
        assert_eq!(layer_zero(&controller), [[2, 5, 8], [1, 4, 7], [0, 3, 6]]);

        assert_eq!(controller.finish_animation(), 90);
        assert_eq!(layer_zero(&controller), [[2, 5, 8], [1, 4, 7], [0, 3, 6]]);
    }

    #[test]
    fn test_busy_rotation_changes_nothing() {
        let mut controller = RubikController::default();
        controller.rotate_selected_section(true).unwrap();
        controller.tick();
        let grid = controller.grid().clone();
        let animation = *controller.animation().state().unwrap();

        assert_eq!(controller.rotate_selected_section(false), Err(PuzzleError::Busy));
        assert_eq!(controller.grid(), &grid);
        assert_eq!(controller.animation().state(), Some(&animation));
    }

    #[test]
    fn test_selection_changes_rejected_while_animating() {
        let mut controller = RubikController::default();
        controller.rotate_selected_section(false).unwrap();

        assert_eq!(controller.change_selected_index(1), Err(PuzzleError::Busy));
        assert_eq!(controller.switch_selection_type(true), Err(PuzzleError::Busy));
        assert_eq!(controller.selection(), SelectionState::default());

        controller.finish_animation();
        controller.change_selected_index(1).unwrap();
        assert_eq!(controller.selection().index, 1);
    }

    #[test]
    fn test_selection_is_positional_after_a_turn() {
        let mut controller = RubikController::default();
        controller.switch_selection_type(false).unwrap();
        controller.change_selected_index(-1).unwrap();
        assert_eq!(
            controller.selection(),
            SelectionState::new(SectionType::VerticalCross, 2)
        );

        // turning layer 0 moves cubies into and out of column 2
        controller
            .apply_move(Move::new(SectionType::Layer, 0, true))
            .unwrap();
        controller
            .set_selection(SelectionState::new(SectionType::VerticalCross, 2))
            .unwrap();

        for frame in controller.frames() {
            assert_eq!(frame.selected, frame.slot.column == 2, "{frame:?}");
        }
        // cubie 6 moved from column 0 into column 2, cubie 2 the other way
        assert!(controller.is_selected(6));
        assert!(!controller.is_selected(2));
    }

    #[test]
    fn test_bijection_survives_every_move() {
        let mut controller = RubikController::default();
        for section in SectionType::ALL {
            for index in 0..3 {
                for forward in [true, false, true] {
                    controller
                        .apply_move(Move::new(section, index, forward))
                        .unwrap();
                    assert!(controller.grid().is_permutation());
                }
            }
        }
    }

    #[test]
    fn test_forward_then_backward_restores_grid() {
        let mut controller = RubikController::default();
        controller
            .apply_move(Move::new(SectionType::VerticalCross, 1, true))
            .unwrap();
        let before = controller.grid().clone();

        let mv = Move::new(SectionType::HorizontalCross, 0, true);
        controller.apply_move(mv).unwrap();
        controller.apply_move(mv.inverse()).unwrap();

        assert_eq!(controller.grid(), &before);
    }

    #[test]
    fn test_four_forward_turns_restore_grid() {
        let mut controller = RubikController::default();
        controller.change_selected_index(1).unwrap();
        for _ in 0..4 {
            controller.rotate_selected_section(true).unwrap();
            controller.finish_animation();
        }
        assert!(controller.grid().is_identity());
    }

    #[test]
    fn test_frames_rotate_only_the_turning_section() {
        let mut controller = RubikController::default();
        controller
            .set_selection(SelectionState::new(SectionType::HorizontalCross, 1))
            .unwrap();
        controller.rotate_selected_section(true).unwrap();
        controller.tick();

        let frames = controller.frames();
        assert_eq!(frames.len(), 27);
        for frame in &frames {
            let turning = frame.slot.row == 1;
            assert_eq!(frame.rotation.is_some(), turning, "{frame:?}");
            assert_eq!(frame.selected, turning);
        }

        controller.finish_animation();
        assert!(controller.frames().iter().all(|f| f.rotation.is_none()));
    }

    #[test]
    fn test_animated_position_starts_at_previous_slot() {
        let mut controller = RubikController::default();
        controller.rotate_selected_section(true).unwrap();

        // cubie 0 moved from slot (0, 0, 0) to (0, 2, 0)
        let frame = controller
            .frames()
            .into_iter()
            .find(|f| f.cubie == 0)
            .unwrap();
        assert_eq!(frame.slot, Slot::new(0, 2, 0));
        let (x, y, z) = frame.animated_position();
        assert!(x.abs() < 1e-4 && y.abs() < 1e-4 && z.abs() < 1e-4, "{x} {y} {z}");
    }

    #[test]
    fn test_every_speed_starts_at_previous_slots_and_lands_on_new_ones() {
        for degrees_per_tick in [1.0, 7.0, 45.0] {
            let config = PuzzleConfig {
                degrees_per_tick,
                ..PuzzleConfig::default()
            };
            let mut controller = RubikController::new(config).unwrap();
            controller
                .set_selection(SelectionState::new(SectionType::VerticalCross, 1))
                .unwrap();
            let before: Vec<(CubieId, Point)> = controller
                .frames()
                .iter()
                .map(|f| (f.cubie, f.position))
                .collect();

            controller.rotate_selected_section(true).unwrap();
            let frames = controller.frames();
            for (cubie, (bx, by, bz)) in before {
                let frame = frames.iter().find(|f| f.cubie == cubie).unwrap();
                let (x, y, z) = frame.animated_position();
                assert!(
                    (x - bx).abs() < 1e-4 && (y - by).abs() < 1e-4 && (z - bz).abs() < 1e-4,
                    "{degrees_per_tick} degrees per tick, cubie {cubie} at {x} {y} {z}"
                );
            }

            assert_eq!(controller.finish_animation(), config.ticks_per_turn());
            for frame in controller.frames() {
                assert_eq!(frame.animated_position(), frame.position);
            }
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = PuzzleConfig {
            edge_length: -1.0,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            RubikController::new(config),
            Err(PuzzleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_set_selection_rejects_out_of_range_index() {
        let mut controller = RubikController::default();
        assert_eq!(
            controller.set_selection(SelectionState::new(SectionType::Layer, 3)),
            Err(PuzzleError::InvalidIndex { index: 3 })
        );
        assert_eq!(controller.selection(), SelectionState::default());
    }
}
