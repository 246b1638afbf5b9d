//! Animation of the section currently turning.
//!
//! The logical grid is updated the moment a rotation is accepted; this module
//! only interpolates the visual angle from zero to the quarter turn target,
//! one fixed increment per tick.

use log::trace;

use crate::config::{PuzzleConfig, QUARTER_TURN_DEGREES};
use crate::error::PuzzleError;
use crate::geometry::{section_pivot, Axis, Point, SectionRotation};
use crate::section::SectionType;

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Animating,
}

/// An in-progress rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Section being turned.
    pub section: SectionType,
    pub index: usize,
    pub axis: Axis,
    pub pivot: Point,
    /// Angle reached so far, in degrees.
    pub current_angle: f32,
    /// Signed angle added per tick.
    pub increment: f32,
    /// Signed final angle, `+quarter` forward or `-quarter` backward.
    pub target_angle: f32,
}

impl AnimationState {
    /// Transform to apply to a cubie already placed in its new slot.
    ///
    /// Turning the new position back by `current - target` degrees gives the
    /// starting position turned forward by `current`, so the cubie travels
    /// continuously and ends at the identity.
    pub fn rotation(&self) -> SectionRotation {
        SectionRotation {
            axis: self.axis,
            pivot: self.pivot,
            angle_degrees: self.current_angle - self.target_angle,
        }
    }

    fn reached_target(&self) -> bool {
        if self.increment >= 0.0 {
            self.current_angle >= self.target_angle
        } else {
            self.current_angle <= self.target_angle
        }
    }
}

/// State machine driving one visual rotation at a time.
#[derive(Debug, Clone, Default)]
pub struct AnimationController {
    state: Option<AnimationState>,
}

impl AnimationController {
    /// Creates an inert controller.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn phase(&self) -> AnimationPhase {
        if self.is_active() {
            AnimationPhase::Animating
        } else {
            AnimationPhase::Idle
        }
    }

    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// Starts animating a quarter turn of `(section, index)`.
    ///
    /// Fails with [`PuzzleError::Busy`] and changes nothing if another
    /// rotation is still running.
    pub fn arm<const DIM: usize>(
        &mut self,
        section: SectionType,
        index: usize,
        forward: bool,
        config: &PuzzleConfig,
    ) -> Result<(), PuzzleError> {
        if self.is_active() {
            return Err(PuzzleError::Busy);
        }

        let sign = if forward { 1.0 } else { -1.0 };
        self.state = Some(AnimationState {
            section,
            index,
            axis: section.axis(),
            pivot: section_pivot::<DIM>(section, index, config.edge_length),
            current_angle: 0.0,
            increment: sign * config.degrees_per_tick,
            target_angle: sign * QUARTER_TURN_DEGREES,
        });
        Ok(())
    }

    /// Advances the animation by one increment.
    ///
    /// The angle snaps to the target instead of overshooting it, and the
    /// controller returns to idle on the tick that reaches it.
    pub fn tick(&mut self) -> AnimationPhase {
        let Some(state) = &mut self.state else {
            return AnimationPhase::Idle;
        };

        state.current_angle += state.increment;
        if state.reached_target() {
            state.current_angle = state.target_angle;
        }
        trace!(
            "{:?} {} at {} of {} degrees",
            state.section,
            state.index,
            state.current_angle,
            state.target_angle
        );

        if state.current_angle == state.target_angle {
            self.state = None;
            AnimationPhase::Idle
        } else {
            AnimationPhase::Animating
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(forward: bool, config: &PuzzleConfig) -> AnimationController {
        let mut animation = AnimationController::new();
        animation
            .arm::<3>(SectionType::HorizontalCross, 2, forward, config)
            .unwrap();
        animation
    }

    #[test]
    fn test_new_controller_is_idle() {
        let mut animation = AnimationController::new();
        assert_eq!(animation.phase(), AnimationPhase::Idle);
        assert_eq!(animation.tick(), AnimationPhase::Idle);
        assert!(animation.state().is_none());
    }

    #[test]
    fn test_arm_sets_axis_pivot_and_target() {
        let animation = armed(false, &PuzzleConfig::default());
        let state = animation.state().unwrap();

        assert_eq!(state.axis, Axis::Z);
        assert_eq!(state.pivot, (1.0, 1.0, 2.0));
        assert_eq!(state.current_angle, 0.0);
        assert_eq!(state.increment, -1.0);
        assert_eq!(state.target_angle, -90.0);
    }

    #[test]
    fn test_forward_turn_finishes_after_ninety_ticks() {
        let mut animation = armed(true, &PuzzleConfig::default());
        for tick in 1..90 {
            assert_eq!(animation.tick(), AnimationPhase::Animating, "tick {tick}");
            assert_eq!(animation.state().unwrap().current_angle, tick as f32);
        }
        assert_eq!(animation.tick(), AnimationPhase::Idle);
        assert!(!animation.is_active());
    }

    #[test]
    fn test_last_tick_snaps_to_target() {
        let config = PuzzleConfig {
            degrees_per_tick: 40.0,
            ..PuzzleConfig::default()
        };
        let mut animation = armed(false, &config);

        assert_eq!(animation.tick(), AnimationPhase::Animating);
        assert_eq!(animation.state().unwrap().current_angle, -40.0);
        assert_eq!(animation.tick(), AnimationPhase::Animating);
        assert_eq!(animation.state().unwrap().current_angle, -80.0);
        // -120 would overshoot -90
        assert_eq!(animation.tick(), AnimationPhase::Idle);
    }

    #[test]
    fn test_target_is_a_quarter_turn_at_any_speed() {
        for degrees_per_tick in [1.0, 7.0, 45.0] {
            let config = PuzzleConfig {
                degrees_per_tick,
                ..PuzzleConfig::default()
            };
            let state = *armed(false, &config).state().unwrap();
            assert_eq!(state.target_angle, -QUARTER_TURN_DEGREES);
            assert_eq!(state.rotation().angle_degrees, QUARTER_TURN_DEGREES);
        }
    }

    #[test]
    fn test_arm_while_active_is_busy() {
        let config = PuzzleConfig::default();
        let mut animation = armed(true, &config);
        animation.tick();
        let before = *animation.state().unwrap();

        let result = animation.arm::<3>(SectionType::Layer, 0, false, &config);

        assert_eq!(result, Err(PuzzleError::Busy));
        assert_eq!(animation.state(), Some(&before));
    }

    #[test]
    fn test_rotation_runs_from_minus_target_to_zero() {
        let mut animation = armed(true, &PuzzleConfig::default());
        assert_eq!(animation.state().unwrap().rotation().angle_degrees, -90.0);
        animation.tick();
        assert_eq!(animation.state().unwrap().rotation().angle_degrees, -89.0);
    }
}
