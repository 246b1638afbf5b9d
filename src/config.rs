//! Tunable animation and layout parameters.

use crate::error::PuzzleError;

/// Angle of one quarter turn. The grid permutation is always this angle.
pub const QUARTER_TURN_DEGREES: f32 = 90.0;

/// Parameters shared by the animation and the per-cubie output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleConfig {
    /// Angle added on every tick. Animation speed therefore follows the tick rate.
    pub degrees_per_tick: f32,
    /// Edge length of one cubie in world units.
    pub edge_length: f32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            degrees_per_tick: 1.0,
            edge_length: 1.0,
        }
    }
}

impl PuzzleConfig {
    /// Checks that an armed animation always reaches its target.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if !(self.degrees_per_tick.is_finite() && self.degrees_per_tick > 0.0) {
            return Err(PuzzleError::InvalidConfig("degrees per tick must be positive"));
        }
        if !(self.edge_length.is_finite() && self.edge_length > 0.0) {
            return Err(PuzzleError::InvalidConfig("edge length must be positive"));
        }
        Ok(())
    }

    /// Number of ticks a quarter turn takes to animate.
    pub fn ticks_per_turn(&self) -> usize {
        (QUARTER_TURN_DEGREES / self.degrees_per_tick).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_turn_takes_ninety_ticks() {
        assert_eq!(PuzzleConfig::default().ticks_per_turn(), 90);
    }

    #[test]
    fn test_validate_rejects_stalling_increment() {
        let config = PuzzleConfig {
            degrees_per_tick: 0.0,
            ..PuzzleConfig::default()
        };
        assert!(matches!(config.validate(), Err(PuzzleError::InvalidConfig(_))));
        assert_eq!(PuzzleConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_last_step_counts_as_a_tick() {
        let config = PuzzleConfig {
            degrees_per_tick: 7.0,
            ..PuzzleConfig::default()
        };
        assert_eq!(config.ticks_per_turn(), 13);
    }
}
