//! Moving obstacles
//!
//! An oscillator slides level geometry along a fixed vector. The factor picks
//! how far along the vector the obstacle sits: 0 is the starting position,
//! 1 is the far end.

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oscillator {
    /// Full travel from the starting position
    pub movement_vector: Vec3,
    /// Position along the travel, clamped to [0, 1]
    movement_factor: f32,
    starting_position: Vec3,
    position: Vec3,
}

impl Oscillator {
    pub fn new(starting_position: Vec3, movement_vector: Vec3) -> Self {
        Self {
            movement_vector,
            movement_factor: 0.0,
            starting_position,
            position: starting_position,
        }
    }

    pub fn movement_factor(&self) -> f32 {
        self.movement_factor
    }

    pub fn set_movement_factor(&mut self, factor: f32) {
        self.movement_factor = if factor.is_nan() {
            0.0
        } else {
            factor.clamp(0.0, 1.0)
        };
    }

    /// Position as of the last `update`
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Recompute the obstacle position for this frame
    pub fn update(&mut self) -> Vec3 {
        let offset = self.movement_vector * self.movement_factor;
        self.position = self.starting_position + offset;
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_origin_of_travel() {
        let mut osc = Oscillator::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(osc.update(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_factor_moves_along_vector() {
        let mut osc = Oscillator::new(Vec3::ZERO, Vec3::new(0.0, 8.0, 0.0));
        osc.set_movement_factor(0.5);
        assert_eq!(osc.update(), Vec3::new(0.0, 4.0, 0.0));
        osc.set_movement_factor(1.0);
        assert_eq!(osc.update(), Vec3::new(0.0, 8.0, 0.0));
        assert_eq!(osc.position(), Vec3::new(0.0, 8.0, 0.0));
    }

    #[test]
    fn test_factor_clamped() {
        let mut osc = Oscillator::new(Vec3::ZERO, Vec3::X);
        osc.set_movement_factor(3.0);
        assert_eq!(osc.movement_factor(), 1.0);
        osc.set_movement_factor(-1.0);
        assert_eq!(osc.movement_factor(), 0.0);
        osc.set_movement_factor(f32::NAN);
        assert_eq!(osc.movement_factor(), 0.0);
    }

    proptest! {
        #[test]
        fn position_stays_on_travel_segment(
            factor in -2.0f32..2.0,
            x in -50.0f32..50.0,
            y in -50.0f32..50.0,
        ) {
            let start = Vec3::new(5.0, -3.0, 0.0);
            let travel = Vec3::new(x, y, 0.0);
            let mut osc = Oscillator::new(start, travel);
            osc.set_movement_factor(factor);
            let pos = osc.update();

            let along = pos - start;
            prop_assert!(along.length() <= travel.length() + 1e-3);
            // Never behind the starting position
            prop_assert!(along.dot(travel) >= -1e-3);
        }
    }
}
