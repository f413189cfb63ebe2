//! Rigid body interface
//!
//! Real dynamics belong to the host engine. [`KinematicBody`] is a tiny
//! stand-in with gravity and force accumulation so the headless loop has
//! something to steer.
//!
//! Rockets scale their thrust by frame time before sending it, so the
//! stand-in applies the accumulated force as an impulse on the next step.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Commands a rocket can send to its rigid body
pub trait PhysicsBody {
    /// Add a force in the body's local frame. Accumulates into the next step.
    fn apply_relative_force(&mut self, force: Vec3);
    /// While set, physics-driven rotation is suppressed
    fn set_manual_rotation(&mut self, manual: bool);
    /// Rotate about a local axis
    fn rotate(&mut self, angle_degrees: f32, axis: Vec3);
}

impl<T: PhysicsBody + ?Sized> PhysicsBody for Box<T> {
    fn apply_relative_force(&mut self, force: Vec3) {
        (**self).apply_relative_force(force);
    }

    fn set_manual_rotation(&mut self, manual: bool) {
        (**self).set_manual_rotation(manual);
    }

    fn rotate(&mut self, angle_degrees: f32, axis: Vec3) {
        (**self).rotate(angle_degrees, axis);
    }
}

/// Default gravity (units/s²)
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Point-mass body with orientation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Quat,
    /// Physics-driven spin (radians/s, world frame)
    pub angular_velocity: Vec3,
    pub mass: f32,
    pub gravity: Vec3,
    /// Local-frame force accumulated since the last step
    #[serde(skip)]
    pending_force: Vec3,
    #[serde(skip)]
    manual_rotation: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            angular_velocity: Vec3::ZERO,
            mass: 1.0,
            gravity: GRAVITY,
            pending_force: Vec3::ZERO,
            manual_rotation: false,
        }
    }
}

impl KinematicBody {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Local impulse waiting for the next step
    pub fn pending_force(&self) -> Vec3 {
        self.pending_force
    }

    pub fn manual_rotation(&self) -> bool {
        self.manual_rotation
    }

    /// Local "up" in world space (the engine's thrust direction)
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Integrate one step and clear accumulated force
    pub fn step(&mut self, dt: f32) {
        self.velocity += self.orientation * self.pending_force / self.mass;
        self.velocity += self.gravity * dt;
        self.position += self.velocity * dt;

        if !self.manual_rotation && self.angular_velocity != Vec3::ZERO {
            let spin = Quat::from_scaled_axis(self.angular_velocity * dt);
            self.orientation = (spin * self.orientation).normalize();
        }

        self.pending_force = Vec3::ZERO;
    }
}

impl PhysicsBody for KinematicBody {
    fn apply_relative_force(&mut self, force: Vec3) {
        self.pending_force += force;
    }

    fn set_manual_rotation(&mut self, manual: bool) {
        self.manual_rotation = manual;
        if manual {
            // Drop any spin picked up from contacts
            self.angular_velocity = Vec3::ZERO;
        }
    }

    fn rotate(&mut self, angle_degrees: f32, axis: Vec3) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let delta = Quat::from_axis_angle(axis, angle_degrees.to_radians());
        self.orientation = (self.orientation * delta).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_force_accumulates_until_step() {
        let mut body = KinematicBody::default();
        body.apply_relative_force(Vec3::Y * 2.0);
        body.apply_relative_force(Vec3::Y * 3.0);
        assert!(approx(body.pending_force(), Vec3::Y * 5.0));

        body.step(0.1);
        assert_eq!(body.pending_force(), Vec3::ZERO);
    }

    #[test]
    fn test_relative_force_follows_orientation() {
        let mut body = KinematicBody {
            gravity: Vec3::ZERO,
            ..Default::default()
        };
        // Roll 90° counter-clockwise: local up now points along -X
        body.rotate(90.0, Vec3::Z);
        assert!(approx(body.up(), Vec3::NEG_X));

        body.apply_relative_force(Vec3::Y * 10.0);
        body.step(1.0);
        assert!(approx(body.velocity, Vec3::new(-10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut body = KinematicBody::new(Vec3::new(0.0, 10.0, 0.0));
        body.step(1.0);
        assert!(body.position.y < 10.0);
        assert!(body.velocity.y < 0.0);
    }

    #[test]
    fn test_manual_rotation_suppresses_spin() {
        let mut body = KinematicBody {
            angular_velocity: Vec3::Z,
            ..Default::default()
        };
        body.set_manual_rotation(true);
        body.step(1.0);
        assert_eq!(body.orientation, Quat::IDENTITY);
        assert_eq!(body.angular_velocity, Vec3::ZERO);

        body.set_manual_rotation(false);
        body.angular_velocity = Vec3::Z;
        body.step(1.0);
        assert_ne!(body.orientation, Quat::IDENTITY);
    }

    #[test]
    fn test_rotate_zero_axis_is_noop() {
        let mut body = KinematicBody::default();
        body.rotate(45.0, Vec3::ZERO);
        assert_eq!(body.orientation, Quat::IDENTITY);
    }
}
