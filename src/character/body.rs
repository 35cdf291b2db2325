//! Minimal kinematics: straight-line movement, drag, knockback and jumps.
//!
//! There is no terrain here. A jump lands back on the height it started
//! from; collision and world bounds belong to the host layer.

use crate::core::constants::GRAVITY;
use crate::core::geometry::{Facing, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    /// Horizontal knockback, kept apart from `velocity` so steering does not
    /// cancel it. Decays with the same drag.
    knockback_x: f32,
    /// Velocity decay toward zero, in units/s^2.
    drag: f32,
    max_speed_x: Option<f32>,
    /// Height the current jump started from; `None` while grounded.
    takeoff_y: Option<f32>,
}

impl Body {
    pub fn new(position: Vec2, drag: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Facing::default(),
            knockback_x: 0.0,
            drag,
            max_speed_x: None,
            takeoff_y: None,
        }
    }

    pub fn with_max_speed_x(mut self, max: f32) -> Self {
        self.max_speed_x = Some(max);
        self
    }

    pub fn is_airborne(&self) -> bool {
        self.takeoff_y.is_some()
    }

    /// Starts a jump. Fails while already airborne.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.is_airborne() {
            return false;
        }
        self.takeoff_y = Some(self.position.y);
        self.velocity.y = -impulse;
        true
    }

    /// Sets the horizontal velocity, e.g. for a dash.
    pub fn push_x(&mut self, velocity_x: f32) {
        self.velocity.x = velocity_x;
    }

    /// Replaces any knockback still in effect.
    pub fn knock_back(&mut self, velocity_x: f32) {
        self.knockback_x = velocity_x;
    }

    pub fn knockback_x(&self) -> f32 {
        self.knockback_x
    }

    pub fn face_towards(&mut self, dx: f32) {
        if let Some(facing) = Facing::from_direction(dx) {
            self.facing = facing;
        }
    }

    /// Moves to `position` and clears all motion.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.knockback_x = 0.0;
        self.takeoff_y = None;
    }

    /// Advances the body by `delta_ms` of simulated time.
    pub fn integrate(&mut self, delta_ms: f64) {
        let dt = (delta_ms / 1000.0) as f32;
        if dt <= 0.0 {
            return;
        }

        if let Some(max) = self.max_speed_x {
            self.velocity.x = self.velocity.x.clamp(-max, max);
        }
        self.position.x += (self.velocity.x + self.knockback_x) * dt;

        match self.takeoff_y {
            Some(ground) => {
                self.velocity.y += GRAVITY * dt;
                self.position.y += self.velocity.y * dt;
                if self.velocity.y > 0.0 && self.position.y >= ground {
                    self.position.y = ground;
                    self.velocity.y = 0.0;
                    self.takeoff_y = None;
                }
            }
            None => {
                self.position.y += self.velocity.y * dt;
                self.velocity.y = decay(self.velocity.y, self.drag * dt);
            }
        }

        self.velocity.x = decay(self.velocity.x, self.drag * dt);
        self.knockback_x = decay(self.knockback_x, self.drag * dt);
    }
}

fn decay(velocity: f32, amount: f32) -> f32 {
    if velocity.abs() <= amount {
        0.0
    } else {
        velocity - amount * velocity.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_brings_body_to_rest() {
        let mut body = Body::new(Vec2::ZERO, 500.0);
        body.push_x(100.0);
        for _ in 0..20 {
            body.integrate(50.0);
        }
        assert_eq!(body.velocity.x, 0.0);
        assert!(body.position.x > 0.0);
    }

    #[test]
    fn test_max_speed_clamps_horizontal_velocity() {
        let mut body = Body::new(Vec2::ZERO, 0.0).with_max_speed_x(225.0);
        body.push_x(300.0);
        body.integrate(1000.0);
        assert!((body.position.x - 225.0).abs() < 1e-3);
    }

    #[test]
    fn test_knockback_survives_steering() {
        let mut body = Body::new(Vec2::ZERO, 300.0);
        body.knock_back(100.0);
        // Steering rewrites velocity every frame.
        body.velocity.x = 0.0;
        body.integrate(100.0);
        assert!((body.position.x - 10.0).abs() < 1e-3);
        assert!((body.knockback_x() - 70.0).abs() < 1e-3);

        for _ in 0..10 {
            body.velocity.x = 0.0;
            body.integrate(100.0);
        }
        assert_eq!(body.knockback_x(), 0.0);
    }

    #[test]
    fn test_jump_lands_on_takeoff_height() {
        let mut body = Body::new(Vec2::new(0.0, 300.0), 500.0);
        assert!(body.jump(350.0));
        assert!(!body.jump(350.0), "no double jump");

        body.integrate(100.0);
        assert!(body.position.y < 300.0);

        for _ in 0..100 {
            body.integrate(50.0);
        }
        assert!(!body.is_airborne());
        assert_eq!(body.position.y, 300.0);
        assert!(body.jump(350.0), "can jump again after landing");
    }

    #[test]
    fn test_teleport_clears_motion() {
        let mut body = Body::new(Vec2::ZERO, 500.0);
        body.push_x(80.0);
        body.knock_back(-100.0);
        body.jump(350.0);
        body.teleport(Vec2::new(400.0, 300.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.knockback_x(), 0.0);
        assert!(!body.is_airborne());
    }

    #[test]
    fn test_face_towards_ignores_zero() {
        let mut body = Body::new(Vec2::ZERO, 0.0);
        body.face_towards(-1.0);
        assert_eq!(body.facing, Facing::Left);
        body.face_towards(0.0);
        assert_eq!(body.facing, Facing::Left);
    }
}
