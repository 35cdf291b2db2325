//! Per-enemy patrol/chase/attack state machine.
//!
//! The transition rule is a pure function of the current state and the
//! distance to the player, so identical distances always give identical
//! states. Movement is straight-line; there is no pathfinding.

use crate::character::body::Body;
use crate::core::constants::{
    DETECTION_RANGE, DISENGAGE_FACTOR, ENEMY_ATTACK_RANGE, PATROL_DISTANCE, PATROL_SPEED_FACTOR,
};
use crate::core::geometry::Vec2;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AiState {
    #[default]
    Patrol,
    Chase,
    Attack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiRanges {
    pub patrol_distance: f32,
    pub detection: f32,
    pub attack: f32,
}

impl AiRanges {
    /// Distance past which a chasing enemy gives up.
    pub fn disengage(&self) -> f32 {
        self.detection * DISENGAGE_FACTOR
    }
}

impl Default for AiRanges {
    fn default() -> Self {
        Self {
            patrol_distance: PATROL_DISTANCE,
            detection: DETECTION_RANGE,
            attack: ENEMY_ATTACK_RANGE,
        }
    }
}

/// The state after one update at `distance` from the player.
pub fn next_state(state: AiState, distance: f32, ranges: &AiRanges) -> AiState {
    match state {
        AiState::Patrol if distance <= ranges.detection => AiState::Chase,
        AiState::Chase if distance > ranges.disengage() => AiState::Patrol,
        AiState::Chase if distance <= ranges.attack => AiState::Attack,
        AiState::Attack if distance > ranges.attack => AiState::Chase,
        unchanged => unchanged,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyAi {
    state: AiState,
    origin: Vec2,
    /// +1 or -1 along x.
    patrol_direction: f32,
    ranges: AiRanges,
}

impl EnemyAi {
    pub fn new(origin: Vec2, patrol_direction: f32) -> Self {
        Self {
            state: AiState::Patrol,
            origin,
            patrol_direction: if patrol_direction < 0.0 { -1.0 } else { 1.0 },
            ranges: AiRanges::default(),
        }
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn ranges(&self) -> &AiRanges {
        &self.ranges
    }

    /// Acts according to the current state, then transitions.
    ///
    /// Returns true when the enemy is holding in `Attack` with the player in
    /// reach and wants to strike; the caller gates that on the cooldown.
    pub fn update(&mut self, body: &mut Body, speed: f32, player: Vec2) -> bool {
        let distance = body.position.distance(player);

        match self.state {
            AiState::Patrol => self.patrol(body, speed),
            AiState::Chase => {
                let direction = (player - body.position).normalized();
                body.velocity = direction * speed;
                body.face_towards(direction.x);
            }
            AiState::Attack => {
                body.velocity = Vec2::ZERO;
                body.face_towards(player.x - body.position.x);
            }
        }

        let previous = self.state;
        self.state = next_state(previous, distance, &self.ranges);
        previous == AiState::Attack && self.state == AiState::Attack
    }

    fn patrol(&mut self, body: &mut Body, speed: f32) {
        let displacement = body.position.x - self.origin.x;
        if displacement.abs() >= self.ranges.patrol_distance {
            // Past the bound: always head back toward the origin.
            self.patrol_direction = -displacement.signum();
        }
        body.velocity.x = speed * PATROL_SPEED_FACTOR * self.patrol_direction;
        body.face_towards(self.patrol_direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges() -> AiRanges {
        AiRanges::default()
    }

    #[test]
    fn test_patrol_enters_chase_at_exact_detection_range() {
        assert_eq!(next_state(AiState::Patrol, 120.0, &ranges()), AiState::Chase);
        assert_eq!(next_state(AiState::Patrol, 120.01, &ranges()), AiState::Patrol);
    }

    #[test]
    fn test_patrol_never_jumps_straight_to_attack() {
        assert_eq!(next_state(AiState::Patrol, 1.0, &ranges()), AiState::Chase);
    }

    #[test]
    fn test_chase_hysteresis() {
        assert_eq!(next_state(AiState::Chase, 150.0, &ranges()), AiState::Chase);
        assert_eq!(next_state(AiState::Chase, 180.0, &ranges()), AiState::Chase);
        assert_eq!(next_state(AiState::Chase, 180.5, &ranges()), AiState::Patrol);
    }

    #[test]
    fn test_chase_to_attack_and_back() {
        assert_eq!(next_state(AiState::Chase, 35.0, &ranges()), AiState::Attack);
        assert_eq!(next_state(AiState::Attack, 35.0, &ranges()), AiState::Attack);
        assert_eq!(next_state(AiState::Attack, 35.5, &ranges()), AiState::Chase);
    }

    #[test]
    fn test_transitions_are_deterministic() {
        for distance in [0.0, 34.9, 35.0, 100.0, 120.0, 179.0, 500.0] {
            for state in [AiState::Patrol, AiState::Chase, AiState::Attack] {
                assert_eq!(
                    next_state(state, distance, &ranges()),
                    next_state(state, distance, &ranges())
                );
            }
        }
    }

    #[test]
    fn test_patrol_reverses_at_bound() {
        let origin = Vec2::new(200.0, 500.0);
        let mut ai = EnemyAi::new(origin, 1.0);
        let mut body = Body::new(Vec2::new(350.0, 500.0), 300.0);
        ai.update(&mut body, 80.0, Vec2::new(5000.0, 0.0));
        assert_eq!(body.velocity.x, -40.0);

        let mut body = Body::new(Vec2::new(40.0, 500.0), 300.0);
        ai.update(&mut body, 80.0, Vec2::new(5000.0, 0.0));
        assert_eq!(body.velocity.x, 40.0);
    }

    #[test]
    fn test_patrol_keeps_direction_inside_bound() {
        let mut ai = EnemyAi::new(Vec2::ZERO, -1.0);
        let mut body = Body::new(Vec2::new(10.0, 0.0), 300.0);
        ai.update(&mut body, 80.0, Vec2::new(5000.0, 0.0));
        assert_eq!(body.velocity.x, -40.0);
        assert_eq!(ai.state(), AiState::Patrol);
    }

    #[test]
    fn test_chase_moves_toward_player() {
        let mut ai = EnemyAi::new(Vec2::ZERO, 1.0);
        let mut body = Body::new(Vec2::ZERO, 300.0);
        let player = Vec2::new(-100.0, 0.0);

        ai.update(&mut body, 80.0, player);
        assert_eq!(ai.state(), AiState::Chase);

        ai.update(&mut body, 80.0, player);
        assert_eq!(body.velocity, Vec2::new(-80.0, 0.0));
    }

    #[test]
    fn test_attack_holds_position_and_requests_strike() {
        let mut ai = EnemyAi::new(Vec2::ZERO, 1.0);
        let mut body = Body::new(Vec2::ZERO, 300.0);
        let player = Vec2::new(20.0, 0.0);

        assert!(!ai.update(&mut body, 80.0, player));
        assert_eq!(ai.state(), AiState::Chase);
        assert!(!ai.update(&mut body, 80.0, player));
        assert_eq!(ai.state(), AiState::Attack);

        assert!(ai.update(&mut body, 80.0, player));
        assert_eq!(body.velocity, Vec2::ZERO);
    }
}
