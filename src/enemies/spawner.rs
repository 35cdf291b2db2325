//! Initial population and timed respawning of enemies.

use super::archetype::EnemyKind;
use super::registry::EnemyRegistry;
use crate::core::constants::{SPAWN_JITTER_X, SPAWN_JITTER_Y};
use crate::core::entity::EntityId;
use crate::core::geometry::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub position: Vec2,
    pub kind: EnemyKind,
}

pub const SPAWN_POINTS: [SpawnPoint; 5] = [
    SpawnPoint {
        position: Vec2::new(200.0, 500.0),
        kind: EnemyKind::Goblin,
    },
    SpawnPoint {
        position: Vec2::new(800.0, 400.0),
        kind: EnemyKind::Wolf,
    },
    SpawnPoint {
        position: Vec2::new(1200.0, 350.0),
        kind: EnemyKind::Skeleton,
    },
    SpawnPoint {
        position: Vec2::new(600.0, 200.0),
        kind: EnemyKind::Goblin,
    },
    SpawnPoint {
        position: Vec2::new(1000.0, 600.0),
        kind: EnemyKind::Wolf,
    },
];

/// Accumulates simulation time and spawns a random enemy every
/// `delay_ms` while the registry is below `max_enemies`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySpawner {
    elapsed_ms: f64,
    delay_ms: f64,
    max_enemies: usize,
}

impl EnemySpawner {
    pub fn new(delay_ms: f64, max_enemies: usize) -> Self {
        Self {
            elapsed_ms: 0.0,
            delay_ms,
            max_enemies,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// One enemy of the listed kind at each fixed spawn point.
    pub fn populate_initial(
        &self,
        registry: &mut EnemyRegistry,
        rng: &mut impl Rng,
    ) -> Vec<EntityId> {
        SPAWN_POINTS
            .iter()
            .map(|point| registry.spawn(point.kind, point.position, &mut *rng))
            .collect()
    }

    /// Advances the timer. The timer keeps running while at the cap and
    /// only resets once a spawn actually happens.
    pub fn update(
        &mut self,
        delta_ms: f64,
        registry: &mut EnemyRegistry,
        rng: &mut impl Rng,
    ) -> Option<EntityId> {
        if delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }
        if self.elapsed_ms < self.delay_ms || registry.len() >= self.max_enemies {
            return None;
        }

        let point = SPAWN_POINTS[rng.gen_range(0..SPAWN_POINTS.len())];
        let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
        let offset = Vec2::new(
            rng.gen_range(-SPAWN_JITTER_X..=SPAWN_JITTER_X),
            rng.gen_range(-SPAWN_JITTER_Y..=SPAWN_JITTER_Y),
        );
        self.elapsed_ms = 0.0;
        Some(registry.spawn(kind, point.position + offset, rng))
    }
}
