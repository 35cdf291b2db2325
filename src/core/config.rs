//! Session configuration.
//!
//! Every field has a design default (see [`crate::core::constants`]) and
//! may be overridden from JSON. Missing fields keep their defaults.

use super::constants::*;
use super::error::ConfigError;
use super::geometry::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for a [`crate::GameSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for reproducible sessions (None = seeded from entropy)
    pub seed: Option<u64>,

    /// Number of inventory slots
    pub inventory_capacity: usize,

    /// Gold the player starts with
    pub starting_gold: u64,

    /// Spawn an enemy at every fixed spawn point when the session starts
    pub populate_spawn_points: bool,

    /// Upper bound on live enemies; the spawner waits while at the cap
    pub max_enemies: usize,

    /// Delay between timed spawns, in simulation milliseconds
    pub spawn_delay_ms: f64,

    pub crit_chance: f64,
    pub crit_multiplier: f64,

    /// Uniform damage variance (0.2 = +/-20%)
    pub damage_variance: f64,

    pub knockback_force: f32,

    /// Mana price of every ability
    pub ability_mana_cost: u32,

    /// Post-hit immunity window for the player, in milliseconds
    pub invulnerability_ms: f64,

    /// Minimum time between two enemy attacks, in milliseconds
    pub enemy_attack_cooldown_ms: f64,

    pub respawn_point: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            inventory_capacity: INVENTORY_CAPACITY,
            starting_gold: STARTING_GOLD,
            populate_spawn_points: true,
            max_enemies: MAX_ENEMIES,
            spawn_delay_ms: SPAWN_DELAY_MS,
            crit_chance: CRIT_CHANCE,
            crit_multiplier: CRIT_MULTIPLIER,
            damage_variance: DAMAGE_VARIANCE,
            knockback_force: KNOCKBACK_FORCE,
            ability_mana_cost: ABILITY_MANA_COST,
            invulnerability_ms: PLAYER_INVULNERABILITY_MS,
            enemy_attack_cooldown_ms: ENEMY_ATTACK_COOLDOWN_MS,
            respawn_point: Vec2::new(DEFAULT_RESPAWN_X, DEFAULT_RESPAWN_Y),
        }
    }
}

impl GameConfig {
    /// Parses a config from JSON. Unknown fields are ignored, missing ones defaulted.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Deterministic config for tests and replays: fixed seed, empty world.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            populate_spawn_points: false,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory_capacity == 0 {
            return Err(ConfigError::Invalid(
                "inventory_capacity must be at least 1".to_string(),
            ));
        }
        if !(self.spawn_delay_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "spawn_delay_ms must be positive, got {}",
                self.spawn_delay_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.crit_chance) {
            return Err(ConfigError::Invalid(format!(
                "crit_chance must be within [0, 1], got {}",
                self.crit_chance
            )));
        }
        if !(self.crit_multiplier >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "crit_multiplier must be at least 1, got {}",
                self.crit_multiplier
            )));
        }
        if !(0.0..1.0).contains(&self.damage_variance) {
            return Err(ConfigError::Invalid(format!(
                "damage_variance must be within [0, 1), got {}",
                self.damage_variance
            )));
        }
        if !(self.invulnerability_ms >= 0.0) || !(self.enemy_attack_cooldown_ms >= 0.0) {
            return Err(ConfigError::Invalid(
                "timer durations must not be negative".to_string(),
            ));
        }
        if !(self.knockback_force.is_finite() && self.knockback_force >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "knockback_force must be finite and non-negative, got {}",
                self.knockback_force
            )));
        }
        if !(self.respawn_point.x.is_finite() && self.respawn_point.y.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "respawn_point must be finite, got ({}, {})",
                self.respawn_point.x, self.respawn_point.y
            )));
        }
        Ok(())
    }
}
