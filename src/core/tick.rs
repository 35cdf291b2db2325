//! The per-frame simulation step.
//!
//! [`GameSession::tick`] advances the world by one delta and returns a
//! [`TickResult`] describing what happened, so the host can update its
//! presentation without the core knowing anything about it.

use super::entity::EntityId;
use super::session::GameSession;
use crate::events::GameEvent;

/// Outcome of one [`GameSession::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Every event emitted since the previous drain, in emission order.
    /// Includes events caused by commands issued between ticks.
    pub events: Vec<GameEvent>,

    /// Enemy spawned by the timer during this tick, if any.
    pub spawned: Option<EntityId>,

    /// Simulation time after the tick.
    pub now_ms: f64,
}

impl TickResult {
    pub fn kills(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, GameEvent::EntityKilled { .. }))
            .count()
    }

    /// New levels reached this tick, in order.
    pub fn level_ups(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::LevelUp { level } => Some(*level),
                _ => None,
            })
            .collect()
    }
}

impl GameSession {
    /// Advances the simulation by `delta_ms` of game time.
    ///
    /// Order within a tick:
    /// 1. clock and spawn timer advance
    /// 2. enemy AI runs and in-range enemies strike the player
    /// 3. every body integrates its velocity
    /// 4. the player's invulnerability window counts down
    ///
    /// Event reactions (experience, quests, loot) run synchronously inside
    /// step 2, as each hit is applied.
    ///
    /// # Arguments
    /// - `delta_ms`: Elapsed time. Negative or non-finite values are treated
    ///   as zero.
    pub fn tick(&mut self, delta_ms: f64) -> TickResult {
        let delta_ms = if delta_ms.is_finite() && delta_ms > 0.0 {
            delta_ms
        } else {
            0.0
        };

        // ── 1. Time ─────────────────────────────────────────────────
        self.clock.advance(delta_ms);
        let spawned = self
            .spawner
            .update(delta_ms, &mut self.enemies, &mut self.rng);
        if let Some(id) = spawned {
            log::debug!("Spawned enemy {}", id);
        }

        // ── 2. AI and enemy attacks ─────────────────────────────────
        self.update_enemies();

        // ── 3. Movement ─────────────────────────────────────────────
        self.player.body.integrate(delta_ms);
        for enemy in self.enemies.iter_mut() {
            enemy.body.integrate(delta_ms);
        }

        // ── 4. Timers ───────────────────────────────────────────────
        self.player.tick_timers(delta_ms);

        TickResult {
            events: self.drain_events(),
            spawned,
            now_ms: self.clock.now_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::config::GameConfig;
    use crate::core::geometry::Vec2;
    use crate::core::session::GameSession;
    use crate::enemies::AiState;

    fn session() -> GameSession {
        let mut config = GameConfig::seeded(5);
        config.crit_chance = 0.0;
        config.damage_variance = 0.0;
        GameSession::new(config).unwrap()
    }

    #[test]
    fn test_tick_advances_clock() {
        let mut s = session();
        let result = s.tick(16.0);
        assert_eq!(result.now_ms, 16.0);
        assert!(result.events.is_empty());
        assert!(result.spawned.is_none());
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut s = session();
        s.tick(100.0);
        let result = s.tick(-50.0);
        assert_eq!(result.now_ms, 100.0);
    }

    #[test]
    fn test_spawner_fires_after_delay() {
        let mut s = session();
        assert!(s.tick(2999.0).spawned.is_none());
        let result = s.tick(1.0);
        assert!(result.spawned.is_some());
        assert_eq!(s.enemies().len(), 1);
    }

    #[test]
    fn test_enemy_in_range_strikes_player() {
        let mut s = session();
        s.spawn_enemy("goblin", Vec2::new(420.0, 300.0));
        // Patrol -> Chase -> Attack, then the first strike lands.
        assert!(s.tick(16.0).events.is_empty());
        assert!(s.tick(16.0).events.is_empty());
        assert_eq!(s.enemies().iter().next().unwrap().ai.state(), AiState::Attack);

        let result = s.tick(16.0);
        assert_eq!(result.events.len(), 1);
        // 8 damage against 10 defense is floored to 1.
        assert_eq!(s.player().stats.health.current(), 99);
        assert!(s.player().is_invulnerable());
    }

    #[test]
    fn test_result_helpers() {
        let mut s = session();
        let id = s.spawn_enemy("goblin", Vec2::new(430.0, 300.0));
        s.enemies_mut().get_mut(id).unwrap().stats.health.drain(29);
        s.attack();
        let result = s.tick(16.0);
        assert_eq!(result.kills(), 1);
        assert!(result.level_ups().is_empty());
    }
}
