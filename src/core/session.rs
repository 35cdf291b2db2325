//! The simulation root.
//!
//! A [`GameSession`] owns every piece of gameplay state: the clock, the
//! player, the enemy registry, the inventory, the quest log and the event
//! bus wired between them. Hosts drive it with commands and
//! [`GameSession::tick`], and read it back through snapshots.

use super::clock::SimClock;
use super::config::GameConfig;
use super::entity::{EntityId, EntityKind, PLAYER_ID};
use super::error::ConfigError;
use super::geometry::Vec2;
use super::reactions;
use crate::character::Player;
use crate::combat::{resolve_attack, AttackProfile, Attacker, CombatTuning, HitOutcome};
use crate::enemies::{EnemyRegistry, EnemySpawner};
use crate::events::{emit, DefeatedEntity, EventBus, EventContext, EventKind, GameEvent};
use crate::items::catalog::starting_items;
use crate::items::Inventory;
use crate::quests::QuestTracker;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) clock: SimClock,
    pub(crate) rng: StdRng,
    pub(crate) tuning: CombatTuning,
    pub(crate) player: Player,
    pub(crate) enemies: EnemyRegistry,
    pub(crate) spawner: EnemySpawner,
    pub(crate) inventory: Inventory,
    pub(crate) quests: QuestTracker,
    bus: EventBus<GameSession>,
    /// Everything emitted since the host last drained it.
    event_log: Vec<GameEvent>,
    /// Enemies removed since the last [`GameSession::present`].
    pub(crate) despawned: Vec<EntityId>,
    /// Set while level ups are being announced.
    pub(crate) leveling: bool,
}

impl GameSession {
    /// Builds a session from `config`.
    ///
    /// The player starts at the respawn point with the starting loadout and
    /// the initial quests. With `populate_spawn_points` set, one enemy is
    /// placed at each fixed spawn point.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut bus = EventBus::new();
        reactions::register(&mut bus);

        let mut session = Self {
            clock: SimClock::new(),
            rng,
            tuning: CombatTuning::from_config(&config),
            player: Player::new(config.respawn_point),
            enemies: EnemyRegistry::new(config.enemy_attack_cooldown_ms),
            spawner: EnemySpawner::new(config.spawn_delay_ms, config.max_enemies),
            inventory: Inventory::with_items(
                config.inventory_capacity,
                config.starting_gold,
                starting_items(),
            ),
            quests: QuestTracker::with_initial_quests(),
            bus,
            event_log: Vec::new(),
            despawned: Vec::new(),
            leveling: false,
            config,
        };

        if session.config.populate_spawn_points {
            let spawned = session
                .spawner
                .populate_initial(&mut session.enemies, &mut session.rng);
            log::debug!("Populated {} spawn points", spawned.len());
        }
        log::info!(
            "Session started (seed: {:?}, enemies: {})",
            session.config.seed,
            session.enemies.len()
        );
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access for hosts that own collision or scripted placement.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &EnemyRegistry {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut EnemyRegistry {
        &mut self.enemies
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// For pickups and rewards granted by the host.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn quests(&self) -> &QuestTracker {
        &self.quests
    }

    pub fn spawner(&self) -> &EnemySpawner {
        &self.spawner
    }

    /// Places an enemy by archetype name. Unknown names fall back to a goblin.
    pub fn spawn_enemy(&mut self, name: &str, position: Vec2) -> EntityId {
        self.enemies.spawn_named(name, position, &mut self.rng)
    }

    /// Registers a host callback for every event of `kind`. Observers run
    /// after the session's own handlers registered at construction.
    pub fn observe(&mut self, kind: EventKind, observer: impl FnMut(&GameEvent) + 'static) {
        self.bus.observe(kind, observer);
    }

    /// Takes every event emitted since the previous drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Resolves a player attack against every enemy and applies the results.
    pub(crate) fn player_strike(&mut self, attack: AttackProfile) -> Vec<HitOutcome> {
        let attacker = Attacker {
            id: PLAYER_ID,
            position: self.player.body.position,
        };
        let hits = resolve_attack(
            &attacker,
            &attack,
            self.enemies.iter_mut(),
            &self.tuning,
            &mut self.rng,
        );
        self.apply_hits(attacker.id, &hits);
        hits
    }

    /// Runs enemy AI for one tick and lets every enemy that is in attack
    /// range and off cooldown strike the player.
    pub(crate) fn update_enemies(&mut self) {
        let player_position = self.player.body.position;
        let now = self.clock.now_ms();

        let mut strikers = Vec::new();
        for enemy in self.enemies.iter_mut() {
            if enemy.think(player_position) && enemy.cooldown.ready(now) {
                enemy.cooldown.mark(now);
                strikers.push((
                    Attacker {
                        id: enemy.id,
                        position: enemy.body.position,
                    },
                    enemy.strike(),
                ));
            }
        }

        for (attacker, attack) in strikers {
            let hits = resolve_attack(
                &attacker,
                &attack,
                std::iter::once(&mut self.player),
                &self.tuning,
                &mut self.rng,
            );
            self.apply_hits(attacker.id, &hits);
        }
    }

    fn apply_hits(&mut self, attacker: EntityId, hits: &[HitOutcome]) {
        for hit in hits {
            emit(
                self,
                GameEvent::EntityDamaged {
                    target: hit.target,
                    attacker,
                    amount: hit.damage,
                    critical: hit.critical,
                },
            );
            if hit.died {
                self.handle_death(hit.target, attacker);
            }
        }
    }

    /// Emits the kill. Enemies leave the registry first; the player respawns
    /// after listeners have seen where they fell.
    fn handle_death(&mut self, victim: EntityId, killer: EntityId) {
        if victim == PLAYER_ID {
            let defeated = DefeatedEntity {
                id: PLAYER_ID,
                kind: EntityKind::Player,
                position: self.player.body.position,
            };
            log::info!("Player defeated by {}", killer);
            emit(
                self,
                GameEvent::EntityKilled {
                    victim: defeated,
                    killer,
                },
            );
            let respawn_point = self.config.respawn_point;
            self.player.respawn(respawn_point);
            return;
        }

        let Some(enemy) = self.enemies.remove(victim) else {
            return;
        };
        log::debug!("{} {} defeated", enemy.kind().name(), victim);
        self.despawned.push(victim);
        emit(
            self,
            GameEvent::EntityKilled {
                victim: DefeatedEntity {
                    id: victim,
                    kind: EntityKind::Enemy(enemy.kind()),
                    position: enemy.body.position,
                },
                killer,
            },
        );
    }
}

impl EventContext for GameSession {
    fn event_bus(&self) -> &EventBus<Self> {
        &self.bus
    }

    fn event_bus_mut(&mut self) -> &mut EventBus<Self> {
        &mut self.bus
    }

    fn record(&mut self, event: &GameEvent) {
        self.event_log.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        let mut config = GameConfig::seeded(7);
        config.crit_chance = 0.0;
        config.damage_variance = 0.0;
        GameSession::new(config).unwrap()
    }

    #[test]
    fn test_new_session_starting_state() {
        let s = session();
        assert_eq!(s.player().progression.level, 1);
        assert_eq!(s.player().stats.health.current(), 100);
        assert_eq!(s.inventory().gold(), 100);
        assert_eq!(s.quests().active().len(), 3);
        assert!(s.enemies().is_empty());
        assert_eq!(s.now_ms(), 0.0);
    }

    #[test]
    fn test_populated_session_has_five_enemies() {
        let mut config = GameConfig::seeded(1);
        config.populate_spawn_points = true;
        let s = GameSession::new(config).unwrap();
        assert_eq!(s.enemies().len(), 5);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = GameConfig::seeded(1);
        config.inventory_capacity = 0;
        assert!(matches!(
            GameSession::new(config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_player_strike_kill_removes_enemy_and_records_events() {
        let mut s = session();
        let id = s.spawn_enemy("goblin", Vec2::new(420.0, 300.0));
        s.enemies_mut().get_mut(id).unwrap().stats.health.drain(29);

        let attack = s.player().weapon_attack();
        let hits = s.player_strike(attack);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].died);
        assert!(s.enemies().get(id).is_none());
        assert_eq!(s.despawned, vec![id]);

        let events = s.drain_events();
        assert!(matches!(events[0], GameEvent::EntityDamaged { target, .. } if target == id));
        assert!(matches!(
            events[1],
            GameEvent::EntityKilled { victim, killer } if victim.id == id && killer == PLAYER_ID
        ));
        assert!(s.drain_events().is_empty());
    }
}
