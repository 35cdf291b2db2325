//! The player character: body, stats, progression and equipment.

use super::abilities::Ability;
use super::attributes::Attributes;
use super::body::Body;
use super::progression::Progression;
use super::stats::EntityStats;
use crate::combat::{AttackCooldown, AttackProfile, AttackSource, CombatTuning, Combatant};
use crate::core::constants::{
    DASH_IMPULSE, PLAYER_BASE_ATTACK_INTERVAL_MS, PLAYER_BASE_HEALTH, PLAYER_BASE_MANA,
    PLAYER_DRAG, PLAYER_JUMP_IMPULSE, PLAYER_RUN_MULTIPLIER, PLAYER_SPEED,
};
use crate::core::entity::{EntityId, PLAYER_ID};
use crate::core::geometry::{Facing, Vec2};
use crate::items::equipment::Equipment;

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub stats: EntityStats,
    pub progression: Progression,
    pub equipment: Equipment,
    running: bool,
    /// Remaining post-hit immunity, counted down by simulation time.
    invulnerable_ms: f64,
    attack_cooldown: AttackCooldown,
}

impl Player {
    /// A fresh level-1 character with the starting loadout.
    pub fn new(position: Vec2) -> Self {
        let equipment = Equipment::starting();
        let mut player = Self {
            body: Body::new(position, PLAYER_DRAG)
                .with_max_speed_x(PLAYER_SPEED * PLAYER_RUN_MULTIPLIER),
            stats: EntityStats::new(
                PLAYER_BASE_HEALTH,
                Some(PLAYER_BASE_MANA),
                Attributes::player_base(),
            ),
            progression: Progression::default(),
            equipment,
            running: false,
            invulnerable_ms: 0.0,
            attack_cooldown: AttackCooldown::new(PLAYER_BASE_ATTACK_INTERVAL_MS),
        };
        player.refresh_attack_interval();
        player
    }

    pub fn id(&self) -> EntityId {
        PLAYER_ID
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn speed(&self) -> f32 {
        if self.running {
            PLAYER_SPEED * PLAYER_RUN_MULTIPLIER
        } else {
            PLAYER_SPEED
        }
    }

    /// Sets velocity along `direction` at walking or running speed.
    /// A zero vector stops the player. Vertical input is ignored mid-jump.
    pub fn move_direction(&mut self, direction: Vec2) {
        let velocity = direction.normalized() * self.speed();
        self.body.velocity.x = velocity.x;
        if !self.body.is_airborne() {
            self.body.velocity.y = velocity.y;
        }
        self.body.face_towards(direction.x);
    }

    pub fn jump(&mut self) -> bool {
        self.body.jump(PLAYER_JUMP_IMPULSE)
    }

    /// Horizontal lunge in the facing direction.
    pub fn dash(&mut self) {
        self.body.push_x(DASH_IMPULSE * self.body.facing.sign());
    }

    pub fn facing(&self) -> Facing {
        self.body.facing
    }

    /// Base DEF attribute plus defense of all equipped gear.
    pub fn effective_defense(&self) -> u32 {
        self.stats.attributes.defense() + self.equipment.total_defense()
    }

    /// Attack with the equipped weapon (or bare hands).
    pub fn weapon_attack(&self) -> AttackProfile {
        let weapon = self.equipment.weapon_stats();
        AttackProfile {
            source: AttackSource::Weapon(weapon.kind),
            base_damage: weapon.damage + self.stats.attributes.strength(),
            range: weapon.kind.range(),
        }
    }

    /// Attack profile of a damaging ability, scaled by strength.
    pub fn ability_attack(&self, ability: Ability) -> Option<AttackProfile> {
        let (range, factor) = ability.strike()?;
        let damage = (self.stats.attributes.strength() as f64 * factor).floor() as u32;
        Some(AttackProfile {
            source: AttackSource::Ability(ability),
            base_damage: damage,
            range,
        })
    }

    pub fn attack_cooldown(&self) -> &AttackCooldown {
        &self.attack_cooldown
    }

    pub fn attack_cooldown_mut(&mut self) -> &mut AttackCooldown {
        &mut self.attack_cooldown
    }

    /// Re-derives the attack interval from the equipped weapon's speed.
    pub fn refresh_attack_interval(&mut self) {
        let speed = self.equipment.weapon_stats().attack_speed;
        let interval = if speed > 0.0 {
            PLAYER_BASE_ATTACK_INTERVAL_MS / speed as f64
        } else {
            PLAYER_BASE_ATTACK_INTERVAL_MS
        };
        self.attack_cooldown.set_interval(interval);
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ms > 0.0
    }

    pub fn invulnerable_ms(&self) -> f64 {
        self.invulnerable_ms
    }

    pub fn tick_timers(&mut self, delta_ms: f64) {
        if self.invulnerable_ms > 0.0 {
            self.invulnerable_ms = (self.invulnerable_ms - delta_ms).max(0.0);
        }
    }

    /// Back to `position` with full health. Level, mana and gear are kept.
    pub fn respawn(&mut self, position: Vec2) {
        self.body.teleport(position);
        self.stats.health.refill();
        self.invulnerable_ms = 0.0;
    }
}

impl Combatant for Player {
    fn id(&self) -> EntityId {
        PLAYER_ID
    }

    fn position(&self) -> Vec2 {
        self.body.position
    }

    fn defense(&self) -> u32 {
        self.effective_defense()
    }

    fn can_be_hit(&self) -> bool {
        self.stats.is_alive() && !self.is_invulnerable()
    }

    fn apply_hit(&mut self, damage: u32, knockback_x: f32, tuning: &CombatTuning) -> bool {
        let was_alive = self.stats.is_alive();
        self.stats.take_damage(damage);
        self.body.knock_back(knockback_x);
        self.invulnerable_ms = tuning.invulnerability_ms;
        was_alive && !self.stats.is_alive()
    }
}
