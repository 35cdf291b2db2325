//! Input commands.
//!
//! Every command reports success as a `bool`. A rejected command changes
//! nothing and emits nothing.

use super::entity::{EntityId, PLAYER_ID};
use super::geometry::Vec2;
use super::session::GameSession;
use crate::character::Ability;
use crate::core::constants::HEAL_ABILITY_AMOUNT;

impl GameSession {
    /// Steers `entity` along `direction`; a zero vector stops it.
    ///
    /// Enemies can be nudged too, but their AI takes the wheel again on the
    /// next tick. Unknown ids are rejected.
    pub fn move_direction(&mut self, entity: EntityId, direction: Vec2) -> bool {
        if entity == PLAYER_ID {
            self.player.move_direction(direction);
            return true;
        }
        let Some(enemy) = self.enemies.get_mut(entity) else {
            return false;
        };
        let speed = enemy.archetype().speed;
        enemy.body.velocity = direction.normalized() * speed;
        enemy.body.face_towards(direction.x);
        true
    }

    pub fn set_running(&mut self, running: bool) -> bool {
        self.player.set_running(running);
        true
    }

    /// Fails while already airborne.
    pub fn jump(&mut self) -> bool {
        self.player.jump()
    }

    /// Swings the equipped weapon at everything in range.
    ///
    /// The swing counts against the attack cooldown whether or not it hits.
    /// Fails while the cooldown is running.
    pub fn attack(&mut self) -> bool {
        let now = self.clock.now_ms();
        if !self.player.stats.is_alive() || !self.player.attack_cooldown().ready(now) {
            return false;
        }
        self.player.attack_cooldown_mut().mark(now);
        let attack = self.player.weapon_attack();
        let hits = self.player_strike(attack);
        log::trace!("Attack at {:.0}ms hit {} target(s)", now, hits.len());
        true
    }

    /// Casts the ability bound to `index` (0 = dash, 1 = heal, 2 = nova).
    ///
    /// # Returns
    /// false for an unbound index or when mana is short. Nothing is spent in
    /// either case.
    pub fn use_ability(&mut self, index: usize) -> bool {
        let Some(ability) = Ability::from_index(index) else {
            log::debug!("No ability bound to index {}", index);
            return false;
        };
        if !self.player.stats.spend_mana(self.config.ability_mana_cost) {
            log::debug!("Not enough mana for {:?}", ability);
            return false;
        }

        match ability {
            Ability::Dash => {
                self.player.dash();
                self.strike_with(ability);
            }
            Ability::Heal => {
                self.player.stats.heal(HEAL_ABILITY_AMOUNT);
            }
            Ability::Nova => self.strike_with(ability),
        }
        true
    }

    /// Consumes one unit of the consumable in slot `index`.
    pub fn use_inventory_slot(&mut self, index: usize) -> bool {
        self.inventory.use_slot(index, &mut self.player.stats)
    }

    /// Equips the gear in slot `index`, moving any displaced item back into
    /// the inventory.
    pub fn equip_inventory_slot(&mut self, index: usize) -> bool {
        if !self.inventory.equip_slot(index, &mut self.player.equipment) {
            return false;
        }
        self.player.refresh_attack_interval();
        true
    }

    fn strike_with(&mut self, ability: Ability) {
        if let Some(attack) = self.player.ability_attack(ability) {
            self.player_strike(attack);
        }
    }
}
