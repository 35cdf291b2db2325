//! Scripted player used by headless runs.
//!
//! Each frame it looks after itself first (potions, heal, better weapons),
//! then walks to the nearest enemy and fights it. Only the public command
//! surface is used, the same one a real input layer drives.

use crate::core::constants::{HEALTH_POTION_VALUE, NOVA_RANGE};
use crate::core::entity::PLAYER_ID;
use crate::core::geometry::Vec2;
use crate::core::session::GameSession;
use crate::items::catalog::{HEALTH_POTION, MANA_POTION};
use crate::items::ItemPayload;

/// Health fraction below which the autopilot drinks or casts heal.
const LOW_HEALTH: f64 = 0.4;

/// Enemies inside nova range needed before the autopilot spends mana on it.
const NOVA_CROWD: usize = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autopilot {
    pub potions_used: u32,
    pub abilities_used: u32,
    pub weapons_equipped: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues this frame's commands.
    pub fn act(&mut self, session: &mut GameSession) {
        self.look_after_health(session);
        self.restore_mana(session);
        self.upgrade_weapon(session);
        self.fight(session);
    }

    fn look_after_health(&mut self, session: &mut GameSession) {
        let health = session.player().stats.health;
        let missing = health.max() - health.current();
        if (health.current() as f64) >= health.max() as f64 * LOW_HEALTH {
            return;
        }
        if missing >= HEALTH_POTION_VALUE {
            if let Some(slot) = find_slot(session, HEALTH_POTION) {
                if session.use_inventory_slot(slot) {
                    self.potions_used += 1;
                    return;
                }
            }
        }
        if session.use_ability(1) {
            self.abilities_used += 1;
        }
    }

    fn restore_mana(&mut self, session: &mut GameSession) {
        let Some(mana) = session.player().stats.mana else {
            return;
        };
        if mana.current() >= session.config().ability_mana_cost {
            return;
        }
        if let Some(slot) = find_slot(session, MANA_POTION) {
            if session.use_inventory_slot(slot) {
                self.potions_used += 1;
            }
        }
    }

    /// Equips the strongest weapon in the bag if it beats the current one.
    fn upgrade_weapon(&mut self, session: &mut GameSession) {
        let current = session.player().equipment.weapon_stats().damage;
        let best = session
            .inventory()
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot.as_ref()?.payload {
                ItemPayload::Weapon { damage, .. } if damage > current => Some((index, damage)),
                _ => None,
            })
            .max_by_key(|&(_, damage)| damage);

        if let Some((index, damage)) = best {
            if session.equip_inventory_slot(index) {
                log::debug!("Autopilot equipped a {} damage weapon", damage);
                self.weapons_equipped += 1;
            }
        }
    }

    fn fight(&mut self, session: &mut GameSession) {
        let position = session.player().body.position;
        let Some((target, distance)) = session.enemies().nearest(position) else {
            session.move_direction(PLAYER_ID, Vec2::ZERO);
            return;
        };

        let reach = session.player().weapon_attack().range;
        if distance > reach * 0.8 {
            if let Some(enemy) = session.enemies().get(target) {
                let heading = enemy.body.position - position;
                session.move_direction(PLAYER_ID, heading);
            }
            return;
        }

        session.move_direction(PLAYER_ID, Vec2::ZERO);
        let crowd = session.enemies().in_range(position, NOVA_RANGE).len();
        if crowd >= NOVA_CROWD && session.use_ability(2) {
            self.abilities_used += 1;
            return;
        }
        session.attack();
    }
}

fn find_slot(session: &GameSession, id: &str) -> Option<usize> {
    session
        .inventory()
        .slots()
        .iter()
        .position(|slot| slot.as_ref().is_some_and(|item| item.id == id))
}
