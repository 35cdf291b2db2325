use crate::character::abilities::Ability;
use crate::core::config::GameConfig;
use crate::core::entity::EntityId;
use crate::core::geometry::Vec2;
use crate::enemies::EnemyKind;
use crate::items::types::WeaponKind;
use serde::Serialize;

/// What produced an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackSource {
    Weapon(WeaponKind),
    Ability(Ability),
    EnemyStrike(EnemyKind),
}

/// Everything the resolver needs to know about one attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    pub source: AttackSource,
    /// Weapon or ability damage plus the attacker's attribute contribution.
    pub base_damage: u32,
    pub range: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attacker {
    pub id: EntityId,
    pub position: Vec2,
}

/// Result of one attack roll, before per-target mitigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub amount: u32,
    pub critical: bool,
}

/// One target hit by an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HitOutcome {
    pub target: EntityId,
    /// Damage after defense mitigation. Health clamps at zero, so this may
    /// exceed what the target had left.
    pub damage: u32,
    pub critical: bool,
    /// True only for the hit that took the target to zero health.
    pub died: bool,
}

/// Combat tunables extracted from [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatTuning {
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub damage_variance: f64,
    pub knockback_force: f32,
    pub invulnerability_ms: f64,
}

impl CombatTuning {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            crit_chance: config.crit_chance,
            crit_multiplier: config.crit_multiplier,
            damage_variance: config.damage_variance,
            knockback_force: config.knockback_force,
            invulnerability_ms: config.invulnerability_ms,
        }
    }
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Anything that can be targeted by [`super::resolve_attack`].
pub trait Combatant {
    fn id(&self) -> EntityId;

    fn position(&self) -> Vec2;

    /// Flat damage reduction applied to every hit.
    fn defense(&self) -> u32;

    /// False while defeated or inside an invulnerability window.
    fn can_be_hit(&self) -> bool;

    /// Applies a mitigated hit and a horizontal knockback velocity.
    /// Returns true if this hit took health to zero.
    fn apply_hit(&mut self, damage: u32, knockback_x: f32, tuning: &CombatTuning) -> bool;
}
