//! Damage, crit and targeting math.
//!
//! The rolls are pure functions over an injected RNG; only
//! [`resolve_attack`] touches targets, through the [`Combatant`] trait.

use super::types::{AttackProfile, Attacker, CombatTuning, Combatant, DamageRoll, HitOutcome};
use crate::core::constants::MIN_DAMAGE;
use crate::core::geometry::Vec2;
use rand::Rng;

/// Roll the damage of one attack.
///
/// # Arguments
/// * `base_damage` - Weapon/ability damage plus attribute contribution
/// * `tuning` - Variance, crit chance and crit multiplier
/// * `rng` - Random number generator
///
/// # Returns
/// A uniform roll in `[floor(base * (1 - v)), ceil(base * (1 + v))]`,
/// multiplied (and floored) on a crit.
pub fn roll_damage(base_damage: u32, tuning: &CombatTuning, rng: &mut impl Rng) -> DamageRoll {
    let base = base_damage as f64;
    let low = (base * (1.0 - tuning.damage_variance)).floor() as u32;
    let high = (base * (1.0 + tuning.damage_variance)).ceil() as u32;
    let mut amount = if high > low {
        rng.gen_range(low..=high)
    } else {
        low
    };

    let critical = rng.gen::<f64>() < tuning.crit_chance;
    if critical {
        amount = (amount as f64 * tuning.crit_multiplier).floor() as u32;
        log::debug!("Critical hit for {}", amount);
    }

    DamageRoll { amount, critical }
}

/// Damage after flat defense. Never below [`MIN_DAMAGE`].
pub fn mitigate(rolled: u32, defense: u32) -> u32 {
    rolled.saturating_sub(defense).max(MIN_DAMAGE)
}

/// Unit horizontal direction pushing a target away from the attacker.
pub fn knockback_direction(attacker: Vec2, target: Vec2) -> f32 {
    if target.x > attacker.x {
        1.0
    } else {
        -1.0
    }
}

/// Whether `target` is inside `range` of `origin` (inclusive).
pub fn in_range(origin: Vec2, target: Vec2, range: f32) -> bool {
    origin.distance(target) <= range
}

/// Resolve one attack against every candidate in range.
///
/// The damage roll (variance and crit) happens once per attack; defense is
/// applied per target. Candidates that cannot be hit, the attacker itself,
/// and anything out of range are skipped. Nothing is rolled when no target
/// is in range.
///
/// # Returns
/// One [`HitOutcome`] per target hit, in candidate order.
pub fn resolve_attack<'a, T, I>(
    attacker: &Attacker,
    attack: &AttackProfile,
    candidates: I,
    tuning: &CombatTuning,
    rng: &mut impl Rng,
) -> Vec<HitOutcome>
where
    T: Combatant + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let mut targets: Vec<&mut T> = candidates
        .into_iter()
        .filter(|t| {
            t.id() != attacker.id
                && t.can_be_hit()
                && in_range(attacker.position, t.position(), attack.range)
        })
        .collect();
    if targets.is_empty() {
        return Vec::new();
    }

    let roll = roll_damage(attack.base_damage, tuning, rng);

    targets
        .iter_mut()
        .map(|target| {
            let damage = mitigate(roll.amount, target.defense());
            let push = knockback_direction(attacker.position, target.position())
                * tuning.knockback_force;
            let died = target.apply_hit(damage, push, tuning);
            HitOutcome {
                target: target.id(),
                damage,
                critical: roll.critical,
                died,
            }
        })
        .collect()
}
