use super::ai::EnemyAi;
use super::archetype::{EnemyArchetype, EnemyKind};
use crate::character::attributes::Attributes;
use crate::character::body::Body;
use crate::character::stats::EntityStats;
use crate::combat::{AttackCooldown, AttackProfile, AttackSource, CombatTuning, Combatant};
use crate::core::constants::{ENEMY_ATTACK_RANGE, ENEMY_DRAG};
use crate::core::entity::EntityId;
use crate::core::geometry::Vec2;

/// A live enemy instance, stamped out from an [`EnemyArchetype`].
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EntityId,
    archetype: EnemyArchetype,
    pub stats: EntityStats,
    pub body: Body,
    pub ai: EnemyAi,
    pub cooldown: AttackCooldown,
}

impl Enemy {
    pub fn new(
        id: EntityId,
        archetype: EnemyArchetype,
        position: Vec2,
        patrol_direction: f32,
        attack_cooldown_ms: f64,
    ) -> Self {
        let attributes = Attributes::new(0, 0, 0, archetype.defense);
        Self {
            id,
            archetype,
            stats: EntityStats::new(archetype.max_health, None, attributes),
            body: Body::new(position, ENEMY_DRAG),
            ai: EnemyAi::new(position, patrol_direction),
            cooldown: AttackCooldown::new(attack_cooldown_ms),
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.archetype.kind
    }

    pub fn archetype(&self) -> &EnemyArchetype {
        &self.archetype
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Runs the AI for one tick. True when the enemy wants to strike.
    pub fn think(&mut self, player: Vec2) -> bool {
        self.ai.update(&mut self.body, self.archetype.speed, player)
    }

    pub fn strike(&self) -> AttackProfile {
        AttackProfile {
            source: AttackSource::EnemyStrike(self.archetype.kind),
            base_damage: self.archetype.damage,
            range: ENEMY_ATTACK_RANGE,
        }
    }
}

impl Combatant for Enemy {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Vec2 {
        self.body.position
    }

    fn defense(&self) -> u32 {
        self.stats.attributes.defense()
    }

    /// Enemies have no invulnerability window.
    fn can_be_hit(&self) -> bool {
        self.is_alive()
    }

    fn apply_hit(&mut self, damage: u32, knockback_x: f32, _tuning: &CombatTuning) -> bool {
        let was_alive = self.is_alive();
        self.stats.take_damage(damage);
        self.body.knock_back(knockback_x);
        was_alive && !self.is_alive()
    }
}
