use crate::core::entity::{EntityId, EntityKind};
use crate::core::geometry::Vec2;
use crate::enemies::EnemyKind;
use crate::items::types::Item;
use crate::quests::{Quest, QuestId};
use serde::Serialize;

/// Discriminant of [`GameEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    EntityDamaged,
    EntityKilled,
    XpGained,
    LevelUp,
    LootDropped,
    QuestStarted,
    QuestCompleted,
}

/// Where granted experience came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum XpSource {
    Kill(EnemyKind),
    Quest(QuestId),
}

/// Identity of an entity at the moment it was defeated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefeatedEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vec2,
}

/// Notifications produced by the simulation.
///
/// Every event is dispatched synchronously to the session's handlers and
/// also recorded for the host, which receives them through the tick result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    // ── Combat ──────────────────────────────────────────────────
    /// A hit landed. `amount` is after defense mitigation.
    EntityDamaged {
        target: EntityId,
        attacker: EntityId,
        amount: u32,
        critical: bool,
    },

    /// An entity's health reached zero. Fires once per death.
    EntityKilled {
        victim: DefeatedEntity,
        killer: EntityId,
    },

    // ── Progression ─────────────────────────────────────────────
    XpGained { amount: u64, source: XpSource },

    /// One per level gained, carrying the new level.
    LevelUp { level: u32 },

    // ── Loot ────────────────────────────────────────────────────
    LootDropped { items: Vec<Item>, gold: u64 },

    // ── Quests ──────────────────────────────────────────────────
    QuestStarted { quest: Quest },

    QuestCompleted { quest: Quest },
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::EntityDamaged { .. } => EventKind::EntityDamaged,
            GameEvent::EntityKilled { .. } => EventKind::EntityKilled,
            GameEvent::XpGained { .. } => EventKind::XpGained,
            GameEvent::LevelUp { .. } => EventKind::LevelUp,
            GameEvent::LootDropped { .. } => EventKind::LootDropped,
            GameEvent::QuestStarted { .. } => EventKind::QuestStarted,
            GameEvent::QuestCompleted { .. } => EventKind::QuestCompleted,
        }
    }
}
