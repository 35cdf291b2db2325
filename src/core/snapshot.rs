//! Read-only views of the simulation for rendering and UI.
//!
//! The core never draws anything. A host implements [`EntityView`] and
//! calls [`GameSession::present`] once per frame; everything else is plain
//! data that serializes to JSON.

use super::entity::{EntityId, EntityKind, PLAYER_ID};
use super::geometry::{Facing, Vec2};
use super::session::GameSession;
use crate::enemies::{AiState, Enemy};
use crate::items::InventorySnapshot;
use crate::quests::QuestLogSnapshot;
use serde::Serialize;

/// What a renderer needs to draw one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vec2,
    pub facing: Facing,
    pub health: u32,
    pub max_health: u32,
    /// (current, max); players only
    pub mana: Option<(u32, u32)>,
    pub level: Option<u32>,
    /// (current, needed for next level); players only
    pub experience: Option<(u64, u64)>,
    pub ai_state: Option<AiState>,
    pub active: bool,
}

/// Presentation side of the simulation.
pub trait EntityView {
    /// Create or update the visual for `snapshot.id`.
    fn sync_entity(&mut self, snapshot: &EntitySnapshot);

    /// The entity is gone; drop its visual.
    fn remove_entity(&mut self, id: EntityId);
}

fn enemy_snapshot(enemy: &Enemy) -> EntitySnapshot {
    EntitySnapshot {
        id: enemy.id,
        kind: EntityKind::Enemy(enemy.kind()),
        position: enemy.body.position,
        facing: enemy.body.facing,
        health: enemy.stats.health.current(),
        max_health: enemy.stats.health.max(),
        mana: None,
        level: None,
        experience: None,
        ai_state: Some(enemy.ai.state()),
        active: enemy.is_alive(),
    }
}

impl GameSession {
    pub fn player_snapshot(&self) -> EntitySnapshot {
        let player = &self.player;
        EntitySnapshot {
            id: PLAYER_ID,
            kind: EntityKind::Player,
            position: player.body.position,
            facing: player.facing(),
            health: player.stats.health.current(),
            max_health: player.stats.health.max(),
            mana: player.stats.mana.map(|pool| (pool.current(), pool.max())),
            level: Some(player.progression.level),
            experience: Some((
                player.progression.experience,
                player.progression.experience_to_next,
            )),
            ai_state: None,
            active: player.stats.is_alive(),
        }
    }

    pub fn entity_snapshot(&self, id: EntityId) -> Option<EntitySnapshot> {
        if id == PLAYER_ID {
            return Some(self.player_snapshot());
        }
        self.enemies.get(id).map(enemy_snapshot)
    }

    /// The player first, then enemies in spawn order.
    pub fn entity_snapshots(&self) -> Vec<EntitySnapshot> {
        std::iter::once(self.player_snapshot())
            .chain(self.enemies.iter().map(enemy_snapshot))
            .collect()
    }

    pub fn inventory_snapshot(&self) -> InventorySnapshot {
        self.inventory.snapshot()
    }

    pub fn quest_log(&self) -> QuestLogSnapshot {
        self.quests.snapshot()
    }

    /// Pushes the current state to `view`: removals for enemies that died
    /// since the last call, then one sync per live entity.
    pub fn present(&mut self, view: &mut impl EntityView) {
        for id in std::mem::take(&mut self.despawned) {
            view.remove_entity(id);
        }
        for snapshot in self.entity_snapshots() {
            view.sync_entity(&snapshot);
        }
    }
}
