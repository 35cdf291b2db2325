//! Entity identity shared by the player and enemies.

use crate::enemies::EnemyKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// The player always owns id 0; enemies are numbered from 1.
pub const PLAYER_ID: EntityId = EntityId(0);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy(EnemyKind),
}

impl EntityKind {
    pub fn enemy_kind(&self) -> Option<EnemyKind> {
        match self {
            EntityKind::Player => None,
            EntityKind::Enemy(kind) => Some(*kind),
        }
    }
}
