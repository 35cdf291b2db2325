use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Wolf,
    Skeleton,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Goblin, EnemyKind::Wolf, EnemyKind::Skeleton];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "goblin",
            EnemyKind::Wolf => "wolf",
            EnemyKind::Skeleton => "skeleton",
        }
    }

    pub fn from_name(name: &str) -> Option<EnemyKind> {
        EnemyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Base stats every enemy of this kind spawns with.
    pub fn archetype(&self) -> EnemyArchetype {
        match self {
            EnemyKind::Goblin => GOBLIN,
            EnemyKind::Wolf => WOLF,
            EnemyKind::Skeleton => SKELETON,
        }
    }
}

/// Immutable stat template. Spawned enemies copy it; nothing writes back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnemyArchetype {
    pub kind: EnemyKind,
    pub max_health: u32,
    pub damage: u32,
    /// Chase speed in units/s; patrols at half of this.
    pub speed: f32,
    pub xp_reward: u64,
    pub gold_reward: u64,
    pub defense: u32,
}

pub const GOBLIN: EnemyArchetype = EnemyArchetype {
    kind: EnemyKind::Goblin,
    max_health: 30,
    damage: 8,
    speed: 80.0,
    xp_reward: 15,
    gold_reward: 5,
    defense: 0,
};

pub const WOLF: EnemyArchetype = EnemyArchetype {
    kind: EnemyKind::Wolf,
    max_health: 45,
    damage: 12,
    speed: 120.0,
    xp_reward: 25,
    gold_reward: 8,
    defense: 0,
};

pub const SKELETON: EnemyArchetype = EnemyArchetype {
    kind: EnemyKind::Skeleton,
    max_health: 60,
    damage: 15,
    speed: 60.0,
    xp_reward: 35,
    gold_reward: 12,
    defense: 0,
};

/// Resolves an archetype by name, falling back to the goblin.
pub fn archetype_or_default(name: &str) -> EnemyArchetype {
    match EnemyKind::from_name(name) {
        Some(kind) => kind.archetype(),
        None => {
            log::warn!("Unknown enemy type '{}', spawning a goblin", name);
            GOBLIN
        }
    }
}
