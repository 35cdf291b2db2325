//! Static quest definitions and follow-up rules.

use super::types::{KillTarget, Objective, Quest, QuestId, QuestKind, QuestRewards};
use crate::enemies::EnemyKind;

/// Quests every new session starts with, in order.
pub const INITIAL_QUESTS: [QuestKind; 3] = [
    QuestKind::FirstBlood,
    QuestKind::LevelUp,
    QuestKind::GoblinHunter,
];

struct QuestTemplate {
    title: &'static str,
    description: &'static str,
    objective: Objective,
    /// Progress the quest starts with.
    initial_progress: u32,
    xp: u64,
    gold: u64,
    items: &'static [&'static str],
}

fn template(kind: QuestKind) -> QuestTemplate {
    match kind {
        QuestKind::FirstBlood => QuestTemplate {
            title: "First Blood",
            description: "Defeat your first enemy",
            objective: Objective::Kill {
                target: KillTarget::Any,
                required: 1,
            },
            initial_progress: 0,
            xp: 50,
            gold: 25,
            items: &["health-potion"],
        },
        QuestKind::LevelUp => QuestTemplate {
            title: "Level Up",
            description: "Reach level 2",
            objective: Objective::ReachLevel { level: 2 },
            initial_progress: 0,
            xp: 100,
            gold: 50,
            items: &[],
        },
        QuestKind::GoblinHunter => QuestTemplate {
            title: "Goblin Hunter",
            description: "Defeat 5 goblins",
            objective: Objective::Kill {
                target: KillTarget::Kind(EnemyKind::Goblin),
                required: 5,
            },
            initial_progress: 0,
            xp: 200,
            gold: 100,
            items: &["uncommon-sword"],
        },
        // Unlocked by First Blood, whose kill already counts.
        QuestKind::VeteranFighter => QuestTemplate {
            title: "Veteran Fighter",
            description: "Defeat 10 enemies",
            objective: Objective::Kill {
                target: KillTarget::Any,
                required: 10,
            },
            initial_progress: 1,
            xp: 300,
            gold: 150,
            items: &[],
        },
        QuestKind::WolfPack => QuestTemplate {
            title: "Wolf Pack",
            description: "Defeat 3 wolves",
            objective: Objective::Kill {
                target: KillTarget::Kind(EnemyKind::Wolf),
                required: 3,
            },
            initial_progress: 0,
            xp: 400,
            gold: 200,
            items: &["rare-armor"],
        },
    }
}

/// Builds a fresh active quest of `kind`.
pub fn create_quest(id: QuestId, kind: QuestKind) -> Quest {
    let t = template(kind);
    Quest::new(
        id,
        kind,
        t.title,
        t.description,
        t.objective,
        QuestRewards {
            xp: t.xp,
            gold: t.gold,
            items: t.items.iter().map(|item| item.to_string()).collect(),
        },
    )
    .with_progress(t.initial_progress)
}

/// Quests unlocked by completing `kind`.
pub fn follow_ups(kind: QuestKind) -> &'static [QuestKind] {
    match kind {
        QuestKind::FirstBlood => &[QuestKind::VeteranFighter],
        QuestKind::GoblinHunter => &[QuestKind::WolfPack],
        QuestKind::LevelUp | QuestKind::VeteranFighter | QuestKind::WolfPack => &[],
    }
}
