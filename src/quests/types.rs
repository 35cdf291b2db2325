use crate::enemies::EnemyKind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QuestId(pub u32);

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Every quest the game knows. Follow-up rules are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuestKind {
    FirstBlood,
    LevelUp,
    GoblinHunter,
    VeteranFighter,
    WolfPack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KillTarget {
    Any,
    Kind(EnemyKind),
}

impl KillTarget {
    pub fn matches(&self, kind: EnemyKind) -> bool {
        match self {
            KillTarget::Any => true,
            KillTarget::Kind(target) => *target == kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Objective {
    /// Defeat `required` enemies matching `target`.
    Kill { target: KillTarget, required: u32 },
    /// Completes in one step once the player's level reaches `level`.
    ReachLevel { level: u32 },
}

impl Objective {
    pub fn required(&self) -> u32 {
        match self {
            Objective::Kill { required, .. } => *required,
            Objective::ReachLevel { .. } => 1,
        }
    }
}

/// Something that happened in the world that quests may count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestSignal {
    Kill(EnemyKind),
    Level(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuestState {
    Active,
    /// Terminal.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestRewards {
    pub xp: u64,
    pub gold: u64,
    /// Catalog item ids, synthesized on completion.
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quest {
    pub id: QuestId,
    pub kind: QuestKind,
    pub title: String,
    pub description: String,
    pub objective: Objective,
    progress: u32,
    state: QuestState,
    pub rewards: QuestRewards,
}

impl Quest {
    pub fn new(
        id: QuestId,
        kind: QuestKind,
        title: &str,
        description: &str,
        objective: Objective,
        rewards: QuestRewards,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
            objective,
            progress: 0,
            state: QuestState::Active,
            rewards,
        }
    }

    /// Starts with `progress` already counted, capped at the requirement.
    pub fn with_progress(mut self, progress: u32) -> Self {
        self.progress = progress.min(self.required());
        self
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn required(&self) -> u32 {
        self.objective.required()
    }

    pub fn state(&self) -> QuestState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == QuestState::Active
    }

    /// Counts `signal` against the objective. Returns true if that brought
    /// the quest to its requirement. Completed quests ignore signals.
    pub fn advance(&mut self, signal: QuestSignal) -> bool {
        if !self.is_active() {
            return false;
        }
        match (self.objective, signal) {
            (Objective::Kill { target, required }, QuestSignal::Kill(kind))
                if target.matches(kind) =>
            {
                self.progress = (self.progress + 1).min(required);
            }
            (Objective::ReachLevel { level }, QuestSignal::Level(reached)) if reached >= level => {
                self.progress = self.required();
            }
            _ => return false,
        }
        self.progress >= self.required()
    }

    pub(crate) fn mark_completed(&mut self) {
        self.progress = self.required();
        self.state = QuestState::Completed;
    }
}
