//! Quest definitions, objectives and tracking.

pub mod data;
pub mod tracker;
pub mod types;

pub use tracker::{QuestLogSnapshot, QuestTracker};
pub use types::{KillTarget, Objective, Quest, QuestId, QuestKind, QuestSignal, QuestState};
