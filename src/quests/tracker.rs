//! Active and completed quest bookkeeping.
//!
//! The tracker only moves quests through their lifecycle. Granting rewards
//! and unlocking follow-ups happen in the session's event handlers, so each
//! completion is reported exactly once, by the call that caused it.

use super::data::{create_quest, INITIAL_QUESTS};
use super::types::{Quest, QuestId, QuestKind, QuestSignal};
use serde::Serialize;

/// Read-only copy of the quest log for the view layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestLogSnapshot {
    pub active: Vec<Quest>,
    pub completed: Vec<Quest>,
}

#[derive(Debug, Clone, Default)]
pub struct QuestTracker {
    active: Vec<Quest>,
    completed: Vec<Quest>,
    next_id: u32,
}

impl QuestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_quests() -> Self {
        let mut tracker = Self::new();
        for kind in INITIAL_QUESTS {
            tracker.add_quest(kind);
        }
        tracker
    }

    /// Starts a new quest of `kind` and returns a copy of it.
    pub fn add_quest(&mut self, kind: QuestKind) -> Quest {
        let quest = create_quest(QuestId(self.next_id), kind);
        self.next_id += 1;
        log::debug!("Quest started: {} {}", quest.id, quest.title);
        self.active.push(quest.clone());
        quest
    }

    /// Counts `signal` against every active quest and retires the ones it
    /// completes. Returns the newly completed quests in log order.
    pub fn on_signal(&mut self, signal: QuestSignal) -> Vec<Quest> {
        let mut finished = Vec::new();
        let mut index = 0;
        while index < self.active.len() {
            if self.active[index].advance(signal) {
                let mut quest = self.active.remove(index);
                quest.mark_completed();
                log::info!("Quest completed: {}", quest.title);
                self.completed.push(quest.clone());
                finished.push(quest);
            } else {
                index += 1;
            }
        }
        finished
    }

    pub fn active(&self) -> &[Quest] {
        &self.active
    }

    pub fn completed(&self) -> &[Quest] {
        &self.completed
    }

    pub fn get(&self, id: QuestId) -> Option<&Quest> {
        self.active
            .iter()
            .chain(self.completed.iter())
            .find(|quest| quest.id == id)
    }

    pub fn snapshot(&self) -> QuestLogSnapshot {
        QuestLogSnapshot {
            active: self.active.clone(),
            completed: self.completed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::EnemyKind;
    use crate::quests::types::QuestState;

    #[test]
    fn test_initial_quests_have_sequential_ids() {
        let tracker = QuestTracker::with_initial_quests();
        let ids: Vec<_> = tracker.active().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![QuestId(0), QuestId(1), QuestId(2)]);
        assert!(tracker.completed().is_empty());
    }

    #[test]
    fn test_first_kill_completes_first_blood_only() {
        let mut tracker = QuestTracker::with_initial_quests();
        let done = tracker.on_signal(QuestSignal::Kill(EnemyKind::Goblin));

        assert_eq!(done.len(), 1);
        assert_eq!(done[0].kind, QuestKind::FirstBlood);
        assert_eq!(done[0].state(), QuestState::Completed);
        assert_eq!(tracker.active().len(), 2);
        assert_eq!(tracker.completed().len(), 1);

        let hunter = tracker.get(QuestId(2)).unwrap();
        assert_eq!(hunter.progress(), 1);
    }

    #[test]
    fn test_goblin_hunter_completes_on_fifth_kill() {
        let mut tracker = QuestTracker::new();
        tracker.add_quest(QuestKind::GoblinHunter);
        for _ in 0..4 {
            assert!(tracker.on_signal(QuestSignal::Kill(EnemyKind::Goblin)).is_empty());
        }
        assert_eq!(tracker.active()[0].progress(), 4);

        let done = tracker.on_signal(QuestSignal::Kill(EnemyKind::Goblin));
        assert_eq!(done.len(), 1);
        assert!(tracker.on_signal(QuestSignal::Kill(EnemyKind::Goblin)).is_empty());
        assert_eq!(tracker.completed().len(), 1);
    }

    #[test]
    fn test_one_signal_can_complete_several_quests() {
        let mut tracker = QuestTracker::new();
        tracker.add_quest(QuestKind::FirstBlood);
        tracker.add_quest(QuestKind::GoblinHunter);
        tracker.add_quest(QuestKind::FirstBlood);
        let done = tracker.on_signal(QuestSignal::Kill(EnemyKind::Wolf));
        let ids: Vec<_> = done.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![QuestId(0), QuestId(2)]);
        assert_eq!(tracker.active().len(), 1);
    }

    #[test]
    fn test_level_signal_skipping_threshold_still_completes() {
        let mut tracker = QuestTracker::with_initial_quests();
        let done = tracker.on_signal(QuestSignal::Level(4));
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].kind, QuestKind::LevelUp);
    }

    #[test]
    fn test_progress_never_exceeds_required() {
        let mut tracker = QuestTracker::new();
        tracker.add_quest(QuestKind::VeteranFighter);
        for _ in 0..20 {
            tracker.on_signal(QuestSignal::Kill(EnemyKind::Skeleton));
            for quest in tracker.active().iter().chain(tracker.completed()) {
                assert!(quest.progress() <= quest.required());
            }
        }
        assert_eq!(tracker.completed().len(), 1);
    }

    #[test]
    fn test_snapshot_mirrors_log() {
        let mut tracker = QuestTracker::with_initial_quests();
        tracker.on_signal(QuestSignal::Kill(EnemyKind::Goblin));
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.active.len(), 2);
        assert_eq!(snapshot.completed[0].title, "First Blood");
    }
}
