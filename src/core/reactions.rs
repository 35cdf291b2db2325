//! Gameplay reactions wired onto the session's event bus.
//!
//! Registration order is dispatch order. For a kill that is: experience,
//! then quest progress, then loot. Each handler may emit further events,
//! which are fully handled before the next handler runs.

use super::entity::PLAYER_ID;
use super::session::GameSession;
use crate::character::try_level_up;
use crate::events::{emit, EventBus, EventKind, GameEvent, XpSource};
use crate::items::catalog::item_or_default;
use crate::items::roll_loot;
use crate::quests::data::follow_ups;
use crate::quests::{Quest, QuestSignal};

pub(crate) fn register(bus: &mut EventBus<GameSession>) {
    bus.subscribe(EventKind::EntityKilled, award_kill_experience);
    bus.subscribe(EventKind::EntityKilled, advance_kill_quests);
    bus.subscribe(EventKind::EntityKilled, drop_loot);
    bus.subscribe(EventKind::XpGained, apply_experience);
    bus.subscribe(EventKind::LevelUp, advance_level_quests);
    bus.subscribe(EventKind::QuestCompleted, start_follow_up_quests);
}

fn award_kill_experience(session: &mut GameSession, event: &GameEvent) {
    let GameEvent::EntityKilled { victim, killer } = event else {
        return;
    };
    let Some(kind) = victim.kind.enemy_kind() else {
        return;
    };
    if *killer != PLAYER_ID {
        return;
    }
    emit(
        session,
        GameEvent::XpGained {
            amount: kind.archetype().xp_reward,
            source: XpSource::Kill(kind),
        },
    );
}

fn advance_kill_quests(session: &mut GameSession, event: &GameEvent) {
    let GameEvent::EntityKilled { victim, .. } = event else {
        return;
    };
    let Some(kind) = victim.kind.enemy_kind() else {
        return;
    };
    let completed = session.quests.on_signal(QuestSignal::Kill(kind));
    complete_quests(session, completed);
}

fn drop_loot(session: &mut GameSession, event: &GameEvent) {
    let GameEvent::EntityKilled { victim, .. } = event else {
        return;
    };
    let Some(kind) = victim.kind.enemy_kind() else {
        return;
    };

    let drop = roll_loot(&kind.archetype(), &mut session.rng);
    session.inventory.add_gold(drop.gold);
    for item in &drop.items {
        if !session.inventory.add_item(item.clone()) {
            log::warn!("Loot lost: {}", item.name);
        }
    }
    emit(
        session,
        GameEvent::LootDropped {
            items: drop.items,
            gold: drop.gold,
        },
    );
}

/// Adds the experience and emits one `LevelUp` per level gained, lowest
/// first. Experience granted while a level up is being handled (a quest
/// reward, say) only accumulates; the outer loop picks up any further levels
/// once the current `LevelUp` has been dispatched.
fn apply_experience(session: &mut GameSession, event: &GameEvent) {
    let GameEvent::XpGained { amount, .. } = event else {
        return;
    };
    session.player.progression.add_experience(*amount);
    if session.leveling {
        return;
    }

    session.leveling = true;
    while let Some(level) =
        try_level_up(&mut session.player.progression, &mut session.player.stats)
    {
        log::info!("Level up! Now level {}", level);
        emit(session, GameEvent::LevelUp { level });
    }
    session.leveling = false;
}

fn advance_level_quests(session: &mut GameSession, event: &GameEvent) {
    let GameEvent::LevelUp { level } = event else {
        return;
    };
    let completed = session.quests.on_signal(QuestSignal::Level(*level));
    complete_quests(session, completed);
}

fn start_follow_up_quests(session: &mut GameSession, event: &GameEvent) {
    let GameEvent::QuestCompleted { quest } = event else {
        return;
    };
    for kind in follow_ups(quest.kind) {
        let started = session.quests.add_quest(*kind);
        emit(session, GameEvent::QuestStarted { quest: started });
    }
}

/// Grants rewards for each newly completed quest, then announces it.
fn complete_quests(session: &mut GameSession, completed: Vec<Quest>) {
    for quest in completed {
        session.inventory.add_gold(quest.rewards.gold);
        for id in &quest.rewards.items {
            let item = item_or_default(id);
            if !session.inventory.add_item(item) {
                log::warn!("Quest reward {} lost: inventory full", id);
            }
        }
        if quest.rewards.xp > 0 {
            emit(
                session,
                GameEvent::XpGained {
                    amount: quest.rewards.xp,
                    source: XpSource::Quest(quest.id),
                },
            );
        }
        emit(session, GameEvent::QuestCompleted { quest });
    }
}
