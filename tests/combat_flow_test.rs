//! Integration test: combat resolution through the public session API
//!
//! Covers player swings and enemy strikes end to end: targeting, defense
//! mitigation, knockback, the kill cascade (experience, quests, loot) and
//! player death with respawn.

use arpg_sim::core::entity::{EntityKind, PLAYER_ID};
use arpg_sim::core::geometry::Vec2;
use arpg_sim::enemies::EnemyKind;
use arpg_sim::events::{EventKind, GameEvent, XpSource};
use arpg_sim::quests::QuestId;
use arpg_sim::{GameConfig, GameSession};

const FRAME_MS: f64 = 16.0;

/// Seeded session with no crits and no damage variance, so every number
/// below is exact.
fn session() -> GameSession {
    let mut config = GameConfig::seeded(21);
    config.crit_chance = 0.0;
    config.damage_variance = 0.0;
    GameSession::new(config).unwrap()
}

fn kinds(events: &[GameEvent]) -> Vec<EventKind> {
    events.iter().map(GameEvent::kind).collect()
}

// =============================================================================
// Player attacks
// =============================================================================

#[test]
fn test_weapon_hit_applies_mitigated_damage() {
    let mut s = session();
    let id = s.spawn_enemy("goblin", Vec2::new(430.0, 300.0));

    assert!(s.attack());
    let events = s.drain_events();
    assert_eq!(
        events,
        vec![GameEvent::EntityDamaged {
            target: id,
            attacker: PLAYER_ID,
            amount: 25, // rusty sword 15 + strength 10, goblin has no defense
            critical: false,
        }]
    );
    let goblin = s.enemies().get(id).unwrap();
    assert_eq!(goblin.stats.health.current(), 5);
    // Pushed away from the player, who stands to the left.
    assert_eq!(goblin.body.knockback_x(), 100.0);
}

#[test]
fn test_knockback_moves_enemy_despite_its_ai() {
    let goblin_x_after_three_frames = |swing: bool| {
        let mut s = session();
        let id = s.spawn_enemy("goblin", Vec2::new(430.0, 300.0));
        if swing {
            assert!(s.attack());
        }
        for _ in 0..3 {
            s.tick(FRAME_MS);
        }
        s.enemies().get(id).unwrap().body.position.x
    };

    let pushed = goblin_x_after_three_frames(true);
    let untouched = goblin_x_after_three_frames(false);
    // Roughly 100 units/s for 48 ms, less drag.
    assert!(
        pushed - untouched > 4.0,
        "pushed {} vs untouched {}",
        pushed,
        untouched
    );
}

#[test]
fn test_enemy_out_of_range_is_untouched() {
    let mut s = session();
    let id = s.spawn_enemy("goblin", Vec2::new(460.0, 300.0));

    assert!(s.attack());
    assert!(s.drain_events().is_empty());
    assert_eq!(s.enemies().get(id).unwrap().stats.health.current(), 30);
}

#[test]
fn test_one_swing_hits_every_enemy_in_range_with_one_roll() {
    let mut config = GameConfig::seeded(21);
    config.crit_chance = 1.0;
    config.damage_variance = 0.0;
    let mut s = GameSession::new(config).unwrap();
    let left = s.spawn_enemy("goblin", Vec2::new(370.0, 300.0));
    let right = s.spawn_enemy("goblin", Vec2::new(430.0, 300.0));

    assert!(s.attack());
    let events = s.drain_events();
    let hits: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::EntityDamaged {
                target,
                amount,
                critical,
                ..
            } => Some((*target, *amount, *critical)),
            _ => None,
        })
        .collect();
    // floor(25 * 1.5) on both targets
    assert_eq!(hits, vec![(left, 37, true), (right, 37, true)]);
    assert!(s.enemies().is_empty());
}

// =============================================================================
// Kill cascade
// =============================================================================

#[test]
fn test_kill_event_sequence() {
    let mut s = session();
    let id = s.spawn_enemy("goblin", Vec2::new(430.0, 300.0));
    s.enemies_mut().get_mut(id).unwrap().stats.health.drain(29);

    assert!(s.attack());
    let events = s.drain_events();
    assert_eq!(
        kinds(&events),
        vec![
            EventKind::EntityDamaged,
            EventKind::EntityKilled,
            EventKind::XpGained,
            EventKind::XpGained,
            EventKind::QuestCompleted,
            EventKind::QuestStarted,
            EventKind::LootDropped,
        ]
    );

    match &events[1] {
        GameEvent::EntityKilled { victim, killer } => {
            assert_eq!(victim.id, id);
            assert_eq!(victim.kind, EntityKind::Enemy(EnemyKind::Goblin));
            assert_eq!(*killer, PLAYER_ID);
        }
        other => panic!("expected a kill, got {:?}", other),
    }
    assert_eq!(
        events[2],
        GameEvent::XpGained {
            amount: 15,
            source: XpSource::Kill(EnemyKind::Goblin),
        }
    );
    assert_eq!(
        events[3],
        GameEvent::XpGained {
            amount: 50,
            source: XpSource::Quest(QuestId(0)),
        }
    );
    match &events[6] {
        GameEvent::LootDropped { gold, .. } => assert_eq!(*gold, 5),
        other => panic!("expected loot, got {:?}", other),
    }

    assert!(s.enemies().get(id).is_none());
    assert_eq!(s.player().progression.experience, 65);
    // 100 starting + 25 quest reward + 5 goblin gold
    assert_eq!(s.inventory().gold(), 130);
}

#[test]
fn test_dead_enemy_cannot_die_twice() {
    let mut s = session();
    let id = s.spawn_enemy("goblin", Vec2::new(430.0, 300.0));
    s.enemies_mut().get_mut(id).unwrap().stats.health.drain(29);
    assert!(s.attack());
    s.drain_events();

    s.tick(500.0);
    assert!(s.attack());
    let kills = s
        .drain_events()
        .iter()
        .filter(|e| e.kind() == EventKind::EntityKilled)
        .count();
    assert_eq!(kills, 0);
}

// =============================================================================
// Enemy attacks
// =============================================================================

#[test]
fn test_player_death_emits_kill_and_respawns() {
    let mut s = session();
    let skeleton = s.spawn_enemy("skeleton", Vec2::new(420.0, 300.0));
    s.player_mut().stats.take_damage(99);

    let mut events = Vec::new();
    for _ in 0..3 {
        events.extend(s.tick(FRAME_MS).events);
    }

    assert_eq!(
        kinds(&events),
        vec![EventKind::EntityDamaged, EventKind::EntityKilled]
    );
    match &events[1] {
        GameEvent::EntityKilled { victim, killer } => {
            assert_eq!(victim.id, PLAYER_ID);
            assert_eq!(victim.kind, EntityKind::Player);
            assert_eq!(*killer, skeleton);
        }
        other => panic!("expected a kill, got {:?}", other),
    }

    let player = s.player();
    assert_eq!(player.stats.health.current(), 100);
    assert_eq!(player.body.position, Vec2::new(400.0, 300.0));
    assert_eq!(player.progression.experience, 0);
    // A player death does not count toward kill quests.
    assert!(s.quests().completed().is_empty());
}

#[test]
fn test_invulnerability_absorbs_simultaneous_strikes() {
    let mut s = session();
    s.spawn_enemy("goblin", Vec2::new(420.0, 300.0));
    s.spawn_enemy("goblin", Vec2::new(380.0, 300.0));

    s.tick(FRAME_MS);
    s.tick(FRAME_MS);
    let events = s.tick(FRAME_MS).events;

    assert_eq!(kinds(&events), vec![EventKind::EntityDamaged]);
    assert_eq!(s.player().stats.health.current(), 99);
    assert!(s.player().is_invulnerable());
}

#[test]
fn test_enemy_attack_cooldown_uses_simulation_time() {
    let mut config = GameConfig::seeded(21);
    config.crit_chance = 0.0;
    config.damage_variance = 0.0;
    config.invulnerability_ms = 0.0;
    let mut s = GameSession::new(config).unwrap();
    let id = s.spawn_enemy("wolf", Vec2::new(420.0, 300.0));

    let mut strikes = Vec::new();
    for _ in 0..200 {
        // Keep the fight in place so only timing matters.
        s.player_mut().body.teleport(Vec2::new(400.0, 300.0));
        s.enemies_mut()
            .get_mut(id)
            .unwrap()
            .body
            .teleport(Vec2::new(420.0, 300.0));
        let result = s.tick(FRAME_MS);
        if result
            .events
            .iter()
            .any(|e| e.kind() == EventKind::EntityDamaged)
        {
            strikes.push(result.now_ms);
        }
    }

    assert!(strikes.len() >= 2);
    for pair in strikes.windows(2) {
        assert!(pair[1] - pair[0] >= 1500.0);
    }
}
