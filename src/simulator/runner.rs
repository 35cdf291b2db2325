//! Runs headless sessions with the autopilot at the controls.
//!
//! Statistics are collected from each tick's events, exactly as a host
//! would see them.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::entity::PLAYER_ID;
use crate::core::error::ConfigError;
use crate::core::session::GameSession;
use crate::core::tick::TickResult;
use crate::events::GameEvent;

/// Run every configured session and return the aggregated report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, ConfigError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let run = simulate_single_run(config, run_idx)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Kills {}, Deaths {}, Gold {}, Quests {}",
                run_idx + 1,
                config.num_runs,
                run.final_level,
                run.kills,
                run.deaths,
                run.final_gold,
                run.quests_completed.len()
            );
        }
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(all_runs))
}

/// Plays one session for `ticks_per_run` ticks.
pub fn simulate_single_run(config: &SimConfig, run_idx: u32) -> Result<RunStats, ConfigError> {
    let game = config.game_for_run(run_idx);
    let mut stats = RunStats {
        seed: game.seed,
        ..Default::default()
    };
    let mut session = GameSession::new(game)?;
    let mut pilot = Autopilot::new();

    for tick in 0..config.ticks_per_run {
        pilot.act(&mut session);
        let result = session.tick(config.tick_ms);
        record_tick(&mut stats, &result, tick);
        stats.ticks = tick + 1;
        stats.sim_ms = result.now_ms;
    }

    stats.final_level = session.player().progression.level;
    stats.final_gold = session.inventory().gold();
    stats.potions_used = pilot.potions_used;
    stats.abilities_used = pilot.abilities_used;
    stats.weapons_equipped = pilot.weapons_equipped;
    Ok(stats)
}

fn record_tick(stats: &mut RunStats, result: &TickResult, tick: u64) {
    for event in &result.events {
        match event {
            GameEvent::EntityDamaged {
                target,
                attacker,
                amount,
                critical,
            } => {
                if *attacker == PLAYER_ID {
                    stats.player_hits += 1;
                    stats.damage_dealt += *amount as u64;
                    if *critical {
                        stats.critical_hits += 1;
                    }
                } else if *target == PLAYER_ID {
                    stats.damage_taken += *amount as u64;
                }
            }
            GameEvent::EntityKilled { victim, .. } => match victim.kind.enemy_kind() {
                Some(kind) => {
                    stats.kills += 1;
                    *stats
                        .kills_by_kind
                        .entry(kind.name().to_string())
                        .or_insert(0) += 1;
                }
                None => stats.deaths += 1,
            },
            GameEvent::LevelUp { .. } => stats.level_up_ticks.push(tick),
            GameEvent::LootDropped { items, .. } => stats.items_looted += items.len() as u64,
            GameEvent::QuestCompleted { quest } => stats.quests_completed.push(quest.title.clone()),
            GameEvent::XpGained { .. } | GameEvent::QuestStarted { .. } => {}
        }
    }
}
