//! Simulation configuration.

use crate::core::config::GameConfig;
use crate::core::constants::DEFAULT_TICK_MS;

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent sessions to play
    pub num_runs: u32,

    /// Base seed; run `n` uses `seed + n` (None = entropy)
    pub seed: Option<u64>,

    /// Ticks played per session
    pub ticks_per_run: u64,

    /// Simulated milliseconds per tick
    pub tick_ms: f64,

    /// Game tunables shared by every run. Its own seed is overridden.
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1,
            seed: None,
            // Ten minutes of play at 60 frames per second.
            ticks_per_run: 36_000,
            tick_ms: DEFAULT_TICK_MS,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Game config for run `run_idx`.
    pub fn game_for_run(&self, run_idx: u32) -> GameConfig {
        GameConfig {
            seed: self.seed.map(|seed| seed.wrapping_add(run_idx as u64)),
            ..self.game.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_get_consecutive_seeds() {
        let config = SimConfig {
            seed: Some(40),
            ..Default::default()
        };
        assert_eq!(config.game_for_run(0).seed, Some(40));
        assert_eq!(config.game_for_run(2).seed, Some(42));
    }

    #[test]
    fn test_unseeded_runs_stay_unseeded() {
        let config = SimConfig::default();
        assert_eq!(config.game_for_run(3).seed, None);
        assert!(config.game_for_run(0).populate_spawn_points);
    }
}
