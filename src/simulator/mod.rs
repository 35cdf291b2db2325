//! Headless play for balance checks.
//!
//! Drives real [`crate::GameSession`]s with a scripted player and tallies
//! what happened from the tick events:
//! - kills, deaths and damage traded
//! - level pacing and quest completions
//! - gold and loot collected

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
