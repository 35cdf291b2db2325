//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// What happened during one simulated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub seed: Option<u64>,
    pub ticks: u64,
    pub sim_ms: f64,
    pub kills: u64,
    pub kills_by_kind: BTreeMap<String, u64>,
    pub deaths: u64,
    pub player_hits: u64,
    pub critical_hits: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub final_level: u32,
    pub final_gold: u64,
    pub items_looted: u64,
    pub quests_completed: Vec<String>,
    /// Tick at which each level (index + 2) was reached.
    pub level_up_ticks: Vec<u64>,
    pub potions_used: u32,
    pub abilities_used: u32,
    pub weapons_equipped: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub avg_final_level: f64,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_gold: f64,
    pub avg_quests_completed: f64,
    /// Share of player hits that were critical.
    pub crit_rate: f64,
    pub runs: Vec<RunStats>,
}

fn average(runs: &[RunStats], value: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(value).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let hits: u64 = runs.iter().map(|r| r.player_hits).sum();
        let crits: u64 = runs.iter().map(|r| r.critical_hits).sum();

        Self {
            num_runs: runs.len() as u32,
            avg_final_level: average(&runs, |r| r.final_level as f64),
            avg_kills: average(&runs, |r| r.kills as f64),
            avg_deaths: average(&runs, |r| r.deaths as f64),
            avg_gold: average(&runs, |r| r.final_gold as f64),
            avg_quests_completed: average(&runs, |r| r.quests_completed.len() as f64),
            crit_rate: if hits == 0 {
                0.0
            } else {
                crits as f64 / hits as f64
            },
            runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!("  Runs:               {}\n\n", self.num_runs));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:    {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Kills:          {:.1}\n", self.avg_kills));
        report.push_str(&format!("  Avg Deaths:         {:.1}\n", self.avg_deaths));
        report.push_str(&format!(
            "  Avg Quests Done:    {:.1}\n\n",
            self.avg_quests_completed
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Gold:     {:.1}\n", self.avg_gold));
        report.push_str(&format!(
            "  Crit Share:         {:.1}%\n\n",
            self.crit_rate * 100.0
        ));

        report.push_str("── RUNS ─────────────────────────────────────────────────────────\n");
        report.push_str("  Run   Level   Kills   Deaths   Gold    Quests\n");
        report.push_str("  ───   ─────   ─────   ──────   ─────   ──────\n");
        for (index, run) in self.runs.iter().enumerate() {
            report.push_str(&format!(
                "  {:>3}   {:>5}   {:>5}   {:>6}   {:>5}   {:>6}\n",
                index + 1,
                run.final_level,
                run.kills,
                run.deaths,
                run.final_gold,
                run.quests_completed.len()
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: u32, kills: u64, deaths: u64) -> RunStats {
        RunStats {
            final_level: level,
            kills,
            deaths,
            final_gold: 100,
            quests_completed: vec!["First Blood".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_report_averages() {
        let report = SimReport::from_runs(vec![run(2, 10, 0), run(4, 20, 2)]);
        assert_eq!(report.num_runs, 2);
        assert!((report.avg_final_level - 3.0).abs() < 1e-9);
        assert!((report.avg_kills - 15.0).abs() < 1e-9);
        assert!((report.avg_deaths - 1.0).abs() < 1e-9);
        assert!((report.avg_quests_completed - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.avg_final_level, 0.0);
        assert!(report.to_text().contains("SIMULATION REPORT"));
    }

    #[test]
    fn test_report_json() {
        let report = SimReport::from_runs(vec![run(3, 5, 1)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
        assert_eq!(value["runs"][0]["final_level"], 3);
    }
}
