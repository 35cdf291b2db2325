//! Experience and level-up resolution.

use super::stats::EntityStats;
use crate::core::constants::{
    LEVEL_UP_HEALTH, LEVEL_UP_MANA, XP_GROWTH_DENOMINATOR, XP_GROWTH_NUMERATOR, XP_TO_FIRST_LEVEL,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub experience: u64,
    pub experience_to_next: u64,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            experience_to_next: XP_TO_FIRST_LEVEL,
        }
    }
}

/// XP threshold for the level after one with `current` required.
/// Grows by x1.2 rounded down and never drops below 1.
pub fn next_threshold(current: u64) -> u64 {
    (current.saturating_mul(XP_GROWTH_NUMERATOR) / XP_GROWTH_DENOMINATOR).max(1)
}

impl Progression {
    pub fn add_experience(&mut self, amount: u64) {
        self.experience = self.experience.saturating_add(amount);
    }
}

/// Performs one level-up if the threshold is reached.
///
/// Raises max health and mana, grows all four attributes and fully restores
/// both pools. Returns the new level, or `None` below the threshold.
pub fn try_level_up(progression: &mut Progression, stats: &mut EntityStats) -> Option<u32> {
    if progression.experience < progression.experience_to_next {
        return None;
    }
    progression.experience -= progression.experience_to_next;
    progression.level += 1;
    progression.experience_to_next = next_threshold(progression.experience_to_next);

    stats.health.grow_max(LEVEL_UP_HEALTH);
    if let Some(mana) = stats.mana.as_mut() {
        mana.grow_max(LEVEL_UP_MANA);
    }
    stats.attributes.apply_level_growth();
    stats.restore_all();

    Some(progression.level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::Attributes;

    fn fresh_player_stats() -> EntityStats {
        EntityStats::new(100, Some(50), Attributes::player_base())
    }

    /// Adds `amount` and levels up as far as it reaches.
    fn grant(prog: &mut Progression, stats: &mut EntityStats, amount: u64) -> Vec<u32> {
        prog.add_experience(amount);
        std::iter::from_fn(|| try_level_up(prog, stats)).collect()
    }

    #[test]
    fn test_threshold_growth() {
        assert_eq!(next_threshold(100), 120);
        assert_eq!(next_threshold(120), 144);
        assert_eq!(next_threshold(144), 172);
        assert_eq!(next_threshold(0), 1);
    }

    #[test]
    fn test_single_level_up_carries_excess() {
        let mut prog = Progression {
            level: 1,
            experience: 90,
            experience_to_next: 100,
        };
        let mut stats = fresh_player_stats();
        stats.take_damage(70);
        stats.spend_mana(30);

        let levels = grant(&mut prog, &mut stats, 30);

        assert_eq!(levels, vec![2]);
        assert_eq!(prog.level, 2);
        assert_eq!(prog.experience, 20);
        assert_eq!(prog.experience_to_next, 120);
        assert_eq!(stats.health.max(), 110);
        assert_eq!(stats.health.current(), 110);
        assert_eq!(stats.mana.map(|m| (m.current(), m.max())), Some((55, 55)));
        assert_eq!(stats.attributes, Attributes::new(12, 11, 11, 6));
    }

    #[test]
    fn test_large_grant_levels_multiple_times() {
        let mut prog = Progression::default();
        let mut stats = fresh_player_stats();

        // 100 + 120 + 144 = 364 to reach level 4
        let levels = grant(&mut prog, &mut stats, 370);

        assert_eq!(levels, vec![2, 3, 4]);
        assert_eq!(prog.experience, 6);
        assert_eq!(prog.experience_to_next, 172);
        assert_eq!(stats.health.max(), 130);
    }

    #[test]
    fn test_below_threshold_no_level() {
        let mut prog = Progression::default();
        let mut stats = fresh_player_stats();
        let levels = grant(&mut prog, &mut stats, 99);
        assert!(levels.is_empty());
        assert_eq!(prog.level, 1);
        assert_eq!(prog.experience, 99);
    }

    #[test]
    fn test_exact_threshold_levels_to_zero_remainder() {
        let mut prog = Progression::default();
        let mut stats = fresh_player_stats();
        let levels = grant(&mut prog, &mut stats, 100);
        assert_eq!(levels, vec![2]);
        assert_eq!(prog.experience, 0);
    }

    #[test]
    fn test_try_level_up_steps_once() {
        let mut prog = Progression::default();
        let mut stats = fresh_player_stats();
        prog.add_experience(250);
        assert_eq!(try_level_up(&mut prog, &mut stats), Some(2));
        assert_eq!(prog.experience, 150);
        assert_eq!(try_level_up(&mut prog, &mut stats), Some(3));
        assert_eq!(try_level_up(&mut prog, &mut stats), None);
        assert_eq!(prog.experience, 30);
    }

    #[test]
    fn test_zero_grant_is_noop() {
        let mut prog = Progression::default();
        let mut stats = fresh_player_stats();
        assert!(grant(&mut prog, &mut stats, 0).is_empty());
        assert_eq!(prog, Progression::default());
    }

    #[test]
    fn test_experience_stays_below_threshold() {
        let mut prog = Progression::default();
        let mut stats = fresh_player_stats();
        for amount in [1, 7, 250, 999, 3, 10_000, 42] {
            let before = prog.level;
            grant(&mut prog, &mut stats, amount);
            assert!(prog.experience < prog.experience_to_next);
            assert!(prog.level >= before);
        }
    }
}
