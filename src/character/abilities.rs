use crate::core::constants::{DASH_RANGE, DASH_STRENGTH_FACTOR, NOVA_RANGE, NOVA_STRENGTH_FACTOR};
use serde::{Deserialize, Serialize};

/// Player abilities, bound to indices 0..=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    /// Lunge forward, then strike what is close.
    Dash,
    Heal,
    /// Burst around the player.
    Nova,
}

impl Ability {
    pub fn from_index(index: usize) -> Option<Ability> {
        match index {
            0 => Some(Ability::Dash),
            1 => Some(Ability::Heal),
            2 => Some(Ability::Nova),
            _ => None,
        }
    }

    /// Reach and strength scaling for damaging abilities; `None` for Heal.
    pub fn strike(&self) -> Option<(f32, f64)> {
        match self {
            Ability::Dash => Some((DASH_RANGE, DASH_STRENGTH_FACTOR)),
            Ability::Nova => Some((NOVA_RANGE, NOVA_STRENGTH_FACTOR)),
            Ability::Heal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(Ability::from_index(0), Some(Ability::Dash));
        assert_eq!(Ability::from_index(1), Some(Ability::Heal));
        assert_eq!(Ability::from_index(2), Some(Ability::Nova));
        assert_eq!(Ability::from_index(3), None);
    }

    #[test]
    fn test_heal_has_no_strike() {
        assert!(Ability::Heal.strike().is_none());
        assert_eq!(Ability::Nova.strike(), Some((100.0, 0.8)));
    }
}
