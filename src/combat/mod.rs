//! Combat resolution: damage rolls, targeting, knockback and cooldowns.

pub mod cooldown;
pub mod logic;
pub mod types;

pub use cooldown::AttackCooldown;
pub use logic::*;
pub use types::*;
