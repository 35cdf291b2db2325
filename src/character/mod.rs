//! Player character: attributes, resources, movement and leveling.

pub mod abilities;
pub mod attributes;
pub mod body;
pub mod player;
pub mod progression;
pub mod stats;

pub use abilities::Ability;
pub use attributes::{AttributeType, Attributes};
pub use player::Player;
pub use progression::{try_level_up, Progression};
pub use stats::{EntityStats, ResourcePool};
