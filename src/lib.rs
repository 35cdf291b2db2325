//! arpg-sim - gameplay simulation core for a 2D action RPG.
//!
//! Combat resolution, enemy AI, progression, loot and quests, wired together
//! by a synchronous event bus and driven one tick at a time by a host. Nothing
//! here draws or polls input; hosts talk to [`GameSession`] through commands,
//! [`GameSession::tick`] and snapshots.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod events;
pub mod items;
pub mod quests;
pub mod simulator;

pub use crate::core::config::GameConfig;
pub use crate::core::error::ConfigError;
pub use crate::core::session::GameSession;
pub use crate::core::tick::TickResult;
