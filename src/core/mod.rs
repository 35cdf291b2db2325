//! Session orchestration: configuration, time, commands and the tick loop.

pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod reactions;
pub mod session;
pub mod snapshot;
pub mod tick;

pub use config::GameConfig;
pub use entity::{EntityId, EntityKind, PLAYER_ID};
pub use error::ConfigError;
pub use geometry::{Facing, Vec2};
pub use session::GameSession;
pub use snapshot::{EntitySnapshot, EntityView};
pub use tick::TickResult;
