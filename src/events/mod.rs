//! Game events and the synchronous bus that carries them.

pub mod bus;
pub mod types;

pub use bus::{emit, EventBus, EventContext};
pub use types::{DefeatedEntity, EventKind, GameEvent, XpSource};
