//! Enemy archetypes, instances, AI and spawning.

pub mod ai;
pub mod archetype;
pub mod enemy;
pub mod registry;
pub mod spawner;

pub use ai::{AiState, EnemyAi};
pub use archetype::{EnemyArchetype, EnemyKind};
pub use enemy::Enemy;
pub use registry::EnemyRegistry;
pub use spawner::EnemySpawner;
