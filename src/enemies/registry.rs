use super::archetype::{archetype_or_default, EnemyArchetype, EnemyKind};
use super::enemy::Enemy;
use crate::core::entity::EntityId;
use crate::core::geometry::Vec2;
use rand::Rng;

/// Owns every live enemy. Iteration follows spawn order.
#[derive(Debug, Clone)]
pub struct EnemyRegistry {
    enemies: Vec<Enemy>,
    next_id: u32,
    attack_cooldown_ms: f64,
}

impl EnemyRegistry {
    pub fn new(attack_cooldown_ms: f64) -> Self {
        Self {
            enemies: Vec::new(),
            // 0 is the player
            next_id: 1,
            attack_cooldown_ms,
        }
    }

    pub fn spawn(&mut self, kind: EnemyKind, position: Vec2, rng: &mut impl Rng) -> EntityId {
        self.spawn_archetype(kind.archetype(), position, rng)
    }

    /// Spawns by archetype name; unknown names become goblins.
    pub fn spawn_named(&mut self, name: &str, position: Vec2, rng: &mut impl Rng) -> EntityId {
        self.spawn_archetype(archetype_or_default(name), position, rng)
    }

    fn spawn_archetype(
        &mut self,
        archetype: EnemyArchetype,
        position: Vec2,
        rng: &mut impl Rng,
    ) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let patrol_direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.enemies.push(Enemy::new(
            id,
            archetype,
            position,
            patrol_direction,
            self.attack_cooldown_ms,
        ));
        log::debug!(
            "Spawned {} {} at ({:.0}, {:.0})",
            archetype.kind.name(),
            id,
            position.x,
            position.y
        );
        id
    }

    /// Takes ownership of the enemy out of the registry.
    pub fn remove(&mut self, id: EntityId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(index))
    }

    pub fn get(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.enemies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Ids of live enemies within `range` of `point` (inclusive).
    pub fn in_range(&self, point: Vec2, range: f32) -> Vec<EntityId> {
        self.enemies
            .iter()
            .filter(|e| e.is_alive() && e.body.position.distance(point) <= range)
            .map(|e| e.id)
            .collect()
    }

    /// Closest live enemy to `point`, with its distance.
    pub fn nearest(&self, point: Vec2) -> Option<(EntityId, f32)> {
        self.enemies
            .iter()
            .filter(|e| e.is_alive())
            .map(|e| (e.id, e.body.position.distance(point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn registry_with(positions: &[(EnemyKind, f32)]) -> EnemyRegistry {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut registry = EnemyRegistry::new(1500.0);
        for (kind, x) in positions {
            registry.spawn(*kind, Vec2::new(*x, 0.0), &mut rng);
        }
        registry
    }

    #[test]
    fn test_ids_start_after_player_and_increase() {
        let registry = registry_with(&[(EnemyKind::Goblin, 0.0), (EnemyKind::Wolf, 10.0)]);
        let ids: Vec<_> = registry.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(1), EntityId(2)]);
    }

    #[test]
    fn test_spawn_named_falls_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut registry = EnemyRegistry::new(1500.0);
        let id = registry.spawn_named("lich", Vec2::ZERO, &mut rng);
        assert_eq!(registry.get(id).map(|e| e.kind()), Some(EnemyKind::Goblin));
    }

    #[test]
    fn test_remove_releases_enemy() {
        let mut registry = registry_with(&[(EnemyKind::Goblin, 0.0), (EnemyKind::Wolf, 10.0)]);
        let removed = registry.remove(EntityId(1));
        assert_eq!(removed.map(|e| e.kind()), Some(EnemyKind::Goblin));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(EntityId(1)).is_none());
        assert!(registry.remove(EntityId(1)).is_none());
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut registry = registry_with(&[(EnemyKind::Goblin, 0.0)]);
        registry.remove(EntityId(1));
        let id = registry.spawn(EnemyKind::Wolf, Vec2::ZERO, &mut rng);
        assert_eq!(id, EntityId(2));
    }

    #[test]
    fn test_range_query_and_nearest() {
        let registry = registry_with(&[
            (EnemyKind::Goblin, 100.0),
            (EnemyKind::Wolf, -30.0),
            (EnemyKind::Skeleton, 60.0),
        ]);
        assert_eq!(
            registry.in_range(Vec2::ZERO, 60.0),
            vec![EntityId(2), EntityId(3)]
        );
        assert_eq!(registry.nearest(Vec2::ZERO), Some((EntityId(2), 30.0)));
        assert_eq!(EnemyRegistry::new(1500.0).nearest(Vec2::ZERO), None);
    }
}
