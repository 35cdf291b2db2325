//! Attribute and resource model shared by the player and enemies.

use super::attributes::Attributes;
use serde::{Deserialize, Serialize};

/// A bounded resource such as health or mana. `current` never exceeds `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    current: u32,
    max: u32,
}

impl ResourcePool {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`, clamping at zero. Returns what was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount`, capped at max. Returns what was actually added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.max - self.current);
        self.current += added;
        added
    }

    /// Spends `amount` only if the whole price is available.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        if self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }

    pub fn grow_max(&mut self, delta: u32) {
        self.max = self.max.saturating_add(delta);
    }
}

/// Health, optional mana and base attributes of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityStats {
    pub health: ResourcePool,
    /// Only the player has a mana pool.
    pub mana: Option<ResourcePool>,
    pub attributes: Attributes,
}

impl EntityStats {
    pub fn new(max_health: u32, max_mana: Option<u32>, attributes: Attributes) -> Self {
        Self {
            health: ResourcePool::full(max_health),
            mana: max_mana.map(ResourcePool::full),
            attributes,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.drain(amount)
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health.restore(amount)
    }

    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        self.mana.as_mut().map_or(0, |mana| mana.restore(amount))
    }

    /// False (and nothing spent) when there is no pool or not enough mana.
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        self.mana.as_mut().is_some_and(|mana| mana.try_spend(amount))
    }

    pub fn restore_all(&mut self) {
        self.health.refill();
        if let Some(mana) = self.mana.as_mut() {
            mana.refill();
        }
    }
}
