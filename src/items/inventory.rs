//! Fixed-capacity item storage with reusable holes.
//!
//! Slots are never compacted: removing an item leaves an empty hole at its
//! index, and the lowest free index is reused first.

use super::equipment::Equipment;
use super::types::{ConsumableEffect, Item, ItemPayload};
use crate::character::stats::EntityStats;
use serde::Serialize;
use std::collections::BTreeSet;

/// Read-only copy of the inventory for the view layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySnapshot {
    pub slots: Vec<Option<Item>>,
    pub gold: u64,
}

#[derive(Debug, Clone)]
pub struct Inventory {
    slots: Vec<Option<Item>>,
    free: BTreeSet<usize>,
    gold: u64,
}

impl Inventory {
    pub fn new(capacity: usize, gold: u64) -> Self {
        Self {
            slots: vec![None; capacity],
            free: (0..capacity).collect(),
            gold,
        }
    }

    /// An inventory seeded with `items` in order.
    pub fn with_items(capacity: usize, gold: u64, items: Vec<Item>) -> Self {
        let mut inventory = Self::new(capacity, gold);
        for item in items {
            inventory.add_item(item);
        }
        inventory
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn add_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    /// Total quantity held of the item with `id`.
    pub fn count_of(&self, id: &str) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|item| item.id == id)
            .map(|item| item.quantity)
            .sum()
    }

    /// Stores `item`. Consumables merge into an existing stack with the same
    /// id; anything else takes the lowest free slot. Returns false (and the
    /// item is dropped) when no slot is free.
    pub fn add_item(&mut self, item: Item) -> bool {
        if item.is_stackable() {
            let stack = self
                .slots
                .iter_mut()
                .flatten()
                .find(|held| held.is_stackable() && held.id == item.id);
            if let Some(stack) = stack {
                stack.quantity = stack.quantity.saturating_add(item.quantity.max(1));
                return true;
            }
        }

        match self.free.pop_first() {
            Some(index) => {
                let mut item = item;
                item.quantity = item.quantity.max(1);
                self.slots[index] = Some(item);
                true
            }
            None => {
                log::warn!("Inventory full, dropping {}", item.name);
                false
            }
        }
    }

    /// Removes `quantity` from the stack at `index`, clearing the slot when it
    /// reaches zero. Returns the removed portion.
    pub fn remove_from_slot(&mut self, index: usize, quantity: u32) -> Option<Item> {
        let held = self.slots.get_mut(index)?.as_mut()?;
        if quantity >= held.quantity {
            return self.take_slot(index);
        }
        held.quantity -= quantity;
        let mut removed = held.clone();
        removed.quantity = quantity;
        Some(removed)
    }

    /// Empties the slot at `index` and returns its whole content.
    pub fn take_slot(&mut self, index: usize) -> Option<Item> {
        let item = self.slots.get_mut(index)?.take()?;
        self.free.insert(index);
        Some(item)
    }

    /// Consumes one unit of the consumable at `index` and applies its effect.
    /// Empty slots and non-consumables are a no-op returning false.
    pub fn use_slot(&mut self, index: usize, stats: &mut EntityStats) -> bool {
        let Some(item) = self.get(index) else {
            log::debug!("Use of empty inventory slot {}", index);
            return false;
        };
        let ItemPayload::Consumable { effect, value } = item.payload else {
            log::debug!("Inventory slot {} holds {}, not a consumable", index, item.name);
            return false;
        };

        match effect {
            ConsumableEffect::Heal => {
                stats.heal(value);
            }
            ConsumableEffect::Mana => {
                stats.restore_mana(value);
            }
        }
        self.remove_from_slot(index, 1);
        true
    }

    /// Equips the gear at `index`. The item leaves its slot first and the
    /// displaced item, if any, is stored back, so equipping never loses items.
    pub fn equip_slot(&mut self, index: usize, equipment: &mut Equipment) -> bool {
        let Some(slot) = self.get(index).and_then(Item::slot) else {
            log::debug!("Inventory slot {} holds nothing equippable", index);
            return false;
        };
        let Some(item) = self.take_slot(index) else {
            return false;
        };
        if let Some(displaced) = equipment.set(slot, Some(item)) {
            self.add_item(displaced);
        }
        true
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            slots: self.slots.clone(),
            gold: self.gold,
        }
    }
}
