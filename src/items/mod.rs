//! Item system: types, equipment, inventory, catalog and drops.

pub mod catalog;
pub mod drops;
pub mod equipment;
pub mod inventory;
pub mod types;

pub use drops::{roll_loot, LootDrop};
pub use equipment::{Equipment, WeaponStats};
pub use inventory::{Inventory, InventorySnapshot};
pub use types::{
    ConsumableEffect, EquipmentSlot, Item, ItemCategory, ItemPayload, Rarity, WeaponKind,
};
