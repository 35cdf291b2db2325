use super::types::{EquipmentSlot, Item, ItemPayload, Rarity, WeaponKind};
use serde::{Deserialize, Serialize};

/// Damage, reach and speed of whatever the player is holding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub kind: WeaponKind,
    pub damage: u32,
    pub attack_speed: f32,
}

impl WeaponStats {
    /// Bare-handed fallback when the weapon slot is empty.
    pub const UNARMED: WeaponStats = WeaponStats {
        kind: WeaponKind::Sword,
        damage: 0,
        attack_speed: 1.0,
    };
}

/// Player equipment slots. Each holds at most one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub helmet: Option<Item>,
    pub boots: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: None,
            armor: None,
            helmet: None,
            boots: None,
        }
    }

    /// Loadout of a fresh character: Rusty Sword and Basic Armor.
    pub fn starting() -> Self {
        Self {
            weapon: Some(Item::weapon(
                "rusty-sword",
                "Rusty Sword",
                Rarity::Common,
                WeaponKind::Sword,
                15,
                1.0,
            )),
            armor: Some(Item::gear(
                "basic-armor",
                "Basic Armor",
                Rarity::Common,
                EquipmentSlot::Armor,
                5,
            )),
            helmet: None,
            boots: None,
        }
    }

    /// Puts `item` in `slot` and hands back the previous occupant.
    pub fn set(&mut self, slot: EquipmentSlot, item: Option<Item>) -> Option<Item> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Boots => &mut self.boots,
        };
        std::mem::replace(target, item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.helmet, &self.boots]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    /// Sum of defense over all equipped gear.
    pub fn total_defense(&self) -> u32 {
        self.iter_equipped().map(Item::defense).sum()
    }

    pub fn weapon_stats(&self) -> WeaponStats {
        match self.weapon.as_ref().map(|item| item.payload) {
            Some(ItemPayload::Weapon {
                kind,
                damage,
                attack_speed,
            }) => WeaponStats {
                kind,
                damage,
                attack_speed,
            },
            _ => WeaponStats::UNARMED,
        }
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new()
    }
}
