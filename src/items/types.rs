use crate::core::constants::{AXE_RANGE, BOW_RANGE, SPEAR_RANGE, STAFF_RANGE, SWORD_RANGE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Boots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Scalar applied to a category's base stat.
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.2,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 3.0,
        }
    }

    /// `base` scaled by this tier's multiplier, rounded down.
    pub fn scale(&self, base: u32) -> u32 {
        (base as f64 * self.multiplier()).floor() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    Sword,
    Axe,
    Spear,
    Bow,
    Staff,
}

impl WeaponKind {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Sword => "sword",
            WeaponKind::Axe => "axe",
            WeaponKind::Spear => "spear",
            WeaponKind::Bow => "bow",
            WeaponKind::Staff => "staff",
        }
    }

    /// Attack reach of this weapon kind.
    pub fn range(&self) -> f32 {
        match self {
            WeaponKind::Sword => SWORD_RANGE,
            WeaponKind::Axe => AXE_RANGE,
            WeaponKind::Spear => SPEAR_RANGE,
            WeaponKind::Bow => BOW_RANGE,
            WeaponKind::Staff => STAFF_RANGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    Heal,
    Mana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Helmet,
    Boots,
    Consumable,
}

impl ItemCategory {
    /// Equipment slot for gear categories; consumables have none.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemCategory::Weapon => Some(EquipmentSlot::Weapon),
            ItemCategory::Armor => Some(EquipmentSlot::Armor),
            ItemCategory::Helmet => Some(EquipmentSlot::Helmet),
            ItemCategory::Boots => Some(EquipmentSlot::Boots),
            ItemCategory::Consumable => None,
        }
    }
}

/// Category-specific stats of an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemPayload {
    Weapon {
        kind: WeaponKind,
        damage: u32,
        attack_speed: f32,
    },
    Armor {
        defense: u32,
    },
    Helmet {
        defense: u32,
    },
    Boots {
        defense: u32,
    },
    Consumable {
        effect: ConsumableEffect,
        value: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier; consumables with equal ids stack.
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub payload: ItemPayload,
    /// Always 1 for gear.
    pub quantity: u32,
}

impl Item {
    pub fn weapon(
        id: &str,
        name: &str,
        rarity: Rarity,
        kind: WeaponKind,
        damage: u32,
        attack_speed: f32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rarity,
            payload: ItemPayload::Weapon {
                kind,
                damage,
                attack_speed,
            },
            quantity: 1,
        }
    }

    /// Defensive gear for the armor, helmet or boots slot.
    pub fn gear(id: &str, name: &str, rarity: Rarity, slot: EquipmentSlot, defense: u32) -> Self {
        let payload = match slot {
            EquipmentSlot::Helmet => ItemPayload::Helmet { defense },
            EquipmentSlot::Boots => ItemPayload::Boots { defense },
            EquipmentSlot::Armor | EquipmentSlot::Weapon => ItemPayload::Armor { defense },
        };
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rarity,
            payload,
            quantity: 1,
        }
    }

    pub fn consumable(
        id: &str,
        name: &str,
        effect: ConsumableEffect,
        value: u32,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rarity: Rarity::Common,
            payload: ItemPayload::Consumable { effect, value },
            quantity: quantity.max(1),
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self.payload {
            ItemPayload::Weapon { .. } => ItemCategory::Weapon,
            ItemPayload::Armor { .. } => ItemCategory::Armor,
            ItemPayload::Helmet { .. } => ItemCategory::Helmet,
            ItemPayload::Boots { .. } => ItemCategory::Boots,
            ItemPayload::Consumable { .. } => ItemCategory::Consumable,
        }
    }

    pub fn slot(&self) -> Option<EquipmentSlot> {
        self.category().slot()
    }

    pub fn is_stackable(&self) -> bool {
        self.category() == ItemCategory::Consumable
    }

    /// Defense granted while equipped (0 for weapons and consumables).
    pub fn defense(&self) -> u32 {
        match self.payload {
            ItemPayload::Armor { defense }
            | ItemPayload::Helmet { defense }
            | ItemPayload::Boots { defense } => defense,
            _ => 0,
        }
    }
}
