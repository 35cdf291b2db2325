//! Loot rolled from defeated enemies.

use super::catalog::{health_potion, item_or_default, HEALTH_POTION, MANA_POTION};
use super::types::{EquipmentSlot, Item, Rarity, WeaponKind};
use crate::core::constants::{
    ARMOR_BASE_DEFENSE, BOOTS_BASE_DEFENSE, HEALTH_POTION_DROP_CHANCE, HELMET_BASE_DEFENSE,
    MANA_POTION_DROP_CHANCE, WEAPON_BASE_ATTACK_SPEED, WEAPON_BASE_DAMAGE,
};
use crate::enemies::{EnemyArchetype, EnemyKind};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LootKind {
    /// The archetype's gold reward. Always granted, never rolled.
    Gold,
    /// A catalog consumable by id.
    Consumable(&'static str),
    Weapon {
        kind: WeaponKind,
        rarity: Option<Rarity>,
    },
    Gear {
        slot: EquipmentSlot,
        material: &'static str,
        rarity: Option<Rarity>,
    },
}

/// One independent drop chance. `rarity: None` rolls a tier uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LootEntry {
    pub kind: LootKind,
    pub chance: f64,
}

pub const BASE_LOOT: [LootEntry; 3] = [
    LootEntry {
        kind: LootKind::Gold,
        chance: 1.0,
    },
    LootEntry {
        kind: LootKind::Consumable(HEALTH_POTION),
        chance: HEALTH_POTION_DROP_CHANCE,
    },
    LootEntry {
        kind: LootKind::Consumable(MANA_POTION),
        chance: MANA_POTION_DROP_CHANCE,
    },
];

const GOBLIN_LOOT: [LootEntry; 1] = [LootEntry {
    kind: LootKind::Weapon {
        kind: WeaponKind::Sword,
        rarity: Some(Rarity::Common),
    },
    chance: 0.1,
}];

const WOLF_LOOT: [LootEntry; 1] = [LootEntry {
    kind: LootKind::Gear {
        slot: EquipmentSlot::Armor,
        material: "leather",
        rarity: Some(Rarity::Common),
    },
    chance: 0.15,
}];

const SKELETON_LOOT: [LootEntry; 2] = [
    LootEntry {
        kind: LootKind::Weapon {
            kind: WeaponKind::Sword,
            rarity: Some(Rarity::Rare),
        },
        chance: 0.05,
    },
    LootEntry {
        kind: LootKind::Gear {
            slot: EquipmentSlot::Helmet,
            material: "bone",
            rarity: Some(Rarity::Uncommon),
        },
        chance: 0.08,
    },
];

/// Archetype-specific rare drops, rolled on top of [`BASE_LOOT`].
pub fn rare_loot(kind: EnemyKind) -> &'static [LootEntry] {
    match kind {
        EnemyKind::Goblin => &GOBLIN_LOOT,
        EnemyKind::Wolf => &WOLF_LOOT,
        EnemyKind::Skeleton => &SKELETON_LOOT,
    }
}

/// Full table for one enemy kind: base entries followed by rare ones.
pub fn loot_table(kind: EnemyKind) -> Vec<LootEntry> {
    BASE_LOOT.iter().chain(rare_loot(kind)).copied().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LootDrop {
    pub items: Vec<Item>,
    pub gold: u64,
}

/// Rolls the drop for a defeated enemy of `archetype`.
pub fn roll_loot(archetype: &EnemyArchetype, rng: &mut impl Rng) -> LootDrop {
    roll_table(&loot_table(archetype.kind), archetype.gold_reward, rng)
}

/// Each entry is an independent trial; several may hit on one roll.
pub fn roll_table(table: &[LootEntry], gold: u64, rng: &mut impl Rng) -> LootDrop {
    let mut items = Vec::new();
    for entry in table {
        if entry.kind == LootKind::Gold {
            continue;
        }
        if rng.gen::<f64>() < entry.chance {
            if let Some(item) = synthesize(entry.kind, rng) {
                items.push(item);
            }
        }
    }
    LootDrop { items, gold }
}

fn synthesize(kind: LootKind, rng: &mut impl Rng) -> Option<Item> {
    match kind {
        LootKind::Gold => None,
        LootKind::Consumable(id) => Some(item_or_default(id)),
        LootKind::Weapon { kind, rarity } => {
            let rarity = rarity.unwrap_or_else(|| roll_rarity(rng));
            Some(synthesize_weapon(kind, rarity))
        }
        LootKind::Gear {
            slot,
            material,
            rarity,
        } => {
            let rarity = rarity.unwrap_or_else(|| roll_rarity(rng));
            Some(synthesize_gear(slot, material, rarity))
        }
    }
}

pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    Rarity::ALL[rng.gen_range(0..Rarity::ALL.len())]
}

pub fn synthesize_weapon(kind: WeaponKind, rarity: Rarity) -> Item {
    let id = format!("{}-{}", rarity.name().to_lowercase(), kind.name());
    let name = format!("{} {}", rarity.name(), title_case(kind.name()));
    Item::weapon(
        &id,
        &name,
        rarity,
        kind,
        rarity.scale(WEAPON_BASE_DAMAGE),
        WEAPON_BASE_ATTACK_SPEED,
    )
}

/// Defensive gear for `slot`. A weapon slot makes no sense here and
/// yields a potion instead.
pub fn synthesize_gear(slot: EquipmentSlot, material: &str, rarity: Rarity) -> Item {
    let (base, suffix) = match slot {
        EquipmentSlot::Armor => (ARMOR_BASE_DEFENSE, "Armor"),
        EquipmentSlot::Helmet => (HELMET_BASE_DEFENSE, "Helmet"),
        EquipmentSlot::Boots => (BOOTS_BASE_DEFENSE, "Boots"),
        EquipmentSlot::Weapon => return health_potion(1),
    };
    let id = format!(
        "{}-{}-{}",
        rarity.name().to_lowercase(),
        material,
        suffix.to_lowercase()
    );
    let name = format!("{} {} {}", rarity.name(), title_case(material), suffix);
    Item::gear(&id, &name, rarity, slot, rarity.scale(base))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
