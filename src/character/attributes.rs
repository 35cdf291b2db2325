use crate::core::constants::{
    LEVEL_UP_ATTRIBUTE_GROWTH, NUM_ATTRIBUTES, PLAYER_BASE_DEFENSE, PLAYER_BASE_DEXTERITY,
    PLAYER_BASE_INTELLIGENCE, PLAYER_BASE_STRENGTH,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttributeType {
    Strength,
    Dexterity,
    Intelligence,
    Defense,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Dexterity,
            AttributeType::Intelligence,
            AttributeType::Defense,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Dexterity => 1,
            AttributeType::Intelligence => 2,
            AttributeType::Defense => 3,
        }
    }
}

/// Base attributes of an entity. Equipment is layered on top elsewhere;
/// these values only change through level-ups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::player_base()
    }
}

impl Attributes {
    pub fn new(strength: u32, dexterity: u32, intelligence: u32, defense: u32) -> Self {
        Self {
            values: [strength, dexterity, intelligence, defense],
        }
    }

    /// Starting attributes of a fresh level-1 player.
    pub fn player_base() -> Self {
        Self::new(
            PLAYER_BASE_STRENGTH,
            PLAYER_BASE_DEXTERITY,
            PLAYER_BASE_INTELLIGENCE,
            PLAYER_BASE_DEFENSE,
        )
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn increase(&mut self, attr: AttributeType, amount: u32) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(amount);
    }

    pub fn strength(&self) -> u32 {
        self.get(AttributeType::Strength)
    }

    pub fn defense(&self) -> u32 {
        self.get(AttributeType::Defense)
    }

    /// Applies the fixed per-level growth to all four attributes.
    pub fn apply_level_growth(&mut self) {
        for attr in AttributeType::all() {
            self.increase(attr, LEVEL_UP_ATTRIBUTE_GROWTH[attr.index()]);
        }
    }
}
