//! Equipment system for heroes.
//!
//! A hero holds at most one weapon and one armor piece. Equipped items are
//! copies of inventory entries; the slot only decides which values feed the
//! damage and mitigation formulas.

use crate::state::error::EquipError;
use crate::state::types::{Item, ItemKind};

/// Equipment state for a hero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Always holds an `ItemKind::Weapon` when set.
    weapon: Option<Item>,

    /// Always holds an `ItemKind::Armor` when set.
    armor: Option<Item>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn weapon(&self) -> Option<&Item> {
        self.weapon.as_ref()
    }

    pub fn armor(&self) -> Option<&Item> {
        self.armor.as_ref()
    }

    /// Places `item` in the matching slot, returning what it replaced.
    ///
    /// Potions and spells cannot be equipped.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, EquipError> {
        match item.kind {
            ItemKind::Weapon(_) => Ok(self.weapon.replace(item)),
            ItemKind::Armor(_) => Ok(self.armor.replace(item)),
            ItemKind::Potion(_) | ItemKind::Spell(_) => {
                let category = item.category();
                Err(EquipError::NotEquippable {
                    name: item.name,
                    category,
                })
            }
        }
    }

    /// Unequips the current weapon, returning it if any was equipped.
    pub fn unequip_weapon(&mut self) -> Option<Item> {
        self.weapon.take()
    }

    /// Unequips the current armor, returning it if any was equipped.
    pub fn unequip_armor(&mut self) -> Option<Item> {
        self.armor.take()
    }

    /// Damage of the equipped weapon, or 0 when unarmed.
    pub fn weapon_damage(&self) -> f64 {
        self.weapon
            .as_ref()
            .and_then(Item::as_weapon)
            .map_or(0.0, |w| w.damage)
    }

    /// Damage reduction of the equipped armor, or 0 when unarmored.
    pub fn damage_reduction(&self) -> f64 {
        self.armor
            .as_ref()
            .and_then(Item::as_armor)
            .map_or(0.0, |a| a.damage_reduction)
    }

    /// Returns true if `item` is currently equipped in either slot.
    pub fn is_equipped(&self, item: &Item) -> bool {
        self.weapon.as_ref() == Some(item) || self.armor.as_ref() == Some(item)
    }
}
