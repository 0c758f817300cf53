//! Player-controlled heroes.

use std::fmt;

use super::{Equipment, Inventory};
use crate::config::GameConfig;
use crate::state::error::EquipError;
use crate::state::types::{Attributes, Item, ItemCategory, PotionData, StatBlock};

/// Hero class. Decides which skills grow faster on level-up.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum HeroClass {
    /// Favors strength and agility.
    Warrior,
    /// Favors dexterity and agility.
    Sorcerer,
    /// Favors strength and dexterity.
    Paladin,
}

impl HeroClass {
    /// Skills that receive the extra level-up boost.
    pub const fn favored(self) -> Attributes {
        match self {
            Self::Warrior => Attributes::STRENGTH.union(Attributes::AGILITY),
            Self::Sorcerer => Attributes::DEXTERITY.union(Attributes::AGILITY),
            Self::Paladin => Attributes::STRENGTH.union(Attributes::DEXTERITY),
        }
    }
}

/// Catalog prototype for a hero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroTemplate {
    pub name: String,
    pub class: HeroClass,
    pub level: u32,
    pub mana: f64,
    pub strength: f64,
    pub agility: f64,
    pub dexterity: f64,
    pub money: f64,
    pub experience: u32,
}

/// A hero owned by the party.
///
/// Heroes are never destroyed: a fainted hero stays in the party and is
/// revived after a won encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub name: String,
    pub class: HeroClass,
    pub stats: StatBlock,
    /// Mana at creation or at the last level-up; revival restores half of it.
    pub mana_basis: f64,
    pub experience: u32,
    pub money: f64,
    pub equipment: Equipment,
    pub inventory: Inventory,
}

impl Hero {
    pub fn from_template(template: &HeroTemplate) -> Self {
        let level = template.level.max(1);
        let max_hp = f64::from(level) * GameConfig::HP_PER_LEVEL;
        Self {
            name: template.name.clone(),
            class: template.class,
            stats: StatBlock {
                hp: max_hp,
                max_hp_basis: max_hp,
                mana: template.mana,
                strength: template.strength,
                dexterity: template.dexterity,
                agility: template.agility,
                level,
            },
            mana_basis: template.mana,
            experience: template.experience,
            money: template.money,
            equipment: Equipment::empty(),
            inventory: Inventory::new(),
        }
    }

    #[inline]
    pub fn is_fainted(&self) -> bool {
        self.stats.is_fainted()
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.stats.level
    }

    /// Adds the potion's increase to every attribute it is flagged for.
    pub fn apply_potion(&mut self, potion: &PotionData) {
        let amount = potion.attribute_increase;
        let affects = potion.affects;
        let stats = &mut self.stats;
        if affects.contains(Attributes::HEALTH) {
            stats.hp += amount;
        }
        if affects.contains(Attributes::MANA) {
            stats.mana += amount;
        }
        if affects.contains(Attributes::STRENGTH) {
            stats.strength += amount;
        }
        if affects.contains(Attributes::DEXTERITY) {
            stats.dexterity += amount;
        }
        if affects.contains(Attributes::AGILITY) {
            stats.agility += amount;
        }
    }

    /// Equips a copy of the owned item at `index` within `category`.
    ///
    /// The item stays in the inventory; returns whatever was equipped before.
    pub fn equip_from_inventory(
        &mut self,
        category: ItemCategory,
        index: usize,
    ) -> Result<Option<Item>, EquipError> {
        let item = self
            .inventory
            .of(category)
            .get(index)
            .cloned()
            .ok_or(EquipError::MissingItem { category, index })?;
        self.equipment.equip(item)
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, xp: u32) -> u32 {
        self.experience += xp;
        let mut gained = 0;
        loop {
            let threshold = self.stats.level * GameConfig::XP_PER_LEVEL;
            if self.experience < threshold {
                break;
            }
            self.experience -= threshold;
            self.level_up();
            gained += 1;
        }
        gained
    }

    fn level_up(&mut self) {
        let favored = self.class.favored();
        let stats = &mut self.stats;

        stats.level += 1;
        stats.max_hp_basis = f64::from(stats.level) * GameConfig::HP_PER_LEVEL;
        stats.hp = stats.max_hp_basis;
        stats.mana *= 1.1;
        self.mana_basis = stats.mana;

        let boost = |value: &mut f64, attribute: Attributes| {
            *value *= 1.05;
            if favored.contains(attribute) {
                *value *= 1.05;
            }
        };
        boost(&mut stats.strength, Attributes::STRENGTH);
        boost(&mut stats.dexterity, Attributes::DEXTERITY);
        boost(&mut stats.agility, Attributes::AGILITY);
    }

    /// Brings a fainted hero back with half of the nominal hp and at least
    /// half of the nominal mana.
    pub fn revive(&mut self) {
        self.stats.hp = self.stats.max_hp_basis * 0.5;
        self.stats.mana = self.stats.mana.max(self.mana_basis * 0.5);
    }

    /// End-of-round recovery. Never applies to fainted heroes, never lowers
    /// hp or mana, and has no upper cap.
    pub fn regenerate(&mut self, factor: f64) {
        if self.is_fainted() || factor < 1.0 {
            return;
        }
        self.stats.hp *= factor;
        self.stats.mana *= factor;
    }

    pub fn add_money(&mut self, amount: f64) {
        self.money += amount;
    }

    /// Deducts `amount` if affordable. Returns whether money was taken.
    pub fn deduct_money(&mut self, amount: f64) -> bool {
        if self.money < amount {
            return false;
        }
        self.money -= amount;
        true
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        write!(
            f,
            "{} ({} Lv{}) HP {:.0}/{:.0} MP {:.0} STR {:.0} DEX {:.0} AGI {:.0} Gold {:.0} XP {}",
            self.name,
            self.class,
            s.level,
            s.effective_hp(),
            s.max_hp_basis,
            s.mana,
            s.strength,
            s.dexterity,
            s.agility,
            self.money,
            self.experience
        )?;
        if self.is_fainted() {
            write!(f, " [FAINTED]")?;
        }
        Ok(())
    }
}
