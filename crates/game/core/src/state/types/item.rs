//! Item catalog entries.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the fields every item shares (name, price, level gate)
//! - [`ItemKind`] holds the kind-specific payload
//!
//! Items are immutable values. Inventories and market stock hold owned
//! copies drawn from the catalog, so using or selling one never touches the
//! catalog itself.

use std::fmt;

use bitflags::bitflags;

/// A purchasable catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub price: u32,
    pub min_level: u32,
    pub kind: ItemKind,
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(WeaponData),

    /// Equippable armor.
    Armor(ArmorData),

    /// Single-use stat boost.
    Potion(PotionData),

    /// Single-use damaging spell with an elemental debuff.
    Spell(SpellData),
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage: f64,
}

/// Armor-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub damage_reduction: f64,
}

/// Potion-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionData {
    pub attribute_increase: f64,
    pub affects: Attributes,
}

/// Spell-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellData {
    pub damage: f64,
    pub mana_cost: f64,
    pub element: Element,
}

bitflags! {
    /// Hero attributes a potion raises. A potion may raise several at once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        const HEALTH    = 1 << 0;
        const MANA      = 1 << 1;
        const STRENGTH  = 1 << 2;
        const DEXTERITY = 1 << 3;
        const AGILITY   = 1 << 4;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Attributes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Spell element; decides which monster stat the spell weakens.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    /// Lowers defense.
    Fire,
    /// Lowers base damage.
    Ice,
    /// Lowers dodge chance.
    Lightning,
}

/// Inventory bucket an item is filed under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Potion,
    Spell,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32, min_level: u32, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            price,
            min_level,
            kind,
        }
    }

    pub fn weapon(name: impl Into<String>, price: u32, min_level: u32, damage: f64) -> Self {
        Self::new(name, price, min_level, ItemKind::Weapon(WeaponData { damage }))
    }

    pub fn armor(
        name: impl Into<String>,
        price: u32,
        min_level: u32,
        damage_reduction: f64,
    ) -> Self {
        Self::new(
            name,
            price,
            min_level,
            ItemKind::Armor(ArmorData { damage_reduction }),
        )
    }

    pub fn potion(
        name: impl Into<String>,
        price: u32,
        min_level: u32,
        attribute_increase: f64,
        affects: Attributes,
    ) -> Self {
        Self::new(
            name,
            price,
            min_level,
            ItemKind::Potion(PotionData {
                attribute_increase,
                affects,
            }),
        )
    }

    pub fn spell(
        name: impl Into<String>,
        price: u32,
        min_level: u32,
        damage: f64,
        mana_cost: f64,
        element: Element,
    ) -> Self {
        Self::new(
            name,
            price,
            min_level,
            ItemKind::Spell(SpellData {
                damage,
                mana_cost,
                element,
            }),
        )
    }

    pub fn category(&self) -> ItemCategory {
        match self.kind {
            ItemKind::Weapon(_) => ItemCategory::Weapon,
            ItemKind::Armor(_) => ItemCategory::Armor,
            ItemKind::Potion(_) => ItemCategory::Potion,
            ItemKind::Spell(_) => ItemCategory::Spell,
        }
    }

    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&ArmorData> {
        match &self.kind {
            ItemKind::Armor(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_potion(&self) -> Option<&PotionData> {
        match &self.kind {
            ItemKind::Potion(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_spell(&self) -> Option<&SpellData> {
        match &self.kind {
            ItemKind::Spell(data) => Some(data),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        match &self.kind {
            ItemKind::Weapon(w) => write!(f, "Weapon dmg {:.0}", w.damage)?,
            ItemKind::Armor(a) => write!(f, "Armor red {:.0}", a.damage_reduction)?,
            ItemKind::Potion(p) => {
                write!(f, "Potion +{:.0} ", p.attribute_increase)?;
                bitflags::parser::to_writer(&p.affects, &mut *f)?;
            }
            ItemKind::Spell(s) => write!(
                f,
                "{} Spell dmg {:.0} mana {:.0}",
                s.element, s.damage, s.mana_cost
            )?,
        }
        write!(f, "] {}g, lvl {}", self.price, self.min_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_matches_kind() {
        assert_eq!(
            Item::weapon("Sword", 500, 1, 800.0).category(),
            ItemCategory::Weapon
        );
        assert_eq!(
            Item::armor("Platinum_Shield", 150, 1, 200.0).category(),
            ItemCategory::Armor
        );
        assert_eq!(
            Item::potion("Healing_Potion", 250, 1, 100.0, Attributes::HEALTH).category(),
            ItemCategory::Potion
        );
        assert_eq!(
            Item::spell("Flame_Tornado", 700, 4, 850.0, 300.0, Element::Fire).category(),
            ItemCategory::Spell
        );
    }

    #[test]
    fn display_names_the_payload() {
        let potion = Item::potion(
            "Ambrosia",
            1000,
            8,
            150.0,
            Attributes::HEALTH | Attributes::MANA,
        );
        assert_eq!(
            potion.to_string(),
            "Ambrosia [Potion +150 HEALTH | MANA] 1000g, lvl 8"
        );
    }

    #[test]
    fn element_parses_case_insensitively() {
        assert_eq!("ICE".parse::<Element>(), Ok(Element::Ice));
        assert_eq!(Element::Lightning.to_string(), "lightning");
    }
}
