//! Entity model: heroes, monsters, items and the party.
//!
//! Every type here is plain owned data with invariant-preserving mutators.
//! The combat engine and the economy rules are the only code that changes
//! these values during play.
pub mod error;
pub mod types;

pub use error::{EquipError, PartyError};
pub use types::{
    ArmorData, Attributes, Element, Equipment, Hero, HeroClass, HeroTemplate,
    Inventory, Item, ItemCategory, ItemKind, Monster, MonsterKind, MonsterTemplate, Party,
    Position, PotionData, SpellData, StatBlock, WeaponData,
};
