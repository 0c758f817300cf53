pub mod actor;
pub mod common;
pub mod item;
pub mod party;
pub mod stats;

// Re-export all combatant types
pub use actor::{
    Equipment, Hero, HeroClass, HeroTemplate, Inventory, Monster, MonsterKind,
    MonsterTemplate,
};

// Re-export common types
pub use common::Position;

// Re-export item types
pub use item::{
    ArmorData, Attributes, Element, Item, ItemCategory, ItemKind, PotionData, SpellData,
    WeaponData,
};

pub use party::Party;
pub use stats::StatBlock;
