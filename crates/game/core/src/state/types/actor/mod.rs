//! Combatant state types.
//!
//! This module contains all types specific to heroes and monsters:
//! - Hero: Party members with progression, gear and money
//! - Monster: Encounter enemies scaled from templates
//! - Equipment: Weapon and armor slots
//! - Inventory: Item storage for heroes

pub mod equipment;
pub mod hero;
pub mod inventory;
pub mod monster;

pub use equipment::Equipment;
pub use hero::{Hero, HeroClass, HeroTemplate};
pub use inventory::Inventory;
pub use monster::{Monster, MonsterKind, MonsterTemplate};
