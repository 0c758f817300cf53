//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! Randomness arrives as pre-drawn rolls, so every function here is
//! deterministic.
//!
//! # Core Functions
//!
//! - `resolve_hero_attack`: dodge check + strength/weapon damage vs defense
//! - `resolve_monster_attack`: agility dodge check + damage vs armor
//! - `resolve_spell`: dexterity-boosted damage + elemental debuff
//! - `apply_elemental_debuff`: permanent, compounding stat reduction

pub mod damage;
pub mod hit;
pub mod result;
pub mod status;

pub use damage::{apply_damage, hero_attack_damage, monster_attack_damage, spell_damage};
pub use hit::{check_dodge, hero_dodge_chance};
pub use result::{
    AttackOutcome, SpellOutcome, resolve_hero_attack, resolve_monster_attack, resolve_spell,
};
pub use status::{apply_elemental_debuff, debuff_message};
