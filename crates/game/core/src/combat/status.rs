//! Elemental debuffs.
//!
//! A spell that leaves its target standing weakens one stat by a fraction of
//! its *current* value. Debuffs never expire during an encounter and stack
//! multiplicatively, so repeated casts approach zero without reaching it.

use crate::config::CombatTables;
use crate::state::{Element, Monster};

/// Applies the element's debuff to `target`. Returns the amount removed.
pub fn apply_elemental_debuff(target: &mut Monster, element: Element, tables: &CombatTables) -> f64 {
    let ratio = tables.debuff_ratio;
    match element {
        Element::Fire => {
            let amount = target.defense * ratio;
            target.reduce_defense(amount);
            amount
        }
        Element::Ice => {
            let amount = target.base_damage * ratio;
            target.reduce_damage(amount);
            amount
        }
        Element::Lightning => {
            let amount = target.dodge_chance * ratio;
            target.reduce_dodge_chance(amount);
            amount
        }
    }
}

/// Describes the stat an element weakens, for the event log.
pub fn debuff_message(element: Element) -> &'static str {
    match element {
        Element::Fire => "defense melted by Fire",
        Element::Ice => "damage reduced by Ice",
        Element::Lightning => "dodge reduced by Lightning",
    }
}
