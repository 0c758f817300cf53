//! Damage calculation and application.

use crate::config::CombatTables;
use crate::state::StatBlock;

/// Damage of a hero's physical attack after the target's defense.
///
/// # Formula
///
/// ```text
/// raw       = (strength + weapon_damage) * attack_scale
/// mitigated = max(0, raw - defense * defense_scale)
/// ```
pub fn hero_attack_damage(
    strength: f64,
    weapon_damage: f64,
    defense: f64,
    tables: &CombatTables,
) -> f64 {
    let raw = (strength + weapon_damage) * tables.attack_scale;
    (raw - defense * tables.defense_scale).max(0.0)
}

/// Damage of a monster's attack after the hero's armor.
///
/// # Formula
///
/// ```text
/// final = max(0, base_damage - damage_reduction * armor_scale)
/// ```
pub fn monster_attack_damage(
    base_damage: f64,
    damage_reduction: f64,
    tables: &CombatTables,
) -> f64 {
    (base_damage - damage_reduction * tables.armor_scale).max(0.0)
}

/// Spell damage boosted by the caster's dexterity. Spells ignore defense.
///
/// # Formula
///
/// ```text
/// damage = spell_damage + (dexterity / spell_dexterity_divisor) * spell_damage
/// ```
pub fn spell_damage(spell_damage: f64, dexterity: f64, tables: &CombatTables) -> f64 {
    spell_damage + (dexterity / tables.spell_dexterity_divisor) * spell_damage
}

/// Apply damage to a stat block. Returns the amount applied.
///
/// HP is allowed to go below zero; fainted checks use `hp <= 0`.
pub fn apply_damage(stats: &mut StatBlock, damage: f64) -> f64 {
    stats.take_damage(damage)
}
