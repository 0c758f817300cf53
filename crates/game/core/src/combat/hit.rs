//! Dodge checks.
//!
//! Every dodge is a single uniform draw in `[0, 1)` compared against a
//! probability: the attack is evaded when `roll < chance`.

use crate::config::CombatTables;

/// Chance that a hero evades a monster's attack.
pub fn hero_dodge_chance(agility: f64, tables: &CombatTables) -> f64 {
    agility * tables.hero_dodge_per_agility
}

/// Returns `true` if the defender evades.
#[inline]
pub fn check_dodge(roll: f64, chance: f64) -> bool {
    roll < chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agility_converts_to_dodge_chance() {
        let tables = CombatTables::default();
        assert!((hero_dodge_chance(250.0, &tables) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn dodge_is_strictly_below_chance() {
        assert!(check_dodge(0.29, 0.3));
        assert!(!check_dodge(0.3, 0.3));
        assert!(!check_dodge(0.0, 0.0));
    }
}
