//! Combat result types and attack resolution.

use crate::config::CombatTables;
use crate::state::{Element, Hero, Monster, SpellData};

use super::damage::{apply_damage, hero_attack_damage, monster_attack_damage, spell_damage};
use super::hit::{check_dodge, hero_dodge_chance};
use super::status::apply_elemental_debuff;

/// Outcome of a physical attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The defender evaded; no damage.
    Dodged,
    /// The attack landed.
    Hit {
        damage: f64,
        /// The defender fainted from this hit.
        fainted: bool,
    },
}

/// Outcome of a spell.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellOutcome {
    pub damage: f64,
    pub fainted: bool,
    /// Debuff applied when the target survived: element and amount removed.
    pub debuff: Option<(Element, f64)>,
}

/// Resolve a hero's physical attack against `target`.
///
/// `roll` is a uniform draw in `[0, 1)` compared against the monster's dodge
/// chance.
pub fn resolve_hero_attack(
    hero: &Hero,
    target: &mut Monster,
    roll: f64,
    tables: &CombatTables,
) -> AttackOutcome {
    if check_dodge(roll, target.dodge_chance) {
        return AttackOutcome::Dodged;
    }

    let damage = hero_attack_damage(
        hero.stats.strength,
        hero.equipment.weapon_damage(),
        target.defense,
        tables,
    );
    let damage = apply_damage(&mut target.stats, damage);

    AttackOutcome::Hit {
        damage,
        fainted: target.is_fainted(),
    }
}

/// Resolve a monster's attack against `target`.
///
/// `roll` is compared against the hero's agility-based dodge chance.
pub fn resolve_monster_attack(
    monster: &Monster,
    target: &mut Hero,
    roll: f64,
    tables: &CombatTables,
) -> AttackOutcome {
    if check_dodge(roll, hero_dodge_chance(target.stats.agility, tables)) {
        return AttackOutcome::Dodged;
    }

    let damage = monster_attack_damage(
        monster.base_damage,
        target.equipment.damage_reduction(),
        tables,
    );
    let damage = apply_damage(&mut target.stats, damage);

    AttackOutcome::Hit {
        damage,
        fainted: target.is_fainted(),
    }
}

/// Resolve a spell's damage and debuff. Spells cannot be dodged.
///
/// Mana and the spell item are the caller's responsibility.
pub fn resolve_spell(
    caster_dexterity: f64,
    spell: &SpellData,
    target: &mut Monster,
    tables: &CombatTables,
) -> SpellOutcome {
    let damage = spell_damage(spell.damage, caster_dexterity, tables);
    let damage = apply_damage(&mut target.stats, damage);

    let debuff = (!target.is_fainted()).then(|| {
        let amount = apply_elemental_debuff(target, spell.element, tables);
        (spell.element, amount)
    });

    SpellOutcome {
        damage,
        fainted: target.is_fainted(),
        debuff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, RngOracle};
    use crate::state::{HeroClass, HeroTemplate, MonsterKind, StatBlock};

    fn hero() -> Hero {
        Hero::from_template(&HeroTemplate {
            name: "Garl".to_string(),
            class: HeroClass::Warrior,
            level: 1,
            mana: 100.0,
            strength: 700.0,
            agility: 0.0,
            dexterity: 0.0,
            money: 0.0,
            experience: 0,
        })
    }

    fn monster(dodge_chance: f64) -> Monster {
        Monster {
            name: "Andrealphus".to_string(),
            kind: MonsterKind::Exoskeleton,
            stats: StatBlock {
                hp: f64::MAX,
                max_hp_basis: f64::MAX,
                level: 1,
                ..StatBlock::default()
            },
            base_damage: 0.0,
            defense: 0.0,
            dodge_chance,
        }
    }

    #[test]
    fn hero_attack_dodge_rate_matches_monster_dodge_chance() {
        let tables = CombatTables::default();
        let garl = hero();
        let mut target = monster(0.3);
        let mut rng = PcgRng::seeded(2024);

        let trials = 10_000;
        let dodges = (0..trials)
            .filter(|_| {
                let roll = rng.next_f64();
                resolve_hero_attack(&garl, &mut target, roll, &tables) == AttackOutcome::Dodged
            })
            .count();

        let observed = dodges as f64 / trials as f64;
        assert!(
            (observed - 0.3).abs() < 0.03,
            "observed dodge rate {observed} too far from 0.3"
        );
        assert!(!target.is_fainted());
    }

    #[test]
    fn hit_reports_damage_and_faint() {
        let tables = CombatTables::default();
        let mut target = monster(0.0);
        target.stats.hp = 30.0;

        let outcome = resolve_hero_attack(&hero(), &mut target, 0.5, &tables);

        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                damage: 35.0,
                fainted: true
            }
        );
    }
}
