//! Monster spawner.
//!
//! Builds an encounter roster from catalog templates scaled to the party's
//! strongest hero. Each spawned monster is a fresh owned value; nothing in
//! the roster refers back to the template it was drawn from.
//!
//! # Formula
//!
//! ```text
//! ratio   = target_level / max(1, template.level)
//! damage  = template.base_damage * ratio
//! defense = template.defense * ratio
//! dodge   = template.dodge_percent / 100
//! hp      = target_level * monster_hp_per_level
//! ```

use crate::config::SpawnTables;
use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Monster, MonsterTemplate, StatBlock};

/// Errors raised while spawning monsters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnError {
    /// The caller must guarantee a non-empty catalog before an encounter.
    #[error("cannot spawn monsters from an empty catalog")]
    EmptyCatalog,
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCatalog => "SPAWN_EMPTY_CATALOG",
        }
    }
}

/// Draws `party_size` monsters uniformly (with replacement) from `catalog`
/// and scales each to `target_level`.
pub fn spawn(
    party_size: usize,
    target_level: u32,
    catalog: &[MonsterTemplate],
    tables: &SpawnTables,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<Vec<Monster>, SpawnError> {
    if catalog.is_empty() {
        return Err(SpawnError::EmptyCatalog);
    }

    let roster = (0..party_size)
        .map(|_| {
            let template = &catalog[rng.next_index(catalog.len())];
            scale(template, target_level, tables)
        })
        .collect();
    Ok(roster)
}

/// Creates a live monster from `template` at `target_level`.
pub fn scale(template: &MonsterTemplate, target_level: u32, tables: &SpawnTables) -> Monster {
    let ratio = f64::from(target_level) / f64::from(template.level.max(1));
    let hp = f64::from(target_level) * tables.monster_hp_per_level;

    tracing::debug!(
        template = %template.name,
        target_level,
        ratio,
        "scaling monster"
    );

    Monster {
        name: template.name.clone(),
        kind: template.kind,
        stats: StatBlock {
            hp,
            max_hp_basis: hp,
            level: target_level,
            ..StatBlock::default()
        },
        base_damage: template.base_damage * ratio,
        defense: template.defense * ratio,
        dodge_chance: template.dodge_percent / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};
    use crate::state::MonsterKind;

    fn template(name: &str, level: u32, base_damage: f64, defense: f64) -> MonsterTemplate {
        MonsterTemplate {
            name: name.to_string(),
            kind: MonsterKind::Dragon,
            level,
            base_damage,
            defense,
            dodge_percent: 35.0,
        }
    }

    #[test]
    fn empty_catalog_fails() {
        let mut rng = PcgRng::seeded(1);
        assert_eq!(
            spawn(2, 3, &[], &SpawnTables::default(), &mut rng),
            Err(SpawnError::EmptyCatalog)
        );
    }

    #[test]
    fn scales_to_target_level() {
        let catalog = [template("Desghidorrah", 2, 10.0, 400.0)];
        let mut rng = PcgRng::seeded(1);
        let roster = spawn(1, 5, &catalog, &SpawnTables::default(), &mut rng).unwrap();

        let monster = &roster[0];
        assert_eq!(monster.level(), 5);
        assert_eq!(monster.base_damage, 25.0);
        assert_eq!(monster.defense, 1000.0);
        assert_eq!(monster.dodge_chance, 0.35);
        assert_eq!(monster.stats.hp, 500.0);
    }

    #[test]
    fn level_zero_template_does_not_divide_by_zero() {
        let monster = scale(&template("Casper", 0, 100.0, 50.0), 3, &SpawnTables::default());
        assert_eq!(monster.base_damage, 300.0);
        assert_eq!(monster.defense, 150.0);
    }

    #[test]
    fn roster_size_matches_party_and_levels_match_target() {
        let catalog = [
            template("Natsunomeryu", 1, 100.0, 200.0),
            template("Chrysophylax", 2, 200.0, 500.0),
            template("Igneel", 6, 600.0, 400.0),
        ];
        let mut rng = PcgRng::seeded(77);
        for party_size in 1..=3 {
            let roster =
                spawn(party_size, 4, &catalog, &SpawnTables::default(), &mut rng).unwrap();
            assert_eq!(roster.len(), party_size);
            assert!(roster.iter().all(|m| m.level() == 4));
        }
    }

    #[test]
    fn draws_with_replacement() {
        let catalog = [
            template("Natsunomeryu", 1, 100.0, 200.0),
            template("Igneel", 6, 600.0, 400.0),
        ];
        let mut rng = SequenceRng::new(vec![0.1, 0.2, 0.3]);
        let roster = spawn(3, 1, &catalog, &SpawnTables::default(), &mut rng).unwrap();
        assert!(roster.iter().all(|m| m.name == "Natsunomeryu"));
    }

    #[test]
    fn spawned_monsters_are_independent_of_the_template() {
        let catalog = [template("Desghidorrah", 2, 10.0, 400.0)];
        let mut rng = PcgRng::seeded(5);
        let mut roster = spawn(2, 2, &catalog, &SpawnTables::default(), &mut rng).unwrap();

        roster[0].reduce_defense(100.0);
        assert_eq!(roster[1].defense, 400.0);
        assert_eq!(catalog[0].defense, 400.0);
    }
}
