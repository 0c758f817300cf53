//! Hero template loader.

use std::path::Path;

use game_core::HeroTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Hero catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroCatalog {
    pub heroes: Vec<HeroTemplate>,
}

/// Loader for hero templates from RON files.
pub struct HeroLoader;

impl HeroLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<HeroTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<HeroTemplate>> {
        let catalog: HeroCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hero catalog RON: {}", e))?;
        Ok(catalog.heroes)
    }
}

#[cfg(test)]
mod tests {
    use game_core::HeroClass;

    use super::*;

    #[test]
    fn parses_hero_templates() {
        let heroes = HeroLoader::parse(
            r#"(
                heroes: [
                    (name: "Gaerdal_Ironhand", class: Warrior, level: 1, mana: 100.0, strength: 700.0,
                     agility: 500.0, dexterity: 600.0, money: 1354.0, experience: 7),
                    (name: "Kalabar", class: Sorcerer, level: 1, mana: 800.0, strength: 850.0,
                     agility: 400.0, dexterity: 600.0, money: 2500.0, experience: 6),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0].class, HeroClass::Warrior);
        assert_eq!(heroes[1].mana, 800.0);
    }
}
