//! Content factory for building the catalog from data files.

use std::path::PathBuf;

use anyhow::Context;
use game_core::{Catalog, GameConfig, HeroTemplate, Item, MonsterTemplate};

use crate::loaders::{ConfigLoader, HeroLoader, ItemLoader, LoadResult, MonsterLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── heroes.ron
/// ├── monsters.ron
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load_or_default(&path)
    }

    /// Load hero templates from `heroes.ron`.
    pub fn load_heroes(&self) -> LoadResult<Vec<HeroTemplate>> {
        let path = self.data_dir.join("heroes.ron");
        HeroLoader::load(&path)
    }

    /// Load monster templates from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<Vec<MonsterTemplate>> {
        let path = self.data_dir.join("monsters.ron");
        MonsterLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load and validate the full catalog.
    ///
    /// Fails if no hero or no monster could be loaded. An empty item catalog
    /// is allowed; markets then have nothing for sale.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let heroes = self.load_heroes()?;
        let monsters = self.load_monsters()?;
        let items = self.load_items()?;
        if items.is_empty() {
            tracing::warn!("item catalog is empty; markets will have no stock");
        }

        let catalog = Catalog::new(heroes, monsters, items);
        catalog
            .validate()
            .with_context(|| format!("invalid content in {}", self.data_dir.display()))?;
        tracing::info!(
            heroes = catalog.heroes.len(),
            monsters = catalog.monsters.len(),
            items = catalog.items.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use game_core::CatalogError;

    use super::*;

    const HEROES: &str = r#"(heroes: [
        (name: "Parzival", class: Paladin, level: 1, mana: 300.0, strength: 750.0,
         agility: 650.0, dexterity: 700.0, money: 2500.0, experience: 7),
    ])"#;

    const MONSTERS: &str = r#"(monsters: [
        (name: "BigBad-Wolf", kind: Spirit, level: 1, base_damage: 150.0,
         defense: 250.0, dodge_percent: 15.0),
    ])"#;

    #[test]
    fn loads_catalog_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("heroes.ron"), HEROES).unwrap();
        fs::write(dir.path().join("monsters.ron"), MONSTERS).unwrap();
        fs::write(dir.path().join("items.ron"), "(items: [])").unwrap();

        let factory = ContentFactory::new(dir.path());
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.heroes.len(), 1);
        assert_eq!(catalog.monsters.len(), 1);
        assert!(catalog.items.is_empty());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn no_heroes_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("heroes.ron"), "(heroes: [])").unwrap();
        fs::write(dir.path().join("monsters.ron"), MONSTERS).unwrap();
        fs::write(dir.path().join("items.ron"), "(items: [])").unwrap();

        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::NoHeroes)
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_heroes().unwrap_err();
        assert!(err.to_string().contains("heroes.ron"));
    }

    #[test]
    fn shipped_data_directory_is_valid() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data");
        let factory = ContentFactory::new(data_dir);
        let catalog = factory.load_catalog().unwrap();
        assert!(!catalog.items.is_empty());
        factory.load_config().unwrap();
    }
}
