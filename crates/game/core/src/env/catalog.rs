//! Read-only content catalogs.
//!
//! The catalog is loaded once at startup and never mutated by the core.
//! Encounters and markets draw owned copies from it.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::CatalogError;
use crate::state::{
    Hero, HeroClass, HeroTemplate, Item, ItemCategory, MonsterKind, MonsterTemplate,
};

/// Every hero, monster and item template known to the game.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub heroes: Vec<HeroTemplate>,
    pub monsters: Vec<MonsterTemplate>,
    pub items: Vec<Item>,
}

impl Catalog {
    pub fn new(
        heroes: Vec<HeroTemplate>,
        monsters: Vec<MonsterTemplate>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            heroes,
            monsters,
            items,
        }
    }

    /// Checks that a session can start: at least one hero and one monster.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.heroes.is_empty() {
            return Err(CatalogError::NoHeroes);
        }
        if self.monsters.is_empty() {
            return Err(CatalogError::NoMonsters);
        }
        Ok(())
    }

    pub fn heroes_of(&self, class: HeroClass) -> impl Iterator<Item = &HeroTemplate> {
        self.heroes.iter().filter(move |t| t.class == class)
    }

    pub fn monsters_of(&self, kind: MonsterKind) -> impl Iterator<Item = &MonsterTemplate> {
        self.monsters.iter().filter(move |t| t.kind == kind)
    }

    pub fn items_of(&self, category: ItemCategory) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.category() == category)
    }

    /// Builds the per-class availability pool for hero selection.
    pub fn hero_pool(&self) -> HeroPool {
        HeroPool::from_templates(&self.heroes)
    }
}

/// Heroes still available for selection, grouped by class.
///
/// Selecting a hero moves it out of the pool, so one template can seat at
/// most one party member.
#[derive(Clone, Debug, Default)]
pub struct HeroPool {
    available: HashMap<HeroClass, Vec<HeroTemplate>>,
}

impl HeroPool {
    pub fn from_templates(templates: &[HeroTemplate]) -> Self {
        let mut available: HashMap<HeroClass, Vec<HeroTemplate>> = HashMap::new();
        for template in templates {
            available
                .entry(template.class)
                .or_default()
                .push(template.clone());
        }
        Self { available }
    }

    pub fn available(&self, class: HeroClass) -> &[HeroTemplate] {
        self.available.get(&class).map_or(&[], Vec::as_slice)
    }

    /// Classes that still have at least one hero to offer.
    pub fn classes(&self) -> Vec<HeroClass> {
        HeroClass::iter()
            .filter(|class| !self.available(*class).is_empty())
            .collect()
    }

    /// Number of heroes left across all classes.
    pub fn len(&self) -> usize {
        self.available.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.available.values().all(Vec::is_empty)
    }

    /// Removes the hero at `index` of `class` and returns it ready to play.
    pub fn take(&mut self, class: HeroClass, index: usize) -> Result<Hero, CatalogError> {
        let bucket = self
            .available
            .get_mut(&class)
            .filter(|bucket| index < bucket.len())
            .ok_or(CatalogError::HeroUnavailable { class, index })?;
        let template = bucket.remove(index);
        Ok(Hero::from_template(&template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(name: &str, class: HeroClass) -> HeroTemplate {
        HeroTemplate {
            name: name.to_string(),
            class,
            level: 1,
            mana: 100.0,
            strength: 700.0,
            agility: 500.0,
            dexterity: 600.0,
            money: 1000.0,
            experience: 0,
        }
    }

    fn monster(name: &str, kind: MonsterKind) -> MonsterTemplate {
        MonsterTemplate {
            name: name.to_string(),
            kind,
            level: 2,
            base_damage: 200.0,
            defense: 400.0,
            dodge_percent: 20.0,
        }
    }

    #[test]
    fn validate_reports_missing_heroes_first() {
        let catalog = Catalog::default();
        assert_eq!(catalog.validate(), Err(CatalogError::NoHeroes));

        let catalog = Catalog::new(vec![hero("Garl", HeroClass::Warrior)], vec![], vec![]);
        assert_eq!(catalog.validate(), Err(CatalogError::NoMonsters));

        let catalog = Catalog::new(
            vec![hero("Garl", HeroClass::Warrior)],
            vec![monster("Natsunomeryu", MonsterKind::Dragon)],
            vec![],
        );
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn queries_filter_by_kind() {
        let catalog = Catalog::new(
            vec![
                hero("Garl", HeroClass::Warrior),
                hero("Rillifane", HeroClass::Sorcerer),
            ],
            vec![
                monster("Natsunomeryu", MonsterKind::Dragon),
                monster("Cyrrollalee", MonsterKind::Exoskeleton),
            ],
            vec![Item::weapon("Sword", 500, 1, 800.0)],
        );
        assert_eq!(catalog.heroes_of(HeroClass::Sorcerer).count(), 1);
        assert_eq!(catalog.heroes_of(HeroClass::Paladin).count(), 0);
        assert_eq!(catalog.monsters_of(MonsterKind::Dragon).count(), 1);
        assert_eq!(catalog.items_of(ItemCategory::Weapon).count(), 1);
        assert_eq!(catalog.items_of(ItemCategory::Spell).count(), 0);
    }

    #[test]
    fn pool_never_hands_out_the_same_hero_twice() {
        let templates = vec![
            hero("Garl", HeroClass::Warrior),
            hero("Flandal", HeroClass::Warrior),
            hero("Rillifane", HeroClass::Sorcerer),
        ];
        let mut pool = HeroPool::from_templates(&templates);

        let first = pool.take(HeroClass::Warrior, 0).unwrap();
        assert_eq!(first.name, "Garl");
        assert_eq!(pool.available(HeroClass::Warrior).len(), 1);

        let second = pool.take(HeroClass::Warrior, 0).unwrap();
        assert_eq!(second.name, "Flandal");
        assert_eq!(
            pool.take(HeroClass::Warrior, 0).unwrap_err(),
            CatalogError::HeroUnavailable {
                class: HeroClass::Warrior,
                index: 0
            }
        );
        assert_eq!(pool.classes(), vec![HeroClass::Sorcerer]);
        assert!(!pool.is_empty());
    }
}
