//! Inventory system for heroes.
//!
//! Items are filed by [`ItemCategory`]; within a category, insertion order is
//! preserved so menus list items in the order they were acquired.

use std::collections::BTreeMap;

use crate::state::types::{Item, ItemCategory};

/// Items owned by a single hero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: BTreeMap<ItemCategory, Vec<Item>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.entry(item.category()).or_default().push(item);
    }

    /// Removes the first item equal to `item`, returning it.
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        let bucket = self.items.get_mut(&item.category())?;
        let index = bucket.iter().position(|owned| owned == item)?;
        Some(bucket.remove(index))
    }

    /// Removes the item at `index` within `category`.
    pub fn take(&mut self, category: ItemCategory, index: usize) -> Option<Item> {
        let bucket = self.items.get_mut(&category)?;
        (index < bucket.len()).then(|| bucket.remove(index))
    }

    /// Items of one category, in acquisition order.
    pub fn of(&self, category: ItemCategory) -> &[Item] {
        self.items.get(&category).map_or(&[], Vec::as_slice)
    }

    pub fn weapons(&self) -> &[Item] {
        self.of(ItemCategory::Weapon)
    }

    pub fn armor(&self) -> &[Item] {
        self.of(ItemCategory::Armor)
    }

    pub fn potions(&self) -> &[Item] {
        self.of(ItemCategory::Potion)
    }

    pub fn spells(&self) -> &[Item] {
        self.of(ItemCategory::Spell)
    }

    /// Every owned item, grouped by category.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values().flatten()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.of(item.category()).contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Attributes, Element};

    fn sample() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add(Item::spell("Snow_Cannon", 500, 2, 650.0, 250.0, Element::Ice));
        inventory.add(Item::weapon("Sword", 500, 1, 800.0));
        inventory.add(Item::potion("Healing_Potion", 250, 1, 100.0, Attributes::HEALTH));
        inventory.add(Item::weapon("Bow", 300, 2, 500.0));
        inventory
    }

    #[test]
    fn groups_by_category_in_insertion_order() {
        let inventory = sample();
        let names: Vec<&str> = inventory.weapons().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Sword", "Bow"]);
        assert_eq!(inventory.spells().len(), 1);
        assert!(inventory.armor().is_empty());
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn flat_listing_follows_category_order() {
        let inventory = sample();
        let names: Vec<&str> = inventory.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Sword", "Bow", "Healing_Potion", "Snow_Cannon"]);
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut inventory = sample();
        let sword = Item::weapon("Sword", 500, 1, 800.0);
        inventory.add(sword.clone());

        assert_eq!(inventory.remove(&sword), Some(sword.clone()));
        assert!(inventory.contains(&sword));
        assert_eq!(inventory.remove(&sword), Some(sword.clone()));
        assert!(!inventory.contains(&sword));
        assert_eq!(inventory.remove(&sword), None);
    }

    #[test]
    fn take_out_of_range_is_none() {
        let mut inventory = sample();
        assert!(inventory.take(ItemCategory::Armor, 0).is_none());
        assert!(inventory.take(ItemCategory::Weapon, 5).is_none());
        assert_eq!(
            inventory.take(ItemCategory::Weapon, 1).map(|i| i.name),
            Some("Bow".to_string())
        );
    }
}
