//! Market transaction rules.
//!
//! Pure rule checks over a hero and an item. The market shell decides what
//! to offer and when; these functions decide whether a trade is allowed and
//! apply it.

use std::fmt;

use crate::config::EconomyTables;
use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Hero, Item};

/// Reasons a trade is refused. All of them leave the hero untouched.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionError {
    #[error("{item} requires level {required} (hero is level {actual})")]
    LevelTooLow {
        item: String,
        required: u32,
        actual: u32,
    },

    #[error("{item} costs {price}g (hero has {money:.0}g)")]
    InsufficientGold { item: String, price: u32, money: f64 },

    #[error("{item} is not in the hero's inventory")]
    ItemNotOwned { item: String },
}

impl GameError for TransactionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LevelTooLow { .. } => "TRADE_LEVEL_TOO_LOW",
            Self::InsufficientGold { .. } => "TRADE_INSUFFICIENT_GOLD",
            Self::ItemNotOwned { .. } => "TRADE_ITEM_NOT_OWNED",
        }
    }
}

/// Checks level first, then gold.
pub fn check_purchase(hero: &Hero, item: &Item) -> Result<(), TransactionError> {
    if hero.level() < item.min_level {
        return Err(TransactionError::LevelTooLow {
            item: item.name.clone(),
            required: item.min_level,
            actual: hero.level(),
        });
    }
    if hero.money < f64::from(item.price) {
        return Err(TransactionError::InsufficientGold {
            item: item.name.clone(),
            price: item.price,
            money: hero.money,
        });
    }
    Ok(())
}

#[inline]
pub fn can_purchase(hero: &Hero, item: &Item) -> bool {
    check_purchase(hero, item).is_ok()
}

/// Debits the price and adds a copy of `item` to the hero's inventory.
pub fn purchase(hero: &mut Hero, item: &Item) -> Result<(), TransactionError> {
    check_purchase(hero, item)?;
    hero.deduct_money(f64::from(item.price));
    hero.inventory.add(item.clone());
    tracing::debug!(hero = %hero.name, item = %item.name, price = item.price, "purchase");
    Ok(())
}

/// Money paid back for `item`.
pub fn resale_value(item: &Item, tables: &EconomyTables) -> f64 {
    f64::from(item.price) * tables.resale_ratio
}

/// Removes one copy of `item` from the inventory and credits its resale
/// value. Returns the amount credited.
///
/// Selling the last copy of an equipped item also empties its slot.
pub fn sell(hero: &mut Hero, item: &Item, tables: &EconomyTables) -> Result<f64, TransactionError> {
    let sold = hero
        .inventory
        .remove(item)
        .ok_or_else(|| TransactionError::ItemNotOwned {
            item: item.name.clone(),
        })?;

    if hero.equipment.is_equipped(&sold) && !hero.inventory.contains(&sold) {
        if hero.equipment.weapon() == Some(&sold) {
            hero.equipment.unequip_weapon();
        } else {
            hero.equipment.unequip_armor();
        }
    }

    let value = resale_value(&sold, tables);
    hero.add_money(value);
    tracing::debug!(hero = %hero.name, item = %sold.name, value, "sale");
    Ok(value)
}

/// Items on offer for one market visit.
///
/// Drawn with replacement, so duplicates are expected. Buying does not
/// deplete the stock.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketStock {
    items: Vec<Item>,
}

impl MarketStock {
    /// Draws `size` entries uniformly from `catalog`. An empty catalog
    /// yields an empty stock.
    pub fn generate(catalog: &[Item], size: usize, rng: &mut (impl RngOracle + ?Sized)) -> Self {
        if catalog.is_empty() {
            return Self::default();
        }
        let items = (0..size)
            .map(|_| catalog[rng.next_index(catalog.len())].clone())
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for MarketStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, item) in self.items.iter().enumerate() {
            writeln!(f, "{}) {item}", position + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};
    use crate::state::{HeroClass, HeroTemplate, ItemCategory};

    fn hero(level: u32, money: f64) -> Hero {
        Hero::from_template(&HeroTemplate {
            name: "Reign_Havoc".to_string(),
            class: HeroClass::Paladin,
            level,
            mana: 800.0,
            strength: 800.0,
            agility: 800.0,
            dexterity: 800.0,
            money,
            experience: 0,
        })
    }

    #[test]
    fn item_priced_100_resells_for_50() {
        let tables = EconomyTables::default();
        let shield = Item::armor("Wizard_Shield", 100, 1, 100.0);
        assert_eq!(resale_value(&shield, &tables), 50.0);

        let mut seller = hero(1, 0.0);
        seller.inventory.add(shield.clone());
        assert_eq!(sell(&mut seller, &shield, &tables), Ok(50.0));
        assert_eq!(seller.money, 50.0);
        assert!(seller.inventory.is_empty());
    }

    #[test]
    fn level_gate_applies_regardless_of_gold() {
        let sword = Item::weapon("Sword", 500, 5, 800.0);
        let mut buyer = hero(4, 1_000_000.0);

        assert!(!can_purchase(&buyer, &sword));
        assert_eq!(
            purchase(&mut buyer, &sword),
            Err(TransactionError::LevelTooLow {
                item: "Sword".to_string(),
                required: 5,
                actual: 4
            })
        );
        assert_eq!(buyer.money, 1_000_000.0);
        assert!(buyer.inventory.is_empty());
    }

    #[test]
    fn purchase_debits_and_adds() {
        let potion = Item::potion(
            "Healing_Potion",
            250,
            1,
            100.0,
            crate::state::Attributes::HEALTH,
        );
        let mut buyer = hero(1, 300.0);

        purchase(&mut buyer, &potion).unwrap();
        assert_eq!(buyer.money, 50.0);
        assert_eq!(buyer.inventory.potions().len(), 1);

        let err = purchase(&mut buyer, &potion).unwrap_err();
        assert!(matches!(err, TransactionError::InsufficientGold { .. }));
        assert!(err.severity().is_recoverable());
    }

    #[test]
    fn selling_unowned_item_fails() {
        let mut seller = hero(1, 0.0);
        let axe = Item::weapon("Axe", 550, 5, 850.0);
        assert_eq!(
            sell(&mut seller, &axe, &EconomyTables::default()),
            Err(TransactionError::ItemNotOwned {
                item: "Axe".to_string()
            })
        );
    }

    #[test]
    fn selling_last_equipped_copy_unequips() {
        let tables = EconomyTables::default();
        let sword = Item::weapon("Sword", 500, 1, 800.0);
        let mut seller = hero(1, 0.0);
        seller.inventory.add(sword.clone());
        seller.inventory.add(sword.clone());
        seller.equip_from_inventory(ItemCategory::Weapon, 0).unwrap();

        sell(&mut seller, &sword, &tables).unwrap();
        assert!(seller.equipment.is_equipped(&sword));

        sell(&mut seller, &sword, &tables).unwrap();
        assert!(seller.equipment.weapon().is_none());
        assert_eq!(seller.money, 500.0);
    }

    #[test]
    fn market_stock_has_fixed_size_with_duplicates() {
        let catalog = [
            Item::weapon("Sword", 500, 1, 800.0),
            Item::armor("Platinum_Shield", 150, 1, 200.0),
        ];
        let mut rng = SequenceRng::new(vec![0.1]);
        let stock = MarketStock::generate(&catalog, 10, &mut rng);
        assert_eq!(stock.len(), 10);
        assert!(stock.items().iter().all(|item| item.name == "Sword"));

        let mut rng = PcgRng::seeded(3);
        assert!(MarketStock::generate(&[], 10, &mut rng).is_empty());
    }
}
