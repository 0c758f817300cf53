//! Market shell: buy and sell loops over the core's transaction rules.

use game_core::economy;
use game_core::{ChoiceProvider, EconomyTables, Hero, MarketStock, OutputSink, Party};

/// One market visit. The stock is fixed for the visit and never depletes.
pub struct MarketVisit<'a, I, O> {
    stock: &'a MarketStock,
    tables: &'a EconomyTables,
    input: I,
    output: O,
}

impl<'a, I: ChoiceProvider, O: OutputSink> MarketVisit<'a, I, O> {
    pub fn new(stock: &'a MarketStock, tables: &'a EconomyTables, input: I, output: O) -> Self {
        Self {
            stock,
            tables,
            input,
            output,
        }
    }

    /// Runs the market menu until the party leaves.
    pub fn run(&mut self, party: &mut Party) {
        self.output.emit("You enter a bustling marketplace...");
        loop {
            self.output.emit("--- Market Menu ---");
            self.output.emit("1) Buy Items  2) Sell Items  0) Leave");
            match self.input.choose_int("Choose action", 0, 2) {
                1 => self.buy_loop(party),
                2 => self.sell_loop(party),
                _ => break,
            }
        }
        self.output.emit("You leave the market.");
    }

    fn select_hero<'p>(&mut self, party: &'p mut Party, prompt: &str) -> Option<&'p mut Hero> {
        self.output.emit(prompt);
        for (position, hero) in party.heroes().iter().enumerate() {
            self.output.emit(&format!("  {}) {}", position + 1, hero.name));
        }
        self.output.emit("  0) Cancel");
        let max = u32::try_from(party.size()).unwrap_or(u32::MAX);
        let choice = self.input.choose_int("Select hero", 0, max);
        if choice == 0 {
            return None;
        }
        party.hero_mut(choice as usize - 1)
    }

    fn buy_loop(&mut self, party: &mut Party) {
        let Some(shopper) = self.select_hero(party, "Who is buying?") else {
            return;
        };
        let stock = self.stock;
        if stock.is_empty() {
            self.output.emit("The market has nothing for sale.");
            return;
        }

        loop {
            self.output.emit(&format!(
                "--- Items for Sale (Shopper: {} | Gold: {:.0}) ---",
                shopper.name, shopper.money
            ));
            for (position, item) in stock.items().iter().enumerate() {
                self.output.emit(&format!("  {}) {item}", position + 1));
            }
            self.output.emit("  0) Back");

            let max = u32::try_from(stock.len()).unwrap_or(u32::MAX);
            let choice = self.input.choose_int("Select item to buy", 0, max);
            let Some(item) = choice
                .checked_sub(1)
                .and_then(|index| stock.get(index as usize))
            else {
                break;
            };

            match economy::purchase(shopper, item) {
                Ok(()) => self.output.emit(&format!(
                    "Purchase successful! {} added to inventory.",
                    item.name
                )),
                Err(err) => {
                    tracing::debug!(error = %err, "purchase refused");
                    self.output.emit(&format!("Cannot buy: {err}"));
                }
            }
        }
    }

    fn sell_loop(&mut self, party: &mut Party) {
        let Some(seller) = self.select_hero(party, "Who is selling?") else {
            return;
        };

        loop {
            let owned: Vec<_> = seller.inventory.items().cloned().collect();
            if owned.is_empty() {
                self.output
                    .emit(&format!("{} has nothing to sell.", seller.name));
                break;
            }

            self.output
                .emit(&format!("--- Your Inventory (Seller: {}) ---", seller.name));
            for (position, item) in owned.iter().enumerate() {
                self.output.emit(&format!(
                    "  {}) {} (Sell for: {:.0})",
                    position + 1,
                    item.name,
                    economy::resale_value(item, self.tables)
                ));
            }
            self.output.emit("  0) Back");

            let max = u32::try_from(owned.len()).unwrap_or(u32::MAX);
            let choice = self.input.choose_int("Select item to sell", 0, max);
            let Some(item) = choice
                .checked_sub(1)
                .and_then(|index| owned.get(index as usize))
            else {
                break;
            };

            match economy::sell(seller, item, self.tables) {
                Ok(value) => self
                    .output
                    .emit(&format!("Sold {} for {value:.0} gold.", item.name)),
                Err(err) => self.output.emit(&format!("Cannot sell: {err}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{
        HeroClass, HeroTemplate, Item, MemorySink, Party, PcgRng, ScriptedChoices,
    };

    use super::*;

    fn party() -> Party {
        let hero = Hero::from_template(&HeroTemplate {
            name: "Parzival".to_string(),
            class: HeroClass::Paladin,
            level: 1,
            mana: 300.0,
            strength: 750.0,
            agility: 650.0,
            dexterity: 700.0,
            money: 600.0,
            experience: 7,
        });
        Party::with_heroes([hero]).unwrap()
    }

    fn stock() -> MarketStock {
        let catalog = [
            Item::weapon("Sword", 500, 1, 800.0),
            Item::weapon("Scythe", 1000, 6, 1100.0),
        ];
        // Alternate draws: Sword, Scythe.
        let mut rng = game_core::SequenceRng::new(vec![0.1, 0.9]);
        MarketStock::generate(&catalog, 2, &mut rng)
    }

    #[test]
    fn buy_then_sell() {
        let stock = stock();
        let tables = EconomyTables::default();
        let mut party = party();
        let mut sink = MemorySink::new();
        // Buy: hero 1, item 1 (Sword), back. Sell: hero 1, item 1, leave.
        let input = ScriptedChoices::new([1u32, 1, 1, 0, 2, 1, 1, 0]);

        MarketVisit::new(&stock, &tables, input, &mut sink).run(&mut party);

        let hero = &party.heroes()[0];
        assert_eq!(hero.money, 350.0);
        assert!(hero.inventory.is_empty());
        assert!(sink.contains("Purchase successful! Sword added to inventory."));
        assert!(sink.contains("Sold Sword for 250 gold."));
        assert!(sink.contains("has nothing to sell"));
    }

    #[test]
    fn level_gate_is_reported() {
        let stock = stock();
        let tables = EconomyTables::default();
        let mut party = party();
        let mut sink = MemorySink::new();
        // Hero 1 tries the Scythe (level 6).
        let input = ScriptedChoices::new([1u32, 1, 2, 0, 0]);

        MarketVisit::new(&stock, &tables, input, &mut sink).run(&mut party);

        assert!(sink.contains("requires level 6"));
        assert_eq!(party.heroes()[0].money, 600.0);
    }

    #[test]
    fn empty_stock_sells_nothing() {
        let mut rng = PcgRng::seeded(1);
        let stock = MarketStock::generate(&[], 10, &mut rng);
        let tables = EconomyTables::default();
        let mut party = party();
        let mut sink = MemorySink::new();

        MarketVisit::new(&stock, &tables, ScriptedChoices::new([1u32, 1]), &mut sink)
            .run(&mut party);

        assert!(sink.contains("nothing for sale"));
        assert!(sink.contains("You leave the market."));
    }
}
